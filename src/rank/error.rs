use thiserror::Error;

use crate::riot::RiotApiError;

/// Every way a single rank lookup can fail. Each one ends the request.
#[derive(Debug, Error)]
pub enum RankError {
    #[error("Invalid server specified: {0}")]
    InvalidRegion(String),

    #[error("Failed to fetch account data: {0}")]
    UpstreamAccount(RiotApiError),

    #[error("Account response did not contain a puuid")]
    MissingPuuid,

    #[error("Failed to fetch rank data: {0}")]
    UpstreamRank(RiotApiError),

    #[error("No ranked solo/duo data found for this summoner.")]
    NotFound,
}

impl RankError {
    /// Message returned to the caller, without internal detail such as the rejected code.
    pub fn public_message(&self) -> String {
        match self {
            RankError::InvalidRegion(_) => "Invalid server specified.".to_string(),
            RankError::NotFound => self.to_string(),
            RankError::UpstreamAccount(_) | RankError::MissingPuuid | RankError::UpstreamRank(_) => {
                format!("Failed to retrieve data from Riot API. Reason: {}", self)
            }
        }
    }
}
