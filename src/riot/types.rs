use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;

pub const RANKED_SOLO_QUEUE: &str = "RANKED_SOLO_5x5";

#[derive(Debug, Error)]
pub enum RiotApiError {
    #[error("{0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("{}", status_text(.0))]
    Status(StatusCode),
}

/// A call to Riot API can either result in a success with the success type or fail with a [`RiotApiError`].
pub type RiotApiResponse<T> = Result<T, RiotApiError>;

fn status_text(status: &StatusCode) -> String {
    status
        .canonical_reason()
        .map(str::to_string)
        .unwrap_or_else(|| status.as_str().to_string())
}

// ============================================================================
// Account-v1
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountDto {
    pub puuid: Option<String>,
    pub game_name: Option<String>,
    pub tag_line: Option<String>,
}

// ============================================================================
// League-v4
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeagueEntryDto {
    pub queue_type: String,
    pub tier: String,
    pub rank: String,
    pub league_points: i32,
    pub wins: i32,
    pub losses: i32,
}

impl LeagueEntryDto {
    pub fn is_solo_queue(&self) -> bool {
        self.queue_type == RANKED_SOLO_QUEUE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_shows_reason_phrase() {
        assert_eq!(
            RiotApiError::Status(StatusCode::NOT_FOUND).to_string(),
            "Not Found"
        );
        assert_eq!(
            RiotApiError::Status(StatusCode::FORBIDDEN).to_string(),
            "Forbidden"
        );
    }

    #[test]
    fn unknown_status_falls_back_to_code() {
        let status = StatusCode::from_u16(599).unwrap();
        assert_eq!(RiotApiError::Status(status).to_string(), "599");
    }

    #[test]
    fn league_entry_decodes_and_detects_solo_queue() {
        let raw = r#"[
            {"leagueId":"x","queueType":"RANKED_FLEX_SR","tier":"SILVER","rank":"I",
             "summonerId":"s","puuid":"p","leaguePoints":12,"wins":3,"losses":4,
             "veteran":false,"inactive":false,"freshBlood":false,"hotStreak":false},
            {"queueType":"RANKED_SOLO_5x5","tier":"GOLD","rank":"II",
             "leaguePoints":45,"wins":30,"losses":25}
        ]"#;

        let entries: Vec<LeagueEntryDto> = serde_json::from_str(raw).unwrap();

        assert!(!entries[0].is_solo_queue());
        assert!(entries[1].is_solo_queue());
        assert_eq!(entries[1].league_points, 45);
    }

    #[test]
    fn account_without_puuid_still_decodes() {
        let account: AccountDto = serde_json::from_str(r#"{"gameName":"Foo"}"#).unwrap();

        assert!(account.puuid.is_none());
        assert_eq!(account.game_name.as_deref(), Some("Foo"));
    }
}
