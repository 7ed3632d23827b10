//! Rank lookup: region resolution, the two chained Riot calls and the
//! reshaping of the solo/duo league entry.

use std::sync::Arc;

use tracing::{error, info, instrument, warn};

use crate::riot::{RegionTable, RiotApi};

mod error;
mod types;

pub use error::RankError;
pub use types::RankResponse;

#[derive(Debug, Clone)]
pub struct RankLookup {
    api: Arc<dyn RiotApi>,
    regions: RegionTable,
}

impl RankLookup {
    pub fn new(api: Arc<dyn RiotApi>, regions: RegionTable) -> Self {
        Self { api, regions }
    }

    pub fn regions(&self) -> &RegionTable {
        &self.regions
    }

    #[instrument(
        skip(self),
        fields(riot_id = %format!("{}#{}", summoner_name, tag_line))
    )]
    pub async fn lookup(
        &self,
        server: &str,
        summoner_name: &str,
        tag_line: &str,
    ) -> Result<RankResponse, RankError> {
        let Some((region, platform)) = self.regions.resolve(server) else {
            warn!("⚠️ [RANK] unknown server {:?}", server);
            return Err(RankError::InvalidRegion(server.to_string()));
        };

        let account = self
            .api
            .get_account_by_riot_id(region, summoner_name, tag_line)
            .await
            .map_err(|e| {
                error!("❌ [RANK] account lookup failed in {}: {}", region, e);
                RankError::UpstreamAccount(e)
            })?;

        let puuid = account
            .puuid
            .filter(|puuid| !puuid.is_empty())
            .ok_or_else(|| {
                error!("❌ [RANK] account payload from {} has no puuid", region);
                RankError::MissingPuuid
            })?;

        let entries = self
            .api
            .get_league_entries_by_puuid(platform, &puuid)
            .await
            .map_err(|e| {
                error!("❌ [RANK] league lookup failed in {}: {}", platform, e);
                RankError::UpstreamRank(e)
            })?;

        let Some(solo) = entries.into_iter().find(|entry| entry.is_solo_queue()) else {
            info!("[RANK] no solo/duo entry in {}", platform);
            return Err(RankError::NotFound);
        };

        info!(
            "[RANK] {} {} {} LP in {}",
            solo.tier, solo.rank, solo.league_points, platform
        );

        Ok(RankResponse::new(summoner_name, tag_line, server, solo))
    }
}
