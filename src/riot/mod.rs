//! Thin Riot API client covering the two endpoints the proxy needs.

use async_trait::async_trait;
use std::fmt::Debug;

pub mod client;
pub mod metrics;
pub mod region;
pub mod types;

mod endpoints;

pub use client::RiotClient;
pub use metrics::{Endpoint, RequestMetrics, Snapshot};
pub use region::{Platform, Region, RegionTable};
pub use types::{AccountDto, LeagueEntryDto, RiotApiError, RiotApiResponse};

/// Upstream calls needed by the rank lookup.
#[async_trait]
pub trait RiotApi: Send + Sync + Debug {
    /// Account-V1, routed by continental region.
    async fn get_account_by_riot_id(
        &self,
        region: Region,
        game_name: &str,
        tag_line: &str,
    ) -> RiotApiResponse<AccountDto>;

    /// League-V4, routed by platform.
    async fn get_league_entries_by_puuid(
        &self,
        platform: Platform,
        puuid: &str,
    ) -> RiotApiResponse<Vec<LeagueEntryDto>>;
}

#[async_trait]
impl RiotApi for RiotClient {
    async fn get_account_by_riot_id(
        &self,
        region: Region,
        game_name: &str,
        tag_line: &str,
    ) -> RiotApiResponse<AccountDto> {
        RiotClient::get_account_by_riot_id(self, region, game_name, tag_line).await
    }

    async fn get_league_entries_by_puuid(
        &self,
        platform: Platform,
        puuid: &str,
    ) -> RiotApiResponse<Vec<LeagueEntryDto>> {
        RiotClient::get_league_entries_by_puuid(self, platform, puuid).await
    }
}
