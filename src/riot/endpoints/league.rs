use crate::riot::client::RiotClient;
use crate::riot::metrics::Endpoint;
use crate::riot::region::Platform;
use crate::riot::types::{LeagueEntryDto, RiotApiResponse};

impl RiotClient {
    pub fn league_entries_url(&self, platform: Platform, puuid: &str) -> String {
        format!(
            "{}/lol/league/v4/entries/by-puuid/{}",
            self.base_url(platform.as_str()),
            urlencoding::encode(puuid)
        )
    }

    /// Get league entries (ranked info) for a player by PUUID
    /// Uses platform routing (euw1, na1, kr, etc.)
    pub async fn get_league_entries_by_puuid(
        &self,
        platform: Platform,
        puuid: &str,
    ) -> RiotApiResponse<Vec<LeagueEntryDto>> {
        tracing::trace!("[RIOT::LEAGUE] get_league_entries {} in {}", puuid, platform);

        self.get(Endpoint::League, &self.league_entries_url(platform, puuid)).await
    }
}
