use crate::riot::client::RiotClient;
use crate::riot::metrics::Endpoint;
use crate::riot::region::Region;
use crate::riot::types::{AccountDto, RiotApiResponse};

impl RiotClient {
    pub fn account_url(&self, region: Region, game_name: &str, tag_line: &str) -> String {
        format!(
            "{}/riot/account/v1/accounts/by-riot-id/{}/{}",
            self.base_url(region.as_str()),
            urlencoding::encode(game_name),
            urlencoding::encode(tag_line)
        )
    }

    /// Get account by Riot ID (game name + tag line)
    /// Uses regional routing (americas, europe, asia)
    pub async fn get_account_by_riot_id(
        &self,
        region: Region,
        game_name: &str,
        tag_line: &str,
    ) -> RiotApiResponse<AccountDto> {
        tracing::trace!(
            "[RIOT::ACCOUNT] get_account_by_riot_id {}#{} in {}",
            game_name,
            tag_line,
            region
        );

        self.get(Endpoint::Account, &self.account_url(region, game_name, tag_line))
            .await
    }
}
