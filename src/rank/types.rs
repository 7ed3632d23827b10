use serde::Serialize;

use crate::riot::LeagueEntryDto;

/// JSON record returned by `GET /api/rank/...`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankResponse {
    pub summoner_name: String,
    pub tag_line: String,
    pub server: String,
    pub rank: String,
    pub division: String,
    pub league_points: i32,
    pub wins: i32,
    pub losses: i32,
    /// Not available from the API; always empty.
    #[serde(rename = "recentLPGains")]
    pub recent_lp_gains: Vec<i32>,
}

impl RankResponse {
    pub fn new(summoner_name: &str, tag_line: &str, server: &str, entry: LeagueEntryDto) -> Self {
        Self {
            summoner_name: summoner_name.to_string(),
            tag_line: tag_line.to_string(),
            server: server.to_uppercase(),
            rank: entry.tier,
            division: entry.rank,
            league_points: entry.league_points,
            wins: entry.wins,
            losses: entry.losses,
            recent_lp_gains: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn serializes_with_frontend_field_names() {
        let entry = LeagueEntryDto {
            queue_type: "RANKED_SOLO_5x5".into(),
            tier: "GOLD".into(),
            rank: "II".into(),
            league_points: 45,
            wins: 30,
            losses: 25,
        };

        let response = RankResponse::new("Le Conservateur", "3012", "Euw", entry);

        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({
                "summonerName": "Le Conservateur",
                "tagLine": "3012",
                "server": "EUW",
                "rank": "GOLD",
                "division": "II",
                "leaguePoints": 45,
                "wins": 30,
                "losses": 25,
                "recentLPGains": []
            })
        );
    }
}
