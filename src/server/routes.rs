use axum::{
    Json,
    extract::{Path, State, rejection::PathRejection},
};

use crate::rank::RankResponse;

use super::AppState;
use super::error::ApiError;

/// GET /api/rank/{server}/{summonerName}/{tagLine}
pub async fn get_rank(
    State(state): State<AppState>,
    path: Result<Path<(String, String, String)>, PathRejection>,
) -> Result<Json<RankResponse>, ApiError> {
    let Path((server, summoner_name, tag_line)) = path?;

    let response = state.lookup(&server, &summoner_name, &tag_line).await?;

    Ok(Json(response))
}
