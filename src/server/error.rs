use axum::{
    Json,
    extract::rejection::PathRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

use crate::rank::RankError;

/// Everything the rank route can answer with instead of a record.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Rank(#[from] RankError),

    /// A path segment could not be extracted, e.g. invalid UTF-8 after decoding.
    #[error(transparent)]
    Path(#[from] PathRejection),
}

fn error_body(status: StatusCode, message: String) -> Response {
    (status, Json(json!({ "error": message }))).into_response()
}

impl RankError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            RankError::InvalidRegion(_) => StatusCode::BAD_REQUEST,
            RankError::NotFound => StatusCode::NOT_FOUND,
            RankError::UpstreamAccount(_) | RankError::MissingPuuid | RankError::UpstreamRank(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for RankError {
    fn into_response(self) -> Response {
        error_body(self.status_code(), self.public_message())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Rank(e) => e.into_response(),
            ApiError::Path(rejection) => {
                tracing::warn!("⚠️ [HTTP] rejected path: {}", rejection.body_text());
                error_body(rejection.status(), rejection.body_text())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use reqwest::StatusCode as UpstreamStatus;

    use super::*;
    use crate::riot::RiotApiError;

    #[test]
    fn status_codes() {
        assert_eq!(
            RankError::InvalidRegion("xx".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(RankError::NotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            RankError::MissingPuuid.status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            RankError::UpstreamAccount(RiotApiError::Status(UpstreamStatus::BAD_GATEWAY))
                .status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            RankError::UpstreamRank(RiotApiError::Status(UpstreamStatus::TOO_MANY_REQUESTS))
                .status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[tokio::test]
    async fn error_body_is_json_object() {
        let response = RankError::NotFound.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

        assert_eq!(
            json,
            json!({ "error": "No ranked solo/duo data found for this summoner." })
        );
    }
}
