use crate::auth::AuthError;
use crate::metrics_defs::ERROR_RESPONSES;
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;
use viz_client::{QueryError, VizError};

/// Result type alias for stats API operations
pub type Result<T, E = StatsApiError> = std::result::Result<T, E>;

/// Errors that can occur while serving stats API requests
#[derive(Error, Debug)]
pub enum StatsApiError {
    #[error("invalid request: {0}")]
    InvalidParam(#[from] QueryError),

    #[error("request is not authenticated: {0}")]
    Unauthenticated(#[from] AuthError),

    #[error("upstream telemetry call failed: {0}")]
    Upstream(#[from] VizError),

    #[error("internal error: {0}")]
    Internal(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Serialize)]
struct ErrorBody {
    error_message: String,
}

/// The single failure boundary: every error raised during handling becomes
/// exactly one HTTP response here, and is logged here.
impl IntoResponse for StatsApiError {
    fn into_response(self) -> Response {
        let (status, kind) = match &self {
            StatsApiError::InvalidParam(_) => (StatusCode::BAD_REQUEST, "invalid_param"),
            StatsApiError::Unauthenticated(_) => (StatusCode::UNAUTHORIZED, "unauthenticated"),
            StatsApiError::Upstream(_) => (StatusCode::BAD_GATEWAY, "upstream"),
            StatsApiError::Internal(_) | StatsApiError::Io(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "internal")
            }
        };

        if status.is_server_error() {
            tracing::error!(error = %self, kind, "request failed");
        } else {
            tracing::warn!(error = %self, kind, "request rejected");
        }
        metrics::counter!(ERROR_RESPONSES.name, "kind" => kind).increment(1);

        let body = Json(ErrorBody {
            error_message: self.to_string(),
        });
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        let cases = [
            (
                StatsApiError::from(QueryError::EmptyField("namespace")),
                StatusCode::BAD_REQUEST,
            ),
            (
                StatsApiError::from(AuthError::MissingHeader),
                StatusCode::UNAUTHORIZED,
            ),
            (
                StatsApiError::from(VizError::UpstreamStatus {
                    endpoint: "edges",
                    status: StatusCode::GATEWAY_TIMEOUT,
                }),
                StatusCode::BAD_GATEWAY,
            ),
            (
                StatsApiError::Internal("boom".to_string()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (error, expected) in cases {
            assert_eq!(error.into_response().status(), expected);
        }
    }

    #[tokio::test]
    async fn test_error_body_shape() {
        let response = StatsApiError::from(AuthError::MissingHeader).into_response();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let parsed: serde_json::Value = serde_json::from_slice(&body).unwrap();

        assert!(
            parsed["error_message"]
                .as_str()
                .unwrap()
                .contains("Authorization")
        );
    }
}
