pub mod api;
pub mod auth;
pub mod config;
pub mod errors;
pub mod metrics_defs;

#[cfg(test)]
mod testutils;

use crate::errors::StatsApiError;
use axum::Router;
use axum::routing::get;
use std::sync::Arc;
use tokio::net::TcpListener;
use viz_client::MeshTelemetry;

/// Dependencies shared by every request handler.
///
/// The telemetry client is constructed once at startup and injected here;
/// handlers never resolve collaborators ambiently.
#[derive(Clone)]
pub struct AppState {
    pub telemetry: Arc<dyn MeshTelemetry>,
}

/// Builds the API router around an injected telemetry client.
pub fn router(telemetry: Arc<dyn MeshTelemetry>) -> Router {
    Router::new()
        .route("/health", get(api::health::health))
        .route(
            "/namespace/{namespace}/deployments/{deployment}/stats",
            get(api::deployment_stats::get_deployment_stats),
        )
        .with_state(AppState { telemetry })
}

/// Binds the configured listener and serves the API.
pub async fn run(
    config: config::Config,
    telemetry: Arc<dyn MeshTelemetry>,
) -> Result<(), StatsApiError> {
    let addr = format!("{}:{}", config.listener.host, config.listener.port);
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!(%addr, "stats API listening");
    axum::serve(listener, router(telemetry)).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutils::StubTelemetry;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    #[tokio::test]
    async fn test_health_returns_ok() {
        let app = router(Arc::new(StubTelemetry::default()));

        let response = app
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let parsed: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(parsed, serde_json::json!({"status": "ok"}));
    }

    #[tokio::test]
    async fn test_unknown_route_is_not_found() {
        let app = router(Arc::new(StubTelemetry::default()));

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/namespace/default/stats")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
