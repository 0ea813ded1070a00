use async_trait::async_trait;
use axum::http::StatusCode;
use serde_json::Value as JsonValue;
use std::sync::Mutex;
use viz_client::{Credentials, EdgeSelector, MeshTelemetry, StatsTarget, VizError};

/// In-process telemetry stub for handler tests.
///
/// Answers stats calls from the canned rows matching the target variant and
/// records the credentials and targets each call was made with.
#[derive(Default)]
pub struct StubTelemetry {
    pub current: Vec<JsonValue>,
    pub incoming: Vec<JsonValue>,
    pub outgoing: Vec<JsonValue>,
    pub edges: Vec<JsonValue>,
    pub fail_edges: bool,
    pub seen_credentials: Mutex<Vec<String>>,
    pub seen_targets: Mutex<Vec<StatsTarget>>,
}

#[async_trait]
impl MeshTelemetry for StubTelemetry {
    async fn stats(
        &self,
        target: &StatsTarget,
        credentials: &Credentials,
    ) -> Result<Vec<JsonValue>, VizError> {
        self.seen_credentials
            .lock()
            .unwrap()
            .push(credentials.authorization_value());
        self.seen_targets.lock().unwrap().push(target.clone());

        Ok(match target {
            StatsTarget::Resource { .. } => self.current.clone(),
            StatsTarget::Inbound { .. } => self.incoming.clone(),
            StatsTarget::Outbound { .. } => self.outgoing.clone(),
        })
    }

    async fn edges(
        &self,
        _selector: &EdgeSelector,
        credentials: &Credentials,
    ) -> Result<Vec<JsonValue>, VizError> {
        self.seen_credentials
            .lock()
            .unwrap()
            .push(credentials.authorization_value());

        if self.fail_edges {
            return Err(VizError::UpstreamStatus {
                endpoint: "edges",
                status: StatusCode::GATEWAY_TIMEOUT,
            });
        }
        Ok(self.edges.clone())
    }
}
