//! The stats aggregation endpoint.
//!
//! One inbound request fans out into four viz API calls (the deployment's
//! own stats, inbound traffic, outbound traffic, namespace edges) and waits
//! for all of them before answering. Any upstream failure fails the whole
//! request; partial aggregates are never returned.

use crate::AppState;
use crate::auth;
use crate::errors::StatsApiError;
use crate::metrics_defs::STATS_REQUESTS;
use axum::Json;
use axum::extract::{Path, State};
use axum::http::HeaderMap;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use viz_client::{EdgeSelector, MeshTelemetry, ResourceType, StatsTarget};

#[derive(Deserialize)]
pub struct StatsPath {
    pub namespace: String,
    pub deployment: String,
}

/// Aggregated telemetry for one deployment.
#[derive(Debug, Serialize)]
pub struct DeploymentStats {
    /// Stats for the deployment itself. Omitted when the upstream has no
    /// rows for it yet.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current: Option<JsonValue>,
    /// Stats for every resource sending traffic to the deployment.
    pub incoming: Vec<JsonValue>,
    /// Stats for every resource receiving traffic from the deployment.
    pub outgoing: Vec<JsonValue>,
    /// Communication edges for deployments in the namespace. Not filtered
    /// down to the one named deployment.
    pub edges: Vec<JsonValue>,
}

/// `GET /namespace/{namespace}/deployments/{deployment}/stats`
pub async fn get_deployment_stats(
    State(state): State<AppState>,
    Path(path): Path<StatsPath>,
    headers: HeaderMap,
) -> Result<Json<DeploymentStats>, StatsApiError> {
    metrics::counter!(STATS_REQUESTS.name).increment(1);

    let StatsPath {
        namespace,
        deployment,
    } = path;

    // Query construction rejects blank identifiers before anything is sent
    // upstream.
    let current_target = StatsTarget::resource(ResourceType::Deployment, &namespace, &deployment)?;
    let inbound_target = StatsTarget::inbound(ResourceType::Deployment, &namespace, &deployment)?;
    let outbound_target = StatsTarget::outbound(ResourceType::Deployment, &namespace, &deployment)?;
    let edge_selector = EdgeSelector::new(ResourceType::Deployment, &namespace)?;

    // Extracted once; the same value goes to all four upstream calls.
    let credentials = auth::extract_credentials(&headers)?;

    tracing::debug!(%namespace, %deployment, "aggregating deployment stats");

    let (current_rows, incoming, outgoing, edges) = tokio::try_join!(
        state.telemetry.stats(&current_target, &credentials),
        state.telemetry.stats(&inbound_target, &credentials),
        state.telemetry.stats(&outbound_target, &credentials),
        state.telemetry.edges(&edge_selector, &credentials),
    )?;

    Ok(Json(DeploymentStats {
        // an exact-resource query may legitimately match nothing
        current: current_rows.into_iter().next(),
        incoming,
        outgoing,
        edges,
    }))
}
