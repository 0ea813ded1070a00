use axum::Json;
use serde::Serialize;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// Liveness probe. Reports no dependency state: the viz API being down must
/// not make this service look unhealthy.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}
