use async_trait::async_trait;
use serde_json::Value as JsonValue;

pub mod client;
pub mod config;
pub mod credentials;
pub mod protocol;
pub mod query;

pub use client::{LinkerdViz, VizError};
pub use config::VizConfig;
pub use credentials::Credentials;
pub use query::{EdgeSelector, QueryError, ResourceType, StatsTarget};

/// Interface to the mesh-telemetry backend.
///
/// `LinkerdViz` is the production implementation; the API layer depends on
/// this trait so it can be exercised against a stub.
#[async_trait]
pub trait MeshTelemetry: Send + Sync {
    /// Fetches stat summaries for the resources selected by `target`.
    ///
    /// Rows are opaque upstream values, returned in upstream order.
    async fn stats(
        &self,
        target: &StatsTarget,
        credentials: &Credentials,
    ) -> Result<Vec<JsonValue>, VizError>;

    /// Fetches the communication edges selected by `selector`.
    async fn edges(
        &self,
        selector: &EdgeSelector,
        credentials: &Credentials,
    ) -> Result<Vec<JsonValue>, VizError>;
}
