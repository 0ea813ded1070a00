use crate::MeshTelemetry;
use crate::config::VizConfig;
use crate::credentials::Credentials;
use crate::protocol::{EdgesEnvelope, StatsEnvelope};
use crate::query::{EdgeSelector, StatsTarget};
use async_trait::async_trait;
use http::StatusCode;
use serde_json::Value as JsonValue;
use std::time::Duration;
use url::Url;

/// Errors that can occur while talking to the viz API
#[derive(thiserror::Error, Debug)]
pub enum VizError {
    #[error("viz API request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("viz API returned {status} from {endpoint}")]
    UpstreamStatus {
        endpoint: &'static str,
        status: StatusCode,
    },

    #[error("malformed {endpoint} response: {source}")]
    Malformed {
        endpoint: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid viz API URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

/// HTTP client for the Linkerd Viz dashboard API.
///
/// Owns request construction, transport and response parsing; callers hand it
/// a validated query and the caller's credentials, nothing else. Built once
/// from explicit config and injected wherever telemetry is needed.
pub struct LinkerdViz {
    client: reqwest::Client,
    stats_url: Url,
    edges_url: Url,
    window: String,
}

impl LinkerdViz {
    pub fn from_config(config: &VizConfig) -> Result<Self, VizError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        Ok(LinkerdViz {
            client,
            stats_url: endpoint(&config.url, "api/tps-reports")?,
            edges_url: endpoint(&config.url, "api/edges")?,
            window: config.window.clone(),
        })
    }

    async fn get_ok_bytes(
        &self,
        endpoint: &'static str,
        url: Url,
        params: &[(&'static str, String)],
        credentials: &Credentials,
    ) -> Result<bytes::Bytes, VizError> {
        tracing::debug!(endpoint, "querying viz API");

        let response = self
            .client
            .get(url)
            .query(&params)
            .header(http::header::AUTHORIZATION, credentials.authorization_value())
            .send()
            .await?;

        match response.status() {
            StatusCode::OK => Ok(response.bytes().await?),
            status => Err(VizError::UpstreamStatus { endpoint, status }),
        }
    }
}

/// Resolves an API path against the configured base URL.
fn endpoint(base: &Url, path: &str) -> Result<Url, url::ParseError> {
    // join() treats a base without a trailing slash as a file and would drop
    // its last path segment
    let mut base = base.clone();
    if !base.path().ends_with('/') {
        base.set_path(&format!("{}/", base.path()));
    }
    base.join(path)
}

#[async_trait]
impl MeshTelemetry for LinkerdViz {
    async fn stats(
        &self,
        target: &StatsTarget,
        credentials: &Credentials,
    ) -> Result<Vec<JsonValue>, VizError> {
        let mut params = target.query_params();
        params.push(("tcp_stats", "true".to_string()));
        params.push(("window", self.window.clone()));

        let bytes = self
            .get_ok_bytes("tps-reports", self.stats_url.clone(), &params, credentials)
            .await?;

        let envelope = StatsEnvelope::from_slice(&bytes).map_err(|source| VizError::Malformed {
            endpoint: "tps-reports",
            source,
        })?;

        Ok(envelope.into_rows())
    }

    async fn edges(
        &self,
        selector: &EdgeSelector,
        credentials: &Credentials,
    ) -> Result<Vec<JsonValue>, VizError> {
        let params = selector.query_params();

        let bytes = self
            .get_ok_bytes("edges", self.edges_url.clone(), &params, credentials)
            .await?;

        let envelope = EdgesEnvelope::from_slice(&bytes).map_err(|source| VizError::Malformed {
            endpoint: "edges",
            source,
        })?;

        Ok(envelope.into_edges())
    }
}
