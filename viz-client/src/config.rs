use serde::Deserialize;
use url::Url;

/// Connection settings for the Linkerd Viz dashboard API.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct VizConfig {
    /// Base URL of the viz dashboard service
    ///
    /// Note: Uses the `url::Url` type for compile-time URL validation.
    /// Invalid URLs will be rejected during config deserialization.
    pub url: Url,
    /// Whole-request timeout applied to every upstream call
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
    /// Time window stat summaries are computed over (e.g. "1m")
    #[serde(default = "default_window")]
    pub window: String,
}

fn default_request_timeout_secs() -> u64 {
    15
}

fn default_window() -> String {
    "1m".to_string()
}
