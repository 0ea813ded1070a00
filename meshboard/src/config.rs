use serde::Deserialize;
use stats_api::config::Listener;
use std::fs::File;
use viz_client::VizConfig;

#[derive(Deserialize)]
pub struct MetricsConfig {
    pub statsd_host: String,
    pub statsd_port: u16,
}

#[derive(Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

#[derive(Deserialize)]
pub struct Config {
    /// Listener for the stats API
    pub listener: Listener,
    /// Upstream Linkerd Viz connection
    pub viz: VizConfig,
    pub logging: Option<LoggingConfig>,
    pub metrics: Option<MetricsConfig>,
}

impl Config {
    pub fn from_file(path: &std::path::Path) -> Result<Self, ConfigError> {
        let file = File::open(path)?;
        let data = serde_yaml::from_reader(file)?;

        Ok(data)
    }
}

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("could not load config from file: {0}")]
    LoadError(#[from] std::io::Error),
    #[error("could not parse config: {0}")]
    ParseError(#[from] serde_yaml::Error),
}
