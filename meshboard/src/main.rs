use clap::Parser;
use metrics_exporter_statsd::StatsdBuilder;
use std::error::Error;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;
use viz_client::{LinkerdViz, MeshTelemetry};

mod config;

/// Backend telemetry proxy for the mesh dashboard
#[derive(Parser)]
struct Cli {
    /// Path to the YAML configuration file
    #[arg(long, default_value = "config.yaml")]
    config: PathBuf,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    let config = config::Config::from_file(&cli.config)?;

    init_tracing(config.logging.as_ref());
    if let Some(metrics_config) = &config.metrics {
        init_metrics(metrics_config)?;
    }

    let api_config = stats_api::config::Config {
        listener: config.listener.clone(),
    };
    api_config.validate()?;

    let telemetry: Arc<dyn MeshTelemetry> = Arc::new(LinkerdViz::from_config(&config.viz)?);

    tracing::info!(viz_url = %config.viz.url, "starting meshboard");
    stats_api::run(api_config, telemetry).await?;
    Ok(())
}

fn init_tracing(logging: Option<&config::LoggingConfig>) {
    let default_level = logging.map(|l| l.level.as_str()).unwrap_or("info");
    // RUST_LOG wins over the configured level
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn init_metrics(config: &config::MetricsConfig) -> Result<(), Box<dyn Error>> {
    let recorder = StatsdBuilder::from(&config.statsd_host, config.statsd_port)
        .build(Some("meshboard"))?;
    metrics::set_global_recorder(recorder)
        .map_err(|e| format!("could not install metrics recorder: {e}"))?;
    Ok(())
}
