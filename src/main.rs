//! racecard-proxy binary.

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use racecard_proxy::config::{load_config, ProxyConfig};
use racecard_proxy::http::HttpServer;
use racecard_proxy::lifecycle::Shutdown;
use racecard_proxy::observability::{logging, metrics};

#[derive(Parser)]
#[command(name = "racecard-proxy")]
#[command(about = "Fetch proxy that decodes nankankeiba.com race cards", long_about = None)]
struct Cli {
    /// Path to a TOML config file. Defaults apply when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the configured bind address.
    #[arg(long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => ProxyConfig::default(),
    };
    if let Some(bind) = cli.bind {
        config.listener.bind_address = bind;
    }

    logging::init(&config.observability);

    tracing::info!("racecard-proxy v0.1.0 starting");
    tracing::info!(
        bind_address = %config.listener.bind_address,
        allowed_host = %config.upstream.allowed_host,
        upstream_timeout_ms = config.timeouts.upstream_millis,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        if let Ok(addr) = config.observability.metrics_address.parse() {
            metrics::init_metrics(addr);
        } else {
            tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            );
        }
    }

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    let local_addr = listener.local_addr()?;
    tracing::info!(address = %local_addr, "Listening for connections");

    let shutdown = Shutdown::new();
    let server = HttpServer::new(config)?;
    server.run(listener, shutdown.subscribe()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
