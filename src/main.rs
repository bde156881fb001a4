//! organ-route - Transport selection service
//!
//! Serves the transport selector over HTTP.
//!
//! # Usage
//!
//! ```bash
//! # Defaults, or ./transport_config.toml when present
//! organ-route
//!
//! # Explicit config and bind address
//! organ-route --config /etc/organ-route/transport_config.toml --addr 127.0.0.1:9000
//! ```
//!
//! # Environment Variables
//!
//! - `ORGAN_ROUTE_CONFIG`: Config file path (when `--config` is not given)
//! - `ORGAN_ROUTE_CORS_ORIGINS`: Comma-separated allowed origins
//! - `RUST_LOG`: Logging level (default: info)

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use organ_route::api::{create_app, ServiceState};
use organ_route::config::TransportConfig;

// ============================================================================
// CLI Arguments
// ============================================================================

#[derive(Parser, Debug)]
#[command(name = "organ-route")]
#[command(about = "Deadline-constrained transport mode selection for organ shipments")]
#[command(version)]
struct CliArgs {
    /// Override the server address (default from config: "0.0.0.0:8080")
    #[arg(short, long)]
    addr: Option<String>,

    /// Transport config file; failing to load it is fatal
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,
}

/// Explicit path must load; otherwise fall back through the search order.
fn load_config(explicit: Option<PathBuf>) -> Result<(TransportConfig, Option<PathBuf>)> {
    match explicit {
        Some(path) => {
            let config = TransportConfig::load_from_file(&path)
                .with_context(|| format!("Failed to load config from {}", path.display()))?;
            info!(path = %path.display(), "Loaded transport config");
            Ok((config, Some(path)))
        }
        None => Ok((TransportConfig::load(), TransportConfig::search_path())),
    }
}

// ============================================================================
// Main Entry Point
// ============================================================================

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let args = CliArgs::parse();
    let (config, config_path) = load_config(args.config)?;
    let server_addr = args.addr.unwrap_or_else(|| config.server.addr.clone());

    info!("  organ-route {}", env!("CARGO_PKG_VERSION"));
    info!(
        "Ground {:.0} km/h | Commercial {:.0} km/h (+{:.2}h) | Dedicated {:.0} km/h (+{:.2}h)",
        config.ground.speed_kmh,
        config.commercial_air.cruise_speed_kmh,
        config.commercial_air.ground_handling_hours,
        config.dedicated_air.cruise_speed_kmh,
        config.dedicated_air.ground_handling_hours
    );
    info!(
        "Long-haul override above {:.0} km | cost-aware: {}",
        config.selection.long_haul.distance_threshold_km, config.selection.cost_aware
    );

    let app = create_app(ServiceState::new(config, config_path));

    let listener = tokio::net::TcpListener::bind(&server_addr)
        .await
        .with_context(|| format!("Failed to bind to {server_addr}"))?;
    info!("HTTP server listening on {}", server_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            tokio::signal::ctrl_c().await.ok();
            info!("Received Ctrl+C, shutting down");
        })
        .await
        .context("HTTP server error")?;

    info!("organ-route shutdown complete");
    Ok(())
}
