//! E-Commerce Dashboard Server
//!
//! Run with: cargo run --bin ecommerce-dashboard [-- path/to/config.toml]
//!
//! # Configuration
//!
//! Without a path argument, `config.toml` is searched in the user config
//! directory and the working directory. Environment variables override it:
//! - `DASHBOARD_DATA_DIR`: Directory with the CSV extracts (default: ./main_data)
//! - `DASHBOARD_HOST`: Host to bind to (default: 0.0.0.0)
//! - `DASHBOARD_PORT`: Port to listen on (default: 8501)
//! - `DASHBOARD_BOUNDARIES`: GeoJSON country outlines (optional)
//! - `DASHBOARD_LOG_LEVEL` / `DASHBOARD_LOG_FORMAT`: Logging (or `RUST_LOG`)

use anyhow::Context;
use ecommerce_dashboard::api::{serve, ApiConfig, AppState};
use ecommerce_dashboard::config::Config;
use ecommerce_dashboard::page::Dashboard;
use std::path::PathBuf;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config_path = std::env::args().nth(1).map(PathBuf::from);
    let config = Config::resolve(config_path.as_deref())?;

    ecommerce_dashboard::logging::init(&config.logging);

    tracing::info!("Starting E-Commerce Dashboard v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Data directory: {:?}", config.data.dir);

    // Tables are loaded once; any missing or malformed file stops startup
    let dashboard = Dashboard::from_config(&config).context("Failed to load dashboard data")?;

    let state = AppState::new(Arc::new(dashboard), ApiConfig::from(&config.server));

    tracing::info!("Starting server on {}", state.config.addr());
    serve(state).await?;

    tracing::info!("E-Commerce Dashboard stopped");
    Ok(())
}
