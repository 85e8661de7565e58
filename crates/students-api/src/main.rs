//! `students-api`: binary entry point.
//!
//! Startup sequence:
//! 1. Parse the command line and load [`Config`] from file + environment.
//! 2. Initialise the telemetry pipeline (JSON logs, optional OTLP export).
//! 3. Open the SQLite store, creating the `students` table if needed.
//! 4. Build the Axum router and serve until SIGINT/SIGTERM.

mod cli;
mod config;
mod server;
mod storage;
mod telemetry;

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use crate::cli::Cli;
use crate::config::Config;
use crate::server::state::AppState;
use crate::storage::SqliteStore;

#[tokio::main]
async fn main() -> Result<()> {
    // -----------------------------------------------------------------------
    // 1. Configuration
    // -----------------------------------------------------------------------
    let cli = Cli::parse();
    let cfg = Config::load(cli.config.as_deref()).map_err(|e| {
        // Telemetry is not yet up; write to stderr directly.
        eprintln!("ERROR: configuration invalid: {e:#}");
        e
    })?;

    // -----------------------------------------------------------------------
    // 2. Telemetry
    // -----------------------------------------------------------------------
    let telemetry = telemetry::init_telemetry(
        &cfg.log_level,
        cfg.otel_exporter_otlp_endpoint.as_deref(),
        &cfg.env,
    )?;

    // -----------------------------------------------------------------------
    // 3. Storage
    // -----------------------------------------------------------------------
    let store = SqliteStore::open(&cfg.storage_path)
        .with_context(|| format!("failed to initialise storage at {}", cfg.storage_path))?;
    info!(
        env = %cfg.env,
        version = env!("CARGO_PKG_VERSION"),
        "storage initialized"
    );

    // -----------------------------------------------------------------------
    // 4. HTTP server
    // -----------------------------------------------------------------------
    let state = AppState::new(Arc::new(store), cfg.not_found_as_404, cfg.env.clone());
    let router = server::router::build(state, cfg.request_timeout());
    server::serve(&cfg.http_server.addr, router, cfg.shutdown_timeout()).await?;

    telemetry.shutdown();
    Ok(())
}
