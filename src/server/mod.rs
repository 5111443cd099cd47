//! HTTP server.
//!
//! Provides two endpoints:
//! - `/` - JSON status and usage message
//! - `/search` - nearby shops for a product and a free-text location
//!
//! The router is built once at startup; handlers share only the immutable
//! `AppState`.

mod handlers;
mod shutdown;
mod types;

use std::net::SocketAddr;

use anyhow::{Context, Result};
use axum::routing::get;
use axum::Router;
use log::info;
use tokio::net::TcpListener;

use crate::config::Config;
use crate::search::ShopFinder;
use handlers::{index_handler, search_handler};
pub use shutdown::shutdown_signal;
pub use types::AppState;

/// Builds the router with all routes registered.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route("/search", get(search_handler))
        .with_state(state)
}

/// Validates `config`, builds the outbound clients, binds and serves until a
/// shutdown signal arrives.
///
/// # Errors
///
/// Returns an error if the configuration is invalid, a client cannot be
/// built, the address cannot be bound, or the server fails while running.
pub async fn run_server(config: Config) -> Result<()> {
    config.validate().context("Invalid configuration")?;

    let finder = ShopFinder::from_config(&config).context("Failed to initialize HTTP clients")?;

    let addr = SocketAddr::new(config.bind_address, config.port);
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to bind server to {}: {}", addr, e))?;

    info!("Geocoder: {}", config.geocoder_url);
    info!("Shop locator: {}", config.overpass_url);

    serve(listener, AppState::new(finder)).await
}

/// Serves the router on an already-bound listener until a shutdown signal
/// arrives.
///
/// # Errors
///
/// Returns an error if the server fails while running.
pub async fn serve(listener: TcpListener, state: AppState) -> Result<()> {
    let local_addr = listener
        .local_addr()
        .context("Failed to read listener address")?;

    info!("Server listening on http://{}/", local_addr);
    info!("  - Status: http://{}/", local_addr);
    info!(
        "  - Search: http://{}/search?product=<product>&location=<location>",
        local_addr
    );

    axum::serve(listener, build_router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| anyhow::anyhow!("Server error: {}", e))?;

    info!("Server stopped");
    Ok(())
}
