//! Main application entry point (server binary).
//!
//! This is a thin wrapper around the `shop_finder` library that handles:
//! - Environment variable loading (.env file)
//! - Command-line / environment configuration parsing
//! - Logger initialization
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use shop_finder::initialization::init_logger_with;
use shop_finder::{run_server, Config};

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env file is normal in deployments that set variables directly
    let _ = dotenvy::dotenv();

    let config = Config::parse();

    init_logger_with(config.log_level.clone().into(), config.log_format.clone())
        .context("Failed to initialize logger")?;

    if let Err(e) = run_server(config).await {
        eprintln!("shop_finder error: {:#}", e);
        process::exit(1);
    }

    Ok(())
}
