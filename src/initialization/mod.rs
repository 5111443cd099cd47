//! Application initialization and resource setup.
//!
//! This module provides functions to initialize the shared resources:
//! - Logger
//! - Outbound HTTP clients (one per upstream, each with its own timeout)

mod client;
mod logger;

// Re-export public API
pub use client::{init_geocode_client, init_shop_client};
pub use logger::init_logger_with;
