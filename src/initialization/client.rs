//! HTTP client initialization.
//!
//! The geocoder and the shop locator get separate clients because each call
//! carries its own total timeout.

use std::time::Duration;

use crate::config::{Config, TCP_CONNECT_TIMEOUT};
use reqwest::ClientBuilder;

/// Initializes the HTTP client used for geocoding.
///
/// Creates a `reqwest::Client` configured with:
/// - User-Agent header from config (Nominatim rejects anonymous clients)
/// - Total timeout from `geocode_timeout_seconds`
/// - Connect timeout capped at the total timeout
///
/// # Errors
///
/// Returns a `reqwest::Error` if client creation fails.
pub fn init_geocode_client(config: &Config) -> Result<reqwest::Client, reqwest::Error> {
    build_client(
        &config.user_agent,
        Duration::from_secs(config.geocode_timeout_seconds),
    )
}

/// Initializes the HTTP client used for the shop query.
///
/// Same as [`init_geocode_client`] but with `shop_query_timeout_seconds`.
///
/// # Errors
///
/// Returns a `reqwest::Error` if client creation fails.
pub fn init_shop_client(config: &Config) -> Result<reqwest::Client, reqwest::Error> {
    build_client(
        &config.user_agent,
        Duration::from_secs(config.shop_query_timeout_seconds),
    )
}

fn build_client(user_agent: &str, timeout: Duration) -> Result<reqwest::Client, reqwest::Error> {
    ClientBuilder::new()
        .timeout(timeout)
        .connect_timeout(TCP_CONNECT_TIMEOUT.min(timeout))
        .user_agent(user_agent.to_string())
        .build()
}
