//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line and
//! environment-variable parsing, plus validation of the parsed values.

use std::net::IpAddr;

use clap::{Parser, ValueEnum};

use crate::config::constants::{
    DEFAULT_BIND_ADDRESS, DEFAULT_GEOCODER_URL, DEFAULT_OVERPASS_URL, DEFAULT_PORT,
    DEFAULT_USER_AGENT, GEOCODE_TIMEOUT_SECS, SHOP_QUERY_TIMEOUT_SECS,
};
use crate::error_handling::ConfigError;

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for log collectors
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Service configuration.
///
/// Every option can be given as a flag or through the environment variable
/// named next to it, so the service can be configured by a hosting platform
/// that only sets `PORT`.
///
/// # Examples
///
/// ```no_run
/// use shop_finder::Config;
///
/// let config = Config {
///     port: 8080,
///     geocode_timeout_seconds: 5,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, Parser)]
#[command(name = "shop_finder", version, about)]
pub struct Config {
    /// Port to listen on
    #[arg(long, env = "PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Address to bind (all interfaces by default)
    #[arg(long, env = "BIND_ADDRESS", default_value = DEFAULT_BIND_ADDRESS)]
    pub bind_address: IpAddr,

    /// Log level
    #[arg(long, env = "LOG_LEVEL", value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format
    #[arg(long, env = "LOG_FORMAT", value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,

    /// Nominatim-compatible search endpoint
    #[arg(long, env = "GEOCODER_URL", default_value = DEFAULT_GEOCODER_URL)]
    pub geocoder_url: String,

    /// Overpass-compatible interpreter endpoint
    #[arg(long, env = "OVERPASS_URL", default_value = DEFAULT_OVERPASS_URL)]
    pub overpass_url: String,

    /// Geocoding request timeout in seconds
    #[arg(long, env = "GEOCODE_TIMEOUT_SECONDS", default_value_t = GEOCODE_TIMEOUT_SECS)]
    pub geocode_timeout_seconds: u64,

    /// Shop query timeout in seconds
    #[arg(long, env = "SHOP_QUERY_TIMEOUT_SECONDS", default_value_t = SHOP_QUERY_TIMEOUT_SECS)]
    pub shop_query_timeout_seconds: u64,

    /// HTTP User-Agent header value for outbound requests
    #[arg(long, env = "USER_AGENT", default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            bind_address: IpAddr::from([0, 0, 0, 0]),
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
            geocoder_url: DEFAULT_GEOCODER_URL.to_string(),
            overpass_url: DEFAULT_OVERPASS_URL.to_string(),
            geocode_timeout_seconds: GEOCODE_TIMEOUT_SECS,
            shop_query_timeout_seconds: SHOP_QUERY_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl Config {
    /// Checks values clap cannot check on its own.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a timeout is zero, an endpoint is not an
    /// absolute `http`/`https` URL, or the User-Agent is empty.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.geocode_timeout_seconds == 0 {
            return Err(ConfigError::ZeroTimeout("geocode_timeout_seconds"));
        }
        if self.shop_query_timeout_seconds == 0 {
            return Err(ConfigError::ZeroTimeout("shop_query_timeout_seconds"));
        }
        validate_endpoint("geocoder_url", &self.geocoder_url)?;
        validate_endpoint("overpass_url", &self.overpass_url)?;
        if self.user_agent.trim().is_empty() {
            return Err(ConfigError::EmptyUserAgent);
        }
        Ok(())
    }
}

fn validate_endpoint(field: &'static str, value: &str) -> Result<(), ConfigError> {
    let parsed = url::Url::parse(value).map_err(|e| ConfigError::InvalidUrl {
        field,
        value: value.to_string(),
        reason: e.to_string(),
    })?;
    match parsed.scheme() {
        "http" | "https" => Ok(()),
        other => Err(ConfigError::InvalidUrl {
            field,
            value: value.to_string(),
            reason: format!("unsupported scheme '{}'", other),
        }),
    }
}
