//! Error type definitions.
//!
//! This module defines all error types used throughout the application, from
//! startup failures to the upstream lookup failures that the search pipeline
//! degrades on.

use std::fmt;

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing an HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}

/// Configuration values that parse but cannot be used.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A timeout was set to zero seconds.
    #[error("{0} must be greater than zero")]
    ZeroTimeout(&'static str),

    /// An endpoint is not an absolute http(s) URL.
    #[error("{field} is not a valid http(s) URL ('{value}'): {reason}")]
    InvalidUrl {
        /// Name of the offending option
        field: &'static str,
        /// Value as given
        value: String,
        /// Why it was rejected
        reason: String,
    },

    /// The User-Agent is empty or whitespace.
    #[error("user_agent must not be empty")]
    EmptyUserAgent,
}

/// The outbound service a lookup was made against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Upstream {
    /// Nominatim-compatible geocoder
    Geocoder,
    /// Overpass-compatible shop query service
    ShopLocator,
}

impl fmt::Display for Upstream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Upstream::Geocoder => write!(f, "geocoder"),
            Upstream::ShopLocator => write!(f, "shop locator"),
        }
    }
}

/// Categories of upstream failure, used as a stable label in logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorType {
    // Transport
    HttpRequestTimeoutError,
    HttpRequestConnectError,
    HttpRequestStatusError,
    HttpRequestDecodeError,
    HttpRequestOtherError,
    // Payload
    NoMatch,
    InvalidCoordinates,
}

impl ErrorType {
    /// Short snake_case label for log lines.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorType::HttpRequestTimeoutError => "timeout",
            ErrorType::HttpRequestConnectError => "connect",
            ErrorType::HttpRequestStatusError => "http_status",
            ErrorType::HttpRequestDecodeError => "decode",
            ErrorType::HttpRequestOtherError => "request",
            ErrorType::NoMatch => "no_match",
            ErrorType::InvalidCoordinates => "invalid_coordinates",
        }
    }
}

/// A failed outbound lookup.
///
/// Every network-calling function returns `Result<T, LookupError>`. Callers
/// inspect it immediately and convert it into the degraded outcome for their
/// step; the error itself is only ever logged.
#[derive(Error, Debug)]
pub enum LookupError {
    /// The request did not complete within its timeout.
    #[error("{service} request timed out")]
    Timeout {
        /// Service that timed out
        service: Upstream,
    },

    /// The TCP/TLS connection could not be established.
    #[error("could not connect to {service}: {source}")]
    Connect {
        /// Service that was unreachable
        service: Upstream,
        /// Underlying transport error
        #[source]
        source: ReqwestError,
    },

    /// The service answered with a non-success status.
    #[error("{service} returned HTTP {status}")]
    Status {
        /// Service that answered
        service: Upstream,
        /// Status code returned
        status: u16,
    },

    /// The response body was not the expected JSON shape.
    #[error("{service} returned a malformed response: {reason}")]
    Decode {
        /// Service that answered
        service: Upstream,
        /// Parser message
        reason: String,
    },

    /// Any other transport-level failure.
    #[error("{service} request failed: {source}")]
    Request {
        /// Service the request was for
        service: Upstream,
        /// Underlying transport error
        #[source]
        source: ReqwestError,
    },

    /// The geocoder returned no match for the query.
    #[error("no match for '{query}'")]
    NoMatch {
        /// Free-text query as sent
        query: String,
    },

    /// The geocoder returned coordinates that are not a valid position.
    #[error("invalid coordinates: lat={lat}, lon={lon}")]
    InvalidCoordinates {
        /// Latitude as returned
        lat: String,
        /// Longitude as returned
        lon: String,
    },
}

impl LookupError {
    /// The log category for this failure.
    pub fn error_type(&self) -> ErrorType {
        match self {
            LookupError::Timeout { .. } => ErrorType::HttpRequestTimeoutError,
            LookupError::Connect { .. } => ErrorType::HttpRequestConnectError,
            LookupError::Status { .. } => ErrorType::HttpRequestStatusError,
            LookupError::Decode { .. } => ErrorType::HttpRequestDecodeError,
            LookupError::Request { .. } => ErrorType::HttpRequestOtherError,
            LookupError::NoMatch { .. } => ErrorType::NoMatch,
            LookupError::InvalidCoordinates { .. } => ErrorType::InvalidCoordinates,
        }
    }
}

/// Client-visible failures of a search request.
///
/// Everything else (including a failed shop query) degrades to a successful
/// response.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchError {
    /// `product` or `location` is missing or blank.
    #[error("Please provide product and location")]
    MissingParameters,

    /// The location could not be geocoded, for whatever reason.
    #[error("Could not fetch location. Try again.")]
    LocationUnresolved,
}
