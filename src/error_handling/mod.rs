//! Error handling.
//!
//! This module provides:
//! - Error type definitions (startup, configuration, upstream lookups, search)
//! - Categorization of transport errors into upstream lookup failures
//!
//! Upstream failures never reach the caller as-is. The geocoder's failures
//! collapse into `SearchError::LocationUnresolved`; the shop locator's
//! collapse into an empty result set.

mod categorization;
mod types;

// Re-export public API
pub use categorization::categorize_reqwest_error;
pub use types::{
    ConfigError, ErrorType, InitializationError, LookupError, SearchError, Upstream,
};
