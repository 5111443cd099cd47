//! Error categorization.
//!
//! Maps transport errors from `reqwest` onto `LookupError` so every caller
//! logs the same category for the same failure.

use super::types::{LookupError, Upstream};

/// Categorizes a `reqwest::Error` raised while talking to `service`.
///
/// This is the unified categorization logic used by both the geocoder and the
/// shop locator. Status errors are checked first, then timeouts (which reqwest
/// may also flag as connect or body errors), then the remaining kinds.
///
/// # Arguments
///
/// * `service` - The upstream the request was made against
/// * `error` - The `reqwest::Error` to categorize
///
/// # Returns
///
/// The matching `LookupError` variant, owning the original error where useful.
pub fn categorize_reqwest_error(service: Upstream, error: reqwest::Error) -> LookupError {
    if let Some(status) = error.status() {
        return LookupError::Status {
            service,
            status: status.as_u16(),
        };
    }

    if error.is_timeout() {
        LookupError::Timeout { service }
    } else if error.is_connect() {
        LookupError::Connect {
            service,
            source: error,
        }
    } else if error.is_decode() {
        LookupError::Decode {
            service,
            reason: error.to_string(),
        }
    } else {
        LookupError::Request {
            service,
            source: error,
        }
    }
}
