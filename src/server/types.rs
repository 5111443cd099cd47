//! Server data structures.

use std::sync::Arc;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::error_handling::SearchError;
use crate::search::ShopFinder;

/// Shared state for the handlers. Immutable after startup.
#[derive(Clone)]
pub struct AppState {
    /// The search pipeline
    pub finder: Arc<ShopFinder>,
}

impl AppState {
    /// Wraps a finder for sharing across requests.
    pub fn new(finder: ShopFinder) -> Self {
        Self {
            finder: Arc::new(finder),
        }
    }
}

/// Query string of `/search`. Both fields are optional here so that a missing
/// one produces the service's own 400 body instead of axum's rejection.
#[derive(Debug, Default, PartialEq)]
pub struct SearchParams {
    /// Requested product, echoed back
    pub product: Option<String>,
    /// Place name to geocode
    pub location: Option<String>,
}

impl SearchParams {
    /// Picks `product` and `location` out of the decoded query pairs.
    ///
    /// A repeated key keeps its first value; unrelated keys are ignored.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut params = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "product" => &mut params.product,
                "location" => &mut params.location,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value);
            }
        }
        params
    }
}

/// JSON body for `GET /`
#[derive(Serialize)]
pub struct IndexResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub usage: &'static str,
}

/// JSON body for client-visible errors
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl IntoResponse for SearchError {
    fn into_response(self) -> Response {
        let body = ErrorResponse {
            error: self.to_string(),
        };
        (StatusCode::BAD_REQUEST, Json(body)).into_response()
    }
}
