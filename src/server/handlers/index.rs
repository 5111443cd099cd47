//! Status/usage handler.

use axum::Json;

use super::super::types::IndexResponse;

/// Static status and usage message
pub async fn index_handler() -> Json<IndexResponse> {
    Json(IndexResponse {
        status: "ok",
        service: env!("CARGO_PKG_NAME"),
        usage: "/search?product=<product>&location=<location>",
    })
}
