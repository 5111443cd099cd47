//! Shop search handler.

use axum::{
    extract::{Query, State},
    response::{IntoResponse, Response},
    Json,
};

use super::super::types::{AppState, SearchParams};

/// `GET /search?product=..&location=..`
///
/// 200 with the ranked shops, or 400 with `{"error": ...}` when a parameter is
/// missing or the location cannot be resolved. The query is decoded as raw
/// pairs so a repeated key takes its first value instead of being rejected.
pub async fn search_handler(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Response {
    let params = SearchParams::from_pairs(pairs);
    match state
        .finder
        .search(params.product.as_deref(), params.location.as_deref())
        .await
    {
        Ok(response) => Json(response).into_response(),
        Err(e) => e.into_response(),
    }
}
