// Shared test helpers for driving the router against mocked upstream services.
//
// Each test gets its own pair of wiremock servers standing in for the
// geocoder and the Overpass interpreter.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::Value;
use tower::ServiceExt;
use wiremock::MockServer;

use shop_finder::{build_router, AppState, Config, ShopFinder};

/// Resolved position for "Charlotte" in the geocoder mocks.
pub const CHARLOTTE_LAT: f64 = 35.2272086;
#[allow(dead_code)] // Used by other test files
pub const CHARLOTTE_LON: f64 = -80.8430827;

/// Builds a config pointing both upstreams at mock servers, with short timeouts.
pub fn test_config(geocoder: &MockServer, overpass: &MockServer) -> Config {
    Config {
        geocoder_url: format!("{}/search", geocoder.uri()),
        overpass_url: format!("{}/api/interpreter", overpass.uri()),
        geocode_timeout_seconds: 2,
        shop_query_timeout_seconds: 2,
        user_agent: "shop_finder_test/1.0".to_string(),
        ..Default::default()
    }
}

/// Builds the application router from a config.
#[allow(dead_code)] // Used by other test files
pub fn test_app(config: &Config) -> Router {
    let finder = ShopFinder::from_config(config).expect("Failed to build test clients");
    build_router(AppState::new(finder))
}

/// Issues a GET against the router and returns the status and JSON body.
#[allow(dead_code)] // Used by other test files
pub async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(
            Request::builder()
                .uri(uri)
                .body(Body::empty())
                .expect("Failed to build request"),
        )
        .await
        .expect("Router should not fail");

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("Body should be JSON")
    };
    (status, body)
}

/// Nominatim-style match list with a single entry.
pub fn geocoder_match(lat: f64, lon: f64) -> Value {
    serde_json::json!([{
        "place_id": 297337326,
        "osm_type": "relation",
        "lat": lat.to_string(),
        "lon": lon.to_string(),
        "display_name": "Charlotte, Mecklenburg County, North Carolina, United States"
    }])
}

/// Overpass node roughly `miles` due north of Charlotte.
#[allow(dead_code)] // Used by other test files
pub fn node_north_of_charlotte(id: i64, name: Option<&str>, miles: f64) -> Value {
    let mut node = serde_json::json!({
        "type": "node",
        "id": id,
        "lat": CHARLOTTE_LAT + miles / 69.0,
        "lon": CHARLOTTE_LON,
    });
    if let Some(name) = name {
        node["tags"] = serde_json::json!({"shop": "convenience", "name": name});
    }
    node
}

/// Overpass response body wrapping `elements`.
#[allow(dead_code)] // Used by other test files
pub fn overpass_body(elements: Vec<Value>) -> Value {
    serde_json::json!({
        "version": 0.6,
        "generator": "Overpass API",
        "elements": elements
    })
}
