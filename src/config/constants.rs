//! Configuration constants.
//!
//! This module defines the fixed search parameters and the defaults used when
//! no flag or environment variable overrides them.

use std::time::Duration;

// Search parameters (fixed)
/// Radius around the resolved location searched for shops, in meters
pub const SEARCH_RADIUS_METERS: u32 = 5000;
/// Maximum number of shop records taken from the locator response before ranking
pub const MAX_SHOPS_CONSIDERED: usize = 20;
/// Maximum number of ranked shops returned to the caller
pub const MAX_RESULTS: usize = 10;
/// Display name used when a shop carries no `name` tag
pub const UNKNOWN_SHOP_NAME: &str = "Unknown Shop";
/// Directions link prefix; user and shop coordinates are appended as path segments
pub const DIRECTIONS_URL_PREFIX: &str = "https://www.google.com/maps/dir";
/// Meters per statute mile
pub const METERS_PER_MILE: f64 = 1609.344;

// Network operation timeouts
/// Geocoding request timeout in seconds
pub const GEOCODE_TIMEOUT_SECS: u64 = 10;
/// Shop query timeout in seconds
/// Also sent to Overpass as the server-side `[timeout:..]` setting
pub const SHOP_QUERY_TIMEOUT_SECS: u64 = 20;
/// TCP connection timeout, capped at the request timeout
pub const TCP_CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

// Server defaults
/// Port used when neither `--port` nor `PORT` is set
pub const DEFAULT_PORT: u16 = 10000;
/// Bind on all interfaces by default
pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0";

// Upstream services
/// Nominatim search endpoint
pub const DEFAULT_GEOCODER_URL: &str = "https://nominatim.openstreetmap.org/search";
/// Overpass interpreter endpoint
pub const DEFAULT_OVERPASS_URL: &str = "https://overpass-api.de/api/interpreter";

/// Default User-Agent string for outbound requests.
///
/// Nominatim's usage policy rejects requests without an identifying
/// User-Agent. Deployments should override it with `--user-agent` to include
/// contact details.
pub const DEFAULT_USER_AGENT: &str = concat!("shop_finder/", env!("CARGO_PKG_VERSION"));

// Client-facing error messages
/// Body of the 400 returned when `product` or `location` is missing
pub const MISSING_PARAMS_MESSAGE: &str = "Please provide product and location";
/// Body of the 400 returned when geocoding fails for any reason
pub const LOCATION_UNRESOLVED_MESSAGE: &str = "Could not fetch location. Try again.";
