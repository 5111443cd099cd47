//! Data types flowing through the search pipeline.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A position in decimal degrees (WGS-84).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Location {
    /// Latitude, -90..=90
    pub lat: f64,
    /// Longitude, -180..=180
    pub lon: f64,
}

impl Location {
    /// Creates a location, rejecting non-finite or out-of-range coordinates.
    pub fn new(lat: f64, lon: f64) -> Option<Self> {
        let valid = lat.is_finite()
            && lon.is_finite()
            && (-90.0..=90.0).contains(&lat)
            && (-180.0..=180.0).contains(&lon);
        valid.then_some(Self { lat, lon })
    }
}

/// A raw element as returned by the shop locator.
///
/// Overpass nodes always carry `lat`/`lon`, but ways and relations returned by
/// custom endpoints may not, so both are optional here and the ranker skips
/// records without them.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ShopRecord {
    /// OSM element id, if present
    #[serde(default)]
    pub id: Option<i64>,
    /// Latitude of the node
    #[serde(default)]
    pub lat: Option<f64>,
    /// Longitude of the node
    #[serde(default)]
    pub lon: Option<f64>,
    /// Free-form OSM tags (`name`, `shop`, `opening_hours`, ...)
    #[serde(default)]
    pub tags: Option<HashMap<String, String>>,
}

impl ShopRecord {
    /// Position of the record, if both coordinates are present.
    pub fn location(&self) -> Option<Location> {
        Some(Location {
            lat: self.lat?,
            lon: self.lon?,
        })
    }

    /// Value of the `name` tag.
    pub fn name(&self) -> Option<&str> {
        self.tags.as_ref()?.get("name").map(String::as_str)
    }
}

/// One entry of the response list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedShop {
    /// Display name
    pub name: String,
    /// Geodesic distance from the user, in miles, rounded to 2 decimals
    pub distance_miles: f64,
    /// Navigation link from the user to the shop
    pub directions: String,
}

/// Body of a successful `/search` response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResponse {
    /// `product` query parameter, echoed
    pub product: String,
    /// `location` query parameter, echoed
    pub location: String,
    /// Number of entries in `shops`
    pub results_found: usize,
    /// Shops ordered by ascending distance
    pub shops: Vec<RankedShop>,
}
