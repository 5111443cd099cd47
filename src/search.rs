//! The search pipeline: geocode, locate shops, rank.

use std::time::Instant;

use log::{info, warn};

use crate::config::Config;
use crate::error_handling::{InitializationError, SearchError};
use crate::geocode::Geocoder;
use crate::initialization::{init_geocode_client, init_shop_client};
use crate::models::SearchResponse;
use crate::ranking::rank;
use crate::shops::ShopLocator;

/// Runs one search per call. Holds no per-request state, so a single
/// instance is shared by all concurrent requests.
#[derive(Debug, Clone)]
pub struct ShopFinder {
    geocoder: Geocoder,
    locator: ShopLocator,
}

impl ShopFinder {
    /// Creates a finder from its two upstream clients.
    pub fn new(geocoder: Geocoder, locator: ShopLocator) -> Self {
        Self { geocoder, locator }
    }

    /// Builds both outbound clients from `config`.
    ///
    /// # Errors
    ///
    /// Returns `InitializationError::HttpClientError` if a client cannot be built.
    pub fn from_config(config: &Config) -> Result<Self, InitializationError> {
        let geocoder = Geocoder::new(init_geocode_client(config)?, config.geocoder_url.clone());
        let locator = ShopLocator::new(
            init_shop_client(config)?,
            config.overpass_url.clone(),
            config.shop_query_timeout_seconds,
        );
        Ok(Self::new(geocoder, locator))
    }

    /// Searches for shops near `location`.
    ///
    /// `product` is required and echoed back but does not narrow the search.
    /// Both values are echoed verbatim.
    ///
    /// # Errors
    ///
    /// - `SearchError::MissingParameters` if either value is missing or blank
    /// - `SearchError::LocationUnresolved` if geocoding fails for any reason
    ///
    /// A failed shop query is not an error: the response then lists no shops.
    pub async fn search(
        &self,
        product: Option<&str>,
        location: Option<&str>,
    ) -> Result<SearchResponse, SearchError> {
        let (product, location) = match (non_blank(product), non_blank(location)) {
            (Some(product), Some(location)) => (product, location),
            _ => return Err(SearchError::MissingParameters),
        };

        let start = Instant::now();

        let user = match self.geocoder.locate(location.trim()).await {
            Ok(user) => user,
            Err(e) => {
                warn!(
                    "Geocoding failed for '{}' [{}]: {}",
                    location,
                    e.error_type().as_str(),
                    e
                );
                return Err(SearchError::LocationUnresolved);
            }
        };

        let records = match self.locator.find_shops(user).await {
            Ok(records) => records,
            Err(e) => {
                warn!(
                    "Shop query failed near ({}, {}) [{}]: {}",
                    user.lat,
                    user.lon,
                    e.error_type().as_str(),
                    e
                );
                Vec::new()
            }
        };

        let shops = rank(user, &records);

        info!(
            "Search product='{}' location='{}' -> ({}, {}): {} of {} records ranked in {:.2}s",
            product,
            location,
            user.lat,
            user.lon,
            shops.len(),
            records.len(),
            start.elapsed().as_secs_f64()
        );

        Ok(SearchResponse {
            product: product.to_string(),
            location: location.to_string(),
            results_found: shops.len(),
            shops,
        })
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}
