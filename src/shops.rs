//! Nearby shop lookup against an Overpass-compatible interpreter.

use log::{debug, warn};
use serde::Deserialize;

use crate::config::{MAX_SHOPS_CONSIDERED, SEARCH_RADIUS_METERS};
use crate::error_handling::{categorize_reqwest_error, LookupError, Upstream};
use crate::models::{Location, ShopRecord};

#[derive(Debug, Deserialize)]
struct OverpassResponse {
    #[serde(default)]
    elements: Vec<ShopRecord>,
    /// Set by Overpass when the query ran into a server-side limit
    #[serde(default)]
    remark: Option<String>,
}

/// Queries an Overpass `/interpreter` endpoint for `shop`-tagged nodes.
#[derive(Debug, Clone)]
pub struct ShopLocator {
    client: reqwest::Client,
    endpoint: String,
    server_timeout_secs: u64,
}

impl ShopLocator {
    /// Creates a locator.
    ///
    /// `server_timeout_secs` is embedded in the query so Overpass gives up no
    /// later than the client does.
    pub fn new(
        client: reqwest::Client,
        endpoint: impl Into<String>,
        server_timeout_secs: u64,
    ) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
            server_timeout_secs,
        }
    }

    /// Returns up to `MAX_SHOPS_CONSIDERED` shop nodes within
    /// `SEARCH_RADIUS_METERS` of `location`, in the order the service listed them.
    ///
    /// # Errors
    ///
    /// Transport failures, timeouts, non-success statuses and malformed
    /// bodies are returned as `LookupError`.
    pub async fn find_shops(&self, location: Location) -> Result<Vec<ShopRecord>, LookupError> {
        let query = build_query(location, SEARCH_RADIUS_METERS, self.server_timeout_secs);
        debug!("Overpass query: {}", query.replace('\n', " "));

        let response = self
            .client
            .post(&self.endpoint)
            .form(&[("data", query.as_str())])
            .send()
            .await
            .map_err(|e| categorize_reqwest_error(Upstream::ShopLocator, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(LookupError::Status {
                service: Upstream::ShopLocator,
                status: status.as_u16(),
            });
        }

        let body: OverpassResponse = response
            .json()
            .await
            .map_err(|e| categorize_reqwest_error(Upstream::ShopLocator, e))?;

        if let Some(remark) = body.remark {
            warn!("Overpass remark: {}", remark);
        }

        let mut elements = body.elements;
        elements.truncate(MAX_SHOPS_CONSIDERED);
        Ok(elements)
    }
}

/// Builds the Overpass QL query for shop nodes around a point.
fn build_query(location: Location, radius_meters: u32, timeout_secs: u64) -> String {
    format!(
        "[out:json][timeout:{}];\nnode[\"shop\"](around:{},{},{});\nout;",
        timeout_secs, radius_meters, location.lat, location.lon
    )
}
