//! Distance ranking of shop records.
//!
//! Pure functions only: no I/O and no error conditions.

use geo::{Distance, Geodesic, Point};

use crate::config::{DIRECTIONS_URL_PREFIX, MAX_RESULTS, METERS_PER_MILE, UNKNOWN_SHOP_NAME};
use crate::models::{Location, RankedShop, ShopRecord};

/// Ranks `records` by distance from `user`.
///
/// Records without both coordinates are skipped. The result is sorted
/// ascending by the rounded distance and holds at most `MAX_RESULTS` entries.
/// The sort is stable, so shops at equal rounded distance keep the order the
/// locator returned them in.
pub fn rank(user: Location, records: &[ShopRecord]) -> Vec<RankedShop> {
    let mut ranked: Vec<RankedShop> = records
        .iter()
        .filter_map(|record| {
            let shop = record.location()?;
            Some(RankedShop {
                name: record.name().unwrap_or(UNKNOWN_SHOP_NAME).to_string(),
                distance_miles: round_to_hundredths(distance_miles(user, shop)),
                directions: directions_url(user, shop),
            })
        })
        .collect();

    ranked.sort_by(|a, b| a.distance_miles.total_cmp(&b.distance_miles));
    ranked.truncate(MAX_RESULTS);
    ranked
}

/// Geodesic (WGS-84 ellipsoid) distance between two points, in miles.
pub fn distance_miles(from: Location, to: Location) -> f64 {
    let meters = Geodesic::distance(Point::new(from.lon, from.lat), Point::new(to.lon, to.lat));
    meters / METERS_PER_MILE
}

/// Navigation link from `from` to `to`.
///
/// Coordinates keep a decimal point even when integral (`35.0`, not `35`).
pub fn directions_url(from: Location, to: Location) -> String {
    format!(
        "{}/{:?},{:?}/{:?},{:?}",
        DIRECTIONS_URL_PREFIX, from.lat, from.lon, to.lat, to.lon
    )
}

fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
