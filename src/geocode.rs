//! Free-text place name to coordinates, via a Nominatim-compatible service.

use serde_json::Value;

use crate::error_handling::{categorize_reqwest_error, LookupError, Upstream};
use crate::models::Location;

/// Resolves place names against a Nominatim `/search` endpoint.
#[derive(Debug, Clone)]
pub struct Geocoder {
    client: reqwest::Client,
    endpoint: String,
}

impl Geocoder {
    /// Creates a geocoder. The client's timeout bounds every lookup.
    pub fn new(client: reqwest::Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }

    /// Looks up `query` and returns the best match.
    ///
    /// Issues a single `GET <endpoint>?q=<query>&format=json&limit=1`.
    ///
    /// # Errors
    ///
    /// Any transport failure, timeout, non-success status, malformed body,
    /// empty match list or invalid coordinate pair is returned as a
    /// `LookupError`. Callers treat all of them alike.
    pub async fn locate(&self, query: &str) -> Result<Location, LookupError> {
        let response = self
            .client
            .get(&self.endpoint)
            .query(&[("q", query), ("format", "json"), ("limit", "1")])
            .send()
            .await
            .map_err(|e| categorize_reqwest_error(Upstream::Geocoder, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(LookupError::Status {
                service: Upstream::Geocoder,
                status: status.as_u16(),
            });
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| categorize_reqwest_error(Upstream::Geocoder, e))?;

        json_to_location(query, &body)
    }
}

/// Extracts the first match's coordinates from a Nominatim JSON response.
///
/// Nominatim encodes `lat`/`lon` as decimal strings; plain numbers are
/// accepted too.
fn json_to_location(query: &str, body: &Value) -> Result<Location, LookupError> {
    let matches = body.as_array().ok_or_else(|| LookupError::Decode {
        service: Upstream::Geocoder,
        reason: "expected a JSON array of matches".to_string(),
    })?;

    let first = matches.first().ok_or_else(|| LookupError::NoMatch {
        query: query.to_string(),
    })?;

    let lat = coordinate(first, "lat")?;
    let lon = coordinate(first, "lon")?;

    Location::new(lat, lon).ok_or_else(|| LookupError::InvalidCoordinates {
        lat: lat.to_string(),
        lon: lon.to_string(),
    })
}

fn coordinate(place: &Value, key: &str) -> Result<f64, LookupError> {
    let value = &place[key];
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    parsed.ok_or_else(|| LookupError::Decode {
        service: Upstream::Geocoder,
        reason: format!("match has no usable '{}' field (got {})", key, value),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error_handling::ErrorType;

    #[test]
    fn json_to_location_valid() {
        let json_response = r#"
[
  {
    "place_id": 297337326,
    "licence": "Data © OpenStreetMap contributors, ODbL 1.0. http://osm.org/copyright",
    "osm_type": "relation",
    "osm_id": 177415,
    "lat": "35.2272086",
    "lon": "-80.8430827",
    "class": "boundary",
    "type": "administrative",
    "place_rank": 16,
    "importance": 0.7117,
    "addresstype": "city",
    "name": "Charlotte",
    "display_name": "Charlotte, Mecklenburg County, North Carolina, United States",
    "boundingbox": ["35.0132036", "35.3931988", "-81.0095314", "-80.6502146"]
  }
]
"#;
        let des: Value = serde_json::from_str(json_response).unwrap();

        let location = json_to_location("Charlotte", &des).unwrap();

        assert_eq!(location.lat, 35.2272086);
        assert_eq!(location.lon, -80.8430827);
    }

    #[test]
    fn json_to_location_numeric_coordinates() {
        let des = serde_json::json!([{"lat": 51.5, "lon": -0.12}]);
        let location = json_to_location("London", &des).unwrap();
        assert_eq!((location.lat, location.lon), (51.5, -0.12));
    }

    #[test]
    fn json_to_location_empty_array() {
        let des = serde_json::json!([]);
        let err = json_to_location("Nowhere", &des).unwrap_err();
        assert_eq!(err.error_type(), ErrorType::NoMatch);
    }

    #[test]
    fn json_to_location_not_an_array() {
        let des = serde_json::json!({"error": "Unable to geocode"});
        let err = json_to_location("x", &des).unwrap_err();
        assert_eq!(err.error_type(), ErrorType::HttpRequestDecodeError);
    }

    #[test]
    fn json_to_location_missing_lon() {
        let des = serde_json::json!([{"lat": "10.0"}]);
        let err = json_to_location("x", &des).unwrap_err();
        assert_eq!(err.error_type(), ErrorType::HttpRequestDecodeError);
        assert!(err.to_string().contains("'lon'"));
    }

    #[test]
    fn json_to_location_unparsable_lat() {
        let des = serde_json::json!([{"lat": "north", "lon": "10.0"}]);
        assert!(json_to_location("x", &des).is_err());
    }

    #[test]
    fn json_to_location_out_of_range() {
        let des = serde_json::json!([{"lat": "123.0", "lon": "10.0"}]);
        let err = json_to_location("x", &des).unwrap_err();
        assert_eq!(err.error_type(), ErrorType::InvalidCoordinates);
    }
}
