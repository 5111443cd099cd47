//! shop_finder library: nearby shop search over OpenStreetMap services
//!
//! A search resolves a free-text place name through a Nominatim-compatible
//! geocoder, asks an Overpass-compatible interpreter for `shop` nodes within
//! 5 km, and returns the ten nearest by geodesic distance, each with a
//! directions link.
//!
//! # Example
//!
//! ```no_run
//! use shop_finder::{Config, ShopFinder};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let finder = ShopFinder::from_config(&Config::default())?;
//!
//! let response = finder.search(Some("bread"), Some("Charlotte")).await?;
//! for shop in &response.shops {
//!     println!("{:>6.2} mi  {}", shop.distance_miles, shop.name);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime.

#![warn(missing_docs)]

pub mod config;
pub mod error_handling;
pub mod geocode;
pub mod initialization;
pub mod models;
pub mod ranking;
mod search;
mod server;
pub mod shops;

// Re-export public API
pub use config::{Config, LogFormat, LogLevel};
pub use error_handling::{LookupError, SearchError};
pub use models::{Location, RankedShop, SearchResponse, ShopRecord};
pub use search::ShopFinder;
pub use server::{build_router, run_server, serve, AppState};
