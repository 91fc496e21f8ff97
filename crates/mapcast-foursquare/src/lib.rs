//! Foursquare Places provider client and POI normalization.
//!
//! [`FoursquareClient`] issues one place search per request coordinate;
//! [`normalize_place`] converts each raw place into the canonical
//! [`mapcast_core::records::PoiRecord`].

mod client;
mod error;
mod normalize;
mod types;

pub use client::FoursquareClient;
pub use error::FoursquareError;
pub use normalize::normalize_place;
pub use types::{Category, GeoPoint, Geocodes, Location, Photo, Place, SearchResponse};
