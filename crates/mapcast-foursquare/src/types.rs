//! Raw Foursquare Places search payload types.
//!
//! Same policy as the weather payloads: every field optional at the serde
//! layer, required/defaulted decided in the normalizer.

use serde::Deserialize;

/// The `search` endpoint envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub results: Vec<Place>,
}

/// One place as returned by the search endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct Place {
    #[serde(default)]
    pub fsq_id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub geocodes: Option<Geocodes>,
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub location: Option<Location>,
    /// Provider rating on its native 0–10 scale, passed through verbatim.
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub photos: Vec<Photo>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Geocodes {
    #[serde(default)]
    pub main: Option<GeoPoint>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GeoPoint {
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Category {
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Location {
    #[serde(default)]
    pub formatted_address: Option<String>,
}

/// Photo URLs are assembled as `prefix + size + suffix`.
#[derive(Debug, Clone, Deserialize)]
pub struct Photo {
    #[serde(default)]
    pub prefix: Option<String>,
    #[serde(default)]
    pub suffix: Option<String>,
}
