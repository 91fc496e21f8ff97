//! OpenWeather provider client and weather normalization.
//!
//! [`OpenWeatherClient`] issues one current-weather call per location and
//! returns the raw provider payload; [`normalize_observation`] converts a
//! raw payload into the canonical [`mapcast_core::records::WeatherRecord`]
//! with explicit per-field required/defaulted handling.

mod client;
mod error;
mod normalize;
mod types;

pub use client::OpenWeatherClient;
pub use error::OpenWeatherError;
pub use normalize::normalize_observation;
pub use types::{ConditionEntry, Coord, CurrentWeather, MainReadings, Wind};
