//! Raw OpenWeather current-weather payload types.
//!
//! Provider payloads are untrusted: every field is optional at the serde
//! layer so a missing field never fails deserialization. The normalizer
//! decides which fields are required and which are defaulted.

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// The `weather` endpoint payload for one location.
#[derive(Debug, Clone, Deserialize)]
pub struct CurrentWeather {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub coord: Option<Coord>,
    /// Condition list; non-empty in practice, and the normalizer treats
    /// an empty list as a malformed payload.
    #[serde(default)]
    pub weather: Vec<ConditionEntry>,
    #[serde(default)]
    pub main: Option<MainReadings>,
    #[serde(default)]
    pub wind: Option<Wind>,
    /// Observation time, unix seconds.
    #[serde(default, with = "chrono::serde::ts_seconds_option")]
    pub dt: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Coord {
    #[serde(default)]
    pub lat: Option<f64>,
    #[serde(default)]
    pub lon: Option<f64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ConditionEntry {
    #[serde(default)]
    pub main: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    /// Icon code such as `"01d"`; the trailing character is the
    /// day/night flag.
    #[serde(default)]
    pub icon: Option<String>,
}

/// Metric readings: temperatures in °C, humidity in percent.
#[derive(Debug, Clone, Deserialize)]
pub struct MainReadings {
    #[serde(default)]
    pub temp: Option<f64>,
    #[serde(default)]
    pub feels_like: Option<f64>,
    #[serde(default)]
    pub humidity: Option<i64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Wind {
    /// Wind speed in m/s.
    #[serde(default)]
    pub speed: Option<f64>,
}
