//! Shared domain types and configuration for the mapcast workspace.
//!
//! Holds the canonical record shapes every downstream consumer depends on
//! ([`records::WeatherRecord`], [`records::PoiRecord`]), the
//! [`locations::LocationQuery`] input unit, and env/YAML configuration
//! loading.

mod app_config;
mod config;
pub mod locations;
pub mod records;

use thiserror::Error;

pub use app_config::AppConfig;
pub use config::{load_app_config, load_app_config_from_env};

/// Errors produced while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read city list {path}: {source}")]
    CityFileRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse city list {path}: {source}")]
    CityFileParse {
        path: String,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("invalid city list: {0}")]
    InvalidCityList(String),
}
