//! The configured set of locations to fetch weather for.
//!
//! The list lives in a YAML file (see `MAPCAST_CITIES_PATH`) so deployments
//! can change coverage without a rebuild; [`default_cities`] supplies the
//! stock list when no file is present.

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::records::{latitude_in_range, longitude_in_range};
use crate::ConfigError;

/// How a location is addressed at the provider: by country code alongside
/// the name, or by explicit coordinate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Locator {
    Country { country: String },
    Point { lat: f64, lon: f64 },
}

/// Input unit for one weather fetch. Identity is the tuple itself; the
/// provider assigns ids only after a successful fetch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationQuery {
    pub name: String,
    #[serde(flatten)]
    pub locator: Locator,
}

impl LocationQuery {
    #[must_use]
    pub fn city(name: &str, country: &str) -> Self {
        Self {
            name: name.to_string(),
            locator: Locator::Country {
                country: country.to_string(),
            },
        }
    }

    #[must_use]
    pub fn point(name: &str, lat: f64, lon: f64) -> Self {
        Self {
            name: name.to_string(),
            locator: Locator::Point { lat, lon },
        }
    }
}

impl fmt::Display for LocationQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.locator {
            Locator::Country { country } => write!(f, "{},{country}", self.name),
            Locator::Point { lat, lon } => write!(f, "{}@{lat},{lon}", self.name),
        }
    }
}

#[derive(Debug, Deserialize)]
struct CitiesFile {
    cities: Vec<LocationQuery>,
}

/// Parses and validates a city list from YAML text.
///
/// # Errors
///
/// Returns [`ConfigError::CityFileParse`] when the YAML does not match the
/// expected shape and [`ConfigError::InvalidCityList`] when the parsed list
/// is empty or an entry fails validation.
pub fn parse_cities(yaml: &str) -> Result<Vec<LocationQuery>, ConfigError> {
    let file: CitiesFile =
        serde_yaml::from_str(yaml).map_err(|source| ConfigError::CityFileParse {
            path: "<inline>".to_string(),
            source,
        })?;
    validate_cities(&file.cities)?;
    Ok(file.cities)
}

/// Loads and validates the city list from `path`.
///
/// # Errors
///
/// Returns [`ConfigError::CityFileRead`] when the file cannot be read,
/// [`ConfigError::CityFileParse`] on malformed YAML, and
/// [`ConfigError::InvalidCityList`] when validation fails.
pub fn load_cities(path: &Path) -> Result<Vec<LocationQuery>, ConfigError> {
    let text = std::fs::read_to_string(path).map_err(|source| ConfigError::CityFileRead {
        path: path.display().to_string(),
        source,
    })?;
    let file: CitiesFile =
        serde_yaml::from_str(&text).map_err(|source| ConfigError::CityFileParse {
            path: path.display().to_string(),
            source,
        })?;
    validate_cities(&file.cities)?;
    Ok(file.cities)
}

fn validate_cities(cities: &[LocationQuery]) -> Result<(), ConfigError> {
    if cities.is_empty() {
        return Err(ConfigError::InvalidCityList(
            "at least one city is required".to_string(),
        ));
    }
    for city in cities {
        if city.name.trim().is_empty() {
            return Err(ConfigError::InvalidCityList(
                "city entry with empty name".to_string(),
            ));
        }
        match &city.locator {
            Locator::Country { country } => {
                if country.trim().is_empty() {
                    return Err(ConfigError::InvalidCityList(format!(
                        "city '{}' has an empty country code",
                        city.name
                    )));
                }
            }
            Locator::Point { lat, lon } => {
                if !latitude_in_range(*lat) || !longitude_in_range(*lon) {
                    return Err(ConfigError::InvalidCityList(format!(
                        "city '{}' has an out-of-range coordinate ({lat}, {lon})",
                        city.name
                    )));
                }
            }
        }
    }
    Ok(())
}

/// The stock city list used when no city file is configured.
#[must_use]
pub fn default_cities() -> Vec<LocationQuery> {
    [
        ("New York", "US"),
        ("Los Angeles", "US"),
        ("Chicago", "US"),
        ("Miami", "US"),
        ("Seattle", "US"),
        ("Denver", "US"),
        ("London", "GB"),
        ("Paris", "FR"),
        ("Tokyo", "JP"),
        ("Sydney", "AU"),
        ("Cairo", "EG"),
        ("Rio de Janeiro", "BR"),
    ]
    .iter()
    .map(|(name, country)| LocationQuery::city(name, country))
    .collect()
}

#[cfg(test)]
#[path = "locations_test.rs"]
mod tests;
