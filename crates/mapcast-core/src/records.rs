//! Canonical record types produced by the provider normalizers.
//!
//! These are the only shapes the rest of the system understands. Records
//! are value-like, created per request and discarded once the response is
//! sent; nothing here is shared across requests.

use serde::Serialize;

/// One normalized weather observation for a named location.
///
/// Invariants (enforced by the weather normalizer): `lat` within
/// [-90, 90], `lon` within [-180, 180], `temperature.humidity_pct`
/// within [0, 100]. Units are metric passthrough from the provider.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherRecord {
    pub id: i64,
    pub name: String,
    pub lat: f64,
    pub lon: f64,
    pub condition: Condition,
    pub temperature: Temperature,
    pub wind_speed_ms: f64,
}

/// The observed condition group, free-text description, and provider
/// icon code. The icon code's trailing character carries the day/night
/// flag consumed by marker styling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Condition {
    pub main: String,
    pub description: String,
    pub icon_code: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Temperature {
    pub current_c: f64,
    pub feels_like_c: f64,
    pub humidity_pct: u8,
}

/// One normalized point of interest near the queried coordinate.
///
/// `id` is the provider-assigned identifier, preserved verbatim — it is
/// the stable rendering key downstream. Optional fields are omitted from
/// the serialized form when absent.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PoiRecord {
    pub id: String,
    pub name: String,
    pub lat: f64,
    pub lon: f64,
    pub category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// Whether a latitude in degrees is within [-90, 90].
#[must_use]
pub fn latitude_in_range(deg: f64) -> bool {
    (-90.0..=90.0).contains(&deg)
}

/// Whether a longitude in degrees is within [-180, 180].
#[must_use]
pub fn longitude_in_range(deg: f64) -> bool {
    (-180.0..=180.0).contains(&deg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weather_record_serializes_camel_case() {
        let record = WeatherRecord {
            id: 2_643_743,
            name: "London".to_string(),
            lat: 51.5085,
            lon: -0.1257,
            condition: Condition {
                main: "Clouds".to_string(),
                description: "overcast clouds".to_string(),
                icon_code: "04d".to_string(),
            },
            temperature: Temperature {
                current_c: 12.3,
                feels_like_c: 11.7,
                humidity_pct: 81,
            },
            wind_speed_ms: 4.6,
        };
        let json = serde_json::to_value(&record).expect("serialize WeatherRecord");
        assert_eq!(json["condition"]["iconCode"], "04d");
        assert_eq!(json["temperature"]["currentC"], 12.3);
        assert_eq!(json["temperature"]["feelsLikeC"], 11.7);
        assert_eq!(json["temperature"]["humidityPct"], 81);
        assert_eq!(json["windSpeedMs"], 4.6);
    }

    #[test]
    fn poi_record_omits_absent_optional_fields() {
        let record = PoiRecord {
            id: "4b3a9f2c".to_string(),
            name: "Borough Market".to_string(),
            lat: 51.5055,
            lon: -0.0754,
            category: "Market".to_string(),
            description: None,
            address: None,
            rating: None,
            image_url: None,
        };
        let json = serde_json::to_value(&record).expect("serialize PoiRecord");
        let obj = json.as_object().expect("object");
        assert!(!obj.contains_key("description"));
        assert!(!obj.contains_key("address"));
        assert!(!obj.contains_key("rating"));
        assert!(!obj.contains_key("imageUrl"));
    }

    #[test]
    fn poi_record_serializes_image_url_camel_case() {
        let record = PoiRecord {
            id: "x".to_string(),
            name: "x".to_string(),
            lat: 0.0,
            lon: 0.0,
            category: "Cafe".to_string(),
            description: None,
            address: None,
            rating: Some(8.4),
            image_url: Some("https://img.example/original/1.jpg".to_string()),
        };
        let json = serde_json::to_value(&record).expect("serialize PoiRecord");
        assert_eq!(json["imageUrl"], "https://img.example/original/1.jpg");
        assert_eq!(json["rating"], 8.4);
    }

    #[test]
    fn coordinate_range_bounds_are_inclusive() {
        assert!(latitude_in_range(90.0));
        assert!(latitude_in_range(-90.0));
        assert!(!latitude_in_range(90.01));
        assert!(longitude_in_range(180.0));
        assert!(longitude_in_range(-180.0));
        assert!(!longitude_in_range(-180.01));
    }
}
