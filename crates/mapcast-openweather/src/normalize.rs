//! Normalization of raw OpenWeather payloads into canonical records.

use mapcast_core::records::{
    latitude_in_range, longitude_in_range, Condition, Temperature, WeatherRecord,
};

use crate::error::OpenWeatherError;
use crate::types::CurrentWeather;

/// Converts a raw provider payload into a [`WeatherRecord`].
///
/// Required fields are checked one by one; a missing one is a contract
/// violation of the provider, not something to paper over with zeroes.
/// Units are copied verbatim (the provider already supplies metric).
///
/// # Errors
///
/// - [`OpenWeatherError::MissingField`] when a required field is absent
///   (including an empty `weather` condition list).
/// - [`OpenWeatherError::Invalid`] when a coordinate or the humidity is
///   out of range.
pub fn normalize_observation(raw: &CurrentWeather) -> Result<WeatherRecord, OpenWeatherError> {
    use OpenWeatherError::{Invalid, MissingField};

    let id = raw.id.ok_or(MissingField("id"))?;
    let name = raw.name.clone().ok_or(MissingField("name"))?;

    let coord = raw.coord.as_ref().ok_or(MissingField("coord"))?;
    let lat = coord.lat.ok_or(MissingField("coord.lat"))?;
    let lon = coord.lon.ok_or(MissingField("coord.lon"))?;
    if !latitude_in_range(lat) || !longitude_in_range(lon) {
        return Err(Invalid(format!("coordinate out of range: ({lat}, {lon})")));
    }

    let entry = raw.weather.first().ok_or(MissingField("weather[0]"))?;
    let condition = Condition {
        main: entry.main.clone().ok_or(MissingField("weather[0].main"))?,
        description: entry
            .description
            .clone()
            .ok_or(MissingField("weather[0].description"))?,
        icon_code: entry.icon.clone().ok_or(MissingField("weather[0].icon"))?,
    };

    let readings = raw.main.as_ref().ok_or(MissingField("main"))?;
    let current_c = readings.temp.ok_or(MissingField("main.temp"))?;
    let feels_like_c = readings.feels_like.ok_or(MissingField("main.feels_like"))?;
    let humidity_raw = readings.humidity.ok_or(MissingField("main.humidity"))?;
    let humidity_pct = u8::try_from(humidity_raw)
        .ok()
        .filter(|pct| *pct <= 100)
        .ok_or_else(|| Invalid(format!("humidity out of range: {humidity_raw}")))?;

    let wind_speed_ms = raw
        .wind
        .as_ref()
        .and_then(|w| w.speed)
        .ok_or(MissingField("wind.speed"))?;

    Ok(WeatherRecord {
        id,
        name,
        lat,
        lon,
        condition,
        temperature: Temperature {
            current_c,
            feels_like_c,
            humidity_pct,
        },
        wind_speed_ms,
    })
}
