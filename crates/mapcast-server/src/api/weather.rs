use std::sync::Arc;

use axum::{extract::State, Extension, Json};
use serde::Serialize;

use mapcast_aggregate::{fetch_ordered, fetch_settled};
use mapcast_core::locations::LocationQuery;
use mapcast_core::records::WeatherRecord;
use mapcast_markers::{condition_style, temp_color, Style};
use mapcast_openweather::{normalize_observation, OpenWeatherClient, OpenWeatherError};

use crate::middleware::RequestId;

use super::{ApiError, AppState};

/// One weather marker: the canonical record plus the styling the map
/// client applies to it.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct WeatherItem {
    #[serde(flatten)]
    record: WeatherRecord,
    marker: Style,
    label_color: &'static str,
}

impl WeatherItem {
    fn from_record(record: WeatherRecord) -> Self {
        let marker = condition_style(&record.condition.main, &record.condition.icon_code);
        let label_color = temp_color(record.temperature.current_c);
        Self {
            record,
            marker,
            label_color,
        }
    }
}

async fn fetch_city(
    client: Arc<OpenWeatherClient>,
    city: LocationQuery,
) -> Result<WeatherRecord, OpenWeatherError> {
    let raw = client.current_weather(&city).await?;
    normalize_observation(&raw)
}

pub(super) async fn list_weather(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> Result<Json<Vec<WeatherItem>>, ApiError> {
    let fetch = |city: LocationQuery| fetch_city(Arc::clone(&state.weather), city);

    let records: Vec<WeatherRecord> = if state.partial_results {
        let settled = fetch_settled(state.cities.as_slice(), fetch).await;
        state
            .cities
            .iter()
            .zip(settled)
            .filter_map(|(city, result)| match result {
                Ok(record) => Some(record),
                Err(error) => {
                    tracing::warn!(
                        request_id = %req_id.0,
                        city = %city,
                        error = %error,
                        "dropping failed city"
                    );
                    None
                }
            })
            .collect()
    } else {
        fetch_ordered(state.cities.as_slice(), fetch)
            .await
            .map_err(|error| {
                tracing::error!(request_id = %req_id.0, error = %error, "weather aggregation failed");
                ApiError::internal("Failed to fetch weather data")
            })?
    };

    Ok(Json(
        records.into_iter().map(WeatherItem::from_record).collect(),
    ))
}
