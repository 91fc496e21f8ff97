use axum::{
    extract::{Query, State},
    Extension, Json,
};
use serde::{Deserialize, Serialize};

use mapcast_core::records::PoiRecord;
use mapcast_foursquare::normalize_place;
use mapcast_markers::{poi_style, Style};

use crate::middleware::RequestId;

use super::{ApiError, AppState};

// Central London, matching the map widget's default center.
const DEFAULT_LAT: f64 = 51.5074;
const DEFAULT_LNG: f64 = -0.1278;

#[derive(Debug, Deserialize)]
pub(super) struct PoiParams {
    lat: Option<f64>,
    lng: Option<f64>,
}

/// One POI marker: the canonical record plus its category styling.
#[derive(Debug, Serialize)]
pub(super) struct PoiItem {
    #[serde(flatten)]
    record: PoiRecord,
    marker: Style,
}

impl PoiItem {
    fn from_record(record: PoiRecord) -> Self {
        let marker = poi_style(&record.category);
        Self { record, marker }
    }
}

pub(super) async fn list_pois(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Query(params): Query<PoiParams>,
) -> Result<Json<Vec<PoiItem>>, ApiError> {
    let lat = params.lat.unwrap_or(DEFAULT_LAT);
    let lng = params.lng.unwrap_or(DEFAULT_LNG);

    let places = state
        .places
        .search(lat, lng, state.poi_radius_m, state.poi_limit)
        .await
        .map_err(|error| {
            tracing::error!(request_id = %req_id.0, error = %error, "poi search failed");
            ApiError::internal("Failed to fetch points of interest")
        })?;

    let mut items = Vec::with_capacity(places.len());
    for place in &places {
        match normalize_place(place) {
            Ok(record) => items.push(PoiItem::from_record(record)),
            Err(error) if state.partial_results => {
                tracing::warn!(request_id = %req_id.0, error = %error, "dropping malformed place");
            }
            Err(error) => {
                tracing::error!(request_id = %req_id.0, error = %error, "poi normalization failed");
                return Err(ApiError::internal("Failed to fetch points of interest"));
            }
        }
    }

    Ok(Json(items))
}
