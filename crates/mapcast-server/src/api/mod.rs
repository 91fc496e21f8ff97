mod pois;
mod weather;

use std::sync::Arc;

use axum::{
    http::{header, Method, StatusCode},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde::Serialize;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;

use mapcast_core::locations::LocationQuery;
use mapcast_foursquare::FoursquareClient;
use mapcast_openweather::OpenWeatherClient;

use crate::middleware::request_id;

/// Everything a request handler needs: the configured city list, the
/// provider clients, and the batch failure policy. Nothing here is
/// mutated across requests.
#[derive(Clone)]
pub struct AppState {
    pub cities: Arc<Vec<LocationQuery>>,
    pub weather: Arc<OpenWeatherClient>,
    pub places: Arc<FoursquareClient>,
    pub poi_radius_m: u32,
    pub poi_limit: u32,
    pub partial_results: bool,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    message: String,
}

/// An error response: a status code and a `{"message": …}` body.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    body: ErrorBody,
}

impl ApiError {
    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            body: ErrorBody {
                message: message.into(),
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        (self.status, Json(self.body)).into_response()
    }
}

#[derive(Debug, Serialize, PartialEq, Eq)]
struct HealthData {
    status: &'static str,
}

fn build_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET])
        .allow_headers([header::CONTENT_TYPE])
}

pub fn build_app(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(health))
        .route("/api/weather", get(weather::list_weather))
        .route("/api/pois", get(pois::list_pois))
        .layer(
            ServiceBuilder::new()
                .layer(build_cors())
                .layer(axum::middleware::from_fn(request_id)),
        )
        .with_state(state)
}

async fn health() -> Json<HealthData> {
    Json(HealthData { status: "ok" })
}
