mod api;
mod middleware;

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use mapcast_foursquare::FoursquareClient;
use mapcast_openweather::OpenWeatherClient;

use crate::api::{build_app, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = mapcast_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let cities = if config.cities_path.exists() {
        mapcast_core::locations::load_cities(&config.cities_path)?
    } else {
        tracing::info!(
            path = %config.cities_path.display(),
            "no city file found, using the built-in list"
        );
        mapcast_core::locations::default_cities()
    };

    // Absent keys are not a startup error: the provider rejects the call
    // and that surfaces through the normal batch failure path.
    if config.openweather_api_key.is_none() {
        tracing::warn!("OPENWEATHER_API_KEY not set; weather fetches will fail");
    }
    if config.foursquare_api_key.is_none() {
        tracing::warn!("FOURSQUARE_API_KEY not set; POI searches will fail");
    }

    let weather = OpenWeatherClient::with_base_url(
        config.openweather_api_key.as_deref().unwrap_or_default(),
        config.request_timeout_secs,
        &config.openweather_base_url,
    )?;
    let places = FoursquareClient::with_base_url(
        config.foursquare_api_key.as_deref().unwrap_or_default(),
        config.request_timeout_secs,
        &config.foursquare_base_url,
    )?;

    tracing::info!(
        addr = %config.bind_addr,
        cities = cities.len(),
        partial_results = config.partial_results,
        "starting mapcast server"
    );

    let app = build_app(AppState {
        cities: Arc::new(cities),
        weather: Arc::new(weather),
        places: Arc::new(places),
        poi_radius_m: config.poi_radius_m,
        poi_limit: config.poi_limit,
        partial_results: config.partial_results,
    });

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to listen for ctrl-c");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("received shutdown signal, starting graceful shutdown");
}
