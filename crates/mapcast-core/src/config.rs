use crate::app_config::AppConfig;
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value fails to parse. Provider API keys are
/// deliberately not required — an absent key surfaces later as a
/// provider-call failure, not a startup error.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the
/// process, without touching `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a value fails to parse.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup
/// function. Decoupled from the real environment so tests can drive it with
/// a plain `HashMap` lookup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::net::SocketAddr;
    use std::path::PathBuf;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_addr = |var: &str, default: &str| -> Result<SocketAddr, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let parse_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u32>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_bool = |var: &str, default: bool| -> Result<bool, ConfigError> {
        match lookup(var) {
            Err(_) => Ok(default),
            Ok(raw) => match raw.to_lowercase().as_str() {
                "true" | "1" | "yes" => Ok(true),
                "false" | "0" | "no" => Ok(false),
                other => Err(ConfigError::InvalidEnvVar {
                    var: var.to_string(),
                    reason: format!("expected a boolean, got '{other}'"),
                }),
            },
        }
    };

    let bind_addr = parse_addr("MAPCAST_BIND_ADDR", "0.0.0.0:5000")?;
    let log_level = or_default("MAPCAST_LOG_LEVEL", "info");
    let openweather_api_key = lookup("OPENWEATHER_API_KEY").ok();
    let foursquare_api_key = lookup("FOURSQUARE_API_KEY").ok();
    let openweather_base_url = or_default(
        "MAPCAST_OPENWEATHER_BASE_URL",
        "https://api.openweathermap.org/data/2.5",
    );
    let foursquare_base_url = or_default(
        "MAPCAST_FOURSQUARE_BASE_URL",
        "https://api.foursquare.com/v3/places",
    );
    let cities_path = PathBuf::from(or_default("MAPCAST_CITIES_PATH", "./config/cities.yaml"));
    let request_timeout_secs = parse_u64("MAPCAST_REQUEST_TIMEOUT_SECS", "30")?;
    let poi_radius_m = parse_u32("MAPCAST_POI_RADIUS_M", "1000")?;
    let poi_limit = parse_u32("MAPCAST_POI_LIMIT", "20")?;
    let partial_results = parse_bool("MAPCAST_PARTIAL_RESULTS", false)?;

    Ok(AppConfig {
        bind_addr,
        log_level,
        openweather_api_key,
        foursquare_api_key,
        openweather_base_url,
        foursquare_base_url,
        cities_path,
        request_timeout_secs,
        poi_radius_m,
        poi_limit,
        partial_results,
    })
}
