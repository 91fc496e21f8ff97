//! HTTP client for the OpenWeather current-weather REST API.
//!
//! Wraps `reqwest` with typed error handling and API key management.
//! Requests always ask for metric units; no conversion happens on our
//! side.

use std::time::Duration;

use reqwest::{Client, Url};

use mapcast_core::locations::{LocationQuery, Locator};

use crate::error::OpenWeatherError;
use crate::types::CurrentWeather;

const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org/data/2.5";

/// Client for the OpenWeather REST API.
///
/// Use [`OpenWeatherClient::new`] for production or
/// [`OpenWeatherClient::with_base_url`] to point at a mock server in
/// tests.
pub struct OpenWeatherClient {
    client: Client,
    api_key: String,
    endpoint: Url,
}

impl OpenWeatherClient {
    /// Creates a new client pointed at the production OpenWeather API.
    ///
    /// # Errors
    ///
    /// Returns [`OpenWeatherError::Http`] if the underlying
    /// `reqwest::Client` cannot be constructed.
    pub fn new(api_key: &str, timeout_secs: u64) -> Result<Self, OpenWeatherError> {
        Self::with_base_url(api_key, timeout_secs, DEFAULT_BASE_URL)
    }

    /// Creates a new client with a custom base URL (for testing with
    /// wiremock, or self-hosted proxies).
    ///
    /// # Errors
    ///
    /// Returns [`OpenWeatherError::Http`] if the underlying
    /// `reqwest::Client` cannot be constructed, or
    /// [`OpenWeatherError::BaseUrl`] if `base_url` is not a valid URL.
    pub fn with_base_url(
        api_key: &str,
        timeout_secs: u64,
        base_url: &str,
    ) -> Result<Self, OpenWeatherError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent("mapcast/0.1 (weather-map)")
            .build()?;

        // Normalise: exactly one trailing slash so join() appends the
        // operation instead of replacing the last path segment.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let endpoint = Url::parse(&normalised)
            .and_then(|base| base.join("weather"))
            .map_err(|e| OpenWeatherError::BaseUrl {
                url: base_url.to_string(),
                reason: e.to_string(),
            })?;

        Ok(Self {
            client,
            api_key: api_key.to_owned(),
            endpoint,
        })
    }

    /// Fetches the current weather observation for one location.
    ///
    /// Returns the raw provider payload; pass it to
    /// [`crate::normalize_observation`] for the canonical record.
    ///
    /// # Errors
    ///
    /// - [`OpenWeatherError::Http`] on network failure.
    /// - [`OpenWeatherError::Api`] on a non-2xx status (including the
    ///   401 produced by a missing or invalid API key).
    /// - [`OpenWeatherError::Deserialize`] if the body is not the
    ///   expected JSON shape.
    pub async fn current_weather(
        &self,
        query: &LocationQuery,
    ) -> Result<CurrentWeather, OpenWeatherError> {
        let url = self.build_url(query);
        let response = self.client.get(url).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(OpenWeatherError::Api {
                status: status.as_u16(),
                message: provider_message(&body),
            });
        }

        serde_json::from_str(&body).map_err(|e| OpenWeatherError::Deserialize {
            // label, not URL: the URL carries the API key
            context: format!("weather({query})"),
            source: e,
        })
    }

    /// Builds the request URL with percent-encoded query parameters.
    fn build_url(&self, query: &LocationQuery) -> Url {
        let mut url = self.endpoint.clone();
        {
            let mut pairs = url.query_pairs_mut();
            match &query.locator {
                Locator::Country { country } => {
                    pairs.append_pair("q", &format!("{},{country}", query.name));
                }
                Locator::Point { lat, lon } => {
                    pairs.append_pair("lat", &lat.to_string());
                    pairs.append_pair("lon", &lon.to_string());
                }
            }
            pairs.append_pair("units", "metric");
            pairs.append_pair("appid", &self.api_key);
        }
        url
    }
}

/// Pulls the human-readable `message` out of an error body, when there
/// is one.
fn provider_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| {
            v.get("message")
                .and_then(serde_json::Value::as_str)
                .map(ToString::to_string)
        })
        .unwrap_or_else(|| "unknown error".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_client(base_url: &str) -> OpenWeatherClient {
        OpenWeatherClient::with_base_url("test-key", 30, base_url)
            .expect("client construction should not fail")
    }

    #[test]
    fn build_url_for_city_query() {
        let client = test_client("https://api.openweathermap.org/data/2.5");
        let url = client.build_url(&LocationQuery::city("London", "GB"));
        assert_eq!(
            url.as_str(),
            "https://api.openweathermap.org/data/2.5/weather?q=London%2CGB&units=metric&appid=test-key"
        );
    }

    #[test]
    fn build_url_for_point_query() {
        let client = test_client("https://api.openweathermap.org/data/2.5/");
        let url = client.build_url(&LocationQuery::point("Reykjavik", 64.1466, -21.9426));
        assert_eq!(
            url.as_str(),
            "https://api.openweathermap.org/data/2.5/weather?lat=64.1466&lon=-21.9426&units=metric&appid=test-key"
        );
    }

    #[test]
    fn build_url_encodes_spaces() {
        let client = test_client("https://api.openweathermap.org/data/2.5");
        let url = client.build_url(&LocationQuery::city("Rio de Janeiro", "BR"));
        assert!(
            url.as_str().contains("q=Rio+de+Janeiro%2CBR"),
            "city name should be form-encoded: {url}"
        );
    }

    #[test]
    fn provider_message_falls_back_on_non_json() {
        assert_eq!(provider_message("<html>502</html>"), "unknown error");
        assert_eq!(
            provider_message(r#"{"cod":401,"message":"Invalid API key"}"#),
            "Invalid API key"
        );
    }
}
