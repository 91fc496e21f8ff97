//! HTTP client for the Foursquare Places search API.
//!
//! Authenticates with the `Authorization` header (Foursquare v3 style)
//! rather than a query-string key.

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};
use reqwest::{Client, Url};

use crate::error::FoursquareError;
use crate::types::{Place, SearchResponse};

const DEFAULT_BASE_URL: &str = "https://api.foursquare.com/v3/places";

/// Client for the Foursquare Places REST API.
///
/// Use [`FoursquareClient::new`] for production or
/// [`FoursquareClient::with_base_url`] to point at a mock server in
/// tests.
pub struct FoursquareClient {
    client: Client,
    endpoint: Url,
}

impl FoursquareClient {
    /// Creates a new client pointed at the production Foursquare API.
    ///
    /// # Errors
    ///
    /// Returns [`FoursquareError::Http`] if the underlying
    /// `reqwest::Client` cannot be constructed.
    pub fn new(api_key: &str, timeout_secs: u64) -> Result<Self, FoursquareError> {
        Self::with_base_url(api_key, timeout_secs, DEFAULT_BASE_URL)
    }

    /// Creates a new client with a custom base URL (for testing with
    /// wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`FoursquareError::Http`] if the underlying
    /// `reqwest::Client` cannot be constructed, or
    /// [`FoursquareError::BaseUrl`] if `base_url` is not a valid URL.
    pub fn with_base_url(
        api_key: &str,
        timeout_secs: u64,
        base_url: &str,
    ) -> Result<Self, FoursquareError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        let mut auth = HeaderValue::from_str(api_key)
            .map_err(|e| FoursquareError::InvalidKey(e.to_string()))?;
        auth.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth);

        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent("mapcast/0.1 (weather-map)")
            .default_headers(headers)
            .build()?;

        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let endpoint = Url::parse(&normalised)
            .and_then(|base| base.join("search"))
            .map_err(|e| FoursquareError::BaseUrl {
                url: base_url.to_string(),
                reason: e.to_string(),
            })?;

        Ok(Self { client, endpoint })
    }

    /// Searches for places around a coordinate.
    ///
    /// Returns the raw provider places; pass each to
    /// [`crate::normalize_place`] for the canonical record.
    ///
    /// # Errors
    ///
    /// - [`FoursquareError::Http`] on network failure.
    /// - [`FoursquareError::Api`] on a non-2xx status (including the 401
    ///   produced by a missing or invalid API key).
    /// - [`FoursquareError::Deserialize`] if the body is not the
    ///   expected JSON shape.
    pub async fn search(
        &self,
        lat: f64,
        lng: f64,
        radius_m: u32,
        limit: u32,
    ) -> Result<Vec<Place>, FoursquareError> {
        let url = self.build_url(lat, lng, radius_m, limit);
        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(FoursquareError::Api {
                status: status.as_u16(),
                message: provider_message(&body),
            });
        }

        let envelope: SearchResponse =
            serde_json::from_str(&body).map_err(|e| FoursquareError::Deserialize {
                context: url.to_string(),
                source: e,
            })?;
        Ok(envelope.results)
    }

    /// Builds the search URL with percent-encoded query parameters.
    fn build_url(&self, lat: f64, lng: f64, radius_m: u32, limit: u32) -> Url {
        let mut url = self.endpoint.clone();
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("ll", &format!("{lat},{lng}"));
            pairs.append_pair("radius", &radius_m.to_string());
            pairs.append_pair("limit", &limit.to_string());
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
