//! Integration tests for `OpenWeatherClient` using wiremock HTTP mocks.

use mapcast_core::locations::LocationQuery;
use mapcast_openweather::{normalize_observation, OpenWeatherClient, OpenWeatherError};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_client(base_url: &str) -> OpenWeatherClient {
    OpenWeatherClient::with_base_url("test-key", 30, base_url)
        .expect("client construction should not fail")
}

fn london_body() -> serde_json::Value {
    serde_json::json!({
        "id": 2_643_743,
        "name": "London",
        "coord": { "lat": 51.5085, "lon": -0.1257 },
        "weather": [
            { "id": 800, "main": "Clear", "description": "clear sky", "icon": "01n" }
        ],
        "main": { "temp": 8.3, "feels_like": 6.9, "humidity": 71 },
        "wind": { "speed": 3.4 },
        "dt": 1_727_000_000
    })
}

#[tokio::test]
async fn current_weather_returns_parsed_payload() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/weather"))
        .and(query_param("q", "London,GB"))
        .and(query_param("units", "metric"))
        .and(query_param("appid", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(london_body()))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let raw = client
        .current_weather(&LocationQuery::city("London", "GB"))
        .await
        .expect("should parse payload");

    assert_eq!(raw.id, Some(2_643_743));
    assert_eq!(raw.name.as_deref(), Some("London"));
    assert_eq!(raw.weather.len(), 1);
    assert_eq!(raw.weather[0].icon.as_deref(), Some("01n"));
    assert!(raw.dt.is_some());

    let record = normalize_observation(&raw).expect("should normalize");
    assert_eq!(record.condition.icon_code, "01n");
    assert_eq!(record.temperature.humidity_pct, 71);
}

#[tokio::test]
async fn point_queries_send_coordinates() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/weather"))
        .and(query_param("lat", "64.1466"))
        .and(query_param("lon", "-21.9426"))
        .and(query_param("units", "metric"))
        .respond_with(ResponseTemplate::new(200).set_body_json(london_body()))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let result = client
        .current_weather(&LocationQuery::point("Reykjavik", 64.1466, -21.9426))
        .await;
    assert!(result.is_ok(), "expected Ok, got: {result:?}");
}

#[tokio::test]
async fn unauthorized_surfaces_provider_message() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/weather"))
        .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
            "cod": 401,
            "message": "Invalid API key"
        })))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let result = client
        .current_weather(&LocationQuery::city("London", "GB"))
        .await;

    match result {
        Err(OpenWeatherError::Api { status, message }) => {
            assert_eq!(status, 401);
            assert_eq!(message, "Invalid API key");
        }
        other => panic!("expected Api error, got: {other:?}"),
    }
}

#[tokio::test]
async fn non_json_body_is_a_deserialize_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/weather"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let result = client
        .current_weather(&LocationQuery::city("London", "GB"))
        .await;

    assert!(
        matches!(result, Err(OpenWeatherError::Deserialize { .. })),
        "expected Deserialize error, got: {result:?}"
    );
}
