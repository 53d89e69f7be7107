//! Lookups against a mock OpenWeatherMap server.

use std::sync::Arc;

use weather_core::{
    Category, OpenWeatherConfig, WeatherError, WeatherProvider, WeatherQuery, WeatherService,
    provider::{ProviderError, openweather::OpenWeatherProvider},
};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path, query_param},
};

fn current_body(name: &str) -> serde_json::Value {
    serde_json::json!({
        "coord": {"lon": 105.8412, "lat": 21.0245},
        "weather": [{"id": 801, "main": "Clouds", "description": "few clouds", "icon": "02d"}],
        "main": {"temp": 27.6, "feels_like": 30.2, "humidity": 78, "pressure": 1010},
        "visibility": 8000,
        "wind": {"speed": 2.5, "deg": 120},
        "sys": {"country": "VN"},
        "name": name,
        "cod": 200
    })
}

fn forecast_body() -> serde_json::Value {
    // 2024-01-15T00:00:00Z onwards, every 6 hours for seven days.
    let list: Vec<_> = (0..28)
        .map(|i| {
            serde_json::json!({
                "dt": 1_705_276_800_i64 + i * 6 * 3600,
                "main": {"temp": 20.0 + (i % 4) as f64},
                "weather": [{"id": 500, "main": "Rain", "description": "light rain"}]
            })
        })
        .collect();
    serde_json::json!({"cod": "200", "cnt": list.len(), "list": list})
}

fn service_for(server: &MockServer, api_key: Option<&str>) -> WeatherService {
    let config = OpenWeatherConfig {
        api_key: api_key.map(str::to_owned),
        base_url: server.uri(),
        timeout_secs: 5,
        ..Default::default()
    };
    let provider = OpenWeatherProvider::new(&config).expect("client should build");
    WeatherService::new(Arc::new(provider))
}

async fn mount(server: &MockServer, endpoint: &str, response: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path(format!("/{endpoint}")))
        .respond_with(response)
        .mount(server)
        .await;
}

#[tokio::test]
async fn city_lookup_sends_normalized_name() {
    let server = MockServer::start().await;

    for endpoint in ["/weather", "/forecast"] {
        let body = if endpoint == "/weather" { current_body("Da Nang") } else { forecast_body() };
        Mock::given(method("GET"))
            .and(path(endpoint))
            .and(query_param("q", "da nang"))
            .and(query_param("appid", "TEST_KEY"))
            .and(query_param("units", "metric"))
            .and(query_param("lang", "vi"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .expect(1)
            .mount(&server)
            .await;
    }

    let report = service_for(&server, Some("TEST_KEY"))
        .lookup(&WeatherQuery::City("Đà Nẵng".into()))
        .await
        .expect("lookup should succeed");

    assert_eq!(report.current.city, "Da Nang");
    assert_eq!(report.current.country, "VN");
    assert_eq!(report.current.temperature_c, 28);
    assert_eq!(report.current.wind_speed_kmh, 9);
    assert_eq!(report.current.visibility_km, 8);
    assert_eq!(report.current.description, "ít mây");
    assert_eq!(report.current.condition, Category::Cloudy);

    assert_eq!(report.forecast.len(), 5);
    assert_eq!(report.forecast[0].date, "15/01");
    assert_eq!(report.forecast[0].day_name, "Thứ Hai");
    assert_eq!(report.forecast[0].high, 23);
    assert_eq!(report.forecast[0].low, 20);
    assert_eq!(report.forecast[0].condition, Category::Rainy);
    assert_eq!(report.forecast[4].date, "19/01");
}

#[tokio::test]
async fn coordinate_lookup_relabels_known_city() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/weather"))
        .and(query_param("lat", "21.03"))
        .and(query_param("lon", "105.85"))
        .respond_with(ResponseTemplate::new(200).set_body_json(current_body("Thanh Pho Ha Noi")))
        .mount(&server)
        .await;
    mount(&server, "forecast", ResponseTemplate::new(200).set_body_json(forecast_body())).await;

    let report = service_for(&server, Some("TEST_KEY"))
        .lookup(&WeatherQuery::Coordinates { lat: 21.03, lon: 105.85 })
        .await
        .expect("lookup should succeed");

    assert_eq!(report.current.city, "Hà Nội");
}

#[tokio::test]
async fn current_404_maps_to_not_found() {
    let server = MockServer::start().await;
    mount(
        &server,
        "weather",
        ResponseTemplate::new(404)
            .set_body_json(serde_json::json!({"cod": "404", "message": "city not found"})),
    )
    .await;
    mount(&server, "forecast", ResponseTemplate::new(404)).await;

    let err = service_for(&server, Some("TEST_KEY"))
        .lookup(&WeatherQuery::City("Atlantis".into()))
        .await
        .unwrap_err();

    assert!(matches!(err, WeatherError::NotFound { .. }));
    assert!(err.to_string().contains("Atlantis"));
}

#[tokio::test]
async fn server_error_maps_to_upstream() {
    let server = MockServer::start().await;
    mount(&server, "weather", ResponseTemplate::new(200).set_body_json(current_body("London")))
        .await;
    mount(&server, "forecast", ResponseTemplate::new(503).set_body_string("maintenance")).await;

    let err = service_for(&server, Some("TEST_KEY"))
        .lookup(&WeatherQuery::City("London".into()))
        .await
        .unwrap_err();

    assert!(matches!(err, WeatherError::Upstream(_)));
}

#[tokio::test]
async fn malformed_json_maps_to_upstream() {
    let server = MockServer::start().await;
    mount(&server, "weather", ResponseTemplate::new(200).set_body_string("{not json")).await;
    mount(&server, "forecast", ResponseTemplate::new(200).set_body_json(forecast_body())).await;

    let err = service_for(&server, Some("TEST_KEY"))
        .lookup(&WeatherQuery::City("London".into()))
        .await
        .unwrap_err();

    assert!(matches!(err, WeatherError::Upstream(_)));
}

#[tokio::test]
async fn missing_key_makes_no_requests() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let err = service_for(&server, None)
        .lookup(&WeatherQuery::City("London".into()))
        .await
        .unwrap_err();

    assert!(matches!(err, WeatherError::Configuration(_)));
}

#[tokio::test]
async fn provider_reports_status_and_body() {
    let server = MockServer::start().await;
    mount(&server, "weather", ResponseTemplate::new(401).set_body_string("Invalid API key")).await;

    let config = OpenWeatherConfig {
        api_key: Some("BAD".into()),
        base_url: server.uri(),
        ..Default::default()
    };
    let provider = OpenWeatherProvider::new(&config).expect("client should build");
    let err = provider
        .current(&WeatherQuery::City("London".into()))
        .await
        .unwrap_err();

    match err {
        ProviderError::Status { status, body } => {
            assert_eq!(status, 401);
            assert_eq!(body, "Invalid API key");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}
