//! Integration tests for WeatherFetcher using wiremock.
//!
//! These tests drive the HTTP routes against a mock KMA endpoint and mock
//! proxies.

use std::time::Duration;

use gyeonggi_weather_server::locations::lookup;
use gyeonggi_weather_server::time_window::TimeWindow;
use gyeonggi_weather_server::{DataSource, RouteKind, ServiceConfig, WeatherFetcher};
use url::Url;
use wiremock::matchers::{method, path, path_regex, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const ENDPOINT: &str = "/getUltraSrtNcst";

/// Helper to build a KMA nowcast response body
fn kma_body(items: &[(&str, &str)]) -> serde_json::Value {
    let items: Vec<_> = items
        .iter()
        .map(|(category, value)| {
            serde_json::json!({
                "baseDate": "20240301",
                "baseTime": "1400",
                "category": category,
                "nx": 58,
                "ny": 121,
                "obsrValue": value
            })
        })
        .collect();

    serde_json::json!({
        "response": {
            "header": {"resultCode": "00", "resultMsg": "NORMAL_SERVICE"},
            "body": {
                "dataType": "JSON",
                "items": {"item": items},
                "pageNo": 1,
                "numOfRows": 1000,
                "totalCount": items.len()
            }
        }
    })
}

fn window() -> TimeWindow {
    TimeWindow {
        base_date: "20240301".to_string(),
        base_time: "1400".to_string(),
    }
}

fn config(server: &MockServer, routes: Vec<RouteKind>) -> ServiceConfig {
    let base_url = Url::parse(&format!("{}{}", server.uri(), ENDPOINT)).unwrap();
    ServiceConfig::new("test-key", base_url)
        .with_routes(routes)
        .with_route_timeout(Duration::from_secs(2))
}

#[tokio::test]
async fn test_direct_route_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(ENDPOINT))
        .and(query_param("serviceKey", "test-key"))
        .and(query_param("pageNo", "1"))
        .and(query_param("numOfRows", "1000"))
        .and(query_param("dataType", "JSON"))
        .and(query_param("base_date", "20240301"))
        .and(query_param("base_time", "1400"))
        .and(query_param("nx", "58"))
        .and(query_param("ny", "121"))
        .respond_with(ResponseTemplate::new(200).set_body_json(kma_body(&[
            ("T1H", "12.3"),
            ("REH", "55"),
            ("WSD", "3.1"),
            ("RN1", "0"),
            ("SKY", "1"),
            ("PTY", "0"),
        ])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let fetcher = WeatherFetcher::new(&config(&mock_server, vec![RouteKind::Direct])).unwrap();
    let outcome = fetcher.fetch(&lookup("안산시").unwrap(), &window()).await;

    assert_eq!(outcome.source, DataSource::Live);
    assert_eq!(outcome.observation.temperature, Some(12.3));
    assert_eq!(outcome.observation.humidity, Some(55));
    assert_eq!(outcome.observation.wind_speed, Some(3.1));
    assert_eq!(outcome.observation.precipitation_amount, Some(0.0));
    assert_eq!(outcome.observation.sky_code.as_deref(), Some("1"));
}

#[tokio::test]
async fn test_falls_through_to_query_wrapped_proxy() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(ENDPOINT))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/proxy/raw"))
        .respond_with(ResponseTemplate::new(200).set_body_json(kma_body(&[("T1H", "7.5")])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let routes = vec![
        RouteKind::Direct,
        RouteKind::QueryWrapped {
            prefix: format!("{}/proxy/raw?url=", mock_server.uri()),
        },
    ];
    let fetcher = WeatherFetcher::new(&config(&mock_server, routes)).unwrap();
    let outcome = fetcher.fetch(&lookup("수원시").unwrap(), &window()).await;

    assert_eq!(outcome.source, DataSource::Live);
    assert_eq!(outcome.observation.temperature, Some(7.5));
}

#[tokio::test]
async fn test_provider_error_code_falls_through_to_path_proxy() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(ENDPOINT))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "response": {"header": {"resultCode": "30", "resultMsg": "SERVICE_KEY_IS_NOT_REGISTERED_ERROR"}}
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path_regex("^/cors/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(kma_body(&[("PTY", "1")])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let routes = vec![
        RouteKind::Direct,
        RouteKind::PathPrefixed {
            prefix: format!("{}/cors/", mock_server.uri()),
        },
    ];
    let fetcher = WeatherFetcher::new(&config(&mock_server, routes)).unwrap();
    let outcome = fetcher.fetch(&lookup("성남시").unwrap(), &window()).await;

    assert_eq!(outcome.source, DataSource::Live);
    assert_eq!(outcome.observation.precipitation_code.as_deref(), Some("1"));
}

#[tokio::test]
async fn test_stops_after_first_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(ENDPOINT))
        .respond_with(ResponseTemplate::new(200).set_body_json(kma_body(&[("REH", "70")])))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/proxy/raw"))
        .respond_with(ResponseTemplate::new(200).set_body_json(kma_body(&[("REH", "10")])))
        .expect(0)
        .mount(&mock_server)
        .await;

    let routes = vec![
        RouteKind::Direct,
        RouteKind::QueryWrapped {
            prefix: format!("{}/proxy/raw?url=", mock_server.uri()),
        },
    ];
    let fetcher = WeatherFetcher::new(&config(&mock_server, routes)).unwrap();
    let outcome = fetcher.fetch(&lookup("고양시").unwrap(), &window()).await;

    assert_eq!(outcome.observation.humidity, Some(70));
}

#[tokio::test]
async fn test_malformed_and_empty_bodies_fall_back_to_synthetic() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(ENDPOINT))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("<OpenAPI_ServiceResponse><cmmMsgHeader/></OpenAPI_ServiceResponse>"),
        )
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/proxy/raw"))
        .respond_with(ResponseTemplate::new(200).set_body_json(kma_body(&[])))
        .mount(&mock_server)
        .await;

    let routes = vec![
        RouteKind::Direct,
        RouteKind::QueryWrapped {
            prefix: format!("{}/proxy/raw?url=", mock_server.uri()),
        },
    ];
    let fetcher = WeatherFetcher::new(&config(&mock_server, routes)).unwrap();
    let outcome = fetcher.fetch(&lookup("용인시").unwrap(), &window()).await;

    assert_eq!(outcome.source, DataSource::Synthetic);
    assert_eq!(outcome.observation.precipitation_amount, Some(0.0));
    assert_eq!(outcome.observation.precipitation_code.as_deref(), Some("0"));
}

#[tokio::test]
async fn test_unresponsive_route_times_out() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(ENDPOINT))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(kma_body(&[("T1H", "1.0")]))
                .set_delay(Duration::from_secs(10)),
        )
        .mount(&mock_server)
        .await;

    let config = config(&mock_server, vec![RouteKind::Direct])
        .with_route_timeout(Duration::from_millis(200));
    let fetcher = WeatherFetcher::new(&config).unwrap();

    let started = std::time::Instant::now();
    let outcome = fetcher.fetch(&lookup("부천시").unwrap(), &window()).await;

    assert_eq!(outcome.source, DataSource::Synthetic);
    assert!(started.elapsed() < Duration::from_secs(5));
}
