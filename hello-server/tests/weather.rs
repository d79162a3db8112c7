//! `/weather` through the full router, against a stub provider and a mocked WeatherAPI.

use axum::http::{Method, StatusCode};
use hello_core::provider::weatherapi::WeatherApiProvider;
use hello_server::middleware::AccessRecord;
use httpmock::prelude::*;
use serde_json::json;
use std::{sync::Arc, time::Duration};

mod common;

use common::{CountingProvider, app_with_provider, get};

const KEY: &str = "test-api-key";

fn weatherapi_app(api_key: Option<&str>, base_url: &str) -> common::TestApp {
    let provider = WeatherApiProvider::new(
        api_key.map(str::to_string),
        base_url,
        Duration::from_secs(10),
    )
    .expect("client builds");
    app_with_provider(Arc::new(provider))
}

async fn mock_weatherapi(server: &MockServer) {
    server
        .mock_async(|when, then| {
            when.method(GET).path("/current.json").query_param("q", "errorcity");
            then.status(500).body("{\"error\":{\"message\":\"Internal API error simulation\"}}\n");
        })
        .await;

    server
        .mock_async(|when, then| {
            when.method(GET).path("/current.json").query_param("q", "garbled");
            then.status(200).body("{\"location\":");
        })
        .await;

    server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/current.json")
                .query_param("key", KEY)
                .query_param("q", "TestCity")
                .query_param("aqi", "no");
            then.status(200).json_body(json!({
                "location": {"name": "TestCity", "region": "Test Region", "country": "Test Country"},
                "current": {"temp_f": 15.0, "condition": {"text": "Partly cloudy"}}
            }));
        })
        .await;
}

#[tokio::test]
async fn missing_city_is_rejected_before_any_outbound_call() {
    let provider = Arc::new(CountingProvider::default());
    let app = app_with_provider(provider.clone());

    let res = get(&app.router, "/weather").await;

    assert_eq!(res.status, StatusCode::BAD_REQUEST);
    assert_eq!(res.content_type(), "text/plain; charset=utf-8");
    assert!(res.text().contains("Query parameter 'city' is required"));
    assert_eq!(provider.calls(), 0);
}

#[tokio::test]
async fn empty_city_is_rejected_like_a_missing_one() {
    let provider = Arc::new(CountingProvider::default());
    let app = app_with_provider(provider.clone());

    let res = get(&app.router, "/weather?city=").await;

    assert_eq!(res.status, StatusCode::BAD_REQUEST);
    assert_eq!(provider.calls(), 0);
    assert!(app.log.records().contains(&AccessRecord::Finished {
        method: Method::GET,
        path: "/weather".into(),
        status: StatusCode::BAD_REQUEST,
    }));
}

#[tokio::test]
async fn stub_provider_is_called_once_per_request() {
    let provider = Arc::new(CountingProvider::default());
    let app = app_with_provider(provider.clone());

    let res = get(&app.router, "/weather?city=Oslo").await;

    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.json()["location"]["name"], "Oslo");
    assert_eq!(provider.calls(), 1);
}

#[tokio::test]
async fn repeated_city_uses_the_first_value() {
    let provider = Arc::new(CountingProvider::default());
    let app = app_with_provider(provider.clone());

    let res = get(&app.router, "/weather?city=Oslo&city=Bergen").await;

    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.json()["location"]["name"], "Oslo");
    assert_eq!(provider.calls(), 1);
}

#[tokio::test]
async fn unrelated_query_pairs_are_ignored() {
    let provider = Arc::new(CountingProvider::default());
    let app = app_with_provider(provider.clone());

    let res = get(&app.router, "/weather?units=f&city=Lima").await;

    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.json()["location"]["name"], "Lima");
    assert_eq!(provider.calls(), 1);
}

#[tokio::test]
async fn upstream_success_is_reshaped_and_passed_through() {
    let server = MockServer::start_async().await;
    mock_weatherapi(&server).await;
    let app = weatherapi_app(Some(KEY), &server.base_url());

    let res = get(&app.router, "/weather?city=TestCity").await;

    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.content_type(), "application/json");

    let json = res.json();
    assert_eq!(json["location"]["name"], "TestCity");
    assert_eq!(json["location"]["region"], "Test Region");
    assert_eq!(json["location"]["country"], "Test Country");
    assert_eq!(json["current"]["temp_f"], 15.0);
    assert_eq!(json["current"]["condition"]["text"], "Partly cloudy");
}

#[tokio::test]
async fn repeated_requests_give_identical_output() {
    let server = MockServer::start_async().await;
    mock_weatherapi(&server).await;
    let app = weatherapi_app(Some(KEY), &server.base_url());

    let first = get(&app.router, "/weather?city=TestCity").await;
    let second = get(&app.router, "/weather?city=TestCity").await;

    assert_eq!(first.status, StatusCode::OK);
    assert_eq!(first.body, second.body);
}

#[tokio::test]
async fn missing_api_key_is_a_500_without_outbound_call() {
    let server = MockServer::start_async().await;
    let upstream = server
        .mock_async(|when, then| {
            when.method(GET).path("/current.json");
            then.status(200).body("{}");
        })
        .await;
    let app = weatherapi_app(None, &server.base_url());

    let res = get(&app.router, "/weather?city=SomeCity").await;

    assert_eq!(res.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(res.text().contains("WeatherAPI key not configured in service"));
    assert_eq!(upstream.hits_async().await, 0);
}

#[tokio::test]
async fn upstream_error_status_becomes_500_with_details() {
    let server = MockServer::start_async().await;
    mock_weatherapi(&server).await;
    let app = weatherapi_app(Some(KEY), &server.base_url());

    let res = get(&app.router, "/weather?city=errorcity").await;

    assert_eq!(res.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(res.content_type(), "text/plain; charset=utf-8");
    assert!(res.text().contains("WeatherAPI request failed with status 500"));
    assert!(res.text().contains("Internal API error simulation"));
    assert!(app.log.records().contains(&AccessRecord::Finished {
        method: Method::GET,
        path: "/weather".into(),
        status: StatusCode::INTERNAL_SERVER_ERROR,
    }));
}

#[tokio::test]
async fn malformed_upstream_payload_is_a_parse_failure() {
    let server = MockServer::start_async().await;
    mock_weatherapi(&server).await;
    let app = weatherapi_app(Some(KEY), &server.base_url());

    let res = get(&app.router, "/weather?city=garbled").await;

    assert_eq!(res.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(res.text(), "Failed to parse weather data");
}

#[tokio::test]
async fn unreachable_upstream_is_a_fetch_failure() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    let app = weatherapi_app(Some(KEY), &format!("http://{addr}"));

    let res = get(&app.router, "/weather?city=TestCity").await;

    assert_eq!(res.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(res.text(), "Failed to fetch weather data");
    assert!(!res.text().contains(KEY));
}
