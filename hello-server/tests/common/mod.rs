//! Shared utilities for the router integration tests.

#![allow(dead_code)]

use async_trait::async_trait;
use axum::{
    Router,
    body::{Body, Bytes},
    http::{HeaderMap, Request, StatusCode},
};
use hello_core::{
    ApiError, Sequence, WeatherProvider, WeatherQuery, WeatherReport,
    model::{Condition, CurrentConditions, WeatherLocation},
};
use hello_server::{
    AppState, build_router,
    middleware::{AccessLog, MemoryAccessLog},
};
use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};
use tower::ServiceExt;

/// Weather provider double that counts calls and answers with a canned report.
#[derive(Debug, Default)]
pub struct CountingProvider {
    calls: AtomicUsize,
}

impl CountingProvider {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl WeatherProvider for CountingProvider {
    async fn current(&self, query: &WeatherQuery) -> Result<WeatherReport, ApiError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(sample_report(query.city()))
    }
}

pub fn sample_report(city: &str) -> WeatherReport {
    WeatherReport {
        location: WeatherLocation {
            name: city.to_string(),
            region: "Test Region".to_string(),
            country: "Test Country".to_string(),
        },
        current: CurrentConditions {
            temp_f: 15.0,
            condition: Condition { text: "Partly cloudy".to_string() },
        },
    }
}

pub struct TestApp {
    pub router: Router,
    pub log: Arc<MemoryAccessLog>,
}

pub fn app_with_provider(weather: Arc<dyn WeatherProvider>) -> TestApp {
    let log = Arc::new(MemoryAccessLog::default());
    let state =
        AppState::new(Arc::new(Sequence::default()), weather).expect("built-in catalogs");
    let router = build_router(state, Arc::clone(&log) as Arc<dyn AccessLog>);
    TestApp { router, log }
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Bytes,
}

impl TestResponse {
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    pub fn json(&self) -> serde_json::Value {
        serde_json::from_slice(&self.body).expect("body must be JSON")
    }

    pub fn content_type(&self) -> &str {
        self.headers
            .get("content-type")
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
    }
}

pub async fn send(router: &Router, method: &str, uri: &str) -> TestResponse {
    let request = Request::builder().method(method).uri(uri).body(Body::empty()).unwrap();
    let response = router.clone().oneshot(request).await.unwrap();

    let status = response.status();
    let headers = response.headers().clone();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();

    TestResponse { status, headers, body }
}

pub async fn get(router: &Router, uri: &str) -> TestResponse {
    send(router, "GET", uri).await
}
