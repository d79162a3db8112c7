//! Access logging around route handlers.
//!
//! [`LoggingLayer`] decorates any tower service (an axum route, in practice):
//! it logs the request line, runs the inner service, captures the response
//! status and logs it together with the elapsed time.
//!
//! If the inner handler panics, the panic unwinds through the decorator and
//! the trailing `Response:` line is not emitted. The same holds when the
//! request future is dropped before completion.

use axum::{
    extract::Request,
    http::{Method, StatusCode},
    response::Response,
};
use futures_util::future::BoxFuture;
use std::{
    fmt::Debug,
    sync::{Arc, Mutex},
    task::{Context, Poll},
    time::{Duration, Instant},
};
use tower::{Layer, Service};

use super::capture::CapturedResponse;

/// Sink for access log events.
pub trait AccessLog: Send + Sync + Debug {
    fn request_started(&self, method: &Method, path: &str);

    fn request_finished(&self, method: &Method, path: &str, status: StatusCode, elapsed: Duration);
}

/// Writes access log lines through `tracing` at INFO.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingAccessLog;

impl AccessLog for TracingAccessLog {
    fn request_started(&self, method: &Method, path: &str) {
        tracing::info!(%method, path, "Request: {method} {path}");
    }

    fn request_finished(&self, method: &Method, path: &str, status: StatusCode, elapsed: Duration) {
        tracing::info!(
            %method,
            path,
            status = status.as_u16(),
            elapsed_ms = elapsed.as_secs_f64() * 1000.0,
            "Response: {method} {path} - Status: {} - Duration: {elapsed:?}",
            status.as_u16(),
        );
    }
}

/// One access log event, as kept by [`MemoryAccessLog`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccessRecord {
    Started { method: Method, path: String },
    Finished { method: Method, path: String, status: StatusCode },
}

/// In-memory access log for tests.
#[derive(Debug, Default)]
pub struct MemoryAccessLog {
    records: Mutex<Vec<AccessRecord>>,
}

impl MemoryAccessLog {
    pub fn records(&self) -> Vec<AccessRecord> {
        self.records.lock().map(|records| records.clone()).unwrap_or_default()
    }

    fn push(&self, record: AccessRecord) {
        if let Ok(mut records) = self.records.lock() {
            records.push(record);
        }
    }
}

impl AccessLog for MemoryAccessLog {
    fn request_started(&self, method: &Method, path: &str) {
        self.push(AccessRecord::Started { method: method.clone(), path: path.to_string() });
    }

    fn request_finished(&self, method: &Method, path: &str, status: StatusCode, _elapsed: Duration) {
        self.push(AccessRecord::Finished {
            method: method.clone(),
            path: path.to_string(),
            status,
        });
    }
}

#[derive(Debug, Clone)]
pub struct LoggingLayer {
    log: Arc<dyn AccessLog>,
}

impl LoggingLayer {
    pub fn new(log: Arc<dyn AccessLog>) -> Self {
        Self { log }
    }
}

impl<S> Layer<S> for LoggingLayer {
    type Service = Logging<S>;

    fn layer(&self, inner: S) -> Self::Service {
        Logging { inner, log: Arc::clone(&self.log) }
    }
}

#[derive(Debug, Clone)]
pub struct Logging<S> {
    inner: S,
    log: Arc<dyn AccessLog>,
}

impl<S> Service<Request> for Logging<S>
where
    S: Service<Request, Response = Response> + Send + 'static,
    S::Future: Send + 'static,
    S::Error: Send + 'static,
{
    type Response = Response;
    type Error = S::Error;
    type Future = BoxFuture<'static, Result<Response, S::Error>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, request: Request) -> Self::Future {
        let start = Instant::now();
        let mut captured = CapturedResponse::new();
        let method = request.method().clone();
        let path = request.uri().path().to_string();
        let log = Arc::clone(&self.log);

        log.request_started(&method, &path);
        let pending = self.inner.call(request);

        Box::pin(async move {
            let response = captured.capture(pending.await?);
            log.request_finished(&method, &path, captured.status(), start.elapsed());
            Ok(response)
        })
    }
}
