use axum::{Router, handler::Handler, routing::get};
use std::sync::Arc;

use crate::{
    handlers::{art, hello, quotes, weather},
    middleware::{AccessLog, LoggingLayer},
    state::AppState,
};

/// Exact-path route table whose handlers are all wrapped in the logging layer.
#[derive(Debug)]
pub struct ApiRouter {
    routes: Router<AppState>,
    logging: LoggingLayer,
    paths: Vec<String>,
}

impl ApiRouter {
    pub fn new(logging: LoggingLayer) -> Self {
        Self { routes: Router::new(), logging, paths: Vec::new() }
    }

    /// Register `handler` for `GET path`, decorated with the logging layer.
    pub fn register<H, T>(mut self, path: &str, handler: H) -> Self
    where
        H: Handler<T, AppState>,
        T: 'static,
    {
        self.routes = self.routes.route(path, get(handler).layer(self.logging.clone()));
        self.paths.push(path.to_string());
        self
    }

    pub fn paths(&self) -> &[String] {
        &self.paths
    }

    pub fn into_router(self, state: AppState) -> Router {
        self.routes.with_state(state)
    }
}

/// All service endpoints, logged through `access_log`.
pub fn api_routes(access_log: Arc<dyn AccessLog>) -> ApiRouter {
    ApiRouter::new(LoggingLayer::new(access_log))
        .register("/hello_world", hello::hello_world)
        .register("/quotes/random", quotes::random_quote)
        .register("/art", art::art)
        .register("/art/text", art::art_text)
        .register("/weather", weather::weather)
}

pub fn build_router(state: AppState, access_log: Arc<dyn AccessLog>) -> Router {
    api_routes(access_log).into_router(state)
}
