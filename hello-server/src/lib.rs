//! HTTP service exposing a greeting, random quotes, ASCII art and a weather proxy.
//!
//! Request flow: axum matches the exact path, the [`middleware::LoggingLayer`]
//! wrapped around every route logs the request and its captured status, and
//! the handler answers from the catalogs or the upstream weather provider.

pub mod error;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod server;
pub mod state;
pub mod telemetry;

pub use router::{ApiRouter, build_router};
pub use state::AppState;
