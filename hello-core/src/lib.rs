//! Core library for the `hello-server` HTTP service.
//!
//! This crate defines:
//! - Configuration & credentials handling
//! - The read-only quote and art catalogs
//! - Abstraction over the upstream weather provider
//! - Shared domain models and the request error taxonomy
//!
//! It has no HTTP-server dependency; `hello-server` wires it into routes.

pub mod catalog;
pub mod config;
pub mod error;
pub mod model;
pub mod provider;

pub use catalog::{Catalog, RandomSource, Sequence, ThreadRandom};
pub use config::{Config, ServerConfig, WeatherConfig};
pub use error::{ApiError, ErrorKind};
pub use model::{ArtPiece, Envelope, Greeting, Quote, WeatherQuery, WeatherReport};
pub use provider::{WeatherProvider, provider_from_config};
