//! Endpoint handlers.

use axum::{
    http::{HeaderValue, header},
    response::{IntoResponse, Response},
};
use hello_core::ApiError;
use serde::Serialize;

use crate::error::AppError;

pub mod art;
pub mod hello;
pub mod quotes;
pub mod weather;

/// Serialize `value` as an `application/json` response.
///
/// The body is fully encoded before anything is sent, so an encoding failure
/// can still be reported to the client as a 500.
pub(crate) fn json_response<T: Serialize>(value: &T) -> Result<Response, AppError> {
    let body = serde_json::to_vec(value).map_err(|err| {
        tracing::error!(error = %err, "Failed to encode response");
        ApiError::Encode(err)
    })?;

    Ok(([(header::CONTENT_TYPE, HeaderValue::from_static("application/json"))], body).into_response())
}
