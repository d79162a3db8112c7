use axum::response::{IntoResponse, Response};
use hello_core::ApiError;

/// Renders an [`ApiError`] as a plain-text body with the matching status.
#[derive(Debug)]
pub struct AppError(pub ApiError);

impl From<ApiError> for AppError {
    fn from(err: ApiError) -> Self {
        Self(err)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        (self.0.status_code(), self.0.to_string()).into_response()
    }
}
