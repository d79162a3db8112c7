use axum::response::Response;
use hello_core::Greeting;

use super::json_response;
use crate::error::AppError;

pub async fn hello_world() -> Result<Response, AppError> {
    json_response(&Greeting::hello_world())
}
