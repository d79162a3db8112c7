use axum::{extract::State, response::Response};
use hello_core::Envelope;

use super::json_response;
use crate::{error::AppError, state::AppState};

/// `GET /quotes/random`
pub async fn random_quote(State(state): State<AppState>) -> Result<Response, AppError> {
    json_response(&Envelope::success(state.quotes.pick_random()))
}
