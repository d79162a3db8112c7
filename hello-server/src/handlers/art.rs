use axum::{
    extract::State,
    response::{IntoResponse, Response},
};
use hello_core::Envelope;

use super::json_response;
use crate::{error::AppError, state::AppState};

/// `GET /art`: the art piece wrapped in the success envelope.
pub async fn art(State(state): State<AppState>) -> Result<Response, AppError> {
    json_response(&Envelope::success(state.art.get()))
}

/// `GET /art/text`: the raw art content as `text/plain; charset=utf-8`.
pub async fn art_text(State(state): State<AppState>) -> Response {
    state.art.get().content.clone().into_response()
}
