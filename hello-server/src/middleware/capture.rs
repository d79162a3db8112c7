use axum::http::{Response, StatusCode};

/// Observes the status of a response on its way out without altering it.
///
/// Starts at `200 OK`, so a handler that never sets a status is reported as 200.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapturedResponse {
    status: StatusCode,
}

impl Default for CapturedResponse {
    fn default() -> Self {
        Self { status: StatusCode::OK }
    }
}

impl CapturedResponse {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the status of `response` and hand it back unchanged.
    pub fn capture<B>(&mut self, response: Response<B>) -> Response<B> {
        self.status = response.status();
        response
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }
}
