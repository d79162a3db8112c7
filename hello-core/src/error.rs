use reqwest::StatusCode;
use thiserror::Error;

/// Failure classes a request can end in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    ClientInput,
    Configuration,
    UpstreamUnavailable,
    UpstreamError,
    Decode,
    Encode,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::ClientInput => "client_input",
            ErrorKind::Configuration => "configuration",
            ErrorKind::UpstreamUnavailable => "upstream_unavailable",
            ErrorKind::UpstreamError => "upstream_error",
            ErrorKind::Decode => "decode",
            ErrorKind::Encode => "encode",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors raised while serving a request.
///
/// The `Display` output is what the client sees; underlying causes stay in
/// `source()` and are only logged.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Query parameter '{0}' is required")]
    MissingParameter(&'static str),

    #[error("WeatherAPI key not configured in service")]
    MissingApiKey,

    #[error("Failed to fetch weather data")]
    UpstreamUnavailable(#[source] reqwest::Error),

    #[error("Failed to read weather data response")]
    UpstreamBody(#[source] reqwest::Error),

    #[error("WeatherAPI request failed with status {status}: {body}")]
    UpstreamStatus { status: u16, body: String },

    #[error("Failed to parse weather data")]
    Decode(#[source] serde_json::Error),

    #[error("Failed to encode response")]
    Encode(#[source] serde_json::Error),
}

impl ApiError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ApiError::MissingParameter(_) => ErrorKind::ClientInput,
            ApiError::MissingApiKey => ErrorKind::Configuration,
            ApiError::UpstreamUnavailable(_) | ApiError::UpstreamBody(_) => {
                ErrorKind::UpstreamUnavailable
            }
            ApiError::UpstreamStatus { .. } => ErrorKind::UpstreamError,
            ApiError::Decode(_) => ErrorKind::Decode,
            ApiError::Encode(_) => ErrorKind::Encode,
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self.kind() {
            ErrorKind::ClientInput => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
