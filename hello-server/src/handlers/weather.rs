use axum::{
    extract::{Query, State},
    response::Response,
};
use hello_core::WeatherQuery;

use super::json_response;
use crate::{error::AppError, state::AppState};

/// First value of `name` in the query pairs; later repeats are ignored.
fn first_param<'a>(pairs: &'a [(String, String)], name: &str) -> Option<&'a str> {
    pairs.iter().find(|(key, _)| key == name).map(|(_, value)| value.as_str())
}

/// `GET /weather?city=<name>`: current conditions from the upstream provider.
///
/// Upstream failures are logged by the provider; this handler only logs the
/// rejections it raises itself.
pub async fn weather(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Response, AppError> {
    let query = WeatherQuery::from_param(first_param(&pairs, "city")).inspect_err(|err| {
        tracing::warn!(kind = %err.kind(), error = %err, "Rejected weather request");
    })?;

    let report = state.weather.current(&query).await?;
    tracing::debug!(city = query.city(), location = %report.location.name, "Weather lookup succeeded");

    json_response(&report)
}
