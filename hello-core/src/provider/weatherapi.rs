use anyhow::Context;
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use std::time::Duration;

use crate::{
    config::WeatherConfig,
    error::ApiError,
    model::{WeatherQuery, WeatherReport},
};

use super::WeatherProvider;

/// Client for the WeatherAPI.com `current.json` endpoint.
#[derive(Debug, Clone)]
pub struct WeatherApiProvider {
    api_key: Option<String>,
    base_url: String,
    http: Client,
}

impl WeatherApiProvider {
    pub fn new(
        api_key: Option<String>,
        base_url: impl Into<String>,
        timeout: Duration,
    ) -> anyhow::Result<Self> {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client for WeatherAPI")?;

        let base_url = base_url.into().trim_end_matches('/').to_string();
        let api_key = api_key.filter(|key| !key.trim().is_empty());

        Ok(Self { api_key, base_url, http })
    }

    pub fn from_config(config: &WeatherConfig) -> anyhow::Result<Self> {
        Self::new(config.api_key().map(str::to_owned), &config.base_url, config.timeout())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn fetch_current(&self, api_key: &str, city: &str) -> Result<WeatherReport, ApiError> {
        let url = format!("{}/current.json", self.base_url);

        // the key travels in the query string, so errors are logged without their URL
        let res = self
            .http
            .get(&url)
            .query(&[("key", api_key), ("q", city), ("aqi", "no")])
            .send()
            .await
            .map_err(|err| {
                let err = err.without_url();
                tracing::error!(city, error = %err, "Failed to fetch weather data");
                ApiError::UpstreamUnavailable(err)
            })?;

        let status = res.status();
        if status != StatusCode::OK {
            let body = res.text().await.unwrap_or_default();
            tracing::error!(
                city,
                status = status.as_u16(),
                body = %truncate_body(&body),
                "WeatherAPI request failed"
            );
            return Err(ApiError::UpstreamStatus { status: status.as_u16(), body });
        }

        let body = res.bytes().await.map_err(|err| {
            let err = err.without_url();
            tracing::error!(city, error = %err, "Failed to read weather data response");
            ApiError::UpstreamBody(err)
        })?;

        serde_json::from_slice::<WeatherReport>(&body).map_err(|err| {
            tracing::error!(
                city,
                error = %err,
                body = %truncate_body(&String::from_utf8_lossy(&body)),
                "Failed to parse weather data"
            );
            ApiError::Decode(err)
        })
    }
}

#[async_trait]
impl WeatherProvider for WeatherApiProvider {
    async fn current(&self, query: &WeatherQuery) -> Result<WeatherReport, ApiError> {
        let Some(api_key) = self.api_key.as_deref() else {
            tracing::error!(city = query.city(), "WeatherAPI key not configured in service");
            return Err(ApiError::MissingApiKey);
        };

        tracing::debug!(city = query.city(), base_url = %self.base_url, "Fetching current weather");
        self.fetch_current(api_key, query.city()).await
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.chars().count() > MAX {
        format!("{}...", body.chars().take(MAX).collect::<String>())
    } else {
        body.to_string()
    }
}
