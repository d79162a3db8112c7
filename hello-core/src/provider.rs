use crate::{
    ApiError, Config, WeatherQuery, WeatherReport, config::WeatherConfig,
    provider::weatherapi::WeatherApiProvider,
};
use async_trait::async_trait;
use std::fmt::Debug;

pub mod weatherapi;

/// Source of current weather conditions.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    async fn current(&self, query: &WeatherQuery) -> Result<WeatherReport, ApiError>;
}

/// Construct the WeatherAPI.com provider from the weather section of the config.
///
/// A missing API key is not an error here: the service still starts and
/// reports the misconfiguration on each weather request.
pub fn provider_from_config(config: &Config) -> anyhow::Result<Box<dyn WeatherProvider>> {
    provider_from_weather_config(&config.weather)
}

pub fn provider_from_weather_config(
    config: &WeatherConfig,
) -> anyhow::Result<Box<dyn WeatherProvider>> {
    if config.api_key().is_none() {
        tracing::warn!("WeatherAPI key not configured; /weather will answer 500");
    }
    Ok(Box::new(WeatherApiProvider::from_config(config)?))
}
