use hello_core::{
    ArtPiece, Catalog, Config, Quote, RandomSource, ThreadRandom, WeatherProvider,
    catalog::{self, EmptyCatalog},
    provider_from_config,
};
use std::sync::Arc;

/// Dependencies shared by every handler. Everything here is immutable after startup.
#[derive(Debug, Clone)]
pub struct AppState {
    pub quotes: Arc<Catalog<Quote>>,
    pub art: Arc<Catalog<ArtPiece>>,
    pub weather: Arc<dyn WeatherProvider>,
}

impl AppState {
    pub fn new(
        random: Arc<dyn RandomSource>,
        weather: Arc<dyn WeatherProvider>,
    ) -> Result<Self, EmptyCatalog> {
        Ok(Self {
            quotes: Arc::new(catalog::quotes(Arc::clone(&random))?),
            art: Arc::new(catalog::art(random)?),
            weather,
        })
    }

    /// Built-in catalogs with thread-local randomness and the configured weather provider.
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let weather: Arc<dyn WeatherProvider> = Arc::from(provider_from_config(config)?);
        Ok(Self::new(Arc::new(ThreadRandom), weather)?)
    }
}
