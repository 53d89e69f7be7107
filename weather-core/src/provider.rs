use crate::{
    Config, WeatherQuery,
    provider::openweather::{CurrentPayload, ForecastPayload, OpenWeatherProvider},
};
use async_trait::async_trait;
use std::{fmt::Debug, sync::Arc};
use thiserror::Error;

pub mod openweather;

/// Failures talking to the upstream provider.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("No API key configured for the weather provider")]
    MissingCredential,

    #[error("Location not found upstream")]
    NotFound,

    #[error("Upstream request failed with status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Failed to reach upstream: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Failed to parse upstream JSON: {0}")]
    Parse(String),
}

/// Source of raw current-weather and forecast payloads.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    async fn current(&self, query: &WeatherQuery) -> Result<CurrentPayload, ProviderError>;

    async fn forecast(&self, query: &WeatherQuery) -> Result<ForecastPayload, ProviderError>;
}

/// Construct the OpenWeather provider from config.
///
/// A missing API key is not an error here; lookups report it instead.
pub fn provider_from_config(config: &Config) -> anyhow::Result<Arc<dyn WeatherProvider>> {
    let provider = OpenWeatherProvider::new(&config.openweather)?;
    Ok(Arc::new(provider))
}
