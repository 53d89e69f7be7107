//! Core library for the weather lookup proxy.
//!
//! This crate defines:
//! - Configuration & credentials handling
//! - The OpenWeatherMap provider and its raw payloads
//! - Mapping helpers (condition classes, translations, search keys)
//! - Forecast aggregation and the lookup service
//!
//! It is used by `weather-server`, but can also be reused by other binaries.

pub mod alias;
pub mod config;
pub mod error;
pub mod forecast;
pub mod mapping;
pub mod model;
pub mod provider;
pub mod service;

pub use config::{Config, OpenWeatherConfig, ServerConfig};
pub use error::WeatherError;
pub use model::{Category, CurrentConditions, DailyForecastSummary, WeatherQuery, WeatherReport};
pub use provider::{ProviderError, WeatherProvider, provider_from_config};
pub use service::WeatherService;
