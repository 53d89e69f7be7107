use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, de::DeserializeOwned};
use std::time::Duration;
use tracing::{debug, instrument, warn};

use crate::{config::OpenWeatherConfig, mapping::search_key, model::WeatherQuery};

use super::{ProviderError, WeatherProvider};

#[derive(Debug, Clone)]
pub struct OpenWeatherProvider {
    api_key: Option<String>,
    base_url: String,
    lang: String,
    http: Client,
}

impl OpenWeatherProvider {
    pub fn new(config: &OpenWeatherConfig) -> Result<Self, ProviderError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            api_key: config.usable_api_key().map(str::to_owned),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            lang: config.lang.clone(),
            http,
        })
    }

    fn query_params(&self, api_key: &str, query: &WeatherQuery) -> Vec<(&'static str, String)> {
        let mut params = match query {
            WeatherQuery::Coordinates { lat, lon } => {
                vec![("lat", lat.to_string()), ("lon", lon.to_string())]
            }
            WeatherQuery::City(city) => vec![("q", search_key(city))],
        };
        params.push(("appid", api_key.to_string()));
        params.push(("units", "metric".to_string()));
        params.push(("lang", self.lang.clone()));
        params
    }

    async fn fetch<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        query: &WeatherQuery,
    ) -> Result<T, ProviderError> {
        let api_key = self.api_key.as_deref().ok_or(ProviderError::MissingCredential)?;
        let url = format!("{}/{endpoint}", self.base_url);

        debug!(%url, "requesting OpenWeather");

        let res = self
            .http
            .get(&url)
            .query(&self.query_params(api_key, query))
            .send()
            .await
            .map_err(redact)?;

        let status = res.status();
        let body = res.text().await.map_err(redact)?;

        if status == StatusCode::NOT_FOUND {
            return Err(ProviderError::NotFound);
        }
        if !status.is_success() {
            warn!(%status, endpoint, "OpenWeather returned an error status");
            return Err(ProviderError::Status {
                status: status.as_u16(),
                body: truncate_body(&body),
            });
        }

        serde_json::from_str(&body).map_err(|e| ProviderError::Parse(e.to_string()))
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct WeatherEntry {
    pub id: i64,
    pub main: String,
    pub description: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CurrentMain {
    pub temp: f64,
    pub feels_like: f64,
    pub humidity: u32,
    pub pressure: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Wind {
    pub speed: f64,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Sys {
    #[serde(default)]
    pub country: Option<String>,
}

/// Body of `GET /weather`.
#[derive(Debug, Clone, Deserialize)]
pub struct CurrentPayload {
    pub name: String,
    #[serde(default)]
    pub sys: Sys,
    pub main: CurrentMain,
    pub weather: Vec<WeatherEntry>,
    pub wind: Wind,
    /// Metres.
    #[serde(default)]
    pub visibility: Option<f64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ForecastMain {
    pub temp: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ForecastEntry {
    pub dt: i64,
    pub main: ForecastMain,
    pub weather: Vec<WeatherEntry>,
}

/// Body of `GET /forecast`.
#[derive(Debug, Clone, Deserialize)]
pub struct ForecastPayload {
    pub list: Vec<ForecastEntry>,
}

#[async_trait]
impl WeatherProvider for OpenWeatherProvider {
    #[instrument(skip(self))]
    async fn current(&self, query: &WeatherQuery) -> Result<CurrentPayload, ProviderError> {
        self.fetch("weather", query).await
    }

    #[instrument(skip(self))]
    async fn forecast(&self, query: &WeatherQuery) -> Result<ForecastPayload, ProviderError> {
        self.fetch("forecast", query).await
    }
}

/// reqwest errors carry the request URL, which includes `appid`.
fn redact(err: reqwest::Error) -> ProviderError {
    ProviderError::Transport(err.without_url())
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}
