//! The lookup pipeline: fetch both upstream payloads and reshape them.

use std::sync::Arc;

use tracing::{info, instrument, warn};

use crate::{
    alias::resolve_display_name,
    error::WeatherError,
    forecast::{ForecastSample, summarize_forecast},
    mapping::{classify_condition, translate},
    model::{CurrentConditions, WeatherQuery, WeatherReport, round_half_up},
    provider::{
        ProviderError, WeatherProvider,
        openweather::{CurrentPayload, ForecastPayload},
    },
};

/// Visibility assumed when upstream omits it, in metres.
const DEFAULT_VISIBILITY_M: f64 = 10_000.0;

#[derive(Debug, Clone)]
pub struct WeatherService {
    provider: Arc<dyn WeatherProvider>,
}

impl WeatherService {
    pub fn new(provider: Arc<dyn WeatherProvider>) -> Self {
        Self { provider }
    }

    /// Current conditions plus up to five days of forecast.
    ///
    /// Both upstream calls run concurrently and both must succeed. A 404 on
    /// the current-weather call is reported as [`WeatherError::NotFound`].
    #[instrument(skip(self))]
    pub async fn lookup(&self, query: &WeatherQuery) -> Result<WeatherReport, WeatherError> {
        let (current, forecast) =
            tokio::join!(self.provider.current(query), self.provider.forecast(query));

        let current = current.map_err(|e| current_error(e, query))?;
        let forecast = forecast.map_err(forecast_error)?;

        let report = WeatherReport {
            current: current_conditions(&current, query)?,
            forecast: summarize_forecast(&forecast_samples(&forecast)?)?,
        };

        info!(city = %report.current.city, days = report.forecast.len(), "weather lookup complete");
        Ok(report)
    }
}

/// Only the current-weather call can report an unknown city.
fn current_error(err: ProviderError, query: &WeatherQuery) -> WeatherError {
    match err {
        ProviderError::NotFound => WeatherError::NotFound { city: query.label() },
        other => upstream_error(other, "current"),
    }
}

fn forecast_error(err: ProviderError) -> WeatherError {
    upstream_error(err, "forecast")
}

fn upstream_error(err: ProviderError, call: &str) -> WeatherError {
    match err {
        ProviderError::MissingCredential => WeatherError::Configuration(
            "OpenWeatherMap API key chưa được cấu hình. \
             Vui lòng thêm OPENWEATHER_API_KEY vào environment variables."
                .to_string(),
        ),
        other => {
            warn!(error = %other, call, "upstream call failed");
            WeatherError::upstream(other.to_string())
        }
    }
}

fn current_conditions(
    payload: &CurrentPayload,
    query: &WeatherQuery,
) -> Result<CurrentConditions, WeatherError> {
    let weather = payload
        .weather
        .first()
        .ok_or_else(|| WeatherError::upstream("current weather payload has no weather entry"))?;

    let city = match query {
        WeatherQuery::Coordinates { lat, lon } => resolve_display_name(&payload.name, *lat, *lon),
        WeatherQuery::City(_) => payload.name.clone(),
    };

    Ok(CurrentConditions {
        city,
        country: payload.sys.country.clone().unwrap_or_default(),
        temperature_c: round_half_up(payload.main.temp),
        description: translate(&weather.description),
        humidity_pct: payload.main.humidity,
        wind_speed_kmh: round_half_up(payload.wind.speed * 3.6),
        visibility_km: round_half_up(payload.visibility.unwrap_or(DEFAULT_VISIBILITY_M) / 1000.0),
        pressure_hpa: payload.main.pressure,
        feels_like_c: round_half_up(payload.main.feels_like),
        condition: classify_condition(&weather.main, weather.id),
    })
}

fn forecast_samples(payload: &ForecastPayload) -> Result<Vec<ForecastSample>, WeatherError> {
    payload
        .list
        .iter()
        .map(|entry| {
            let weather = entry.weather.first().ok_or_else(|| {
                WeatherError::upstream(format!("forecast sample {} has no weather entry", entry.dt))
            })?;
            Ok(ForecastSample {
                timestamp: entry.dt,
                temperature: entry.main.temp,
                description: weather.description.clone(),
                main: weather.main.clone(),
                code: weather.id,
            })
        })
        .collect()
}
