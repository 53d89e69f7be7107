use serde::{Deserialize, Serialize};

use crate::error::WeatherError;

/// Application-level weather classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Sunny,
    Cloudy,
    Rainy,
    Snowy,
    Stormy,
}

/// What the caller asked for: a city name or a coordinate pair.
#[derive(Debug, Clone, PartialEq)]
pub enum WeatherQuery {
    City(String),
    Coordinates { lat: f64, lon: f64 },
}

impl WeatherQuery {
    /// Build a query from the optional request fields.
    ///
    /// Coordinates win when both forms are present. A blank city counts as
    /// missing.
    pub fn from_parts(
        city: Option<&str>,
        lat: Option<f64>,
        lon: Option<f64>,
    ) -> Result<Self, WeatherError> {
        if let (Some(lat), Some(lon)) = (lat, lon) {
            if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lon) {
                return Err(WeatherError::validation(
                    "Invalid coordinates: latitude must be -90 to 90, longitude must be -180 to 180",
                ));
            }
            return Ok(Self::Coordinates { lat, lon });
        }

        match city.map(str::trim) {
            Some(city) if !city.is_empty() => Ok(Self::City(city.to_string())),
            _ => Err(WeatherError::validation("City name or coordinates are required")),
        }
    }

    /// Human-readable label used in not-found messages.
    pub fn label(&self) -> String {
        match self {
            Self::City(city) => city.clone(),
            Self::Coordinates { lat, lon } => format!("{lat}, {lon}"),
        }
    }
}

/// Current conditions at the requested place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentConditions {
    pub city: String,
    pub country: String,
    #[serde(rename = "temperature")]
    pub temperature_c: i64,
    pub description: String,
    #[serde(rename = "humidity")]
    pub humidity_pct: u32,
    #[serde(rename = "windSpeed")]
    pub wind_speed_kmh: i64,
    #[serde(rename = "visibility")]
    pub visibility_km: i64,
    #[serde(rename = "pressure")]
    pub pressure_hpa: u32,
    #[serde(rename = "feelsLike")]
    pub feels_like_c: i64,
    pub condition: Category,
}

/// One day of the forecast, reduced from its 3-hourly samples.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyForecastSummary {
    /// Short date, `dd/MM`.
    pub date: String,
    /// Vietnamese weekday, e.g. "Thứ Hai".
    #[serde(rename = "day")]
    pub day_name: String,
    pub high: i64,
    pub low: i64,
    pub description: String,
    pub condition: Category,
}

/// Response body of a successful lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherReport {
    pub current: CurrentConditions,
    pub forecast: Vec<DailyForecastSummary>,
}

/// Round half up, matching how the UI has always displayed numbers.
pub(crate) fn round_half_up(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}
