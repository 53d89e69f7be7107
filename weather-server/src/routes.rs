//! Route definitions and handlers.

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    routing::{get, post},
};
use serde::Deserialize;
use serde_json::{Value, json};
use tracing::instrument;
use weather_core::{WeatherQuery, WeatherReport, WeatherService};

use crate::error::ApiError;

#[derive(Debug, Clone)]
pub struct AppState {
    pub weather: WeatherService,
}

/// Body of `POST /api/weather`.
#[derive(Debug, Default, Deserialize)]
pub struct WeatherRequest {
    pub city: Option<String>,
    pub lat: Option<f64>,
    pub lon: Option<f64>,
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/weather", post(weather))
        .with_state(state)
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

#[instrument(skip(state, body))]
async fn weather(
    State(state): State<AppState>,
    body: Result<Json<WeatherRequest>, JsonRejection>,
) -> Result<Json<WeatherReport>, ApiError> {
    let Json(req) = body.map_err(|e| ApiError::Internal(format!("unreadable request body: {e}")))?;

    let query = WeatherQuery::from_parts(req.city.as_deref(), req.lat, req.lon)?;
    let report = state.weather.lookup(&query).await?;

    Ok(Json(report))
}
