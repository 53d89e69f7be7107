//! HTTP error responses.
//!
//! Upstream and internal details are logged, never returned to the browser.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;
use weather_core::WeatherError;

const GENERIC_FAILURE: &str = "Không thể lấy dữ liệu thời tiết. Vui lòng thử lại sau.";

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            Self::NotFound(city) => (
                StatusCode::NOT_FOUND,
                format!("Không tìm thấy thành phố \"{city}\". Vui lòng kiểm tra tên thành phố."),
            ),
            Self::Configuration(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
            Self::Internal(detail) => {
                tracing::error!(%detail, "weather lookup failed");
                (StatusCode::INTERNAL_SERVER_ERROR, GENERIC_FAILURE.to_string())
            }
        };

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}

impl From<WeatherError> for ApiError {
    fn from(err: WeatherError) -> Self {
        match err {
            WeatherError::Validation(msg) => Self::BadRequest(msg),
            WeatherError::NotFound { city } => Self::NotFound(city),
            WeatherError::Configuration(msg) => Self::Configuration(msg),
            err @ WeatherError::Upstream(_) => Self::Internal(err.to_string()),
        }
    }
}
