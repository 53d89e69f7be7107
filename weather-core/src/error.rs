use thiserror::Error;

/// Failures of a single weather lookup.
///
/// Every variant is terminal for the request; nothing is retried.
#[derive(Debug, Error)]
pub enum WeatherError {
    /// The query carried neither a city nor a usable coordinate pair.
    #[error("{0}")]
    Validation(String),

    /// No usable upstream credential is configured.
    #[error("{0}")]
    Configuration(String),

    /// The upstream provider does not know the requested city.
    #[error("City \"{city}\" not found")]
    NotFound { city: String },

    /// Any other upstream failure: bad status, network error, malformed payload.
    #[error("Upstream weather request failed: {0}")]
    Upstream(String),
}

impl WeatherError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn upstream(msg: impl Into<String>) -> Self {
        Self::Upstream(msg.into())
    }
}
