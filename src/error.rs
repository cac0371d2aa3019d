use std::time::Duration;

use thiserror::Error;

/// Errors that escape the data pipeline to the caller
#[derive(Debug, Error)]
pub enum WeatherError {
    #[error("Unknown location '{0}'")]
    UnknownLocation(String),
}

/// Failure of a single transport route. Absorbed by the fetcher, never surfaced.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("Could not build route URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Request failed with status: {0}")]
    Status(reqwest::StatusCode),

    #[error("Malformed response body: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("API error {code}: {message}")]
    Provider { code: String, message: String },

    #[error("Response envelope has no observation records")]
    Empty,

    #[error("Route timed out after {0:?}")]
    Timeout(Duration),
}
