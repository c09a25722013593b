//! Dashboard-specific error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DashboardError {
    #[error("fetch failed for {endpoint}: {message}")]
    FetchFailed { endpoint: String, message: String },

    #[error("malformed response payload: {details}")]
    MalformedPayload { details: String },

    #[error("configuration error: {field}")]
    ConfigurationError { field: String },

    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type DashboardResult<T> = Result<T, DashboardError>;
