//! Custom error types for the API service

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::Utc;
use common::error::ExtractError;
use serde_json::json;
use thiserror::Error;

/// Custom error type for the API service
#[derive(Error, Debug)]
pub enum ApiError {
    /// A required request field was absent or empty
    #[error("{0} is required")]
    MissingParameter(&'static str),

    /// The engine answered, but nothing in it is downloadable
    #[error("No suitable format found")]
    NoSuitableFormat,

    /// Extraction engine failure, surfaced as an HTTP error only on the
    /// legacy endpoint; the current endpoints degrade to synthetic data
    /// instead
    #[error("Extraction failed: {0}")]
    Extraction(#[from] ExtractError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self {
            ApiError::MissingParameter(_) => StatusCode::BAD_REQUEST,
            ApiError::NoSuitableFormat => StatusCode::NOT_FOUND,
            ApiError::Extraction(_) => StatusCode::BAD_REQUEST,
        };

        let body = Json(json!({
            "status": "error",
            "error": self.to_string(),
            "timestamp": Utc::now(),
        }));

        (status, body).into_response()
    }
}

/// Type alias for API results
pub type ApiResult<T> = Result<T, ApiError>;
