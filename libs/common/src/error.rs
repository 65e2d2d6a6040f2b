//! Custom error types for the common library
//!
//! This module defines the errors the extraction engine client can produce
//! while resolving a video URL.

use thiserror::Error;

/// Custom error type for extraction engine operations
#[derive(Error, Debug)]
pub enum ExtractError {
    /// The engine binary could not be started
    #[error("Failed to launch extraction engine: {0}")]
    Launch(#[source] std::io::Error),

    /// The engine ran but reported a failure
    #[error("Extraction engine failed: {0}")]
    Engine(String),

    /// The engine answered with output that could not be decoded
    #[error("Invalid extraction engine output: {0}")]
    Output(#[source] serde_json::Error),

    /// The engine did not answer within the configured budget
    #[error("Extraction timed out after {0} seconds")]
    Timeout(u64),
}

/// Type alias for Result with ExtractError
pub type ExtractResult<T> = Result<T, ExtractError>;
