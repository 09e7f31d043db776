//! Centralized error types for Massima.

use thiserror::Error;

/// Failure of one analysis invocation.
///
/// Callers treat every variant the same way (one generic user-facing
/// message); the variants exist so logs can name the actual cause.
#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("model request failed: {0}")]
    Transport(String),

    #[error("model returned no text")]
    EmptyResponse,

    #[error("malformed analysis payload: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Result type for analysis operations.
pub type AnalysisResult<T> = Result<T, AnalysisError>;
