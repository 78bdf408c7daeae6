// Handler error types

use thiserror::Error;

use crate::calc::CalcError;

/// Anything that turns a request into a 500 (or 413 for oversized bodies)
#[derive(Debug, Error)]
pub enum HandlerError {
    #[error("request body is not valid UTF-8: {0}")]
    Utf8(#[from] std::str::Utf8Error),

    #[error("calculation failed: {0}")]
    Calc(#[from] CalcError),

    #[error("failed to serialize covariance matrix: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("request body exceeds the configured limit")]
    BodyTooLarge,

    #[error("failed to read request body: {0}")]
    Body(String),
}
