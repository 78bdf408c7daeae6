// Calculation error types

use thiserror::Error;

/// Failures of the parse → filter → covariance pipeline.
///
/// Every variant aborts the whole request; the caller only ever sees a
/// generic internal error.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CalcError {
    #[error("token {token:?} does not match the (x,y) pattern")]
    Pattern { token: String },

    #[error("no coordinate has two numeric components")]
    EmptySample,

    #[error("covariance needs at least two observations per variable, got {observations}")]
    Degenerate { observations: usize },

    #[error("covariance matrix contains non-finite values")]
    NonFinite,
}
