//! Error types for bricktime.

use thiserror::Error;

/// Result type alias for bricktime operations.
pub type Result<T> = std::result::Result<T, EstimateError>;

/// Errors that can occur while estimating a single request.
///
/// Every variant is recovered locally: a failed request produces a failure
/// response at its position in the batch and never aborts the other requests.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EstimateError {
    /// Piece count missing or not positive.
    #[error("Number of pieces must be a positive integer. Received: {0}")]
    InvalidPieceCount(Received),

    /// Builder count missing or not positive.
    #[error("Number of builders must be a positive integer. Received: {0}")]
    InvalidBuilderCount(Received),

    /// The arithmetic failed despite valid inputs.
    #[error("An unexpected error occurred during calculation: {0}")]
    Calculation(String),
}

/// An input value echoed back in validation messages.
///
/// Missing values render as `null`, matching the invocation contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Received(pub Option<i64>);

impl std::fmt::Display for Received {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            Some(value) => write!(f, "{value}"),
            None => write!(f, "null"),
        }
    }
}

impl From<Option<i64>> for Received {
    fn from(value: Option<i64>) -> Self {
        Self(value)
    }
}
