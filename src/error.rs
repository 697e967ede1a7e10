//! Error types for finance calculations

use thiserror::Error;

/// Errors returned by the calculation functions
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FinanceError {
    /// An argument is outside the domain of the formula
    /// (zero period count, non-finite value, empty sample, percentile outside [0, 1])
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Parameters for which the formula has no well-defined value or limit
    #[error("degenerate parameters: {0}")]
    DegenerateParameters(String),

    /// Result or intermediate value is not representable
    #[error("numeric overflow: {0}")]
    NumericOverflow(String),
}

impl FinanceError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        FinanceError::InvalidInput(msg.into())
    }

    pub(crate) fn degenerate(msg: impl Into<String>) -> Self {
        FinanceError::DegenerateParameters(msg.into())
    }

    pub(crate) fn overflow(msg: impl Into<String>) -> Self {
        FinanceError::NumericOverflow(msg.into())
    }
}

/// Result alias used throughout the crate
pub type FinanceResult<T> = Result<T, FinanceError>;
