//! Shared error type across statline crates.

use thiserror::Error;

/// Shared result type.
pub type Result<T> = std::result::Result<T, StatlineError>;

/// Unified error type used by core and exporter.
#[derive(Debug, Error)]
pub enum StatlineError {
    /// Structural error at metric construction time: empty name/help,
    /// duplicate histogram thresholds, bad quantile list.
    #[error("invalid metric: {0}")]
    InvalidMetric(String),
    /// A mutation was rejected and the metric left unchanged, e.g. a
    /// non-finite observation or a type clash in the registry.
    #[error("contract violation: {0}")]
    ContractViolation(String),
    /// Config failed to parse or validate.
    #[error("bad config: {0}")]
    BadConfig(String),
    #[error("internal: {0}")]
    Internal(String),
}

impl StatlineError {
    /// Stable string code for each variant (used in logs and tests).
    pub fn code(&self) -> &'static str {
        match self {
            StatlineError::InvalidMetric(_) => "INVALID_METRIC",
            StatlineError::ContractViolation(_) => "CONTRACT_VIOLATION",
            StatlineError::BadConfig(_) => "BAD_CONFIG",
            StatlineError::Internal(_) => "INTERNAL",
        }
    }
}
