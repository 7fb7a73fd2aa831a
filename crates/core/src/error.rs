//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic, business/domain failures. Queries
/// with an empty or non-matching input report `NoData` instead of inventing
/// a default value.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A query had no valid result over its input.
    #[error("no data: {0}")]
    NoData(String),

    /// A value failed validation.
    ///
    /// Reserved: the domain's unsigned field types currently leave nothing
    /// to reject.
    #[error("validation failed: {0}")]
    Validation(String),

    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),
}

impl DomainError {
    pub fn no_data(msg: impl Into<String>) -> Self {
        Self::NoData(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }
}
