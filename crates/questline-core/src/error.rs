//! Domain error types.

use thiserror::Error;

/// Top-level domain error type.
///
/// Both variants are raised before any state is mutated.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// An input value is outside its allowed range (zero amount, blank name,
    /// counter overflow).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The requested action is unknown or cannot be afforded in the current
    /// state.
    #[error("invalid operation: {0}")]
    InvalidOperation(String),
}

impl DomainError {
    /// Shorthand for [`DomainError::InvalidArgument`].
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    /// Shorthand for [`DomainError::InvalidOperation`].
    pub fn invalid_operation(msg: impl Into<String>) -> Self {
        Self::InvalidOperation(msg.into())
    }
}
