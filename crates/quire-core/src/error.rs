//! Unified error handling for quire core.
//!
//! This module provides a unified error type that wraps domain and application
//! errors, with user-actionable suggestions.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for quire core operations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum QuireError {
    /// Errors from the domain layer (business rule violations).
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Errors from the application layer (I/O and orchestration failures).
    #[error(transparent)]
    Application(#[from] ApplicationError),
}

impl QuireError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Validation => ErrorCategory::Validation,
                crate::domain::ErrorCategory::Internal => ErrorCategory::Internal,
            },
            Self::Application(e) => e.category(),
        }
    }
}

/// Error categories for UI display and exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Conflict,
    NotFound,
    Internal,
}

/// Convenient result type alias.
pub type QuireResult<T> = Result<T, QuireError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrapped_errors_keep_their_message() {
        let err: QuireError = DomainError::InvalidFormat {
            value: "xml".into(),
        }
        .into();
        assert_eq!(
            err.to_string(),
            "unknown format 'xml' (expected json, yaml or toml)"
        );
        assert_eq!(err.category(), ErrorCategory::Validation);
    }

    #[test]
    fn layout_errors_are_internal() {
        let err: QuireError = DomainError::EmptyLayout.into();
        assert_eq!(err.category(), ErrorCategory::Internal);
        assert_eq!(
            err.suggestions(),
            ["See documentation for more details"]
        );
    }
}
