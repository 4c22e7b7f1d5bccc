// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    #[error("unknown format '{value}' (expected json, yaml or toml)")]
    InvalidFormat { value: String },

    #[error("unknown conflict policy '{value}' (expected error, keep or overwrite)")]
    InvalidConflictPolicy { value: String },

    #[error("Invalid project name '{name}': {reason}")]
    InvalidProjectName { name: String, reason: String },

    // ========================================================================
    // Layout Errors
    // ========================================================================
    #[error("Project layout is empty")]
    EmptyLayout,

    #[error("Duplicate path in layout: {path}")]
    DuplicatePath { path: String },

    #[error("Absolute paths not allowed: {path}")]
    AbsolutePathNotAllowed { path: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidFormat { value } => vec![
                format!("'{}' is not a supported format", value),
                "Supported formats:".into(),
                "  • json".into(),
                "  • yaml (files may also end in .yml)".into(),
                "  • toml (default)".into(),
            ],
            Self::InvalidConflictPolicy { value } => vec![
                format!("'{}' is not a conflict policy", value),
                "Use one of: error, keep, overwrite".into(),
            ],
            Self::InvalidProjectName { name, reason } => vec![
                format!("Project name '{}' is invalid: {}", name, reason),
                "Use a plain name without path separators".into(),
                "Examples: thesis, my-notes, report_2024".into(),
            ],
            _ => vec!["See documentation for more details".into()],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidFormat { .. }
            | Self::InvalidConflictPolicy { .. }
            | Self::InvalidProjectName { .. } => ErrorCategory::Validation,
            Self::EmptyLayout | Self::DuplicatePath { .. } | Self::AbsolutePathNotAllowed { .. } => {
                ErrorCategory::Internal
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Internal,
}
