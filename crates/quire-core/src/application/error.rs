//! Application layer errors.
//!
//! These errors represent failures in orchestration and I/O, not business
//! rules. Business rule violations are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::Format;
use crate::error::ErrorCategory;

/// Errors that occur while encoding, staging or merging a project.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ApplicationError {
    /// A configuration could not be rendered in the requested format.
    #[error("failed to encode configuration as {format}: {reason}")]
    Encode { format: Format, reason: String },

    /// A document was malformed or did not match the configuration shape.
    #[error("failed to decode {format} configuration: {reason}")]
    Decode { format: Format, reason: String },

    /// A file already exists at the destination and the policy is `error`.
    #[error("{} already exists in the destination", path.display())]
    MergeConflict { path: PathBuf },

    /// A configuration file is already present and strict mode is on.
    #[error("configuration file {} already exists", path.display())]
    ConfigExists { path: PathBuf },

    /// A path the operation needed was missing.
    #[error("{} does not exist", path.display())]
    NotFound { path: PathBuf },

    /// Filesystem operation failed.
    #[error("Filesystem error at {}: {reason}", path.display())]
    Filesystem { path: PathBuf, reason: String },

    /// In-memory filesystem lock was poisoned.
    #[error("Filesystem lock poisoned")]
    FilesystemLock,
}

impl ApplicationError {
    /// Wrap an I/O error, keeping not-found distinct from other failures.
    pub fn from_io(path: impl Into<PathBuf>, err: &std::io::Error) -> Self {
        let path = path.into();
        match err.kind() {
            std::io::ErrorKind::NotFound => Self::NotFound { path },
            _ => Self::Filesystem {
                path,
                reason: err.to_string(),
            },
        }
    }

    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Decode { format, .. } => vec![
                format!("Check that the file is valid {}", format),
                "A configuration needs at least a 'name' field".into(),
            ],
            Self::MergeConflict { path } => vec![
                format!("Remove or rename {}", path.display()),
                "Or retry with --on-conflict keep or --on-conflict overwrite".into(),
                "Use --dry-run to list every conflicting path first".into(),
            ],
            Self::ConfigExists { path } => vec![
                format!("A project is already configured at {}", path.display()),
                "Drop --strict to make this a no-op".into(),
                "Choose a different project name or --output directory".into(),
            ],
            Self::NotFound { path } => vec![format!("Check that {} exists", path.display())],
            Self::Filesystem { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
            ],
            Self::FilesystemLock => vec!["This is a bug, please report it".into()],
            Self::Encode { .. } => vec!["Try a different --format".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Decode { .. } => ErrorCategory::Validation,
            Self::MergeConflict { .. } | Self::ConfigExists { .. } => ErrorCategory::Conflict,
            Self::NotFound { .. } => ErrorCategory::NotFound,
            Self::Encode { .. } | Self::Filesystem { .. } | Self::FilesystemLock => {
                ErrorCategory::Internal
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn io_not_found_is_distinct() {
        let err = io::Error::new(io::ErrorKind::NotFound, "gone");
        assert_eq!(
            ApplicationError::from_io("a.toml", &err),
            ApplicationError::NotFound {
                path: "a.toml".into()
            }
        );

        let err = io::Error::new(io::ErrorKind::PermissionDenied, "no");
        assert!(matches!(
            ApplicationError::from_io("a.toml", &err),
            ApplicationError::Filesystem { .. }
        ));
    }

    #[test]
    fn conflicts_are_user_errors() {
        let err = ApplicationError::MergeConflict {
            path: "src/main.md".into(),
        };
        assert_eq!(err.category(), ErrorCategory::Conflict);
        assert_eq!(err.to_string(), "src/main.md already exists in the destination");
    }
}
