//! Domain value objects: Format, ConflictPolicy.
//!
//! # Design
//!
//! These are pure value types: `Copy` and compared by value.
//! Each has a canonical lowercase name (`as_str` / `Display`) and an explicit
//! `FromStr` parser that rejects anything it does not recognise. There is no
//! fallback variant.

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

// ── Format ───────────────────────────────────────────────────────────────────

/// A serialization syntax for the project configuration document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    Json,
    Yaml,
    #[default]
    Toml,
}

impl Format {
    /// Every supported format, in declaration order.
    pub const ALL: [Format; 3] = [Format::Json, Format::Yaml, Format::Toml];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Yaml => "yaml",
            Self::Toml => "toml",
        }
    }

    /// Extension used for the configuration file written in this format.
    pub const fn file_extension(&self) -> &'static str {
        self.as_str()
    }

    /// Name of the configuration file for a project in this format.
    pub fn file_name(&self, project_name: &str) -> String {
        format!("{project_name}.{}", self.file_extension())
    }

    /// Resolve a format from a file extension (`.yml` is accepted for YAML).
    pub fn from_path(path: &Path) -> Result<Self, DomainError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .ok_or_else(|| DomainError::InvalidFormat {
                value: path.display().to_string(),
            })?;

        match ext.to_ascii_lowercase().as_str() {
            "yml" => Ok(Self::Yaml),
            other => other.parse(),
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Format {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "yaml" => Ok(Self::Yaml),
            "toml" => Ok(Self::Toml),
            other => Err(DomainError::InvalidFormat {
                value: other.to_string(),
            }),
        }
    }
}

// ── ConflictPolicy ───────────────────────────────────────────────────────────

/// What the merger does when a file already exists at the destination path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConflictPolicy {
    /// Abort the merge and report the colliding path.
    Error,
    /// Leave the destination file untouched.
    Keep,
    /// Replace the destination file's content and mode.
    #[default]
    Overwrite,
}

impl ConflictPolicy {
    pub const ALL: [ConflictPolicy; 3] = [
        ConflictPolicy::Error,
        ConflictPolicy::Keep,
        ConflictPolicy::Overwrite,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Keep => "keep",
            Self::Overwrite => "overwrite",
        }
    }
}

impl fmt::Display for ConflictPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ConflictPolicy {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "error" => Ok(Self::Error),
            "keep" => Ok(Self::Keep),
            "overwrite" => Ok(Self::Overwrite),
            other => Err(DomainError::InvalidConflictPolicy {
                value: other.to_string(),
            }),
        }
    }
}
