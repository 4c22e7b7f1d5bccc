use super::DomainError;
use std::fmt;
use std::path::{Component, Path, PathBuf};

/// A filesystem path guaranteed to be relative.
///
/// Invariant: Never absolute, never escapes its root with `..`. Enforced at
/// construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RelativePath(PathBuf);

impl RelativePath {
    /// Fallible constructor.
    pub fn try_new(path: impl Into<PathBuf>) -> Result<Self, DomainError> {
        let path = path.into();
        let escapes = path
            .components()
            .any(|c| matches!(c, Component::ParentDir | Component::Prefix(_)));
        if path.is_absolute() || path.has_root() || escapes {
            Err(DomainError::AbsolutePathNotAllowed {
                path: path.display().to_string(),
            })
        } else {
            Ok(Self(path))
        }
    }

    /// Join a segment, maintaining relative invariant.
    pub fn join(&self, segment: impl AsRef<Path>) -> Result<Self, DomainError> {
        Self::try_new(self.0.join(segment))
    }

    pub fn as_path(&self) -> &Path {
        &self.0
    }
}

impl AsRef<Path> for RelativePath {
    fn as_ref(&self) -> &Path {
        &self.0
    }
}

impl fmt::Display for RelativePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.display())
    }
}

/// Unix-style permission bits carried alongside staged entries.
///
/// On platforms without mode bits the value is recorded but not applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Permissions {
    mode: u32,
}

impl Permissions {
    /// `rwxr-x---`, used for staged directories.
    pub const fn directory() -> Self {
        Self { mode: 0o750 }
    }

    /// `rw-r--r--`, used for staged files.
    pub const fn file() -> Self {
        Self { mode: 0o644 }
    }

    pub const fn from_mode(mode: u32) -> Self {
        Self {
            mode: mode & 0o7777,
        }
    }

    pub const fn mode(&self) -> u32 {
        self.mode
    }
}

impl Default for Permissions {
    fn default() -> Self {
        Self::file()
    }
}

impl fmt::Display for Permissions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04o}", self.mode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relative_path_rejects_absolute() {
        assert!(RelativePath::try_new("/etc/passwd").is_err());
    }

    #[test]
    fn relative_path_rejects_parent_traversal() {
        assert!(RelativePath::try_new("../outside").is_err());
        assert!(RelativePath::try_new("src/../../outside").is_err());
    }

    #[test]
    fn relative_path_join() {
        let src = RelativePath::try_new("src").unwrap();
        assert_eq!(src.join("main.md").unwrap().as_path(), Path::new("src/main.md"));
        assert!(src.join("..").is_err());
    }

    #[test]
    fn permissions_strip_file_type_bits() {
        assert_eq!(Permissions::from_mode(0o100644).mode(), 0o644);
        assert_eq!(Permissions::directory().to_string(), "0750");
        assert_eq!(Permissions::from_mode(0o4755).mode(), 0o4755);
    }
}
