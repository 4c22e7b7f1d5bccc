//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `quire-adapters` crate provides implementations.

use std::path::{Path, PathBuf};

use crate::domain::{Format, Permissions, ProjectConfig};
use crate::error::QuireResult;

/// What a walked path is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Directory,
}

/// One entry produced by [`Filesystem::walk`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryInfo {
    /// Path relative to the filesystem root.
    pub path: PathBuf,
    pub kind: EntryKind,
    pub permissions: Permissions,
}

impl EntryInfo {
    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Directory
    }
}

/// Port for filesystem operations.
///
/// Every path is interpreted relative to the root the implementation was
/// built over. Implemented by:
/// - `quire_adapters::filesystem::LocalFilesystem` (production)
/// - `quire_adapters::filesystem::MemoryFilesystem` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories. Directories that already
    /// exist keep their permissions.
    fn create_dir_all(&self, path: &Path, permissions: Permissions) -> QuireResult<()>;

    /// Write content to a file, replacing any previous content and mode.
    fn write_file(&self, path: &Path, content: &[u8], permissions: Permissions)
    -> QuireResult<()>;

    /// Read a whole file.
    fn read_file(&self, path: &Path) -> QuireResult<Vec<u8>>;

    /// Check if any entry, file or directory, exists at path.
    fn exists(&self, path: &Path) -> bool;

    /// Check if a regular file exists at path.
    fn is_file(&self, path: &Path) -> bool;

    /// List `base` and everything beneath it, depth-first pre-order with
    /// siblings sorted by name. The root itself is never listed.
    fn walk(&self, base: &Path) -> QuireResult<Vec<EntryInfo>>;
}

/// Port for turning a configuration into document bytes and back.
///
/// Implemented by `quire_adapters::codec::SerdeCodec`.
#[cfg_attr(test, mockall::automock)]
pub trait ConfigCodec: Send + Sync {
    fn encode(&self, config: &ProjectConfig, format: Format) -> QuireResult<Vec<u8>>;

    /// Decode a document. Never returns a partially populated configuration.
    fn decode(&self, bytes: &[u8], format: Format) -> QuireResult<ProjectConfig>;
}

/// Port for acquiring isolated scratch roots.
///
/// Implemented by:
/// - `quire_adapters::staging::TempDirStaging` (production)
/// - `quire_adapters::staging::MemoryStaging` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait Staging: Send + Sync {
    /// Acquire a fresh, empty workspace.
    fn acquire(&self) -> QuireResult<Box<dyn Workspace>>;
}

/// An acquired scratch root. Owned by exactly one invocation.
pub trait Workspace: Send {
    /// Filesystem rooted at the workspace.
    fn filesystem(&self) -> &dyn Filesystem;

    /// Location on disk, if the workspace has one.
    fn location(&self) -> Option<&Path> {
        None
    }

    /// Delete the workspace and everything in it.
    fn release(self: Box<Self>) -> QuireResult<()>;
}
