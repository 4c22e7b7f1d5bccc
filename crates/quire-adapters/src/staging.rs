//! Staging adapters: scratch roots a project is assembled in before it is
//! merged into the real destination.

use std::path::{Path, PathBuf};
use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};

use quire_core::{
    application::{
        ApplicationError,
        ports::{Filesystem, Staging, Workspace},
    },
    error::QuireResult,
};
use tempfile::TempDir;
use tracing::debug;

use crate::filesystem::{LocalFilesystem, MemoryFilesystem};

/// Prefix of every temporary staging directory.
pub const TEMP_PREFIX: &str = "quire-";

/// Stages into a fresh OS temporary directory.
#[derive(Debug, Clone, Default)]
pub struct TempDirStaging {
    parent: Option<PathBuf>,
}

impl TempDirStaging {
    /// Stage under the system temporary directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stage under `parent` instead of the system temporary directory.
    pub fn in_dir(parent: impl Into<PathBuf>) -> Self {
        Self {
            parent: Some(parent.into()),
        }
    }
}

impl Staging for TempDirStaging {
    fn acquire(&self) -> QuireResult<Box<dyn Workspace>> {
        let mut builder = tempfile::Builder::new();
        builder.prefix(TEMP_PREFIX);

        let dir = match &self.parent {
            Some(parent) => builder.tempdir_in(parent),
            None => builder.tempdir(),
        }
        .map_err(|e| ApplicationError::Filesystem {
            path: self.parent.clone().unwrap_or_else(std::env::temp_dir),
            reason: format!("Failed to create staging directory: {e}"),
        })?;

        debug!(path = %dir.path().display(), "staging directory created");
        let fs = LocalFilesystem::new(dir.path());
        Ok(Box::new(TempDirWorkspace { dir, fs }))
    }
}

/// A temporary directory; deleted on release, or on drop if never released.
#[derive(Debug)]
pub struct TempDirWorkspace {
    dir: TempDir,
    fs: LocalFilesystem,
}

impl Workspace for TempDirWorkspace {
    fn filesystem(&self) -> &dyn Filesystem {
        &self.fs
    }

    fn location(&self) -> Option<&Path> {
        Some(self.dir.path())
    }

    fn release(self: Box<Self>) -> QuireResult<()> {
        let path = self.dir.path().to_path_buf();
        self.dir.close().map_err(|e| ApplicationError::Filesystem {
            path,
            reason: format!("Failed to remove staging directory: {e}"),
        })?;
        Ok(())
    }
}

/// Stages into a [`MemoryFilesystem`] and counts what it hands out.
#[derive(Debug, Clone, Default)]
pub struct MemoryStaging {
    acquired: Arc<AtomicUsize>,
    released: Arc<AtomicUsize>,
}

impl MemoryStaging {
    pub fn new() -> Self {
        Self::default()
    }

    /// Workspaces handed out so far.
    pub fn acquired(&self) -> usize {
        self.acquired.load(Ordering::SeqCst)
    }

    /// Workspaces released so far.
    pub fn released(&self) -> usize {
        self.released.load(Ordering::SeqCst)
    }
}

impl Staging for MemoryStaging {
    fn acquire(&self) -> QuireResult<Box<dyn Workspace>> {
        self.acquired.fetch_add(1, Ordering::SeqCst);
        Ok(Box::new(MemoryWorkspace {
            fs: MemoryFilesystem::new(),
            released: Arc::clone(&self.released),
        }))
    }
}

#[derive(Debug)]
struct MemoryWorkspace {
    fs: MemoryFilesystem,
    released: Arc<AtomicUsize>,
}

impl Workspace for MemoryWorkspace {
    fn filesystem(&self) -> &dyn Filesystem {
        &self.fs
    }

    fn release(self: Box<Self>) -> QuireResult<()> {
        self.fs.clear()?;
        self.released.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
