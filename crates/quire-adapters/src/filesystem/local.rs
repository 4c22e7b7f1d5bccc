//! Local filesystem adapter using std::fs, rooted at one directory.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use quire_core::{
    application::{ApplicationError, EntryInfo, EntryKind, ports::Filesystem},
    domain::Permissions,
    error::{QuireError, QuireResult},
};
use walkdir::WalkDir;

/// Production filesystem implementation using `std::fs`.
///
/// Every path is resolved against `root`.
#[derive(Debug, Clone)]
pub struct LocalFilesystem {
    root: PathBuf,
}

impl LocalFilesystem {
    /// Create a local filesystem adapter rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        self.root.join(path)
    }
}

impl Filesystem for LocalFilesystem {
    fn create_dir_all(&self, path: &Path, permissions: Permissions) -> QuireResult<()> {
        let full = self.resolve(path);
        if full.is_dir() {
            return Ok(());
        }

        let mut builder = fs::DirBuilder::new();
        builder.recursive(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::DirBuilderExt;
            builder.mode(permissions.mode());
        }
        #[cfg(not(unix))]
        let _ = permissions;

        builder
            .create(&full)
            .map_err(|e| map_io_error(path, &e, "create directory"))
    }

    fn write_file(&self, path: &Path, content: &[u8], permissions: Permissions) -> QuireResult<()> {
        let full = self.resolve(path);
        fs::write(&full, content).map_err(|e| map_io_error(path, &e, "write file"))?;
        set_mode(&full, permissions).map_err(|e| map_io_error(path, &e, "set permissions"))
    }

    fn read_file(&self, path: &Path) -> QuireResult<Vec<u8>> {
        fs::read(self.resolve(path)).map_err(|e| ApplicationError::from_io(path, &e).into())
    }

    fn exists(&self, path: &Path) -> bool {
        fs::symlink_metadata(self.resolve(path)).is_ok()
    }

    fn is_file(&self, path: &Path) -> bool {
        self.resolve(path).is_file()
    }

    fn walk(&self, base: &Path) -> QuireResult<Vec<EntryInfo>> {
        let start = self.resolve(base);
        let min_depth = if base.as_os_str().is_empty() { 1 } else { 0 };

        let mut entries = Vec::new();
        for entry in WalkDir::new(&start)
            .min_depth(min_depth)
            .sort_by_file_name()
        {
            let entry = entry.map_err(|e| {
                let path = e.path().map_or_else(|| start.clone(), Path::to_path_buf);
                let err = io::Error::from(e);
                QuireError::from(ApplicationError::from_io(path, &err))
            })?;

            let relative = entry
                .path()
                .strip_prefix(&self.root)
                .map_err(|e| ApplicationError::Filesystem {
                    path: entry.path().to_path_buf(),
                    reason: e.to_string(),
                })?
                .to_path_buf();
            let metadata = entry
                .metadata()
                .map_err(|e| map_io_error(&relative, &io::Error::from(e), "read metadata"))?;

            let kind = if metadata.is_dir() {
                EntryKind::Directory
            } else {
                EntryKind::File
            };
            entries.push(EntryInfo {
                path: relative,
                kind,
                permissions: permissions_of(&metadata, kind),
            });
        }

        Ok(entries)
    }
}

#[cfg(unix)]
fn set_mode(path: &Path, permissions: Permissions) -> io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(path, fs::Permissions::from_mode(permissions.mode()))
}

#[cfg(not(unix))]
fn set_mode(_path: &Path, _permissions: Permissions) -> io::Result<()> {
    Ok(())
}

#[cfg(unix)]
fn permissions_of(metadata: &fs::Metadata, _kind: EntryKind) -> Permissions {
    use std::os::unix::fs::PermissionsExt;
    Permissions::from_mode(metadata.permissions().mode())
}

#[cfg(not(unix))]
fn permissions_of(_metadata: &fs::Metadata, kind: EntryKind) -> Permissions {
    match kind {
        EntryKind::Directory => Permissions::directory(),
        EntryKind::File => Permissions::file(),
    }
}

fn map_io_error(path: &Path, e: &io::Error, operation: &str) -> QuireError {
    if e.kind() == io::ErrorKind::NotFound {
        return ApplicationError::from_io(path, e).into();
    }
    ApplicationError::Filesystem {
        path: path.to_path_buf(),
        reason: format!("Failed to {}: {}", operation, e),
    }
    .into()
}
