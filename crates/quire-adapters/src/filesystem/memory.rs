//! In-memory filesystem adapter for testing.

use std::{
    collections::BTreeMap,
    path::{Component, Path, PathBuf},
    sync::{Arc, RwLock},
};

use quire_core::{
    application::{ApplicationError, EntryInfo, EntryKind, ports::Filesystem},
    domain::Permissions,
    error::QuireResult,
};

/// In-memory filesystem for testing.
///
/// Clones share the same tree. Keys are ordered component-wise, which is
/// exactly depth-first pre-order with siblings sorted by name.
#[derive(Debug, Clone, Default)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<BTreeMap<PathBuf, Node>>>,
}

#[derive(Debug, Clone)]
struct Node {
    kind: EntryKind,
    content: Vec<u8>,
    permissions: Permissions,
}

fn normalize(path: &Path) -> PathBuf {
    path.components()
        .filter(|c| !matches!(c, Component::CurDir))
        .collect()
}

fn fs_error(path: &Path, reason: &str) -> ApplicationError {
    ApplicationError::Filesystem {
        path: path.to_path_buf(),
        reason: reason.into(),
    }
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self::default()
    }

    /// A file's content as text (testing helper).
    pub fn read_to_string(&self, path: &Path) -> Option<String> {
        let inner = self.inner.read().ok()?;
        let node = inner.get(&normalize(path))?;
        (node.kind == EntryKind::File).then(|| String::from_utf8_lossy(&node.content).into_owned())
    }

    /// Permissions recorded for a path.
    pub fn permissions(&self, path: &Path) -> Option<Permissions> {
        let inner = self.inner.read().ok()?;
        inner.get(&normalize(path)).map(|n| n.permissions)
    }

    pub fn is_dir(&self, path: &Path) -> bool {
        self.inner.read().is_ok_and(|inner| {
            inner
                .get(&normalize(path))
                .is_some_and(|n| n.kind == EntryKind::Directory)
        })
    }

    /// Every path, in walk order.
    pub fn paths(&self) -> Vec<PathBuf> {
        self.inner
            .read()
            .map(|inner| inner.keys().cloned().collect())
            .unwrap_or_default()
    }

    /// Clear all contents.
    pub fn clear(&self) -> QuireResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::FilesystemLock)?;
        inner.clear();
        Ok(())
    }
}

impl Filesystem for MemoryFilesystem {
    fn create_dir_all(&self, path: &Path, permissions: Permissions) -> QuireResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::FilesystemLock)?;

        let mut current = PathBuf::new();
        for component in normalize(path).components() {
            current.push(component);
            match inner.get(&current) {
                Some(node) if node.kind == EntryKind::File => {
                    return Err(fs_error(&current, "Not a directory").into());
                }
                Some(_) => {}
                None => {
                    inner.insert(
                        current.clone(),
                        Node {
                            kind: EntryKind::Directory,
                            content: Vec::new(),
                            permissions,
                        },
                    );
                }
            }
        }

        Ok(())
    }

    fn write_file(&self, path: &Path, content: &[u8], permissions: Permissions) -> QuireResult<()> {
        let path = normalize(path);
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::FilesystemLock)?;

        // Ensure parent exists
        if let Some(parent) = path.parent() {
            let parent_is_dir = inner
                .get(parent)
                .is_some_and(|n| n.kind == EntryKind::Directory);
            if !parent.as_os_str().is_empty() && !parent_is_dir {
                return Err(fs_error(&path, "Parent directory does not exist").into());
            }
        }
        if inner
            .get(&path)
            .is_some_and(|n| n.kind == EntryKind::Directory)
        {
            return Err(fs_error(&path, "Is a directory").into());
        }

        inner.insert(
            path,
            Node {
                kind: EntryKind::File,
                content: content.to_vec(),
                permissions,
            },
        );
        Ok(())
    }

    fn read_file(&self, path: &Path) -> QuireResult<Vec<u8>> {
        let path = normalize(path);
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::FilesystemLock)?;

        match inner.get(&path) {
            Some(node) if node.kind == EntryKind::File => Ok(node.content.clone()),
            Some(_) => Err(fs_error(&path, "Is a directory").into()),
            None => Err(ApplicationError::NotFound { path }.into()),
        }
    }

    fn exists(&self, path: &Path) -> bool {
        self.inner
            .read()
            .is_ok_and(|inner| inner.contains_key(&normalize(path)))
    }

    fn is_file(&self, path: &Path) -> bool {
        self.inner.read().is_ok_and(|inner| {
            inner
                .get(&normalize(path))
                .is_some_and(|n| n.kind == EntryKind::File)
        })
    }

    fn walk(&self, base: &Path) -> QuireResult<Vec<EntryInfo>> {
        let base = normalize(base);
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::FilesystemLock)?;

        if !base.as_os_str().is_empty() && !inner.contains_key(&base) {
            return Err(ApplicationError::NotFound { path: base }.into());
        }

        Ok(inner
            .range(base.clone()..)
            .take_while(|(p, _)| p.starts_with(&base))
            .map(|(p, node)| EntryInfo {
                path: p.clone(),
                kind: node.kind,
                permissions: node.permissions,
            })
            .collect())
    }
}
