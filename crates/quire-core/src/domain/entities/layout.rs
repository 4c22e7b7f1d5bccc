use std::collections::HashSet;

use crate::domain::{
    entities::common::{Permissions, RelativePath},
    error::DomainError,
    value_objects::Format,
};

/// Directory holding the document sources.
pub const SOURCE_DIR: &str = "src";
/// Directory holding images and other assets.
pub const RESOURCES_DIR: &str = "resources";
/// Placeholder document created inside [`SOURCE_DIR`].
pub const MAIN_DOCUMENT: &str = "main.md";

/// The set of entries staged for a new project.
///
/// Pure data: it says what to create, not how. Directories appear before the
/// files inside them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectLayout {
    pub(crate) entries: Vec<LayoutEntry>,
}

impl ProjectLayout {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// The standard document project: the configuration file, `src/`,
    /// `src/main.md` (empty) and `resources/`.
    pub fn document_project(
        project_name: &str,
        format: Format,
        config_bytes: Vec<u8>,
    ) -> Result<Self, DomainError> {
        let config_file = RelativePath::try_new(format.file_name(project_name))?;
        let src = RelativePath::try_new(SOURCE_DIR)?;
        let main = src.join(MAIN_DOCUMENT)?;
        let resources = RelativePath::try_new(RESOURCES_DIR)?;

        let layout = Self::new()
            .with_file(config_file, config_bytes, Permissions::file())
            .with_directory(src, Permissions::directory())
            .with_file(main, Vec::new(), Permissions::file())
            .with_directory(resources, Permissions::directory());

        layout.validate()?;
        Ok(layout)
    }

    pub fn add_file(&mut self, path: RelativePath, content: Vec<u8>, perms: Permissions) {
        self.entries.push(LayoutEntry::File(FileToWrite {
            path,
            content,
            permissions: perms,
        }));
    }

    pub fn add_directory(&mut self, path: RelativePath, perms: Permissions) {
        self.entries.push(LayoutEntry::Directory(DirectoryToCreate {
            path,
            permissions: perms,
        }));
    }

    pub fn with_file(mut self, path: RelativePath, content: Vec<u8>, perms: Permissions) -> Self {
        self.add_file(path, content, perms);
        self
    }

    pub fn with_directory(mut self, path: RelativePath, perms: Permissions) -> Self {
        self.add_directory(path, perms);
        self
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        if self.entries.is_empty() {
            return Err(DomainError::EmptyLayout);
        }

        let mut seen = HashSet::new();
        for entry in &self.entries {
            let path = entry.path();
            if !seen.insert(path.clone()) {
                return Err(DomainError::DuplicatePath {
                    path: path.to_string(),
                });
            }
        }

        Ok(())
    }

    pub fn entries(&self) -> &[LayoutEntry] {
        &self.entries
    }

    pub fn files(&self) -> impl Iterator<Item = &FileToWrite> {
        self.entries.iter().filter_map(|e| match e {
            LayoutEntry::File(f) => Some(f),
            _ => None,
        })
    }

    pub fn directories(&self) -> impl Iterator<Item = &DirectoryToCreate> {
        self.entries.iter().filter_map(|e| match e {
            LayoutEntry::Directory(d) => Some(d),
            _ => None,
        })
    }

    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }
}

impl Default for ProjectLayout {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutEntry {
    File(FileToWrite),
    Directory(DirectoryToCreate),
}

impl LayoutEntry {
    pub fn path(&self) -> &RelativePath {
        match self {
            Self::File(f) => &f.path,
            Self::Directory(d) => &d.path,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileToWrite {
    pub path: RelativePath,
    pub content: Vec<u8>,
    pub permissions: Permissions,
}

impl FileToWrite {
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryToCreate {
    pub path: RelativePath,
    pub permissions: Permissions,
}
