//! The project configuration record.
//!
//! A [`ProjectConfig`] holds one project's metadata. Its three collections
//! behave as ordered sets:
//!
//! | collection | key              |
//! |------------|------------------|
//! | `license`  | the string value |
//! | `authors`  | `Author::name`   |
//! | `files`    | `FileEntry::name`|
//!
//! The collections are private; the only way to change them is through the
//! `add_*` / `remove_*` methods, which keep keys unique. Duplicates are
//! rejected by returning `false`, never by an error.

use serde::{Deserialize, Serialize};

/// Version used when none is given.
pub const DEFAULT_VERSION: &str = "0.0.1";

fn default_version() -> String {
    DEFAULT_VERSION.to_string()
}

/// Project metadata persisted as the configuration document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "ConfigDocument")]
pub struct ProjectConfig {
    name: String,
    version: String,
    description: String,
    license: Vec<String>,
    authors: Vec<Author>,
    files: Vec<FileEntry>,
}

impl ProjectConfig {
    /// Create a configuration with empty collections.
    pub fn new(
        name: impl Into<String>,
        version: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            description: description.into(),
            license: Vec::new(),
            authors: Vec::new(),
            files: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn licenses(&self) -> &[String] {
        &self.license
    }

    pub fn authors(&self) -> &[Author] {
        &self.authors
    }

    pub fn files(&self) -> &[FileEntry] {
        &self.files
    }

    // ── license ──────────────────────────────────────────────────────────

    /// Add a license; returns `false` if it is already present.
    pub fn add_license(&mut self, license: impl Into<String>) -> bool {
        let license = license.into();
        if self.contains_license(&license) {
            return false;
        }
        self.license.push(license);
        true
    }

    /// Remove a license; returns `false` if it was not present.
    pub fn remove_license(&mut self, license: &str) -> bool {
        let before = self.license.len();
        self.license.retain(|l| l != license);
        self.license.len() != before
    }

    pub fn contains_license(&self, license: &str) -> bool {
        self.license.iter().any(|l| l == license)
    }

    // ── authors ──────────────────────────────────────────────────────────

    /// Add an author; returns `false` if an author with the same name exists.
    pub fn add_author(&mut self, author: Author) -> bool {
        if self.contains_author(&author) {
            return false;
        }
        self.authors.push(author);
        true
    }

    /// Remove the author sharing `author`'s name.
    pub fn remove_author(&mut self, author: &Author) -> bool {
        let before = self.authors.len();
        self.authors.retain(|a| a.name != author.name);
        self.authors.len() != before
    }

    /// Membership by name; `url` and `email` are ignored.
    pub fn contains_author(&self, author: &Author) -> bool {
        self.authors.iter().any(|a| a.name == author.name)
    }

    // ── files ────────────────────────────────────────────────────────────

    /// Add a file entry; returns `false` if an entry with the same name exists.
    pub fn add_file(&mut self, file: FileEntry) -> bool {
        if self.contains_file(&file) {
            return false;
        }
        self.files.push(file);
        true
    }

    /// Remove the file entry sharing `file`'s name.
    pub fn remove_file(&mut self, file: &FileEntry) -> bool {
        let before = self.files.len();
        self.files.retain(|f| f.name != file.name);
        self.files.len() != before
    }

    /// Membership by name; `output` and `path` are ignored.
    pub fn contains_file(&self, file: &FileEntry) -> bool {
        self.files.iter().any(|f| f.name == file.name)
    }
}

/// A package author, keyed by name.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Author {
    pub name: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub email: String,
}

impl Author {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }
}

/// A named build root: source `path` rendered to `output`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FileEntry {
    pub name: String,
    #[serde(default)]
    pub output: String,
    #[serde(default)]
    pub path: String,
}

impl FileEntry {
    pub fn new(
        name: impl Into<String>,
        output: impl Into<String>,
        path: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            output: output.into(),
            path: path.into(),
        }
    }
}

/// Wire shape of a stored document, before the set invariants are applied.
#[derive(Deserialize)]
struct ConfigDocument {
    name: String,
    #[serde(default = "default_version")]
    version: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    license: Vec<String>,
    #[serde(default)]
    authors: Vec<Author>,
    #[serde(default)]
    files: Vec<FileEntry>,
}

impl From<ConfigDocument> for ProjectConfig {
    // Repeated keys in a stored document keep their first occurrence.
    fn from(doc: ConfigDocument) -> Self {
        let mut config = ProjectConfig::new(doc.name, doc.version, doc.description);
        for license in doc.license {
            config.add_license(license);
        }
        for author in doc.authors {
            config.add_author(author);
        }
        for file in doc.files {
            config.add_file(file);
        }
        config
    }
}
