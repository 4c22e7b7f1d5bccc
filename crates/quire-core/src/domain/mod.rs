//! Core domain layer for quire.
//!
//! Pure data and rules: the project configuration record, the staged project
//! layout, and the value objects that name formats and conflict policies.
//! Nothing here touches the filesystem; all I/O goes through the ports in
//! `crate::application::ports`.
pub mod entities;
pub mod error;
pub mod value_objects;

mod validation;

pub use entities::{
    Author, FileEntry, ProjectConfig, ProjectLayout,
    common::{Permissions, RelativePath},
    config::DEFAULT_VERSION,
    layout::{DirectoryToCreate, FileToWrite, LayoutEntry},
};

pub use error::{DomainError, ErrorCategory};

pub use value_objects::{ConflictPolicy, Format};

pub use validation::DomainValidator;
