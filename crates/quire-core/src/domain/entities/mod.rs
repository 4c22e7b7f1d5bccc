pub mod common;
pub mod config;
pub mod layout;

pub use crate::domain::DomainError;
pub use config::{Author, FileEntry, ProjectConfig};
pub use layout::ProjectLayout;
