//! Application layer for quire.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (ScaffoldService, the merger)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! business rules itself. Those live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{CreateOptions, CreateOutcome, MergeReport, PreviewOutcome, ScaffoldService};

// Re-export port traits (for adapter implementation)
pub use ports::{ConfigCodec, EntryInfo, EntryKind, Filesystem, Staging, Workspace};

pub use error::ApplicationError;
