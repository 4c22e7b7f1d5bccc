//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "create a project" or "load a configuration".

pub mod merger;
pub mod scaffold_service;

pub use merger::{MergeReport, find_conflicts, merge};
pub use scaffold_service::{CreateOptions, CreateOutcome, PreviewOutcome, ScaffoldService};
