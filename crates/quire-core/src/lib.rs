//! quire core - hexagonal architecture implementation
//!
//! This crate provides the domain and application layers for the quire
//! document project scaffolder, following hexagonal (ports and adapters)
//! architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │             quire-cli (CLI)             │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │          Application Services           │
//! │      (ScaffoldService, merge)           │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Application Ports (Traits)       │
//! │   (Filesystem, ConfigCodec, Staging)    │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     quire-adapters (Infrastructure)     │
//! │ (LocalFilesystem, SerdeCodec, staging)  │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use quire_core::prelude::*;
//!
//! let service = ScaffoldService::new(codec, staging, destination);
//! let outcome = service.create(&CreateOptions::new("thesis").with_format(Format::Yaml))?;
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        CreateOptions, CreateOutcome, MergeReport, PreviewOutcome, ScaffoldService,
        ports::{ConfigCodec, Filesystem, Staging, Workspace},
    };
    pub use crate::domain::{Author, ConflictPolicy, FileEntry, Format, ProjectConfig};
    pub use crate::error::{QuireError, QuireResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
