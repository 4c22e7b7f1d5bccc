//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `quire-adapters` implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `Filesystem`: rooted file operations
//!   - `ConfigCodec`: configuration encoding/decoding
//!   - `Staging` / `Workspace`: scratch roots for assembling a project
//!
//! - **Driving (Input) Ports**: Called by external world, implemented by application
//!   - (Defined in CLI layer, implemented by services)

pub mod output;

pub use output::{ConfigCodec, EntryInfo, EntryKind, Filesystem, Staging, Workspace};

#[cfg(test)]
pub use output::{MockConfigCodec, MockFilesystem, MockStaging};
