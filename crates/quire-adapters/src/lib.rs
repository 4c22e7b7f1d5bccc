//! Infrastructure adapters for quire.
//!
//! This crate implements the ports defined in `quire-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod codec;
pub mod filesystem;
pub mod staging;

// Re-export commonly used adapters
pub use codec::SerdeCodec;
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use staging::{MemoryStaging, TempDirStaging};
