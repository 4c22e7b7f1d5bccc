//! Replicates one filesystem tree into another.
//!
//! The merge walks `origin` depth-first, parents before children and siblings
//! in name order. Missing directories are created. Files that already exist at
//! the destination are handled by the [`ConflictPolicy`].
//!
//! The merge is not transactional: when it stops with an error, everything
//! copied before the failing path stays in the destination.

use std::path::{Path, PathBuf};
use tracing::{debug, instrument, trace};

use crate::{
    application::{
        ApplicationError,
        ports::{EntryInfo, Filesystem},
    },
    domain::ConflictPolicy,
    error::QuireResult,
};

/// What a successful merge did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergeReport {
    /// Directories that did not exist before the merge.
    pub directories_created: usize,
    pub files_copied: usize,
    pub files_overwritten: usize,
    pub files_kept: usize,
}

impl MergeReport {
    /// Files written to the destination, new or replaced.
    pub fn files_written(&self) -> usize {
        self.files_copied + self.files_overwritten
    }
}

/// Copy every entry under `base` in `origin` to the same relative path in
/// `destination`.
#[instrument(skip(origin, destination), fields(base = %base.display()))]
pub fn merge(
    origin: &dyn Filesystem,
    destination: &dyn Filesystem,
    base: &Path,
    policy: ConflictPolicy,
) -> QuireResult<MergeReport> {
    let mut report = MergeReport::default();

    for entry in origin.walk(base)? {
        if entry.is_dir() {
            let existed = destination.exists(&entry.path);
            destination.create_dir_all(&entry.path, entry.permissions)?;
            if !existed {
                report.directories_created += 1;
            }
            trace!(path = %entry.path.display(), existed, "directory ensured");
            continue;
        }

        let exists = destination.exists(&entry.path);
        if exists {
            match policy {
                ConflictPolicy::Error => {
                    return Err(ApplicationError::MergeConflict { path: entry.path }.into());
                }
                ConflictPolicy::Keep => {
                    debug!(path = %entry.path.display(), "keeping existing file");
                    report.files_kept += 1;
                    continue;
                }
                ConflictPolicy::Overwrite => {
                    debug!(path = %entry.path.display(), "overwriting existing file");
                }
            }
        }

        copy_file(origin, destination, &entry)?;
        if exists {
            report.files_overwritten += 1;
        } else {
            report.files_copied += 1;
        }
    }

    debug!(?report, "merge finished");
    Ok(report)
}

/// Origin files under `base` that already exist in `destination`. Writes
/// nothing.
pub fn find_conflicts(
    origin: &dyn Filesystem,
    destination: &dyn Filesystem,
    base: &Path,
) -> QuireResult<Vec<PathBuf>> {
    Ok(origin
        .walk(base)?
        .into_iter()
        .filter(|e| !e.is_dir() && destination.exists(&e.path))
        .map(|e| e.path)
        .collect())
}

fn copy_file(
    origin: &dyn Filesystem,
    destination: &dyn Filesystem,
    entry: &EntryInfo,
) -> QuireResult<()> {
    let content = origin.read_file(&entry.path)?;
    destination.write_file(&entry.path, &content, entry.permissions)
}
