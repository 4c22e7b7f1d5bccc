//! `quire show`: decode a configuration document and print it.

use std::path::{Path, PathBuf};

use quire_adapters::{LocalFilesystem, SerdeCodec, TempDirStaging};
use quire_core::{application::ScaffoldService, domain::Format, error::QuireError};
use tracing::debug;

use super::{Command, Context};
use crate::{
    cli::ShowArgs,
    error::{CliError, CliResult},
};

impl Command for ShowArgs {
    fn name(&self) -> &'static str {
        "show"
    }

    fn execute(self, ctx: &Context) -> CliResult<()> {
        let (dir, file) = split(&self.file)?;
        let service = ScaffoldService::new(
            Box::new(SerdeCodec::new()),
            Box::new(TempDirStaging::new()),
            Box::new(LocalFilesystem::new(dir)),
        );

        let config = service.load(&file)?;
        let format = match self.format {
            Some(format) => format,
            None => Format::from_path(&file).map_err(QuireError::from)?,
        };
        debug!(project = config.name(), %format, "Rendering configuration");

        let bytes = service.encode(&config, format)?;
        ctx.output.data(&String::from_utf8_lossy(&bytes))?;
        Ok(())
    }
}

/// Split a user path into the directory to root the filesystem at and the
/// file name inside it.
fn split(path: &Path) -> CliResult<(PathBuf, PathBuf)> {
    let file = path.file_name().ok_or_else(|| CliError::InvalidInput {
        message: format!("'{}' does not name a file", path.display()),
        source: None,
    })?;
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    Ok((dir, PathBuf::from(file)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_file_names_resolve_against_the_working_directory() {
        let (dir, file) = split(Path::new("book.toml")).unwrap();
        assert_eq!(dir, PathBuf::from("."));
        assert_eq!(file, PathBuf::from("book.toml"));
    }

    #[test]
    fn nested_paths_split_at_the_last_component() {
        let (dir, file) = split(Path::new("projects/book/book.yaml")).unwrap();
        assert_eq!(dir, PathBuf::from("projects/book"));
        assert_eq!(file, PathBuf::from("book.yaml"));
    }

    #[test]
    fn paths_without_a_file_name_are_rejected() {
        assert!(matches!(
            split(Path::new("..")),
            Err(CliError::InvalidInput { .. })
        ));
    }
}
