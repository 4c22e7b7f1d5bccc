//! Scaffold Service - main application orchestrator.
//!
//! This service coordinates the whole create workflow:
//! 1. Check the destination for an existing configuration
//! 2. Build and encode the configuration
//! 3. Stage the project layout in a scratch workspace
//! 4. Merge the workspace into the destination
//! 5. Release the workspace, whatever happened in 3 and 4

use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument, warn};

use crate::{
    application::{
        ApplicationError,
        ports::{ConfigCodec, Filesystem, Staging},
        services::merger::{self, MergeReport},
    },
    domain::{
        ConflictPolicy, DEFAULT_VERSION, DomainValidator as validator, Format, LayoutEntry,
        ProjectConfig, ProjectLayout,
    },
    error::QuireResult,
};

/// Inputs to [`ScaffoldService::create`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateOptions {
    pub name: String,
    pub version: String,
    pub description: String,
    /// Added to the configuration only when non-empty.
    pub license: String,
    pub format: Format,
    /// Fail instead of doing nothing when a configuration already exists.
    pub strict: bool,
    pub policy: ConflictPolicy,
}

impl CreateOptions {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: DEFAULT_VERSION.to_string(),
            description: String::new(),
            license: String::new(),
            format: Format::default(),
            strict: false,
            policy: ConflictPolicy::default(),
        }
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_license(mut self, license: impl Into<String>) -> Self {
        self.license = license.into();
        self
    }

    pub fn with_format(mut self, format: Format) -> Self {
        self.format = format;
        self
    }

    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn with_policy(mut self, policy: ConflictPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// The configuration these options describe.
    pub fn to_config(&self) -> ProjectConfig {
        let mut config = ProjectConfig::new(&self.name, &self.version, &self.description);
        if !self.license.is_empty() {
            config.add_license(&self.license);
        }
        config
    }

    /// File name of the configuration document these options produce.
    pub fn config_file(&self) -> PathBuf {
        PathBuf::from(self.format.file_name(&self.name))
    }
}

/// Result of a create run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CreateOutcome {
    /// The project was staged and merged into the destination.
    Created {
        config_file: PathBuf,
        report: MergeReport,
    },
    /// A configuration was already present; nothing was written.
    AlreadyExists { path: PathBuf },
}

/// What [`ScaffoldService::create`] would do with the same options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PreviewOutcome {
    /// The project would be merged in; `conflicts` are files already present.
    WouldCreate { conflicts: Vec<PathBuf> },
    /// A configuration is already present; create would write nothing.
    AlreadyExists { path: PathBuf },
}

/// Main scaffolding service.
pub struct ScaffoldService {
    codec: Box<dyn ConfigCodec>,
    staging: Box<dyn Staging>,
    destination: Box<dyn Filesystem>,
}

impl ScaffoldService {
    /// Create a new scaffold service with the given adapters.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use quire_core::application::{CreateOptions, ScaffoldService};
    ///
    /// let service = ScaffoldService::new(
    ///     codec,       // impl ConfigCodec
    ///     staging,     // impl Staging
    ///     destination, // impl Filesystem
    /// );
    /// service.create(&CreateOptions::new("example"))?;
    /// ```
    pub fn new(
        codec: Box<dyn ConfigCodec>,
        staging: Box<dyn Staging>,
        destination: Box<dyn Filesystem>,
    ) -> Self {
        Self {
            codec,
            staging,
            destination,
        }
    }

    /// Scaffold a new project into the destination.
    #[instrument(
        skip_all,
        fields(
            project = %options.name,
            format = %options.format,
            policy = %options.policy
        )
    )]
    pub fn create(&self, options: &CreateOptions) -> QuireResult<CreateOutcome> {
        validator::validate_project_name(&options.name)?;

        if let Some(path) = self.existing_config(options)? {
            info!(path = %path.display(), "Configuration already exists, nothing to do");
            return Ok(CreateOutcome::AlreadyExists { path });
        }

        let layout = self.layout_for(options)?;
        let report = self.with_workspace(|staged| {
            stage(staged, &layout)?;
            merger::merge(staged, self.destination.as_ref(), Path::new(""), options.policy)
        })?;

        info!(
            files = report.files_written(),
            kept = report.files_kept,
            "Project created"
        );
        Ok(CreateOutcome::Created {
            config_file: options.config_file(),
            report,
        })
    }

    /// Dry run of [`Self::create`]: same checks and the same errors, but
    /// the destination is only read.
    #[instrument(skip_all, fields(project = %options.name))]
    pub fn preview(&self, options: &CreateOptions) -> QuireResult<PreviewOutcome> {
        validator::validate_project_name(&options.name)?;

        if let Some(path) = self.existing_config(options)? {
            return Ok(PreviewOutcome::AlreadyExists { path });
        }

        let layout = self.layout_for(options)?;
        let conflicts = self.with_workspace(|staged| {
            stage(staged, &layout)?;
            merger::find_conflicts(staged, self.destination.as_ref(), Path::new(""))
        })?;
        Ok(PreviewOutcome::WouldCreate { conflicts })
    }

    /// Read a configuration document from the destination. The format comes
    /// from the file extension.
    #[instrument(skip(self))]
    pub fn load(&self, path: &Path) -> QuireResult<ProjectConfig> {
        let format = Format::from_path(path)?;
        let bytes = self.destination.read_file(path)?;
        self.codec.decode(&bytes, format)
    }

    /// Render a configuration with this service's codec.
    pub fn encode(&self, config: &ProjectConfig, format: Format) -> QuireResult<Vec<u8>> {
        self.codec.encode(config, format)
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    /// The configuration already at the destination, if any. Strict runs
    /// turn it into [`ApplicationError::ConfigExists`].
    fn existing_config(&self, options: &CreateOptions) -> QuireResult<Option<PathBuf>> {
        let found = Format::ALL
            .iter()
            .map(|f| PathBuf::from(f.file_name(&options.name)))
            .find(|p| self.destination.is_file(p));

        match found {
            Some(path) if options.strict => Err(ApplicationError::ConfigExists { path }.into()),
            found => Ok(found),
        }
    }

    fn layout_for(&self, options: &CreateOptions) -> QuireResult<ProjectLayout> {
        let bytes = self.codec.encode(&options.to_config(), options.format)?;
        Ok(ProjectLayout::document_project(
            &options.name,
            options.format,
            bytes,
        )?)
    }

    /// Run `f` against a fresh workspace, releasing it afterwards.
    fn with_workspace<T>(
        &self,
        f: impl FnOnce(&dyn Filesystem) -> QuireResult<T>,
    ) -> QuireResult<T> {
        let workspace = self.staging.acquire()?;
        if let Some(location) = workspace.location() {
            debug!(location = %location.display(), "Staging workspace acquired");
        }

        let result = f(workspace.filesystem());

        if let Err(e) = workspace.release() {
            warn!(error = %e, "Failed to release staging workspace");
        }
        result
    }
}

fn stage(fs: &dyn Filesystem, layout: &ProjectLayout) -> QuireResult<()> {
    for entry in layout.entries() {
        match entry {
            LayoutEntry::Directory(dir) => {
                fs.create_dir_all(dir.path.as_path(), dir.permissions)?;
            }
            LayoutEntry::File(file) => {
                fs.write_file(file.path.as_path(), &file.content, file.permissions)?;
            }
        }
    }
    debug!(entries = layout.entry_count(), "Layout staged");
    Ok(())
}
