//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and handed to every command.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. `QUIRE_*` environment variables, `__` between sections
//!    (`QUIRE_DEFAULTS__FORMAT=yaml`)
//! 3. Settings file (`--config FILE`, else `<config home>/quire/config.toml`)
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use config::{Config, Environment, File, FileFormat};
use quire_core::domain::{ConflictPolicy, DEFAULT_VERSION, Format};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::dirs::UserDirectories;

/// Prefix of environment overrides.
pub const ENV_PREFIX: &str = "QUIRE";

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Default values for new projects.
    pub defaults: Defaults,
    /// Output settings.
    pub output: OutputConfig,
}

/// Fallbacks for `quire create` flags the user leaves out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Defaults {
    pub format: Format,
    pub version: String,
    pub license: String,
    pub on_conflict: ConflictPolicy,
    pub strict: bool,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            format: Format::default(),
            version: DEFAULT_VERSION.to_string(),
            license: String::new(),
            on_conflict: ConflictPolicy::default(),
            strict: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
}

impl AppConfig {
    /// Layer defaults, the settings file and the environment.
    ///
    /// An explicit `config_file` must exist; the platform default is optional.
    pub fn load(
        config_file: Option<&Path>,
        dirs: &dyn UserDirectories,
    ) -> anyhow::Result<Self> {
        let defaults =
            Config::try_from(&Self::default()).context("Failed to seed built-in defaults")?;
        let mut builder = Config::builder().add_source(defaults);

        match config_file {
            Some(path) => {
                debug!(path = %path.display(), "Loading settings file");
                builder = builder.add_source(File::from(path).format(FileFormat::Toml));
            }
            None => {
                if let Some(path) = dirs.settings_file() {
                    debug!(path = %path.display(), "Loading optional settings file");
                    builder = builder.add_source(
                        File::from(path)
                            .format(FileFormat::Toml)
                            .required(false),
                    );
                }
            }
        }

        builder = builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        builder
            .build()
            .context("Failed to read configuration")?
            .try_deserialize()
            .context("Invalid configuration")
    }

    /// The settings file in effect: `--config` if given, else the platform
    /// default.
    pub fn config_path(
        config_file: Option<&Path>,
        dirs: &dyn UserDirectories,
    ) -> Option<PathBuf> {
        config_file
            .map(Path::to_path_buf)
            .or_else(|| dirs.settings_file())
    }

    /// Render as the TOML a settings file holds.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}
