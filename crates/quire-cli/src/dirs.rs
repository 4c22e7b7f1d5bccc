//! Well-known per-user directories.
//!
//! Commands never ask the OS directly; they go through [`UserDirectories`] so
//! tests can point the tool at a scratch home.

use std::path::PathBuf;

use directories::{BaseDirs, UserDirs};

/// Name of the directory quire keeps under the config home.
pub const APP_DIR: &str = "quire";

/// Locations of the user's data, config, cache and documents homes.
///
/// Any of them may be unknown on an unusual platform or a stripped-down
/// environment (no `HOME`), so every accessor is optional.
pub trait UserDirectories: Send + Sync {
    fn data_home(&self) -> Option<PathBuf>;
    fn config_home(&self) -> Option<PathBuf>;
    fn cache_home(&self) -> Option<PathBuf>;
    fn documents_home(&self) -> Option<PathBuf>;

    /// Default location of quire's settings file.
    fn settings_file(&self) -> Option<PathBuf> {
        self.config_home()
            .map(|home| home.join(APP_DIR).join("config.toml"))
    }
}

/// The platform's conventional directories (XDG on Linux, Known Folders on
/// Windows, `~/Library` on macOS), resolved once at startup.
#[derive(Debug, Clone, Default)]
pub struct PlatformDirectories {
    base: Option<BaseDirs>,
    user: Option<UserDirs>,
}

impl PlatformDirectories {
    pub fn new() -> Self {
        Self {
            base: BaseDirs::new(),
            user: UserDirs::new(),
        }
    }
}

impl UserDirectories for PlatformDirectories {
    fn data_home(&self) -> Option<PathBuf> {
        self.base.as_ref().map(|b| b.data_dir().to_path_buf())
    }

    fn config_home(&self) -> Option<PathBuf> {
        self.base.as_ref().map(|b| b.config_dir().to_path_buf())
    }

    fn cache_home(&self) -> Option<PathBuf> {
        self.base.as_ref().map(|b| b.cache_dir().to_path_buf())
    }

    fn documents_home(&self) -> Option<PathBuf> {
        self.user
            .as_ref()
            .and_then(|u| u.document_dir())
            .map(|p| p.to_path_buf())
    }
}

/// Pick the implementation for the running platform.
pub fn platform() -> Box<dyn UserDirectories> {
    Box::new(PlatformDirectories::new())
}

/// Every home under one fixed root; used by tests.
#[cfg(test)]
#[derive(Debug, Clone)]
pub struct FixedDirectories {
    pub root: PathBuf,
}

#[cfg(test)]
impl UserDirectories for FixedDirectories {
    fn data_home(&self) -> Option<PathBuf> {
        Some(self.root.join("data"))
    }

    fn config_home(&self) -> Option<PathBuf> {
        Some(self.root.join("config"))
    }

    fn cache_home(&self) -> Option<PathBuf> {
        Some(self.root.join("cache"))
    }

    fn documents_home(&self) -> Option<PathBuf> {
        Some(self.root.join("Documents"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settings_file_lives_under_config_home() {
        let dirs = FixedDirectories {
            root: PathBuf::from("/home/ada"),
        };
        assert_eq!(
            dirs.settings_file().unwrap(),
            PathBuf::from("/home/ada/config/quire/config.toml")
        );
    }

    #[test]
    fn platform_homes_are_absolute_when_known() {
        let dirs = PlatformDirectories::new();
        for home in [
            dirs.data_home(),
            dirs.config_home(),
            dirs.cache_home(),
            dirs.documents_home(),
        ]
        .into_iter()
        .flatten()
        {
            assert!(home.is_absolute(), "{} is relative", home.display());
        }
    }
}
