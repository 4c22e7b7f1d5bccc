//! `quire config`: inspect and initialise the settings file.

use std::fs;

use tracing::info;

use super::{Command, Context};
use crate::{
    cli::{ConfigArgs, ConfigCommands},
    config::AppConfig,
    error::{CliError, CliResult, IntoCli},
};

impl Command for ConfigArgs {
    fn name(&self) -> &'static str {
        match self.action {
            ConfigCommands::Get { .. } => "config get",
            ConfigCommands::List => "config list",
            ConfigCommands::Path => "config path",
            ConfigCommands::Init { .. } => "config init",
        }
    }

    fn execute(self, ctx: &Context) -> CliResult<()> {
        match self.action {
            ConfigCommands::Get { key } => {
                let value = get_config_value(&ctx.config, &key)?;
                ctx.output.data(&value)?;
            }

            ConfigCommands::List => {
                let rendered = ctx.config.to_toml().map_err(|e| CliError::ConfigError {
                    message: format!("Failed to serialise config: {e}"),
                    source: Some(Box::new(e)),
                })?;
                ctx.output.header("Current Configuration:")?;
                ctx.output.data(&rendered)?;
            }

            ConfigCommands::Path => {
                let path = require_config_path(ctx)?;
                ctx.output.data(&path.display().to_string())?;
            }

            ConfigCommands::Init { force } => init(ctx, force)?,
        }

        Ok(())
    }
}

/// Write the built-in defaults to the settings file.
fn init(ctx: &Context, force: bool) -> CliResult<()> {
    let path = require_config_path(ctx)?;
    if path.exists() && !force {
        return Err(CliError::SettingsExist { path });
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_cli_context(|| format!("Failed to create {}", parent.display()))?;
    }

    let rendered = AppConfig::default()
        .to_toml()
        .map_err(|e| CliError::ConfigError {
            message: format!("Failed to serialise defaults: {e}"),
            source: Some(Box::new(e)),
        })?;
    fs::write(&path, rendered)
        .with_cli_context(|| format!("Failed to write {}", path.display()))?;

    info!(path = %path.display(), "Settings file written");
    ctx.output
        .success(&format!("Wrote default settings to {}", path.display()))?;
    Ok(())
}

fn require_config_path(ctx: &Context) -> CliResult<std::path::PathBuf> {
    ctx.config_path().ok_or_else(|| CliError::ConfigError {
        message: "No config directory is known for this user; pass --config FILE".into(),
        source: None,
    })
}

// ── helpers ───────────────────────────────────────────────────────────────────

fn get_config_value(config: &AppConfig, key: &str) -> CliResult<String> {
    let defaults = &config.defaults;
    match key {
        "defaults.format" => Ok(defaults.format.to_string()),
        "defaults.version" => Ok(defaults.version.clone()),
        "defaults.license" => Ok(defaults.license.clone()),
        "defaults.on_conflict" => Ok(defaults.on_conflict.to_string()),
        "defaults.strict" => Ok(defaults.strict.to_string()),
        "output.no_color" => Ok(config.output.no_color.to_string()),
        _ => Err(CliError::ConfigError {
            message: format!("Unknown config key: '{key}'"),
            source: None,
        }),
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::GlobalArgs;
    use crate::dirs::FixedDirectories;
    use crate::output::OutputManager;
    use tempfile::TempDir;

    fn context(root: &std::path::Path) -> Context {
        let global = GlobalArgs {
            quiet: true,
            ..GlobalArgs::default()
        };
        let config = AppConfig::default();
        Context {
            output: OutputManager::new(&global, &config),
            global,
            config,
            dirs: Box::new(FixedDirectories {
                root: root.to_path_buf(),
            }),
        }
    }

    #[test]
    fn get_known_keys() {
        let cfg = AppConfig::default();
        assert_eq!(get_config_value(&cfg, "defaults.format").unwrap(), "toml");
        assert_eq!(get_config_value(&cfg, "defaults.version").unwrap(), "0.0.1");
        assert_eq!(
            get_config_value(&cfg, "defaults.on_conflict").unwrap(),
            "overwrite"
        );
        assert_eq!(get_config_value(&cfg, "output.no_color").unwrap(), "false");
    }

    #[test]
    fn get_unknown_key_is_error() {
        let cfg = AppConfig::default();
        assert!(matches!(
            get_config_value(&cfg, "does.not.exist"),
            Err(CliError::ConfigError { .. })
        ));
    }

    #[test]
    fn init_writes_defaults_once() {
        let temp = TempDir::new().unwrap();
        let ctx = context(temp.path());
        let path = ctx.dirs.settings_file().unwrap();

        init(&ctx, false).unwrap();
        let written = fs::read_to_string(&path).unwrap();
        assert!(written.contains("[defaults]"));
        assert!(written.contains("format = \"toml\""));

        assert!(matches!(
            init(&ctx, false),
            Err(CliError::SettingsExist { .. })
        ));
        init(&ctx, true).unwrap();
    }

    #[test]
    fn init_honours_the_config_flag() {
        let temp = TempDir::new().unwrap();
        let mut ctx = context(temp.path());
        let custom = temp.path().join("elsewhere").join("quire.toml");
        ctx.global.config = Some(custom.clone());

        init(&ctx, false).unwrap();
        assert!(custom.is_file());
        assert!(!ctx.dirs.settings_file().unwrap().exists());
    }
}
