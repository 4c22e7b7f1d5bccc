//! Subcommand implementations.
//!
//! Each subcommand's argument struct is also its executable value: it derives
//! its flag schema from [`clap::Args`] and runs through [`Command::execute`].

use std::path::PathBuf;

use crate::{
    cli::GlobalArgs, config::AppConfig, dirs::UserDirectories, error::CliResult,
    output::OutputManager,
};

pub mod completions;
pub mod config;
pub mod create;
pub mod show;

/// Everything a command may need, built once in `main`.
pub struct Context {
    pub global: GlobalArgs,
    pub config: AppConfig,
    pub output: OutputManager,
    pub dirs: Box<dyn UserDirectories>,
}

impl Context {
    /// Settings file in effect for this invocation.
    pub fn config_path(&self) -> Option<PathBuf> {
        AppConfig::config_path(self.global.config.as_deref(), self.dirs.as_ref())
    }
}

/// A runnable subcommand.
pub trait Command: clap::Args {
    /// Name shown in logs.
    fn name(&self) -> &'static str;

    fn execute(self, ctx: &Context) -> CliResult<()>;
}
