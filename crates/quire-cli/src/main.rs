//! # quire CLI
//!
//! Scaffolds markdown document projects.
//!
//! ## Startup sequence
//!
//! 1. Parse CLI arguments (clap handles `--help` / `--version` early-exit).
//! 2. Initialise the tracing subscriber (logging).
//! 3. Resolve user directories and load configuration (defaults, file, env).
//! 4. Build the [`OutputManager`].
//! 5. Dispatch to the appropriate command.
//! 6. Translate any [`CliError`] into a user-facing message and exit code.
//!
//! ## Exit codes
//!
//! | Code | Meaning                              |
//! |------|--------------------------------------|
//! |  0   | Success (including "already exists") |
//! |  1   | Internal / system error              |
//! |  2   | User error, conflict, invalid format |
//! |  3   | Resource not found                   |
//! |  4   | Configuration error                  |

use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, info, instrument};

use crate::{
    cli::{Cli, Commands},
    commands::{Command, Context},
    config::AppConfig,
    error::{CliError, CliResult},
    logging::init_logging,
    output::OutputManager,
};

mod cli;
mod commands;
mod config;
mod dirs;
mod error;
mod logging;
mod output;

fn main() -> ExitCode {
    // Missing .env is fine; real deployments use the environment.
    let _ = dotenvy::dotenv();

    // ── 1. Parse arguments ────────────────────────────────────────────────
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // --help and --version come through here too, with exit 0.
            let _ = e.print();
            return ExitCode::from(u8::try_from(e.exit_code()).unwrap_or(2));
        }
    };

    // ── 2. Initialise tracing ─────────────────────────────────────────────
    if let Err(e) = init_logging(&cli.global) {
        eprintln!("Failed to initialise logging: {e}");
        return ExitCode::from(1);
    }

    debug!(
        verbose = cli.global.verbose,
        quiet = cli.global.quiet,
        no_color = cli.global.no_color,
        "CLI started"
    );

    // ── 3. Load configuration ─────────────────────────────────────────────
    let dirs = dirs::platform();
    debug!(
        config_home = ?dirs.config_home(),
        data_home = ?dirs.data_home(),
        cache_home = ?dirs.cache_home(),
        documents_home = ?dirs.documents_home(),
        "User directories resolved"
    );
    let config = match AppConfig::load(cli.global.config.as_deref(), dirs.as_ref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            let err = CliError::ConfigError {
                message: format!("{e:#}"),
                source: None,
            };
            return handle_error(err, cli.global.verbose > 0);
        }
    };

    // ── 4. Build output manager ───────────────────────────────────────────
    let output = OutputManager::new(&cli.global, &config);
    let verbose = cli.global.verbose > 0;
    let ctx = Context {
        global: cli.global,
        config,
        output,
        dirs,
    };

    // ── 5. Dispatch + 6. Error handling ──────────────────────────────────
    match run(cli.command, &ctx) {
        Ok(()) => {
            info!("quire completed successfully");
            ExitCode::SUCCESS
        }
        Err(e) => handle_error(e, verbose),
    }
}

/// Dispatch to the correct command.
#[instrument(skip_all)]
fn run(command: Commands, ctx: &Context) -> CliResult<()> {
    match command {
        Commands::Create(cmd) => dispatch(cmd, ctx),
        Commands::Show(cmd) => dispatch(cmd, ctx),
        Commands::Config(cmd) => dispatch(cmd, ctx),
        Commands::Completions(cmd) => dispatch(cmd, ctx),
    }
}

fn dispatch<C: Command>(cmd: C, ctx: &Context) -> CliResult<()> {
    debug!(command = cmd.name(), "Dispatching");
    cmd.execute(ctx)
}

/// Translate a `CliError` into a user message and an exit code.
fn handle_error(err: CliError, verbose: bool) -> ExitCode {
    err.log();

    // stderr, so the message survives a redirected stdout.
    let msg = if std::io::IsTerminal::is_terminal(&std::io::stderr()) {
        err.format_colored(verbose)
    } else {
        err.format_plain(verbose)
    };
    eprint!("{msg}");

    ExitCode::from(err.exit_code())
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_version_matches_cargo() {
        let cmd = Cli::command();
        assert_eq!(cmd.get_version(), Some(env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn cli_has_author() {
        let cmd = Cli::command();
        assert!(cmd.get_author().is_some());
    }

    #[test]
    fn every_subcommand_is_dispatchable() {
        let cmd = Cli::command();
        for name in ["create", "show", "config", "completions"] {
            assert!(cmd.find_subcommand(name).is_some(), "missing {name}");
        }
    }
}
