//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! and help text.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use quire_core::domain::{ConflictPolicy, DomainError, Format};

pub mod global;
pub use global::GlobalArgs;

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "quire",
    bin_name = "quire",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Scaffold markdown document projects",
    long_about = "Quire writes a project configuration (JSON, YAML or TOML) \
                  together with the src/ and resources/ skeleton of a \
                  markdown document project.",
    after_help = "EXAMPLES:\n\
        \x20 quire create --name my-book\n\
        \x20 quire create --name thesis --format yaml --license CC-BY-4.0 --output ./thesis\n\
        \x20 quire show thesis/thesis.yaml --format json\n\
        \x20 quire completions bash > /usr/share/bash-completion/completions/quire",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Scaffold a new document project.
    #[command(
        visible_alias = "new",
        about = "Create a new document project",
        after_help = "EXAMPLES:\n\
            \x20 quire create --name my-book\n\
            \x20 quire create --name my-book --format json --strict\n\
            \x20 quire create --name my-book --on-conflict keep --dry-run"
    )]
    Create(CreateArgs),

    /// Decode a configuration document and print it.
    #[command(
        about = "Print a project configuration",
        after_help = "EXAMPLES:\n\
            \x20 quire show my-book.toml\n\
            \x20 quire show my-book.toml --format yaml"
    )]
    Show(ShowArgs),

    /// Manage quire's own settings.
    #[command(about = "Manage quire settings")]
    Config(ConfigArgs),

    /// Generate shell completion scripts.
    #[command(about = "Generate shell completions")]
    Completions(CompletionsArgs),
}

// ── create ────────────────────────────────────────────────────────────────────

/// Arguments for `quire create`.
#[derive(Debug, Clone, Args)]
pub struct CreateArgs {
    /// Project name; also the stem of the configuration file.
    #[arg(short = 'n', long = "name", value_name = "NAME", help = "Project name")]
    pub name: String,

    /// Project version written to the configuration.
    #[arg(
        long = "version",
        value_name = "VERSION",
        help = "Project version (default: 0.0.1)"
    )]
    pub project_version: Option<String>,

    #[arg(
        short = 'd',
        long = "description",
        value_name = "TEXT",
        help = "Project description"
    )]
    pub description: Option<String>,

    #[arg(
        short = 'l',
        long = "license",
        value_name = "LICENSE",
        help = "License identifier, e.g. MIT"
    )]
    pub license: Option<String>,

    /// Configuration file format.
    #[arg(
        short = 'f',
        long = "format",
        value_name = "FORMAT",
        value_parser = parse_format,
        help = "Configuration format: json, yaml or toml (default: toml)"
    )]
    pub format: Option<Format>,

    /// Fail when a configuration for this project already exists.
    #[arg(
        long = "strict",
        overrides_with = "no_strict",
        help = "Fail if the project already exists"
    )]
    pub strict: bool,

    /// Turn off `defaults.strict` from the settings file.
    #[arg(
        long = "no-strict",
        overrides_with = "strict",
        help = "Do nothing if the project already exists"
    )]
    pub no_strict: bool,

    /// What to do when a scaffolded file is already present.
    #[arg(
        long = "on-conflict",
        value_name = "POLICY",
        value_parser = parse_policy,
        help = "Conflict policy: error, keep or overwrite (default: overwrite)"
    )]
    pub on_conflict: Option<ConflictPolicy>,

    /// Destination directory.
    #[arg(
        short = 'o',
        long = "output",
        value_name = "DIR",
        help = "Output directory (default: current directory)"
    )]
    pub output: Option<PathBuf>,

    /// Preview what would be created without writing any files.
    #[arg(long = "dry-run", help = "Show what would be created without creating")]
    pub dry_run: bool,
}

// ── show ──────────────────────────────────────────────────────────────────────

/// Arguments for `quire show`.
#[derive(Debug, Clone, Args)]
pub struct ShowArgs {
    /// Configuration document to read; its extension selects the decoder.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Re-encode in this format instead of the file's own.
    #[arg(
        short = 'f',
        long = "format",
        value_name = "FORMAT",
        value_parser = parse_format,
        help = "Output format: json, yaml or toml"
    )]
    pub format: Option<Format>,
}

// ── config ────────────────────────────────────────────────────────────────────

/// Arguments for `quire config`.
#[derive(Debug, Clone, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigCommands,
}

/// Subcommands for `quire config`.
#[derive(Debug, Clone, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `defaults.format`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
    /// Write a settings file holding the built-in defaults.
    Init {
        /// Overwrite an existing settings file.
        #[arg(long = "force", help = "Overwrite existing configuration")]
        force: bool,
    },
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `quire completions`.
#[derive(Debug, Clone, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── value parsers ─────────────────────────────────────────────────────────────

fn parse_format(value: &str) -> Result<Format, DomainError> {
    value.parse()
}

fn parse_policy(value: &str) -> Result<ConflictPolicy, DomainError> {
    value.parse()
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::{CommandFactory, Parser};

    #[test]
    fn verify_cli_structure() {
        Cli::command().debug_assert();
    }

    #[test]
    fn create_parses_every_flag() {
        let cli = Cli::try_parse_from([
            "quire",
            "create",
            "--name",
            "book",
            "--version",
            "1.2.0",
            "--description",
            "A book",
            "--license",
            "MIT",
            "--format",
            "YAML",
            "--strict",
            "--on-conflict",
            "keep",
            "--output",
            "out",
            "--dry-run",
        ])
        .unwrap();

        let Commands::Create(args) = cli.command else {
            panic!("expected create");
        };
        assert_eq!(args.name, "book");
        assert_eq!(args.project_version.as_deref(), Some("1.2.0"));
        assert_eq!(args.format, Some(Format::Yaml));
        assert_eq!(args.on_conflict, Some(ConflictPolicy::Keep));
        assert_eq!(args.output, Some(PathBuf::from("out")));
        assert!(args.strict && args.dry_run);
    }

    #[test]
    fn new_is_an_alias_for_create() {
        let cli = Cli::try_parse_from(["quire", "new", "--name", "book"]).unwrap();
        assert!(matches!(cli.command, Commands::Create(_)));
    }

    #[test]
    fn unknown_format_is_rejected() {
        let err = Cli::try_parse_from(["quire", "create", "--name", "x", "--format", "xml"])
            .unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
    }

    #[test]
    fn last_strictness_flag_wins() {
        let parse = |flags: &[&str]| {
            let mut argv = vec!["quire", "create", "--name", "book"];
            argv.extend_from_slice(flags);
            match Cli::try_parse_from(argv).unwrap().command {
                Commands::Create(args) => (args.strict, args.no_strict),
                _ => panic!("expected create"),
            }
        };

        assert_eq!(parse(&["--no-strict"]), (false, true));
        assert_eq!(parse(&["--no-strict", "--strict"]), (true, false));
        assert_eq!(parse(&["--strict", "--no-strict"]), (false, true));
    }

    #[test]
    fn create_requires_a_name() {
        assert!(Cli::try_parse_from(["quire", "create"]).is_err());
    }

    #[test]
    fn global_flags_follow_subcommands() {
        let cli = Cli::try_parse_from(["quire", "show", "a.toml", "-vv", "--no-color"]).unwrap();
        assert_eq!(cli.global.verbose, 2);
        assert!(cli.global.no_color);
    }

    #[test]
    fn quiet_conflicts_with_verbose() {
        assert!(Cli::try_parse_from(["quire", "-q", "-v", "config", "list"]).is_err());
    }
}
