//! `quire create`: scaffold a document project into a directory.

use std::path::{Path, PathBuf};

use quire_adapters::{LocalFilesystem, SerdeCodec, TempDirStaging};
use quire_core::{
    application::{CreateOptions, CreateOutcome, MergeReport, PreviewOutcome, ScaffoldService},
    domain::{ConflictPolicy, DomainValidator, entities::layout},
    error::QuireError,
};
use tracing::{debug, info, instrument};

use super::{Command, Context};
use crate::{
    cli::CreateArgs,
    config::Defaults,
    error::{CliResult, IntoCli},
};

impl Command for CreateArgs {
    fn name(&self) -> &'static str {
        "create"
    }

    #[instrument(skip_all, fields(project = %self.name, dry_run = self.dry_run))]
    fn execute(self, ctx: &Context) -> CliResult<()> {
        let destination = match &self.output {
            Some(dir) => dir.clone(),
            None => {
                std::env::current_dir().with_cli_context(|| "Failed to read current directory")?
            }
        };
        let options = self.options(&ctx.config.defaults);
        debug!(?options, destination = %destination.display(), "Resolved create options");

        if self.dry_run {
            return preview(ctx, &options, &destination);
        }

        // A bad name must not leave an empty output directory behind.
        DomainValidator::validate_project_name(&options.name).map_err(QuireError::from)?;
        std::fs::create_dir_all(&destination)
            .with_cli_context(|| format!("Failed to create {}", destination.display()))?;
        let service = service_for(&destination);

        match service.create(&options)? {
            CreateOutcome::Created {
                config_file,
                report,
            } => {
                info!(files = report.files_written(), "Project scaffolded");
                ctx.output.success(&format!(
                    "Created '{}' in {}",
                    options.name,
                    destination.display()
                ))?;
                ctx.output
                    .info(&format!("Configuration: {}", config_file.display()))?;
                print_report(ctx, &report)?;
            }
            CreateOutcome::AlreadyExists { path } => {
                ctx.output.warning(&format!(
                    "'{}' is already configured by {}; nothing to do",
                    options.name,
                    destination.join(path).display()
                ))?;
            }
        }

        Ok(())
    }
}

impl CreateArgs {
    /// Merge the flags over the configured defaults.
    fn options(&self, defaults: &Defaults) -> CreateOptions {
        CreateOptions::new(self.name.clone())
            .with_version(
                self.project_version
                    .clone()
                    .unwrap_or_else(|| defaults.version.clone()),
            )
            .with_description(self.description.clone().unwrap_or_default())
            .with_license(
                self.license
                    .clone()
                    .unwrap_or_else(|| defaults.license.clone()),
            )
            .with_format(self.format.unwrap_or(defaults.format))
            .strict(self.strict || (defaults.strict && !self.no_strict))
            .with_policy(self.on_conflict.unwrap_or(defaults.on_conflict))
    }
}

fn service_for(destination: &Path) -> ScaffoldService {
    ScaffoldService::new(
        Box::new(SerdeCodec::new()),
        Box::new(TempDirStaging::new()),
        Box::new(LocalFilesystem::new(destination)),
    )
}

fn preview(ctx: &Context, options: &CreateOptions, destination: &Path) -> CliResult<()> {
    let conflicts = match service_for(destination).preview(options)? {
        PreviewOutcome::WouldCreate { conflicts } => conflicts,
        PreviewOutcome::AlreadyExists { path } => {
            ctx.output.warning(&format!(
                "'{}' is already configured by {}; create would do nothing",
                options.name,
                destination.join(path).display()
            ))?;
            return Ok(());
        }
    };

    ctx.output.header(&format!(
        "Would create '{}' in {}:",
        options.name,
        destination.display()
    ))?;
    for entry in planned_entries(options) {
        ctx.output.print(&format!("  {entry}"))?;
    }

    if conflicts.is_empty() {
        ctx.output.info("No existing files would be touched")?;
        return Ok(());
    }

    for path in conflicts {
        match options.policy {
            ConflictPolicy::Error => ctx
                .output
                .error(&format!("{} already exists; create would abort", path.display()))?,
            ConflictPolicy::Keep => ctx
                .output
                .warning(&format!("{} already exists and would be kept", path.display()))?,
            ConflictPolicy::Overwrite => ctx
                .output
                .warning(&format!("{} already exists and would be overwritten", path.display()))?,
        }
    }
    Ok(())
}

fn planned_entries(options: &CreateOptions) -> Vec<String> {
    let src = PathBuf::from(layout::SOURCE_DIR);
    vec![
        options.config_file().display().to_string(),
        format!("{}/", src.display()),
        src.join(layout::MAIN_DOCUMENT).display().to_string(),
        format!("{}/", layout::RESOURCES_DIR),
    ]
}

fn print_report(ctx: &Context, report: &MergeReport) -> CliResult<()> {
    ctx.output.print(&format!(
        "  {} new directories, {} new files, {} overwritten, {} kept",
        report.directories_created,
        report.files_copied,
        report.files_overwritten,
        report.files_kept
    ))?;
    Ok(())
}
