use anyhow::{Context, Result};
use clap::Parser;
use console::style;
use dialoguer::Confirm;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use std::time::Duration;

use tsexport_codegen::{ExportReport, TypeScriptGenerator};
use tsexport_core::config::{ExportConfig, LoggingConfig, CONFIG_FILE};
use tsexport_core::schema::SchemaSource;
use tsexport_core::TsExportConfig;

/// Export schema descriptors to TypeScript interfaces.
#[derive(Parser, Debug)]
pub struct ExportCommand {
    /// Configuration file.
    #[arg(short, long, default_value = CONFIG_FILE)]
    pub config: String,

    /// Output directory (defaults to ./typescript).
    #[arg(short, long)]
    pub outdir: Option<String>,

    /// Namespaces to leave out of the export.
    #[arg(short, long, num_args = 1..)]
    pub exclude: Vec<String>,

    /// Verbose logging and a report of fields typed as `any`.
    #[arg(short, long)]
    pub logs: bool,

    /// Descriptor source to export: serializers or models.
    #[arg(short, long)]
    pub source: Option<SchemaSource>,

    /// Directory holding the schema descriptor documents.
    #[arg(long)]
    pub schema: Option<String>,

    /// Overwrite an existing output directory without asking.
    #[arg(short = 'y', long)]
    pub yes: bool,
}

impl ExportCommand {
    /// Execute the export command.
    pub fn execute(self) -> Result<()> {
        let mut config = TsExportConfig::load_or_default(&self.config)
            .with_context(|| format!("Failed to load {}", self.config))?;
        self.apply_overrides(&mut config.export);
        init_tracing(&config.logging, config.export.logs);
        tracing::debug!(project = %config.project.name, config = %self.config, "Loaded configuration");

        let export = &config.export;
        let outdir = Path::new(&export.outdir);
        if outdir.exists() && !self.yes && !confirm_overwrite(outdir)? {
            println!(
                "{} Operation cancelled. Use the --outdir parameter to specify a different output directory.",
                style("ℹ").blue()
            );
            return Ok(());
        }

        let pb = ProgressBar::new_spinner();
        pb.set_style(ProgressStyle::default_spinner().template("{spinner:.green} {msg}")?);
        pb.enable_steady_tick(Duration::from_millis(100));

        pb.set_message("Loading schema descriptors...");
        let mut registry = tsexport_codegen::parse_project(Path::new(&export.schema_dir), export.source)
            .with_context(|| format!("Failed to load schema from {}", export.schema_dir))?;
        registry.exclude_namespaces(&export.exclude);

        pb.set_message(format!("Generating {} interfaces...", export.source));
        let report = TypeScriptGenerator::new(outdir).write_all(&registry)?;
        pb.finish_and_clear();

        print_report(&config.project.name, &report, outdir, export.logs);
        Ok(())
    }

    /// Command-line flags take precedence over the configuration file.
    fn apply_overrides(&self, export: &mut ExportConfig) {
        if let Some(outdir) = &self.outdir {
            export.outdir = outdir.clone();
        }
        if !self.exclude.is_empty() {
            export.exclude = self.exclude.clone();
        }
        if self.logs {
            export.logs = true;
        }
        if let Some(source) = self.source {
            export.source = source;
        }
        if let Some(schema) = &self.schema {
            export.schema_dir = schema.clone();
        }
    }
}

fn init_tracing(logging: &LoggingConfig, verbose: bool) {
    let filter = log_filter(logging, verbose, std::env::var("RUST_LOG").ok());

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    // already initialized when commands run more than once in a process
    let _ = if logging.json_format {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
}

/// `RUST_LOG` wins; otherwise `--logs` means debug, else the configured level.
fn log_filter(logging: &LoggingConfig, verbose: bool, rust_log: Option<String>) -> String {
    match rust_log {
        Some(directive) if !directive.trim().is_empty() => directive,
        _ if verbose => "debug".to_string(),
        _ => logging.level.clone(),
    }
}

fn confirm_overwrite(outdir: &Path) -> Result<bool> {
    let confirmed = Confirm::new()
        .with_prompt(format!(
            "Directory {} already exists. Do you want to overwrite it?",
            outdir.display()
        ))
        .default(false)
        .interact()
        .context("Failed to read confirmation")?;
    Ok(confirmed)
}

fn print_report(project: &str, report: &ExportReport, outdir: &Path, logs: bool) {
    println!();
    println!(
        "  {} Generated {} interfaces for {}",
        style("✓").green(),
        style(report.written.len()).cyan(),
        style(project).bold()
    );

    if !report.skipped.is_empty() {
        println!(
            "  {} Skipped {} entities:",
            style("⚠").yellow(),
            style(report.skipped.len()).yellow()
        );
        for skipped in &report.skipped {
            println!("    {} {}: {}", style("→").dim(), skipped.entity, skipped.error);
        }
    }

    if logs {
        println!();
        println!("{}", report.diagnostics.summary());
    } else if !report.diagnostics.is_empty() {
        println!(
            "  {} {} fields typed as 'any' (run with --logs for details)",
            style("ℹ").blue(),
            style(report.diagnostics.len()).yellow()
        );
    }

    println!("  {} Output: {}", style("→").dim(), style(outdir.display()).cyan());
    println!();
}
