//! CLI entry point for openshift-dockerfile-analyzer
//!
//! Provides command-line interface for checking a Dockerfile and for
//! evaluating a single RUN value.

use clap::{Parser, Subcommand};
use colored::*;
use openshift_dockerfile_analyzer::{
    analyzer::Analyzer,
    config::{AnalyzerConfig, OutputFormat},
    core::types::{Severity, Source, SourceLocation},
    dockerfile::{self, Instruction},
    error::AnalyzerError,
    report::Report,
};
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "openshift-dockerfile-analyzer")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Output format
    #[arg(long, value_enum, global = true, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Hide findings below this severity (low, medium, high, critical)
    #[arg(long, global = true, default_value = "low")]
    min_severity: Severity,

    /// Exit with status 1 when a reported finding reaches this severity
    #[arg(long, global = true, default_value = "medium")]
    fail_on: Severity,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check a Dockerfile for OpenShift compatibility issues
    Check {
        /// Path to the Dockerfile ("-" reads standard input)
        #[arg(default_value = "Dockerfile")]
        dockerfile: PathBuf,
    },

    /// Evaluate a single RUN value
    Eval {
        /// The text after RUN, e.g. "chmod 664 /app && chown node:node /app"
        value: String,
    },
}

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so they never mix with the report on stdout
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env().add_directive(tracing::Level::WARN.into()))
        .init();

    let cli = Cli::parse();
    let config = AnalyzerConfig {
        format: cli.format,
        min_severity: cli.min_severity,
        fail_on: cli.fail_on,
    };

    let instructions = match cli.command {
        Commands::Check { dockerfile } => read_instructions(&dockerfile)?,
        Commands::Eval { value } => vec![Instruction {
            keyword: "RUN".to_string(),
            value,
            location: SourceLocation::inline(),
        }],
    };

    let report = Analyzer::new()
        .analyze(&instructions)
        .filter_min_severity(config.min_severity);

    match config.format {
        OutputFormat::Text => print_text(&report),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }

    if report.should_fail(config.fail_on) {
        std::process::exit(1);
    }

    Ok(())
}

/// Read instructions from a Dockerfile path or standard input
fn read_instructions(path: &Path) -> anyhow::Result<Vec<Instruction>> {
    if path == Path::new("-") {
        let mut content = String::new();
        std::io::stdin()
            .read_to_string(&mut content)
            .map_err(AnalyzerError::Stdin)?;
        return Ok(dockerfile::parse_dockerfile(&content, Source::Stdin)?);
    }

    // Expand tilde in path
    let expanded_path = shellexpand::tilde(
        path.to_str()
            .ok_or_else(|| AnalyzerError::InvalidPathEncoding(path.to_path_buf()))?,
    );
    let path = Path::new(expanded_path.as_ref());

    tracing::info!(path = %path.display(), "reading Dockerfile");
    Ok(dockerfile::load(path)?)
}

fn severity_tag(severity: Severity) -> ColoredString {
    let tag = format!("[{}]", severity.to_string().to_uppercase());
    match severity {
        Severity::Critical => tag.red().bold(),
        Severity::High => tag.red(),
        Severity::Medium => tag.yellow(),
        Severity::Low => tag.cyan(),
    }
}

/// Print findings and a per-severity summary
fn print_text(report: &Report) {
    if report.is_empty() {
        println!("{} {}", "✓".green().bold(), "No issues found!".bold());
        return;
    }

    for entry in report.entries() {
        println!(
            "{} {} {}",
            severity_tag(entry.finding.severity),
            entry.finding.title.bold(),
            format!("({})", entry.instruction).dimmed(),
        );
        for line in entry.finding.description.lines() {
            println!("    {}", line);
        }
        println!();
    }

    let counts = Severity::ALL
        .iter()
        .rev()
        .map(|severity| format!("{} {}", report.count(*severity), severity))
        .collect::<Vec<_>>()
        .join(", ");

    println!(
        "{} Found {} issue{}: {}",
        "✗".red().bold(),
        report.len(),
        if report.len() == 1 { "" } else { "s" },
        counts
    );
}
