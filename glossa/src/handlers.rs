use anyhow::{Context, Result};
use colored::Colorize;
use glossa_core::checkpoint::{ForceFrom, Stage};
use glossa_core::cmudict::CmuDictionary;
use glossa_core::phonetic::{NoTranscriber, Transcriber};
use glossa_core::{PipelineSummary, Settings, StageStatus};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Load settings from `config` when given, else from `fallback` when it
/// exists, else the built-in defaults.
pub fn load_settings(config: Option<&Path>, fallback: &Path) -> Result<Settings> {
    if let Some(path) = config {
        return Settings::from_path(path)
            .with_context(|| format!("Failed to load settings from {}", path.display()));
    }

    if fallback.is_file() {
        info!("Using settings from {}", fallback.display());
        return Settings::from_path(fallback)
            .with_context(|| format!("Failed to load settings from {}", fallback.display()));
    }

    Ok(Settings::default())
}

/// Expand `~` and environment variables in the working directory argument
pub fn resolve_work_dir(dir: &str) -> Result<PathBuf> {
    let expanded = shellexpand::full(dir)
        .with_context(|| format!("Could not expand directory '{}'", dir))?;
    Ok(PathBuf::from(expanded.as_ref()))
}

/// Fold repeated `--force` values into the earliest forced stage
pub fn parse_force<'a>(values: impl IntoIterator<Item = &'a str>) -> ForceFrom {
    values.into_iter().fold(ForceFrom::none(), |force, value| {
        if value.eq_ignore_ascii_case("all") {
            return ForceFrom::all();
        }
        match Stage::from_str(value) {
            Some(stage) => force.with(stage),
            None => {
                warn!("Ignoring unknown stage '{}'", value);
                force
            }
        }
    })
}

/// Load the pronunciation dictionary, falling back to leaving every
/// transcription empty when the file is missing.
pub fn build_transcriber(path: &Path) -> Result<Box<dyn Transcriber>> {
    if !path.exists() {
        warn!(
            "Pronunciation dictionary {} not found, transcriptions will be empty",
            path.display()
        );
        return Ok(Box::new(NoTranscriber));
    }

    let dictionary = CmuDictionary::from_path(path)
        .with_context(|| format!("Failed to read dictionary {}", path.display()))?;
    Ok(Box::new(dictionary))
}

pub fn describe_status(status: StageStatus) -> String {
    match status {
        StageStatus::Skipped => "not needed".to_string(),
        StageStatus::Existing => "already up to date".to_string(),
        StageStatus::Cached(rows) => format!("{} rows loaded from checkpoint", rows),
        StageStatus::Computed(rows) => format!("{} rows computed", rows),
    }
}

fn status_marker(status: StageStatus) -> colored::ColoredString {
    match status {
        StageStatus::Skipped => "·".dimmed(),
        StageStatus::Existing | StageStatus::Cached(_) => "→".blue(),
        StageStatus::Computed(_) => "✓".green().bold(),
    }
}

pub fn print_divider() {
    println!("{}", "═".repeat(60).bright_blue().bold());
}

pub fn print_banner() {
    print_divider();
    println!(
        "{}  {}",
        "  GLOSSA".bright_white().bold(),
        format!("v{}", env!("CARGO_PKG_VERSION")).dimmed()
    );
    println!(
        "{}",
        "  English/Portuguese vocabulary with IPA transcriptions".bright_blue()
    );
    print_divider();
    println!();
}

pub fn print_summary(summary: &PipelineSummary) {
    println!();
    print_divider();
    println!("{}", "  RUN COMPLETE".green().bold());
    print_divider();

    for (label, status) in [
        ("Catalog", summary.catalog),
        ("Words", summary.words),
        ("Spreadsheet", summary.annotated),
    ] {
        println!(
            "{} {:<12} {}",
            status_marker(status),
            label,
            describe_status(status)
        );
    }

    if !summary.failed_urls.is_empty() {
        println!();
        println!(
            "{} {} pages could not be fetched:",
            "⚠".yellow().bold(),
            summary.failed_urls.len().to_string().yellow()
        );
        for url in &summary.failed_urls {
            println!("  {} {}", "•".yellow(), url.bright_white());
        }
    }

    println!();
    if summary.annotated == StageStatus::Skipped {
        println!("{} No output written", "✗".red().bold());
    } else {
        println!(
            "{} Output: {}",
            "✓".green().bold(),
            summary.output.display().to_string().bright_white()
        );
    }
    println!();
}
