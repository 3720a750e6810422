use anyhow::{Context, Result};
use clap::ArgMatches;
use colored::Colorize;
use commands::command_argument_builder;
use glossa::handlers::{
    build_transcriber, load_settings, parse_force, print_banner, print_summary, resolve_work_dir,
};
use glossa::{PipelineOptions, execute_pipeline};
use glossa_core::config::DEFAULT_CONFIG_FILE;
use glossa_scanner::HttpFetcher;
use std::path::{Path, PathBuf};
use tracing::info;

mod commands;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let matches = command_argument_builder().get_matches();
    let quiet = matches.get_flag("quiet");

    // Show banner unless --quiet flag is set
    if !quiet {
        print_banner();
    }

    if let Err(e) = handle_run(&matches, quiet).await {
        eprintln!("{} {:#}", "✗ Run failed:".red().bold(), e);
        std::process::exit(1);
    }
}

async fn handle_run(matches: &ArgMatches, quiet: bool) -> Result<()> {
    let mut settings = load_settings(
        matches.get_one::<PathBuf>("config").map(PathBuf::as_path),
        Path::new(DEFAULT_CONFIG_FILE),
    )?;
    if let Some(dictionary) = matches.get_one::<PathBuf>("dictionary") {
        settings.dictionary = dictionary.clone();
    }

    let work_dir = match matches.get_one::<String>("dir") {
        Some(dir) => resolve_work_dir(dir)?,
        None => PathBuf::from("."),
    };
    let force = parse_force(
        matches
            .get_many::<String>("force")
            .into_iter()
            .flatten()
            .map(String::as_str),
    );

    let fetcher = HttpFetcher::with_options(&settings.user_agent, settings.timeout_secs)
        .context("Failed to build HTTP client")?;
    let transcriber = build_transcriber(&settings.dictionary)?;

    info!("Working directory: {}", work_dir.display());

    let options = PipelineOptions {
        settings,
        work_dir,
        force,
        show_progress: !quiet,
    };
    let summary = execute_pipeline(options, &fetcher, transcriber.as_ref()).await?;

    if !quiet {
        print_summary(&summary);
    }

    Ok(())
}

pub const CLAP_STYLING: clap::builder::styling::Styles = clap::builder::styling::Styles::styled()
    .header(clap_cargo::style::HEADER)
    .usage(clap_cargo::style::USAGE)
    .literal(clap_cargo::style::LITERAL)
    .placeholder(clap_cargo::style::PLACEHOLDER)
    .error(clap_cargo::style::ERROR)
    .valid(clap_cargo::style::VALID)
    .invalid(clap_cargo::style::INVALID);
