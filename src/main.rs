//! Page-Lens main entry point
//!
//! This is the command-line interface for the Page-Lens page analyzer.

use anyhow::Context;
use clap::Parser;
use page_lens::config::{load_config, AnalyzerConfig};
use page_lens::output::{describe_error, format_report, write_markdown_report, MISSING_URL_MESSAGE};
use page_lens::Analyzer;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Page-Lens: analyze the structure of a single web page
///
/// Fetches the page, reports its title, HTML version, heading counts,
/// internal/external links, broken links, and whether it has a login form.
#[derive(Parser, Debug)]
#[command(name = "page-lens")]
#[command(version)]
#[command(about = "Analyze the structure of a single web page", long_about = None)]
struct Cli {
    /// URL of the page to analyze
    #[arg(value_name = "URL", default_value = "")]
    url: String,

    /// Path to a TOML configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Also write a markdown report to this file
    #[arg(long, value_name = "FILE")]
    markdown: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let Some(target) = required_url(&cli.url) else {
        eprintln!("{}", MISSING_URL_MESSAGE);
        return Ok(ExitCode::FAILURE);
    };

    if url::Url::parse(target).is_err() {
        tracing::warn!("{} does not parse as an absolute URL", target);
    }

    let config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            load_config(path)
                .with_context(|| format!("failed to load configuration from {}", path.display()))?
        }
        None => AnalyzerConfig::default(),
    };

    let analyzer = Analyzer::new(config).context("failed to set up analyzer")?;

    let result = match analyzer.analyze(target).await {
        Ok(result) => result,
        Err(e) => {
            tracing::error!("Analysis failed: {}", e);
            eprintln!("{}", describe_error(&e));
            return Ok(ExitCode::FAILURE);
        }
    };

    print!("{}", format_report(&result));

    if let Some(path) = &cli.markdown {
        write_markdown_report(&result, path)
            .with_context(|| format!("failed to write report to {}", path.display()))?;
        tracing::info!("Markdown report written to: {}", path.display());
    }

    Ok(ExitCode::SUCCESS)
}

/// Returns the URL exactly as given, or `None` if it is blank
fn required_url(raw: &str) -> Option<&str> {
    if raw.trim().is_empty() {
        None
    } else {
        Some(raw)
    }
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("page_lens=warn,warn"),
            1 => EnvFilter::new("page_lens=info,warn"),
            2 => EnvFilter::new("page_lens=debug,info"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
