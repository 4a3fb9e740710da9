//! Listing-Console main entry point
//!
//! This is the command-line interface for submitting property crawl jobs and
//! viewing their results.

use anyhow::{bail, Context};
use clap::Parser;
use listing_console::config::{load_config_with_hash, validate, Config};
use listing_console::job::JobRequest;
use listing_console::ui::{Controller, TerminalSurface};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Listing-Console: submit property crawl jobs and render the listings
///
/// Sends one job (query, page count, worker count) to a crawling service and
/// shows the returned listings as summary statistics and detail cards, on the
/// terminal and optionally as an HTML page.
#[derive(Parser, Debug)]
#[command(name = "listing-console")]
#[command(version = "1.0.0")]
#[command(about = "Submit property crawl jobs and render the results", long_about = None)]
struct Cli {
    /// Path to TOML configuration file
    #[arg(value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Crawling service base URL (overrides the config file)
    #[arg(long, value_name = "URL")]
    base_url: Option<String>,

    /// Search query
    #[arg(long)]
    query: Option<String>,

    /// Number of search result pages to crawl
    #[arg(short, long)]
    pages: Option<u32>,

    /// Number of backend workers
    #[arg(short, long)]
    workers: Option<u32>,

    /// Write an HTML report to this path
    #[arg(long, value_name = "PATH")]
    html: Option<PathBuf>,

    /// Do not print the text report
    #[arg(long)]
    no_text: bool,

    /// Validate config and show the request that would be sent, without sending it
    #[arg(long)]
    dry_run: bool,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let config = resolve_config(&cli)?;

    let request = JobRequest::from_defaults(
        &config.job,
        cli.query.clone(),
        cli.pages,
        cli.workers,
    );

    if cli.dry_run {
        return handle_dry_run(&config, &request);
    }

    let html_path = cli
        .html
        .clone()
        .or_else(|| config.output.html_path.as_ref().map(PathBuf::from));

    let surface = TerminalSurface::new(request)
        .with_text_output(!cli.no_text)
        .with_html_path(html_path);

    let controller = Controller::from_config(&config, surface)?;

    // The surface has already shown the failure; just set the exit status
    if controller.activate().await.is_err() {
        std::process::exit(1);
    }

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("listing_console=info,warn"),
            1 => EnvFilter::new("listing_console=debug,info"),
            2 => EnvFilter::new("listing_console=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Loads the config file if given, then applies the command-line base URL
fn resolve_config(cli: &Cli) -> anyhow::Result<Config> {
    let mut config = match (&cli.config, &cli.base_url) {
        (Some(path), _) => {
            tracing::info!("Loading configuration from: {}", path.display());
            let (config, hash) = load_config_with_hash(path)
                .with_context(|| format!("failed to load {}", path.display()))?;
            tracing::info!("Configuration loaded successfully (hash: {})", hash);
            config
        }
        (None, Some(base_url)) => Config::with_base_url(base_url.clone()),
        (None, None) => bail!("either a CONFIG file or --base-url is required"),
    };

    if let Some(base_url) = &cli.base_url {
        config.backend.base_url = base_url.clone();
    }
    validate(&config)?;

    Ok(config)
}

/// Handles the --dry-run mode: validates the request and shows it
fn handle_dry_run(config: &Config, request: &JobRequest) -> anyhow::Result<()> {
    println!("=== Listing-Console Dry Run ===\n");

    println!("Endpoint: POST {}", config.backend.crawl_url());
    println!(
        "Limits: pages 1..={}, workers {}..={}",
        config.limits.max_pages, config.limits.min_workers, config.limits.max_workers
    );
    println!("\nRequest body:");
    println!("{}", serde_json::to_string_pretty(request)?);

    request.validate(&config.limits)?;

    println!("\n✓ Configuration is valid");
    println!("✓ Request is within limits");

    Ok(())
}
