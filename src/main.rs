//! CLI entry point for the mediathek-dl tool.

use anyhow::{Context, Result};
use clap::Parser;
use mediathek_dl::{AppConfig, Dispatcher, FeedClient, ProgramRunner};
use tracing::{debug, info, warn};

mod cli;

use cli::Args;

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments first (before tracing, so --help works without logs)
    let args = Args::parse();

    // Determine log level based on verbose/quiet flags
    // Priority: RUST_LOG env var > quiet flag > verbose flag > default (info)
    let default_level = if args.quiet {
        "error"
    } else {
        match args.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    };

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));

    tracing_subscriber::fmt().with_env_filter(filter).init();

    debug!(?args, "CLI arguments parsed");

    // Configuration load failure is the only fatal error: exit non-zero
    // before any processing.
    let config = AppConfig::load(&args.config).context("failed to load configuration")?;

    let rate_limit = if args.unlimited {
        info!("download speed limits disabled by --unlimited flag");
        None
    } else if let Some(rate) = config.rate_limit.clone() {
        info!(rate = %rate, "download speed limited");
        Some(rate)
    } else {
        warn!("no rate-limit specified in configuration; downloads will be unlimited");
        None
    };

    tokio::fs::create_dir_all(&args.out)
        .await
        .with_context(|| format!("failed to create output folder {}", args.out.display()))?;

    let runner = ProgramRunner::new(FeedClient::new(), Dispatcher::new(rate_limit), args.out);
    let stats = runner.run(&config.programs).await;

    info!(
        downloaded = stats.downloaded(),
        already_present = stats.skipped(),
        failed = stats.failed(),
        "run complete"
    );

    Ok(())
}
