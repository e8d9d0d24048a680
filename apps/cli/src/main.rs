//! Propline CLI - one-shot board snapshot
//!
//! Fetches the PrizePicks board once and writes it to stdout as JSON:
//! normalized, tier-deduplicated props by default, or the raw projections
//! with their lookup tables when `--raw` is given. Logs go to stderr.

use std::io::Write;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use propline_ingest::{FeedConfig, PropsFeed};

/// Command-line arguments for propline
#[derive(Parser, Debug)]
#[command(name = "propline")]
#[command(about = "Snapshot the PrizePicks board as ingestion-ready props")]
#[command(version)]
struct Args {
    /// Emit raw projections and resource tables instead of props
    #[arg(long)]
    raw: bool,
}

fn init_tracing() {
    let log_format = std::env::var("PROPLINE_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_current_span(false)
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        registry
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_line_number(true)
                    .with_writer(std::io::stderr),
            )
            .init();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();
    let args = Args::parse();

    let config = FeedConfig::from_env();
    info!("Fetching board from {}", config.api_url);

    let feed = PropsFeed::prizepicks(config).context("Invalid feed configuration")?;

    let json = if args.raw {
        let snapshot = feed
            .fetch_resolved()
            .await
            .context("Failed to fetch board")?;
        serde_json::to_string_pretty(&snapshot)?
    } else {
        let props = feed.fetch_props().await.context("Failed to fetch board")?;
        info!("Writing {} props", props.len());
        serde_json::to_string_pretty(&props)?
    };

    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{}", json)?;
    Ok(())
}
