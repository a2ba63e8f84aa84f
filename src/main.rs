//! # news_clipper
//!
//! Exports news listings from two sites to CSV files:
//!
//! - **Marketing Dive** — a server-rendered HTML feed, fetched with one
//!   plain HTTP GET
//! - **Google News** — a client-side-rendered topic page, captured through a
//!   headless Chromium session
//!
//! ## Usage
//!
//! ```sh
//! news_clipper                      # both sites into ./output/
//! news_clipper --site google-news   # one site only
//! ```
//!
//! ## Architecture
//!
//! Each site run is the same single-pass pipeline:
//! 1. **Acquire**: a content source yields the raw page HTML
//! 2. **Extract**: the site's extraction rule maps listing items to records
//! 3. **Write**: the CSV sink serializes the ordered record collection
//!
//! Sites differ only in their content source and extraction rule; the
//! pipeline, document model, and sink are shared.

use clap::Parser;
use std::error::Error;
use std::time::Duration;
use tracing::{error, info, instrument};
use tracing_subscriber::{EnvFilter, fmt as tfmt};

mod cli;
mod config;
mod dom;
mod error;
mod models;
mod outputs;
mod pipeline;
mod rules;
mod sources;

use cli::{Cli, Site};
use config::{SourceConfig, WaitPolicy};
use error::ScrapeError;
use rules::google_news::GoogleNews;
use rules::marketing_dive::MarketingDive;
use sources::rendered::RenderedSource;
use sources::static_http::StaticSource;

#[tokio::main]
#[instrument]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let start_time = std::time::Instant::now();
    info!("news_clipper starting up");

    let args = Cli::parse();
    info!(?args.site, output_dir = %args.output_dir, "Parsed CLI arguments");

    let sites = match args.site {
        Some(site) => vec![site],
        None => vec![Site::MarketingDive, Site::GoogleNews],
    };

    let mut failed = 0usize;
    for site in sites {
        match run_site(site, &args).await {
            Ok(count) => info!(?site, count, "Site run complete"),
            Err(e) => {
                error!(?site, error = %e, "Site run failed");
                failed += 1;
            }
        }
    }

    let elapsed = start_time.elapsed();
    info!(?elapsed, "Execution complete");

    if failed > 0 {
        return Err(format!("{failed} site run(s) failed").into());
    }
    Ok(())
}

/// Wire up the content source and extraction rule for one site and run the
/// pipeline end to end, returning the number of records written.
///
/// Zero extracted records is a success: the sink skips the write and the run
/// still counts as completed.
async fn run_site(site: Site, args: &Cli) -> Result<usize, ScrapeError> {
    match site {
        Site::MarketingDive => {
            let config = SourceConfig::marketing_dive(&args.output_dir, args.user_agent.as_deref());
            let source = StaticSource::new(&config)?;
            let records = pipeline::run(&source, &MarketingDive, &config).await?;
            outputs::csv::write_records(&records, &config.output_path)?;
            Ok(records.len())
        }
        Site::GoogleNews => {
            let wait = match &args.wait_for {
                Some(selector) => WaitPolicy::ForElement {
                    selector: selector.clone(),
                    timeout: Duration::from_secs(args.wait_secs),
                },
                None => WaitPolicy::Delay(Duration::from_secs(args.wait_secs)),
            };
            let config =
                SourceConfig::google_news(&args.output_dir, wait, args.user_agent.as_deref());
            let rule = GoogleNews::new(args.min_title_len);
            let records = pipeline::run(&RenderedSource, &rule, &config).await?;
            outputs::csv::write_records(&records, &config.output_path)?;
            Ok(records.len())
        }
    }
}
