//! Command-line interface definitions for news_clipper.
//!
//! This module defines the CLI arguments and options using the `clap` crate.
//! Everything the original scripts hard-coded (output path, settle delay,
//! title-length filter, User-Agent) is surfaced here as a flag with the
//! historical value as its default.

use clap::{Parser, ValueEnum};

/// Sites with a wired-in extraction rule.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Site {
    /// Marketing Dive news feed (static HTML fetch).
    MarketingDive,
    /// Google News topic listing (headless-browser rendering).
    GoogleNews,
}

/// Command-line arguments for the news_clipper application.
///
/// # Examples
///
/// ```sh
/// # Scrape every configured site into ./output
/// news_clipper
///
/// # Only Google News, waiting for the listing anchors instead of sleeping
/// news_clipper --site google-news --wait-for "a.gPFEn"
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Site to scrape; scrapes every configured site when omitted
    #[arg(short, long, value_enum)]
    pub site: Option<Site>,

    /// Directory where CSV exports are written
    #[arg(short, long, default_value = "./output")]
    pub output_dir: String,

    /// Seconds to let a browser-rendered page settle before extraction
    #[arg(long, default_value_t = 5)]
    pub wait_secs: u64,

    /// Wait for this CSS selector to appear instead of sleeping a fixed
    /// delay; --wait-secs becomes the fallback timeout
    #[arg(long)]
    pub wait_for: Option<String>,

    /// Discard rendered-page headlines of this many characters or fewer
    /// (0 disables the filter; applies to the rendered variant only)
    #[arg(long, default_value_t = 10)]
    pub min_title_len: usize,

    /// Override the User-Agent used for fetching
    #[arg(long, env = "NEWS_CLIPPER_USER_AGENT")]
    pub user_agent: Option<String>,
}
