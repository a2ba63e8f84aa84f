//! Error taxonomy for a scrape run.
//!
//! Four failure families exist, and they propagate differently:
//!
//! - source acquisition ([`ScrapeError::Fetch`], [`ScrapeError::HttpStatus`],
//!   [`ScrapeError::Browser`]) aborts the run with no output
//! - structural parse ([`ScrapeError::MissingContainer`]) aborts the run; the
//!   page no longer matches the layout the rule was written against
//! - per-item extraction failure never surfaces here at all — nodes missing
//!   required fields are skipped inside the rule
//! - sink failure ([`ScrapeError::Sink`], [`ScrapeError::Csv`]) is reported
//!   after extraction and the run ends without success confirmation

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScrapeError {
    /// Network/transport failure while fetching the listing page.
    #[error("request for {url} failed: {source}")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The listing page answered with a non-success status.
    #[error("{url} returned HTTP {status}")]
    HttpStatus { url: String, status: u16 },

    /// Browser/driver-session failure in the rendered variant.
    #[error("browser session error: {0}")]
    Browser(String),

    /// The expected top-level listing container is absent from the document.
    #[error("listing container <{signature}> not found on {url}")]
    MissingContainer { url: String, signature: String },

    /// Filesystem failure while writing the output file.
    #[error("failed writing {path}: {source}")]
    Sink {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// CSV serialization failure.
    #[error("csv serialization failed: {0}")]
    Csv(#[from] csv::Error),
}
