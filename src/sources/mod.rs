//! Content acquisition strategies.
//!
//! A [`ContentSource`] turns a configured target URL into raw page HTML. Two
//! strategies exist:
//!
//! - [`static_http::StaticSource`]: one plain HTTP GET, for server-rendered
//!   pages
//! - [`rendered::RenderedSource`]: a headless Chromium session, for pages
//!   that only materialize their listing client-side
//!
//! The pipeline is generic over the strategy; everything downstream of the
//! returned HTML string is identical for both.

pub mod rendered;
pub mod static_http;

use crate::config::SourceConfig;
use crate::error::ScrapeError;

/// Yields raw page content for the configured URL.
#[allow(async_fn_in_trait)] // binary crate; no external callers need Send bounds
pub trait ContentSource {
    /// Fetch the page and return its HTML. Any acquisition failure (network,
    /// HTTP status, browser session) surfaces as a [`ScrapeError`].
    async fn fetch(&self, config: &SourceConfig) -> Result<String, ScrapeError>;
}
