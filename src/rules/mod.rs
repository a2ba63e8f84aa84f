//! Per-site extraction rules.
//!
//! Each supported site gets one [`ExtractionRule`] implementation mapping a
//! candidate item node to a [`NewsRecord`] or to nothing. Adding a site means
//! adding a rule module and a [`crate::config::SourceConfig`] constructor; the
//! pipeline itself never changes.
//!
//! # Supported sites
//!
//! | Site | Module | Acquisition | Notes |
//! |------|--------|-------------|-------|
//! | Marketing Dive | [`marketing_dive`] | static HTTP | `ul.feed` listing, ad items filtered |
//! | Google News | [`google_news`] | headless browser | `a.gPFEn` anchors, `div.f9uzM` subtrees excluded |
//!
//! Rules work on [`Option`]-returning lookups throughout: an optional field
//! that is absent is an expected outcome, not an error.

pub mod google_news;
pub mod marketing_dive;

use crate::dom::Signature;
use crate::models::NewsRecord;
use scraper::ElementRef;
use url::Url;

/// Site-specific mapping from document nodes to records.
pub trait ExtractionRule {
    /// Site name used in logs and diagnostics.
    fn site(&self) -> &'static str;

    /// Signature of the top-level listing container. `None` means items are
    /// enumerated across the whole document.
    fn listing_container(&self) -> Option<Signature>;

    /// Signature of one candidate item node.
    fn item_signature(&self) -> Signature;

    /// Whether this node must never produce a record (ad marker, unwanted
    /// ancestor container), regardless of its other fields.
    fn is_excluded(&self, item: ElementRef<'_>) -> bool;

    /// Map one item node to a record. `None` when a required field (title,
    /// anchor, `href`) is missing; optional fields degrade to empty strings.
    fn extract(&self, item: ElementRef<'_>) -> Option<NewsRecord>;
}

/// Rewrite `href` to an absolute URL against the site origin.
///
/// Links already carrying a scheme pass through unchanged. A leading `./`
/// marker is stripped to its absolute-path form before joining, so
/// `./topics/x` on `https://news.example.com` becomes
/// `https://news.example.com/topics/x`. Returns `None` only when the join
/// fails, which discards the record upstream.
pub fn absolutize(href: &str, origin: &Url) -> Option<String> {
    if href.starts_with("http") {
        return Some(href.to_string());
    }
    let path = href.strip_prefix('.').unwrap_or(href);
    origin.join(path).ok().map(|url| url.to_string())
}
