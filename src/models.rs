//! Data models for extracted news listings.
//!
//! The central type is [`NewsRecord`], one output row per news item. Field
//! order matters: the CSV header is derived from the struct's field order via
//! `serde`, so `title,link,description,category` is the on-disk column order.

use serde::Serialize;

/// One extracted news item, destined for a single CSV row.
///
/// `title` and `link` are the record's identity and are always non-empty;
/// extraction rules refuse to emit a record without them. `description` and
/// `category` are best-effort and degrade to empty strings when the source
/// page does not carry them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewsRecord {
    /// Headline text, trimmed and whitespace-normalized.
    pub title: String,
    /// Absolute URL of the story. Always starts with `http`.
    pub link: String,
    /// Teaser/summary text, or empty when absent.
    pub description: String,
    /// Topic tag assigned by the site, or empty when absent.
    pub category: String,
}

impl NewsRecord {
    /// Build a record from required and optional parts.
    ///
    /// Returns `None` when the title is empty, enforcing the required-field
    /// invariant at construction time.
    pub fn new(
        title: String,
        link: String,
        description: Option<String>,
        category: Option<String>,
    ) -> Option<Self> {
        if title.is_empty() {
            return None;
        }
        Some(Self {
            title,
            link,
            description: description.unwrap_or_default(),
            category: category.unwrap_or_default(),
        })
    }
}
