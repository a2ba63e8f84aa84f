//! Single-pass extraction pipeline.
//!
//! Orchestrates one run: acquire page content, parse it, locate the listing
//! scope, and apply the site's extraction rule to every candidate item in
//! document order. A failed fetch or a missing listing container aborts the
//! run; an individual item missing its required fields is skipped silently
//! and never aborts anything.

use crate::config::SourceConfig;
use crate::dom;
use crate::error::ScrapeError;
use crate::models::NewsRecord;
use crate::rules::ExtractionRule;
use crate::sources::ContentSource;
use scraper::Html;
use tracing::{debug, info, instrument};

/// Run the full pipeline for one site: fetch, parse, extract.
///
/// Returns the ordered record collection. Zero records is a valid outcome,
/// not an error.
#[instrument(level = "info", skip_all, fields(site = rule.site(), url = %config.url))]
pub async fn run<S, R>(
    source: &S,
    rule: &R,
    config: &SourceConfig,
) -> Result<Vec<NewsRecord>, ScrapeError>
where
    S: ContentSource,
    R: ExtractionRule,
{
    let html = source.fetch(config).await?;
    let records = extract_records(&html, rule, &config.url)?;
    info!(count = records.len(), "Extraction complete");
    Ok(records)
}

/// Parse `html` and apply `rule` over the listing's item nodes.
///
/// Separated from [`run`] so the parse-and-extract stage can be exercised
/// against fixtures without any network or browser involvement.
pub fn extract_records<R: ExtractionRule>(
    html: &str,
    rule: &R,
    url: &str,
) -> Result<Vec<NewsRecord>, ScrapeError> {
    let document = Html::parse_document(html);
    let root = document.root_element();

    let scope = match rule.listing_container() {
        Some(signature) => {
            dom::find_first(root, &signature).ok_or_else(|| ScrapeError::MissingContainer {
                url: url.to_string(),
                signature: signature.to_string(),
            })?
        }
        None => root,
    };

    let items = dom::find_all(scope, &rule.item_signature());
    debug!(candidates = items.len(), "Enumerated candidate items");

    let mut records = Vec::new();
    for item in items {
        if rule.is_excluded(item) {
            debug!("Skipping excluded item");
            continue;
        }
        match rule.extract(item) {
            Some(record) => records.push(record),
            // Required field missing; local to this node.
            None => debug!("Item missing required fields; skipped"),
        }
    }
    Ok(records)
}
