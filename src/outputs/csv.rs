//! CSV sink for extracted records.
//!
//! Writes one UTF-8 CSV file per run with a `title,link,description,category`
//! header row (derived from [`NewsRecord`]'s field order). Parent directories
//! are created as needed. An empty record collection writes nothing at all —
//! "nothing to write" is logged and reported as success, so a quiet news day
//! never leaves an empty file behind.

use crate::error::ScrapeError;
use crate::models::NewsRecord;
use std::fs;
use std::path::Path;
use tracing::{info, instrument};

/// Serialize `records` to `path`.
///
/// Returns `Ok(true)` when a file was written, `Ok(false)` when there was
/// nothing to write.
#[instrument(level = "info", skip_all, fields(path = %path.display()))]
pub fn write_records(records: &[NewsRecord], path: &Path) -> Result<bool, ScrapeError> {
    if records.is_empty() {
        info!("Nothing to write");
        return Ok(false);
    }

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| ScrapeError::Sink {
                path: path.to_path_buf(),
                source: e,
            })?;
        }
    }

    let mut writer = csv::Writer::from_path(path)?;
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush().map_err(|e| ScrapeError::Sink {
        path: path.to_path_buf(),
        source: e,
    })?;

    info!(count = records.len(), "Wrote records");
    Ok(true)
}
