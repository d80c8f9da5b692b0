//! Serialization of scraped records to the output file.

mod csv;
mod json;

use std::fs;
use std::path::Path;

pub use csv::to_csv;
pub use json::to_json;

use crate::error::ExportResult;
use crate::models::{ExportFormat, PublicationRecord};

/// Encode records in the requested format.
///
/// # Errors
///
/// Returns error if JSON serialization fails.
pub fn render(records: &[PublicationRecord], format: ExportFormat) -> ExportResult<String> {
    match format {
        ExportFormat::Json => to_json(records),
        ExportFormat::Csv => Ok(to_csv(records)),
    }
}

/// Write records to `path`, replacing any existing file.
///
/// Missing parent directories are created. The write is not atomic.
///
/// # Errors
///
/// Returns error if the directory or file cannot be written.
pub fn write_records(
    path: &Path,
    records: &[PublicationRecord],
    format: ExportFormat,
) -> ExportResult<()> {
    let body = render(records, format)?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    fs::write(path, body)?;
    tracing::info!(path = %path.display(), records = records.len(), ?format, "Wrote output file");
    Ok(())
}
