//! JSON output: an array of objects keyed by column name.

use crate::error::ExportResult;
use crate::models::PublicationRecord;

/// Serialize records as a compact JSON array.
///
/// Keys follow column order and non-ASCII text is written as-is, so the
/// same records always produce the same bytes.
pub fn to_json(records: &[PublicationRecord]) -> ExportResult<String> {
    Ok(serde_json::to_string(records)?)
}
