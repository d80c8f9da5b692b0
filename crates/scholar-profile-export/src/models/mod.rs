//! Data models for scraped Scholar publications.
//!
//! Field names serialize to the column headers of the export
//! (`Year`, `Journal`, `Title`, `Author`, `First Author`, `CN/EN`).

mod enums;
mod record;

pub use enums::{ExportFormat, LanguageTag};
pub use record::{PublicationRecord, COLUMNS};
