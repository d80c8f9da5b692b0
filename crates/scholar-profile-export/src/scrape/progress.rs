//! Progress sinks for a pagination run.

use std::io::Write;

use crate::models::PublicationRecord;

/// Receives events while pages are scraped.
///
/// Every method has a no-op default; implement the ones you need.
pub trait Progress {
    /// A page was fetched and parsed.
    fn page_fetched(&mut self, _offset: usize, _rows: usize) {}

    /// A record was extracted. Called before it is added to the results.
    fn record(&mut self, _record: &PublicationRecord) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}

/// Prints one block per record to stdout.
pub struct ConsoleProgress;

impl Progress for ConsoleProgress {
    fn record(&mut self, record: &PublicationRecord) {
        let mut stdout = std::io::stdout().lock();
        // A closed stdout must not end the run.
        let _ = writeln!(stdout, "{record}");
    }
}

/// Collects events in memory.
#[derive(Debug, Default)]
pub struct RecordingProgress {
    /// `(offset, rows)` per fetched page.
    pub pages: Vec<(usize, usize)>,
    /// Titles of reported records, in order.
    pub titles: Vec<String>,
}

impl Progress for RecordingProgress {
    fn page_fetched(&mut self, offset: usize, rows: usize) {
        self.pages.push((offset, rows));
    }

    fn record(&mut self, record: &PublicationRecord) {
        self.titles.push(record.title.clone());
    }
}
