//! Pagination over a Scholar profile.
//!
//! The offset starts at zero and advances by the page size after every page.
//! A run ends when one of these happens:
//! - a page comes back with no publication rows
//! - the page cap is reached
//! - a row cannot be extracted (unless rows are skipped)
//! - a page cannot be fetched (or the run aborts, depending on policy)

mod progress;

pub use progress::{ConsoleProgress, NullProgress, Progress, RecordingProgress};

use crate::client::PageSource;
use crate::config::{Config, FetchErrorPolicy, RowErrorPolicy};
use crate::error::{ScrapeError, StopReason};
use crate::extract::extract_page;
use crate::models::PublicationRecord;

/// Outcome of a pagination run.
#[derive(Debug)]
pub struct ScrapeReport {
    /// Records in row order, pages in offset order.
    pub records: Vec<PublicationRecord>,

    /// Pages successfully fetched, the final empty page included.
    pub pages_fetched: usize,

    /// Why pagination ended.
    pub stop: StopReason,
}

/// Drives a [`PageSource`] until the results run out.
pub struct Scraper<'a, S: PageSource + ?Sized> {
    source: &'a S,
    page_size: usize,
    max_pages: Option<usize>,
    row_policy: RowErrorPolicy,
    fetch_policy: FetchErrorPolicy,
}

impl<'a, S: PageSource + ?Sized> Scraper<'a, S> {
    /// Create a scraper using the paging and policy settings of `config`.
    #[must_use]
    pub fn new(source: &'a S, config: &Config) -> Self {
        Self {
            source,
            page_size: config.page_size.max(1),
            max_pages: config.max_pages,
            row_policy: config.row_policy,
            fetch_policy: config.fetch_policy,
        }
    }

    /// Run without progress reporting.
    ///
    /// # Errors
    ///
    /// Returns [`ScrapeError::Fetch`] when a page fails under
    /// [`FetchErrorPolicy::Abort`].
    pub async fn run(&self) -> Result<ScrapeReport, ScrapeError> {
        self.run_with(&mut NullProgress).await
    }

    /// Run, reporting pages and records to `progress`.
    ///
    /// # Errors
    ///
    /// Returns [`ScrapeError::Fetch`] when a page fails under
    /// [`FetchErrorPolicy::Abort`].
    pub async fn run_with(
        &self,
        progress: &mut dyn Progress,
    ) -> Result<ScrapeReport, ScrapeError> {
        let mut records = Vec::new();
        let mut offset = 0;
        let mut pages_fetched = 0;

        let stop = loop {
            if let Some(max) = self.max_pages {
                if pages_fetched >= max {
                    break StopReason::PageLimit { pages: pages_fetched };
                }
            }

            let html = match self.source.fetch(offset, self.page_size).await {
                Ok(html) => html,
                Err(error) => match self.fetch_policy {
                    FetchErrorPolicy::Abort => {
                        tracing::error!(offset, error = %error, "Page fetch failed, aborting");
                        return Err(ScrapeError::Fetch { offset, source: error });
                    }
                    FetchErrorPolicy::Stop => break StopReason::FetchFailed { offset, error },
                },
            };
            pages_fetched += 1;

            let page = extract_page(&html, self.row_policy);
            tracing::info!(offset, rows = page.rows_found, "Fetched page");
            progress.page_fetched(offset, page.rows_found);

            if page.is_empty_page() {
                break StopReason::NoMoreResults { offset };
            }

            for record in page.records {
                progress.record(&record);
                records.push(record);
            }

            match self.row_policy {
                RowErrorPolicy::Stop => {
                    if let Some(failure) = page.failures.into_iter().next() {
                        break StopReason::MalformedRow {
                            offset,
                            row: failure.row,
                            error: failure.error,
                        };
                    }
                }
                RowErrorPolicy::Skip => {
                    for failure in &page.failures {
                        tracing::warn!(offset, row = failure.row, error = %failure.error, "Skipping row");
                    }
                }
            }

            offset += self.page_size;
        };

        if stop.is_clean() {
            tracing::info!(records = records.len(), pages = pages_fetched, reason = %stop, "Pagination finished");
        } else {
            tracing::warn!(records = records.len(), pages = pages_fetched, reason = %stop, "Pagination stopped early");
        }

        Ok(ScrapeReport { records, pages_fetched, stop })
    }
}
