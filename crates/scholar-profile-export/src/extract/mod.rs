//! Row extraction from a Scholar profile listing.
//!
//! Each publication is a `tr.gsc_a_tr` row holding a title link, one or two
//! `div.gs_gray` info lines (authors, then venue) and a year badge.

mod rules;

use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};

pub use rules::{NOT_AVAILABLE, clean_journal, first_author, journal, language_tag};

use crate::config::RowErrorPolicy;
use crate::error::ExtractError;
use crate::models::PublicationRecord;

fn selector(css: &str) -> Selector {
    Selector::parse(css).expect("valid CSS selector")
}

static ROW: LazyLock<Selector> = LazyLock::new(|| selector("tr.gsc_a_tr"));
static TITLE: LazyLock<Selector> = LazyLock::new(|| selector("a.gsc_a_at"));
static INFO_LINE: LazyLock<Selector> = LazyLock::new(|| selector("div.gs_gray"));
static YEAR: LazyLock<Selector> = LazyLock::new(|| selector("span.gsc_a_h.gsc_a_hc.gs_ibl"));

/// A row that could not be turned into a record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowFailure {
    /// Zero-based index of the row within the page.
    pub row: usize,
    /// What was missing.
    pub error: ExtractError,
}

/// Everything extracted from one result page.
#[derive(Debug, Default)]
pub struct PageExtraction {
    /// Number of publication rows present on the page.
    pub rows_found: usize,
    /// Records in document order.
    pub records: Vec<PublicationRecord>,
    /// Rows that failed, in document order. Holds at most one entry under
    /// [`RowErrorPolicy::Stop`].
    pub failures: Vec<RowFailure>,
}

impl PageExtraction {
    /// Returns true when the page had no publication rows at all.
    #[must_use]
    pub const fn is_empty_page(&self) -> bool {
        self.rows_found == 0
    }
}

/// Concatenated text of an element and its descendants, untrimmed.
fn text_of(element: ElementRef<'_>) -> String {
    element.text().collect()
}

/// Extract the six fields of one publication row.
///
/// # Errors
///
/// Returns [`ExtractError::MissingElement`] when the title link, the author
/// line or the year badge is absent.
pub fn extract_row(row: ElementRef<'_>) -> Result<PublicationRecord, ExtractError> {
    let title = row.select(&TITLE).next().ok_or(ExtractError::missing("title"))?;
    let title = text_of(title);

    let info_lines: Vec<String> = row.select(&INFO_LINE).map(text_of).collect();
    let author = info_lines.first().ok_or(ExtractError::missing("authors"))?.clone();

    let year = row.select(&YEAR).next().ok_or(ExtractError::missing("year"))?;
    let year = text_of(year);

    Ok(PublicationRecord {
        year,
        journal: journal(info_lines.get(1).map(String::as_str)),
        title,
        first_author: first_author(&author),
        language: language_tag(&author),
        author,
    })
}

/// Extract all publication rows from a page of HTML.
///
/// Rows are processed in document order. Under [`RowErrorPolicy::Stop`] the
/// first failing row ends extraction and the rows after it are not read.
#[must_use]
pub fn extract_page(html: &str, policy: RowErrorPolicy) -> PageExtraction {
    let document = Html::parse_document(html);
    let rows: Vec<ElementRef<'_>> = document.select(&ROW).collect();

    let mut page = PageExtraction { rows_found: rows.len(), ..PageExtraction::default() };

    for (index, row) in rows.into_iter().enumerate() {
        match extract_row(row) {
            Ok(record) => page.records.push(record),
            Err(error) => {
                page.failures.push(RowFailure { row: index, error });
                if policy == RowErrorPolicy::Stop {
                    break;
                }
            }
        }
    }

    page
}
