//! Field heuristics applied to the text of a listing row.

use std::sync::LazyLock;

use regex::Regex;

use crate::models::LanguageTag;

/// Placeholder for fields Scholar leaves blank.
pub const NOT_AVAILABLE: &str = "N/A";

/// Full-width comma used by Chinese author lists.
const FULLWIDTH_COMMA: char = '，';

/// Volume, issue and page suffix after a venue name (" 2021;15(3):100-110").
static VENUE_SUFFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s\d+.*$").expect("valid venue suffix pattern"));

/// First author: everything before the first ASCII comma.
///
/// An author list without a comma is returned whole; an empty one yields `"N/A"`.
#[must_use]
pub fn first_author(authors: &str) -> String {
    if authors.is_empty() {
        return NOT_AVAILABLE.to_string();
    }
    authors.split(',').next().unwrap_or_default().to_string()
}

/// Guess the language from the separator used in the author list.
///
/// The ASCII comma is checked first, so a list with both separators is English.
#[must_use]
pub fn language_tag(authors: &str) -> LanguageTag {
    if authors.contains(',') {
        LanguageTag::English
    } else if authors.contains(FULLWIDTH_COMMA) {
        LanguageTag::Chinese
    } else {
        LanguageTag::Unknown
    }
}

/// Venue name from the second info line: text before the first comma, minus
/// any trailing `<space><digits>...` suffix.
#[must_use]
pub fn clean_journal(raw: &str) -> String {
    let head = raw.split(',').next().unwrap_or_default();
    VENUE_SUFFIX.replace(head, "").into_owned()
}

/// Journal column value for an optional venue line.
#[must_use]
pub fn journal(venue_line: Option<&str>) -> String {
    venue_line.map_or_else(|| NOT_AVAILABLE.to_string(), clean_journal)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_author_before_comma() {
        assert_eq!(first_author("A Smith, B Jones, C Wu"), "A Smith");
    }

    #[test]
    fn test_first_author_keeps_whitespace() {
        assert_eq!(first_author(" A Smith , B Jones"), " A Smith ");
    }

    #[test]
    fn test_first_author_empty() {
        assert_eq!(first_author(""), "N/A");
    }

    #[test]
    fn test_first_author_without_ascii_comma() {
        assert_eq!(first_author("张三，李四"), "张三，李四");
        assert_eq!(first_author("A Smith"), "A Smith");
    }

    #[test]
    fn test_language_tag() {
        assert_eq!(language_tag("A Smith, B Jones"), LanguageTag::English);
        assert_eq!(language_tag("张三，李四"), LanguageTag::Chinese);
        assert_eq!(language_tag("A Smith"), LanguageTag::Unknown);
        assert_eq!(language_tag(""), LanguageTag::Unknown);
    }

    #[test]
    fn test_language_tag_ascii_comma_wins() {
        assert_eq!(language_tag("张三，李四, A Smith"), LanguageTag::English);
    }

    #[test]
    fn test_clean_journal_strips_volume_suffix() {
        assert_eq!(clean_journal("Nature 2021;15(3):100-110"), "Nature");
        assert_eq!(clean_journal("Physical Review Letters 99 (5), 053001"), "Physical Review Letters");
    }

    #[test]
    fn test_clean_journal_cuts_at_comma() {
        assert_eq!(clean_journal("arXiv preprint arXiv:1706.03762, 2017"), "arXiv preprint arXiv:1706.03762");
    }

    #[test]
    fn test_clean_journal_without_suffix() {
        assert_eq!(clean_journal("Science"), "Science");
        assert_eq!(clean_journal(""), "");
    }

    #[test]
    fn test_journal_missing_line() {
        assert_eq!(journal(None), "N/A");
        assert_eq!(journal(Some("Cell 184 (4), 1-10")), "Cell");
    }
}
