//! Publication record extracted from one listing row.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::LanguageTag;

/// Export column headers, in output order.
pub const COLUMNS: [&str; 6] = ["Year", "Journal", "Title", "Author", "First Author", "CN/EN"];

/// One publication as listed on a Scholar profile.
///
/// Field order matches [`COLUMNS`]; serde keeps declaration order, which is
/// what fixes the JSON key order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicationRecord {
    /// Publication year as shown in the year badge (may be empty).
    #[serde(rename = "Year")]
    pub year: String,

    /// Venue name with volume/page suffix removed, or `"N/A"`.
    #[serde(rename = "Journal")]
    pub journal: String,

    /// Publication title.
    #[serde(rename = "Title")]
    pub title: String,

    /// Raw author list as displayed.
    #[serde(rename = "Author")]
    pub author: String,

    /// Text before the first ASCII comma of the author list, or `"N/A"`.
    #[serde(rename = "First Author")]
    pub first_author: String,

    /// Language guessed from the author separator.
    #[serde(rename = "CN/EN")]
    pub language: LanguageTag,
}

impl PublicationRecord {
    /// Column values in [`COLUMNS`] order.
    #[must_use]
    pub fn values(&self) -> [&str; 6] {
        [
            self.year.as_str(),
            self.journal.as_str(),
            self.title.as_str(),
            self.author.as_str(),
            self.first_author.as_str(),
            self.language.as_str(),
        ]
    }
}

/// Human-readable block printed while scraping.
impl fmt::Display for PublicationRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Title: {}", self.title)?;
        writeln!(f, "Authors: {}", self.author)?;
        writeln!(f, "First author: {}", self.first_author)?;
        writeln!(f, "Year: {}", self.year)?;
        writeln!(f, "Journal: {}", self.journal)?;
        writeln!(f, "Language: {}", self.language)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> PublicationRecord {
        PublicationRecord {
            year: "2021".into(),
            journal: "Nature".into(),
            title: "Deep learning".into(),
            author: "Y LeCun, Y Bengio, G Hinton".into(),
            first_author: "Y LeCun".into(),
            language: LanguageTag::English,
        }
    }

    #[test]
    fn test_values_follow_column_order() {
        let record = sample();
        let values = record.values();
        assert_eq!(values[0], "2021");
        assert_eq!(values[4], "Y LeCun");
        assert_eq!(values[5], "English");
    }

    #[test]
    fn test_display_block() {
        let block = sample().to_string();
        assert!(block.starts_with("Title: Deep learning\n"));
        assert!(block.contains("First author: Y LeCun\n"));
        assert!(block.ends_with("Language: English\n"));
    }
}
