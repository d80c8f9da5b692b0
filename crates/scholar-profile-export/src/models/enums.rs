//! Enumerations shared by the extractor and the exporter.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Language of a publication, guessed from the separator in its author list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum LanguageTag {
    /// Authors separated by ASCII commas.
    English,
    /// Authors separated by full-width commas (`，`).
    Chinese,
    /// No separator found (single author or empty list).
    #[default]
    Unknown,
}

impl LanguageTag {
    /// Column value: `"English"`, `"Chinese"` or `""`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::English => "English",
            Self::Chinese => "Chinese",
            Self::Unknown => "",
        }
    }
}

impl fmt::Display for LanguageTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for LanguageTag {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for LanguageTag {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        match value.as_str() {
            "English" => Ok(Self::English),
            "Chinese" => Ok(Self::Chinese),
            "" => Ok(Self::Unknown),
            other => Err(serde::de::Error::unknown_variant(other, &["English", "Chinese", ""])),
        }
    }
}

/// Output file encoding.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// JSON array of objects
    #[default]
    Json,
    /// Comma-separated values with a header row
    Csv,
}
