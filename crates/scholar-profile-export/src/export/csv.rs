//! CSV output with a header row.

use crate::models::{COLUMNS, PublicationRecord};

/// Format records as CSV.
#[must_use]
pub fn to_csv(records: &[PublicationRecord]) -> String {
    let mut output = COLUMNS.join(",");
    output.push('\n');

    for record in records {
        let line: Vec<String> = record.values().iter().map(|v| csv_escape(v)).collect();
        output.push_str(&line.join(","));
        output.push('\n');
    }

    output
}

/// Escape a string for CSV output.
fn csv_escape(s: &str) -> String {
    let needs_quotes = s.contains(',') || s.contains('"') || s.contains('\n') || s.contains('\r');
    // Spreadsheets evaluate cells starting with these as formulas
    let formula = s.starts_with(['=', '+', '-', '@']);

    match (needs_quotes, formula) {
        (true, true) => format!("\"'{}\"", s.replace('"', "\"\"")),
        (true, false) => format!("\"{}\"", s.replace('"', "\"\"")),
        (false, true) => format!("'{s}"),
        (false, false) => s.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::LanguageTag;

    #[test]
    fn test_header_only() {
        assert_eq!(to_csv(&[]), "Year,Journal,Title,Author,First Author,CN/EN\n");
    }

    #[test]
    fn test_quotes_fields_with_commas() {
        let record = PublicationRecord {
            year: "2017".into(),
            journal: "NeurIPS".into(),
            title: "Say \"hi\"".into(),
            author: "A Vaswani, N Shazeer".into(),
            first_author: "A Vaswani".into(),
            language: LanguageTag::English,
        };

        let csv = to_csv(&[record]);
        let line = csv.lines().nth(1).unwrap();
        assert_eq!(line, r#"2017,NeurIPS,"Say ""hi""","A Vaswani, N Shazeer",A Vaswani,English"#);
    }

    #[test]
    fn test_formula_prefix_is_neutralised() {
        assert_eq!(csv_escape("=SUM(A1)"), "'=SUM(A1)");
        assert_eq!(csv_escape("-1, 2"), "\"'-1, 2\"");
        assert_eq!(csv_escape("plain"), "plain");
    }
}
