//! Color table parser
//!
//! Expected columns: `domain`, `color`. The color value is passed through
//! to the SVG unvalidated; anything the renderer accepts is allowed.

use serde::Deserialize;

use crate::types::{ColorAssignment, ColorTable};
use crate::Error;

const REQUIRED_COLUMNS: [&str; 2] = ["domain", "color"];

#[derive(Debug, Deserialize)]
struct RawColor {
    domain: String,
    color: String,
}

/// Parse a color table from CSV text.
pub fn parse_color_table(input: &str) -> Result<ColorTable, Error> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(input.as_bytes());

    let headers = reader.headers()?.clone();
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == column) {
            return Err(Error::MissingColumn {
                table: "color",
                column,
            });
        }
    }

    let mut assignments = Vec::new();
    for row in reader.deserialize() {
        let raw: RawColor = row?;
        assignments.push(ColorAssignment {
            domain: raw.domain,
            color: raw.color,
        });
    }

    Ok(ColorTable { assignments })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_assignments_in_order() {
        let input = "domain,color\nKinase,#FF0000\nSH2,cornflowerblue\n";
        let table = parse_color_table(input).unwrap();
        assert_eq!(table.assignments.len(), 2);
        assert_eq!(table.assignments[0].domain, "Kinase");
        assert_eq!(table.color_for("SH2"), Some("cornflowerblue"));
    }

    #[test]
    fn missing_column_is_fatal() {
        let input = "domain\nKinase\n";
        let err = parse_color_table(input).unwrap_err();
        assert!(matches!(
            err,
            Error::MissingColumn {
                table: "color",
                column: "color"
            }
        ));
    }

    #[test]
    fn empty_table_is_allowed() {
        let table = parse_color_table("domain,color\n").unwrap();
        assert!(table.assignments.is_empty());
    }
}
