//! Parsers for the two input tables (CSV reference format)

pub mod colors;
pub mod features;

pub use colors::parse_color_table;
pub use features::parse_feature_table;

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Digits, optionally grouped by thousands separators: "1050", "1,050".
    static ref RE_COORDINATE: Regex = Regex::new(r"^(?:\d{1,3}(?:,\d{3})+|\d+)$").unwrap();
}

/// Normalize one coordinate field: strip thousands separators and parse.
/// Returns `None` when the field does not have a numeric shape.
pub(crate) fn parse_coordinate(raw: &str) -> Option<u32> {
    let trimmed = raw.trim();
    if !RE_COORDINATE.is_match(trimmed) {
        return None;
    }
    trimmed.replace(',', "").parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_digits_parse() {
        assert_eq!(parse_coordinate("1"), Some(1));
        assert_eq!(parse_coordinate("393"), Some(393));
        assert_eq!(parse_coordinate(" 42 "), Some(42));
    }

    #[test]
    fn thousands_separators_are_stripped() {
        assert_eq!(parse_coordinate("1,050"), Some(1050));
        assert_eq!(parse_coordinate("12,345,678"), Some(12_345_678));
    }

    #[test]
    fn non_numeric_shapes_are_rejected() {
        assert_eq!(parse_coordinate(""), None);
        assert_eq!(parse_coordinate("abc"), None);
        assert_eq!(parse_coordinate("12.5"), None);
        assert_eq!(parse_coordinate("-5"), None);
        assert_eq!(parse_coordinate("1,05"), None);
        assert_eq!(parse_coordinate(",100"), None);
    }
}
