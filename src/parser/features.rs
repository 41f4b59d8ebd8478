//! Feature table parser
//!
//! Expected columns: `protein_id`, `domain`, `start`, `stop`. Coordinates
//! are read as text so that thousands separators can be normalized before
//! parsing; an unparsable coordinate is the one fatal data error.

use serde::Deserialize;

use super::parse_coordinate;
use crate::types::{FeatureRecord, FeatureTable};
use crate::Error;

const REQUIRED_COLUMNS: [&str; 4] = ["protein_id", "domain", "start", "stop"];

#[derive(Debug, Deserialize)]
struct RawFeature {
    protein_id: String,
    domain: String,
    start: String,
    stop: String,
}

/// Parse and normalize a feature table from CSV text.
pub fn parse_feature_table(input: &str) -> Result<FeatureTable, Error> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(input.as_bytes());

    let headers = reader.headers()?.clone();
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == column) {
            return Err(Error::MissingColumn {
                table: "feature",
                column,
            });
        }
    }

    let mut records = Vec::new();
    for row in reader.deserialize() {
        let raw: RawFeature = row?;
        let start = parse_coordinate(&raw.start).ok_or_else(|| Error::InvalidCoordinate {
            protein_id: raw.protein_id.clone(),
            field: "start",
            value: raw.start.clone(),
        })?;
        let stop = parse_coordinate(&raw.stop).ok_or_else(|| Error::InvalidCoordinate {
            protein_id: raw.protein_id.clone(),
            field: "stop",
            value: raw.stop.clone(),
        })?;
        records.push(FeatureRecord {
            protein_id: raw.protein_id,
            domain: raw.domain,
            start,
            stop,
        });
    }

    Ok(FeatureTable { records })
}
