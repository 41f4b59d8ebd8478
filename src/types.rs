//! Type definitions for feature tables, color assignments and render options

/// Sentinel domain value marking the record that defines a protein's
/// total length (`start=1, stop=length`).
pub const LENGTH_DOMAIN: &str = "protein";

/// One row of the feature table, after normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureRecord {
    pub protein_id: String,
    pub domain: String,
    pub start: u32,
    pub stop: u32,
}

impl FeatureRecord {
    /// Number of amino acids covered, `stop - start + 1`.
    pub fn length(&self) -> u32 {
        self.stop.saturating_sub(self.start) + 1
    }

    /// Whether this is the record defining the protein's total length.
    pub fn is_length_row(&self) -> bool {
        self.domain == LENGTH_DOMAIN
    }
}

/// The normalized feature table. Row order is significant: proteins and
/// domains are laid out in first-appearance order, never sorted.
#[derive(Debug, Clone, Default)]
pub struct FeatureTable {
    pub records: Vec<FeatureRecord>,
}

impl FeatureTable {
    /// Distinct `protein_id` values in first-appearance order.
    pub fn protein_ids(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for record in &self.records {
            if !seen.contains(&record.protein_id.as_str()) {
                seen.push(&record.protein_id);
            }
        }
        seen
    }

    /// Distinct domain values (including the length sentinel) in
    /// first-appearance order.
    pub fn domains(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for record in &self.records {
            if !seen.contains(&record.domain.as_str()) {
                seen.push(&record.domain);
            }
        }
        seen
    }

    /// All records belonging to one protein, in row order.
    pub fn records_for<'a>(
        &'a self,
        protein_id: &'a str,
    ) -> impl Iterator<Item = &'a FeatureRecord> {
        self.records
            .iter()
            .filter(move |r| r.protein_id == protein_id)
    }
}

/// One row of the color table: a domain name and any SVG-accepted color
/// specification (hex strings are the reference format).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorAssignment {
    pub domain: String,
    pub color: String,
}

/// The color table. Duplicate domain entries are kept as-is; lookups
/// return the first match.
#[derive(Debug, Clone, Default)]
pub struct ColorTable {
    pub assignments: Vec<ColorAssignment>,
}

impl ColorTable {
    /// First assigned color for a domain, if any.
    pub fn color_for(&self, domain: &str) -> Option<&str> {
        self.assignments
            .iter()
            .find(|a| a.domain == domain)
            .map(|a| a.color.as_str())
    }
}

/// Invocation parameters for one rendering.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Scale bar length in amino acids.
    pub scalebar: f64,
    /// Diagram title, drawn left-aligned at the top when present.
    pub title: Option<String>,
    /// Draw a standalone legend instead of the domain diagram.
    pub legend: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            scalebar: 500.0,
            title: None,
            legend: false,
        }
    }
}

/// Advisory anomalies detected while laying out a diagram. None of these
/// interrupt rendering; the caller decides how to surface them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Warning {
    /// A protein has no `"protein"` length row; its backbone length was
    /// inferred from the furthest domain stop.
    MissingLengthRow { protein_id: String },
    /// A protein has more than one `"protein"` length row; the first one
    /// was used.
    MultipleLengthRows { protein_id: String, count: usize },
    /// Domains used in the feature table with no entry in the color
    /// table; their rectangles were drawn with the palette fallback fill.
    UnassignedDomainColors { domains: Vec<String> },
}

impl std::fmt::Display for Warning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Warning::MissingLengthRow { protein_id } => write!(
                f,
                "protein `{}` has no `{}` length row; using furthest domain stop as backbone length",
                protein_id, LENGTH_DOMAIN
            ),
            Warning::MultipleLengthRows { protein_id, count } => write!(
                f,
                "protein `{}` has {} `{}` length rows; using the first",
                protein_id, count, LENGTH_DOMAIN
            ),
            Warning::UnassignedDomainColors { domains } => write!(
                f,
                "no color assigned for domain(s): {}; using fallback fill",
                domains.join(", ")
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(protein_id: &str, domain: &str, start: u32, stop: u32) -> FeatureRecord {
        FeatureRecord {
            protein_id: protein_id.to_string(),
            domain: domain.to_string(),
            start,
            stop,
        }
    }

    #[test]
    fn length_is_inclusive() {
        assert_eq!(record("P1", "protein", 1, 100).length(), 100);
        assert_eq!(record("P1", "Kinase", 5, 5).length(), 1);
    }

    #[test]
    fn protein_ids_keep_first_appearance_order() {
        let table = FeatureTable {
            records: vec![
                record("Zeta", "protein", 1, 50),
                record("Alpha", "protein", 1, 80),
                record("Zeta", "Kinase", 2, 10),
            ],
        };
        assert_eq!(table.protein_ids(), vec!["Zeta", "Alpha"]);
    }

    #[test]
    fn color_lookup_first_match_wins() {
        let table = ColorTable {
            assignments: vec![
                ColorAssignment {
                    domain: "Kinase".to_string(),
                    color: "#FF0000".to_string(),
                },
                ColorAssignment {
                    domain: "Kinase".to_string(),
                    color: "#00FF00".to_string(),
                },
            ],
        };
        assert_eq!(table.color_for("Kinase"), Some("#FF0000"));
        assert_eq!(table.color_for("SH2"), None);
    }
}
