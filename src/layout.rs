//! Layout computation for domain diagrams and legends.
//!
//! Everything here works in data coordinates: x is the amino-acid
//! position, y the vertical stacking slot, baseline at y = 0. Mapping to
//! pixels happens in the SVG layer.

use crate::types::{ColorTable, FeatureTable, RenderOptions, Warning, LENGTH_DOMAIN};

/// Backbone bar thickness, in stacking units.
pub const BACKBONE_HEIGHT: f64 = 1.0;
/// Domain block thickness, in stacking units.
pub const DOMAIN_HEIGHT: f64 = 10.0;
/// Vertical gap between protein rows, in stacking units.
pub const ROW_SEP: f64 = 10.0;
/// Horizontal padding on each side of the longest backbone, in amino acids.
pub const X_PAD: f64 = 100.0;
/// Number of segments the scale bar ticks divide it into.
pub const SCALEBAR_SEGMENTS: usize = 5;

/// Computed geometry for a domain diagram, in data coordinates.
#[derive(Debug, Clone)]
pub struct DiagramLayout {
    pub x_min: f64,
    pub x_max: f64,
    pub y_max: f64,
    pub title: Option<String>,
    pub scalebar: Scalebar,
    pub rows: Vec<ProteinRow>,
}

/// The reference ruler drawn along the baseline.
#[derive(Debug, Clone)]
pub struct Scalebar {
    pub length: f64,
    /// Tick positions from 0 to `length`, both ends included.
    pub ticks: Vec<f64>,
    /// Annotation under the midpoint, e.g. `"500 aa"`.
    pub label: String,
}

impl Scalebar {
    fn new(length: f64) -> Self {
        let ticks = (0..=SCALEBAR_SEGMENTS)
            .map(|i| length * i as f64 / SCALEBAR_SEGMENTS as f64)
            .collect();
        Self {
            length,
            ticks,
            label: format!("{} aa", format_quantity(length)),
        }
    }
}

/// One protein's row: backbone span, label and domain blocks, all
/// vertically centered on `y`.
#[derive(Debug, Clone)]
pub struct ProteinRow {
    pub protein_id: String,
    pub y: f64,
    pub backbone_start: f64,
    pub backbone_stop: f64,
    pub blocks: Vec<DomainBlock>,
}

/// One domain rectangle within a row. A domain with several records
/// produces one block per record.
#[derive(Debug, Clone)]
pub struct DomainBlock {
    pub domain: String,
    pub start: f64,
    pub stop: f64,
    /// Assigned color; `None` when the domain has no color table entry
    /// (the emitter substitutes the palette fallback).
    pub color: Option<String>,
}

/// Compute the full diagram geometry plus any advisory warnings.
pub fn compute_diagram(
    features: &FeatureTable,
    colors: &ColorTable,
    options: &RenderOptions,
) -> (DiagramLayout, Vec<Warning>) {
    let mut warnings = Vec::new();
    let protein_ids = features.protein_ids();

    let pitch = ROW_SEP + DOMAIN_HEIGHT;
    let y_max = protein_ids.len() as f64 * pitch + ROW_SEP * 2.5;
    let mut y = y_max - ROW_SEP / 2.0;

    let mut rows = Vec::with_capacity(protein_ids.len());
    for protein_id in &protein_ids {
        y -= pitch;

        let length_rows: Vec<_> = features
            .records_for(protein_id)
            .filter(|r| r.is_length_row())
            .collect();
        let length = match length_rows.as_slice() {
            [] => {
                warnings.push(Warning::MissingLengthRow {
                    protein_id: (*protein_id).to_string(),
                });
                features
                    .records_for(protein_id)
                    .map(|r| r.stop)
                    .max()
                    .unwrap_or(1) as f64
            }
            [only] => only.length() as f64,
            [first, ..] => {
                warnings.push(Warning::MultipleLengthRows {
                    protein_id: (*protein_id).to_string(),
                    count: length_rows.len(),
                });
                first.length() as f64
            }
        };

        let blocks = features
            .records_for(protein_id)
            .filter(|r| !r.is_length_row())
            .map(|r| DomainBlock {
                domain: r.domain.clone(),
                start: r.start as f64,
                stop: r.stop as f64,
                color: colors.color_for(&r.domain).map(str::to_string),
            })
            .collect();

        rows.push(ProteinRow {
            protein_id: (*protein_id).to_string(),
            y,
            backbone_start: 1.0,
            backbone_stop: length,
            blocks,
        });
    }

    let unassigned: Vec<String> = features
        .domains()
        .into_iter()
        .filter(|d| *d != LENGTH_DOMAIN && colors.color_for(d).is_none())
        .map(str::to_string)
        .collect();
    if !unassigned.is_empty() {
        warnings.push(Warning::UnassignedDomainColors {
            domains: unassigned,
        });
    }

    let max_len = rows
        .iter()
        .map(|r| r.backbone_stop)
        .fold(0.0_f64, f64::max);
    let x_max = if max_len + X_PAD <= options.scalebar {
        options.scalebar + 1.0
    } else {
        max_len + X_PAD
    };

    let layout = DiagramLayout {
        x_min: -X_PAD,
        x_max,
        y_max,
        title: options.title.clone(),
        scalebar: Scalebar::new(options.scalebar),
        rows,
    };
    (layout, warnings)
}

/// Computed content for a standalone legend.
#[derive(Debug, Clone)]
pub struct LegendLayout {
    pub title: Option<String>,
    pub entries: Vec<LegendEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LegendEntry {
    pub domain: String,
    pub color: String,
}

/// Select legend entries: color assignments whose domain appears in the
/// feature table, in color-table order, first assignment per domain.
pub fn compute_legend(
    features: &FeatureTable,
    colors: &ColorTable,
    options: &RenderOptions,
) -> LegendLayout {
    let used = features.domains();
    let mut entries: Vec<LegendEntry> = Vec::new();
    for assignment in &colors.assignments {
        if used.contains(&assignment.domain.as_str())
            && !entries.iter().any(|e| e.domain == assignment.domain)
        {
            entries.push(LegendEntry {
                domain: assignment.domain.clone(),
                color: assignment.color.clone(),
            });
        }
    }
    LegendLayout {
        title: options.title.clone(),
        entries,
    }
}

fn format_quantity(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}
