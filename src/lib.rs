//! prot2svg - Render protein domain annotation tables as SVG diagrams
//!
//! This library consumes two tables - feature records (`protein_id`,
//! `domain`, `start`, `stop`) and color assignments (`domain`, `color`) -
//! and renders either a protein-domain diagram or a standalone legend.
//! Each protein becomes a horizontal backbone bar with its annotated
//! domains drawn as colored rectangles positioned by coordinate, plus a
//! fixed-length scale bar for visual comparison across diagrams.
//!
//! # Example
//!
//! ```rust
//! use prot2svg::{render_csv, RenderOptions};
//!
//! let features = "protein_id,domain,start,stop\n\
//!                 P1,protein,1,100\n\
//!                 P1,Kinase,5,55\n";
//! let colors = "domain,color\nKinase,#FF0000\n";
//!
//! let rendered = render_csv(features, colors, &RenderOptions::default()).unwrap();
//! assert!(rendered.svg.contains("<svg"));
//! assert!(rendered.warnings.is_empty());
//! ```
//!
//! Anomalies that do not prevent layout (a protein without a length row,
//! a domain without a color) come back as [`Warning`] values next to the
//! SVG; only unparsable input aborts a rendering.

pub mod layout;
pub mod parser;
pub mod svg;
pub mod types;

pub use parser::{parse_color_table, parse_feature_table};
pub use svg::{render_diagram_svg, render_legend_svg, Palette, Theme};
pub use types::*;

/// Font family requested in rendered documents.
pub const DEFAULT_FONT: &str = "Inter";

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("{table} table is missing required column `{column}`")]
    MissingColumn {
        table: &'static str,
        column: &'static str,
    },

    #[error("invalid {field} coordinate `{value}` for protein `{protein_id}`")]
    InvalidCoordinate {
        protein_id: String,
        field: &'static str,
        value: String,
    },

    #[error("feature table has no records")]
    EmptyFeatureTable,

    #[error("palette error: {0}")]
    Palette(#[from] serde_json::Error),

    #[error("unknown theme `{0}` (expected `light` or `dark`)")]
    UnknownTheme(String),
}

/// A finished rendering: the SVG document plus any advisory warnings.
#[derive(Debug, Clone)]
pub struct Rendered {
    pub svg: String,
    pub warnings: Vec<Warning>,
}

/// Render with the default (light) palette.
///
/// Dispatches on `options.legend`: a standalone legend, or the full
/// domain diagram.
pub fn render(
    features: &FeatureTable,
    colors: &ColorTable,
    options: &RenderOptions,
) -> Result<Rendered, Error> {
    render_with_palette(features, colors, options, &Palette::default())
}

/// Render with an explicit palette.
pub fn render_with_palette(
    features: &FeatureTable,
    colors: &ColorTable,
    options: &RenderOptions,
    palette: &Palette,
) -> Result<Rendered, Error> {
    if options.legend {
        let legend = layout::compute_legend(features, colors, options);
        Ok(Rendered {
            svg: render_legend_svg(&legend, palette, DEFAULT_FONT),
            warnings: Vec::new(),
        })
    } else {
        if features.records.is_empty() {
            return Err(Error::EmptyFeatureTable);
        }
        let (diagram, warnings) = layout::compute_diagram(features, colors, options);
        Ok(Rendered {
            svg: render_diagram_svg(&diagram, palette, DEFAULT_FONT),
            warnings,
        })
    }
}

/// Parse both tables from CSV text and render.
pub fn render_csv(
    features_csv: &str,
    colors_csv: &str,
    options: &RenderOptions,
) -> Result<Rendered, Error> {
    let features = parse_feature_table(features_csv)?;
    let colors = parse_color_table(colors_csv)?;
    render(&features, &colors, options)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_feature_table_is_fatal_in_diagram_mode() {
        let err = render_csv("protein_id,domain,start,stop\n", "domain,color\n", &RenderOptions::default())
            .unwrap_err();
        assert!(matches!(err, Error::EmptyFeatureTable));
    }

    #[test]
    fn legend_mode_tolerates_empty_tables() {
        let options = RenderOptions {
            legend: true,
            ..Default::default()
        };
        let rendered =
            render_csv("protein_id,domain,start,stop\n", "domain,color\n", &options).unwrap();
        assert!(rendered.svg.contains("</svg>"));
    }

    #[test]
    fn warnings_ride_along_with_the_svg() {
        let features = "protein_id,domain,start,stop\nORF1,CoiledCoil,10,60\n";
        let colors = "domain,color\n";
        let rendered = render_csv(features, colors, &RenderOptions::default()).unwrap();
        assert_eq!(rendered.warnings.len(), 2);
        assert!(rendered.svg.contains("</svg>"));
    }
}
