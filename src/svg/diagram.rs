//! Domain diagram SVG rendering - maps the computed layout to pixels and
//! builds the document as a string.
//!
//! Pixel space has y pointing down, so data y is flipped around the
//! layout's vertical extent. The left margin grows with the longest
//! protein label so labels never clip.

use super::styles::{
    estimate_text_width, FontSizes, FontWeights, AXIS_BAND, CANVAS_PAD, LABEL_GAP, PX_PER_AA,
    PX_PER_UNIT, TEXT_BASELINE_SHIFT, TICK_LEN,
};
use super::theme::{build_style_block, svg_open_tag, Palette};
use crate::layout::{DiagramLayout, BACKBONE_HEIGHT, DOMAIN_HEIGHT};

/// Render a computed diagram layout as an SVG string.
pub fn render_diagram_svg(layout: &DiagramLayout, palette: &Palette, font: &str) -> String {
    let max_label_width = layout
        .rows
        .iter()
        .map(|r| estimate_text_width(&r.protein_id, FontSizes::ROW_LABEL, FontWeights::ROW_LABEL))
        .fold(0.0_f64, f64::max);

    // Labels end at the backbone start; the data extent already leaves
    // (1 - x_min) amino acids of lead room. Grow the margin by whatever
    // the longest label still overhangs.
    let lead = (1.0 - layout.x_min) * PX_PER_AA;
    let margin_left = CANVAS_PAD + (max_label_width + LABEL_GAP - lead).max(0.0);

    let x_px = |x: f64| margin_left + (x - layout.x_min) * PX_PER_AA;
    let y_px = |y: f64| CANVAS_PAD + (layout.y_max - y) * PX_PER_UNIT;

    let width = x_px(layout.x_max) + CANVAS_PAD;
    let height = y_px(0.0) + AXIS_BAND + CANVAS_PAD;

    let mut svg = String::new();
    svg.push_str(&svg_open_tag(width, height, palette));
    svg.push('\n');
    svg.push_str(&build_style_block(palette, font));
    svg.push('\n');

    if let Some(title) = &layout.title {
        svg.push_str(&format!(
            r#"<text x="{:.1}" y="{:.1}" class="title">{}</text>"#,
            CANVAS_PAD,
            CANVAS_PAD + FontSizes::TITLE,
            escape_xml(title)
        ));
        svg.push('\n');
    }

    // Scale bar along the baseline: main line, ticks, annotation.
    let bar_y = y_px(0.0);
    svg.push_str(&format!(
        r#"<line x1="{:.1}" y1="{:.1}" x2="{:.1}" y2="{:.1}" class="axis"/>"#,
        x_px(0.0),
        bar_y,
        x_px(layout.scalebar.length),
        bar_y
    ));
    svg.push('\n');
    for tick in &layout.scalebar.ticks {
        svg.push_str(&format!(
            r#"<line x1="{:.1}" y1="{:.1}" x2="{:.1}" y2="{:.1}" class="axis"/>"#,
            x_px(*tick),
            bar_y,
            x_px(*tick),
            bar_y + TICK_LEN
        ));
        svg.push('\n');
    }
    svg.push_str(&format!(
        r#"<text x="{:.1}" y="{:.1}" class="axis-label" text-anchor="middle">{}</text>"#,
        x_px(layout.scalebar.length / 2.0),
        bar_y + TICK_LEN + FontSizes::AXIS_LABEL + 4.0,
        escape_xml(&layout.scalebar.label)
    ));
    svg.push('\n');

    for row in &layout.rows {
        let cy = y_px(row.y);

        svg.push_str(&format!(
            r#"<rect x="{:.1}" y="{:.1}" width="{:.1}" height="{:.1}" class="backbone"/>"#,
            x_px(row.backbone_start),
            cy - BACKBONE_HEIGHT * PX_PER_UNIT / 2.0,
            (row.backbone_stop - row.backbone_start) * PX_PER_AA,
            BACKBONE_HEIGHT * PX_PER_UNIT
        ));
        svg.push('\n');

        svg.push_str(&format!(
            r#"<text x="{:.1}" y="{:.1}" class="row-label" text-anchor="end" dy="{}">{}</text>"#,
            x_px(row.backbone_start) - LABEL_GAP,
            cy,
            TEXT_BASELINE_SHIFT,
            escape_xml(&row.protein_id)
        ));
        svg.push('\n');

        for block in &row.blocks {
            let (lo, hi) = if block.start <= block.stop {
                (block.start, block.stop)
            } else {
                (block.stop, block.start)
            };
            let fill = block.color.as_deref().unwrap_or(&palette.fallback);
            svg.push_str(&format!(
                r#"<rect x="{:.1}" y="{:.1}" width="{:.1}" height="{:.1}" fill="{}"/>"#,
                x_px(lo),
                cy - DOMAIN_HEIGHT * PX_PER_UNIT / 2.0,
                (hi - lo) * PX_PER_AA,
                DOMAIN_HEIGHT * PX_PER_UNIT,
                escape_xml(fill)
            ));
            svg.push('\n');
        }
    }

    svg.push_str("</svg>");
    svg
}

/// Escape special XML characters in text content
pub fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::compute_diagram;
    use crate::types::{ColorAssignment, ColorTable, FeatureRecord, FeatureTable, RenderOptions};

    fn table() -> (FeatureTable, ColorTable) {
        let features = FeatureTable {
            records: vec![
                FeatureRecord {
                    protein_id: "P1".to_string(),
                    domain: "protein".to_string(),
                    start: 1,
                    stop: 100,
                },
                FeatureRecord {
                    protein_id: "P1".to_string(),
                    domain: "Kinase".to_string(),
                    start: 5,
                    stop: 55,
                },
            ],
        };
        let colors = ColorTable {
            assignments: vec![ColorAssignment {
                domain: "Kinase".to_string(),
                color: "#FF0000".to_string(),
            }],
        };
        (features, colors)
    }

    #[test]
    fn emits_backbone_label_and_domain() {
        let (features, colors) = table();
        let (layout, _) = compute_diagram(&features, &colors, &RenderOptions::default());
        let svg = render_diagram_svg(&layout, &Palette::default(), "Inter");

        assert!(svg.contains("<svg"));
        assert!(svg.contains("</svg>"));
        assert!(svg.contains(r#"class="backbone""#));
        assert!(svg.contains(r##"fill="#FF0000""##));
        assert!(svg.contains(">P1<"));
    }

    #[test]
    fn title_is_escaped() {
        let (features, colors) = table();
        let options = RenderOptions {
            title: Some("Kinases & friends <draft>".to_string()),
            ..Default::default()
        };
        let (layout, _) = compute_diagram(&features, &colors, &options);
        let svg = render_diagram_svg(&layout, &Palette::default(), "Inter");
        assert!(svg.contains("Kinases &amp; friends &lt;draft&gt;"));
    }

    #[test]
    fn escape_xml_handles_all_metacharacters() {
        assert_eq!(
            escape_xml(r#"<a & "b"'>"#),
            "&lt;a &amp; &quot;b&quot;&#39;&gt;"
        );
    }
}
