//! Legend SVG rendering - a blank, axis-free canvas listing each
//! selected domain next to a filled swatch of its assigned color.

use super::diagram::escape_xml;
use super::styles::{
    estimate_text_width, FontSizes, FontWeights, CANVAS_PAD, LABEL_GAP, LEGEND_ROW_PITCH,
    SWATCH_HEIGHT, SWATCH_WIDTH, TEXT_BASELINE_SHIFT,
};
use super::theme::{build_style_block, svg_open_tag, Palette};
use crate::layout::LegendLayout;

/// Render a legend layout as an SVG string.
pub fn render_legend_svg(layout: &LegendLayout, palette: &Palette, font: &str) -> String {
    let max_label_width = layout
        .entries
        .iter()
        .map(|e| estimate_text_width(&e.domain, FontSizes::LEGEND_LABEL, FontWeights::LEGEND_LABEL))
        .fold(0.0_f64, f64::max);
    let title_width = layout
        .title
        .as_deref()
        .map(|t| estimate_text_width(t, FontSizes::TITLE, FontWeights::TITLE))
        .unwrap_or(0.0);

    let body_width = SWATCH_WIDTH + LABEL_GAP + max_label_width;
    let width = CANVAS_PAD * 2.0 + body_width.max(title_width);
    let title_band = if layout.title.is_some() {
        FontSizes::TITLE + 12.0
    } else {
        0.0
    };
    let height = CANVAS_PAD * 2.0 + title_band + layout.entries.len() as f64 * LEGEND_ROW_PITCH;

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

    for (i, entry) in layout.entries.iter().enumerate() {
        let cy = CANVAS_PAD + title_band + (i as f64 + 0.5) * LEGEND_ROW_PITCH;
        svg.push_str(&format!(
            r#"<rect x="{:.1}" y="{:.1}" width="{:.1}" height="{:.1}" fill="{}"/>"#,
            CANVAS_PAD,
            cy - SWATCH_HEIGHT / 2.0,
            SWATCH_WIDTH,
            SWATCH_HEIGHT,
            escape_xml(&entry.color)
        ));
        svg.push('\n');
        svg.push_str(&format!(
            r#"<text x="{:.1}" y="{:.1}" class="legend-label" dy="{}">{}</text>"#,
            CANVAS_PAD + SWATCH_WIDTH + LABEL_GAP,
            cy,
            TEXT_BASELINE_SHIFT,
            escape_xml(&entry.domain)
        ));
        svg.push('\n');
    }

    svg.push_str("</svg>");
    svg
}
