//! Palette system - the fixed colors a rendering uses.
//!
//! Domain fills come from the caller's color table; everything else
//! (canvas, text, backbone, axis, the fallback fill for unassigned
//! domains) comes from a `Palette`. Palettes are serde-derived so a
//! custom one can be loaded from JSON.

use serde::{Deserialize, Serialize};

use super::styles::{FontSizes, FontWeights, StrokeWidths};

/// Built-in palette variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }
}

/// Fixed diagram colors.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Palette {
    /// Canvas background
    pub bg: String,
    /// Title and label text
    pub fg: String,
    /// Backbone bar fill
    pub backbone: String,
    /// Fill for domains with no color assignment
    pub fallback: String,
    /// Scale bar line and ticks
    pub axis: String,
    /// Secondary text (scale annotation)
    pub muted: String,
}

impl Default for Palette {
    fn default() -> Self {
        Self::from_theme(Theme::Light)
    }
}

impl Palette {
    pub fn from_theme(theme: Theme) -> Self {
        match theme {
            Theme::Light => Self {
                bg: "#FFFFFF".to_string(),
                fg: "#333333".to_string(),
                backbone: "#000000".to_string(),
                fallback: "#B0B0B0".to_string(),
                axis: "#333333".to_string(),
                muted: "#666666".to_string(),
            },
            Theme::Dark => Self {
                bg: "#1F2020".to_string(),
                fg: "#CCCCCC".to_string(),
                backbone: "#E0E0E0".to_string(),
                fallback: "#555555".to_string(),
                axis: "#AAAAAA".to_string(),
                muted: "#888888".to_string(),
            },
        }
    }
}

/// Build the SVG opening tag.
pub fn svg_open_tag(width: f64, height: f64, palette: &Palette) -> String {
    // Format dimensions - use integer if whole number, otherwise preserve decimals
    let format_dim = |d: f64| -> String {
        if d.fract() == 0.0 {
            format!("{}", d as i64)
        } else {
            let s = format!("{}", d);
            s.trim_end_matches('0').trim_end_matches('.').to_string()
        }
    };

    let w_str = format_dim(width);
    let h_str = format_dim(height);

    format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {} {}" width="{}" height="{}" style="background:{}">"#,
        w_str, h_str, w_str, h_str, palette.bg
    )
}

/// Build the <style> block with the font import and element classes.
pub fn build_style_block(palette: &Palette, font: &str) -> String {
    let font_encoded = font.replace(' ', "%20");

    format!(
        r#"<style>
  @import url('https://fonts.googleapis.com/css2?family={font_encoded}:wght@400;500;600;700&amp;display=swap');
  text {{ font-family: '{font}', system-ui, sans-serif; }}
  .title {{ fill: {fg}; font-size: {title_size}px; font-weight: {title_weight}; }}
  .row-label {{ fill: {fg}; font-size: {label_size}px; font-weight: {label_weight}; }}
  .backbone {{ fill: {backbone}; }}
  .axis {{ stroke: {axis}; stroke-width: {axis_width}; }}
  .axis-label {{ fill: {muted}; font-size: {axis_size}px; font-weight: {axis_weight}; }}
  .legend-label {{ fill: {fg}; font-size: {legend_size}px; font-weight: {legend_weight}; }}
</style>"#,
        font_encoded = font_encoded,
        font = font,
        fg = palette.fg,
        backbone = palette.backbone,
        axis = palette.axis,
        muted = palette.muted,
        title_size = FontSizes::TITLE,
        title_weight = FontWeights::TITLE,
        label_size = FontSizes::ROW_LABEL,
        label_weight = FontWeights::ROW_LABEL,
        axis_size = FontSizes::AXIS_LABEL,
        axis_weight = FontWeights::AXIS_LABEL,
        axis_width = StrokeWidths::AXIS,
        legend_size = FontSizes::LEGEND_LABEL,
        legend_weight = FontWeights::LEGEND_LABEL,
    )
}
