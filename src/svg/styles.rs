//! Font metrics, fixed dimensions and data-to-pixel scale factors.
//!
//! Calibrated for Inter with fallback to system UI fonts.

/// Average character width in px at the given font size and weight
pub fn estimate_text_width(text: &str, font_size: f64, font_weight: u32) -> f64 {
    // Inter average character widths as fraction of fontSize, per weight.
    // Heavier weights are slightly wider.
    let width_ratio = if font_weight >= 600 {
        0.58
    } else if font_weight >= 500 {
        0.55
    } else {
        0.52
    };
    text.len() as f64 * font_size * width_ratio
}

/// Fixed font sizes used in the renderer (in px)
pub struct FontSizes;

impl FontSizes {
    pub const TITLE: f64 = 16.0;
    pub const ROW_LABEL: f64 = 13.0;
    pub const AXIS_LABEL: f64 = 11.0;
    pub const LEGEND_LABEL: f64 = 13.0;
}

/// Font weights used per element type
pub struct FontWeights;

impl FontWeights {
    pub const TITLE: u32 = 700;
    pub const ROW_LABEL: u32 = 500;
    pub const AXIS_LABEL: u32 = 400;
    pub const LEGEND_LABEL: u32 = 400;
}

/// Stroke widths per element type (in px)
pub struct StrokeWidths;

impl StrokeWidths {
    pub const AXIS: f64 = 1.0;
}

/// Pixels per amino acid along x.
pub const PX_PER_AA: f64 = 1.0;
/// Pixels per stacking unit along y.
pub const PX_PER_UNIT: f64 = 2.0;
/// Blank border around the drawing, px.
pub const CANVAS_PAD: f64 = 8.0;
/// Gap between a row label and the backbone start, px.
pub const LABEL_GAP: f64 = 8.0;
/// Tick length below the scale bar, px.
pub const TICK_LEN: f64 = 5.0;
/// Band under the baseline reserved for the scale annotation, px.
pub const AXIS_BAND: f64 = 28.0;

/// Legend swatch dimensions and row spacing, px.
pub const SWATCH_WIDTH: f64 = 18.0;
pub const SWATCH_HEIGHT: f64 = 12.0;
pub const LEGEND_ROW_PITCH: f64 = 24.0;

/// Vertical shift applied to all text elements for font-agnostic centering.
/// Using 0.35em ensures it scales with font size.
pub const TEXT_BASELINE_SHIFT: &str = "0.35em";
