//! SVG emission - builds diagram and legend documents as strings.
//!
//! Pure string building, no DOM manipulation. The drawing surface is the
//! string under construction; margins and extents are computed per call,
//! so repeated renderings are isolated from each other.

mod diagram;
mod legend;
mod styles;
mod theme;

pub use diagram::{escape_xml, render_diagram_svg};
pub use legend::render_legend_svg;
pub use styles::{estimate_text_width, FontSizes, FontWeights, PX_PER_AA, PX_PER_UNIT};
pub use theme::{build_style_block, svg_open_tag, Palette, Theme};
