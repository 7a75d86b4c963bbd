//! Charts module - Chart description and PNG rendering

mod fonts;
mod kind;
mod plotter;
mod renderer;

pub use fonts::FONT_FAMILY;
pub use kind::ChartKind;
pub use plotter::ChartPlot;
pub use renderer::{Canvas, RenderError, StaticChartRenderer};

/// Mime type of every rendered chart.
pub const PNG_MIME: &str = "image/png";
