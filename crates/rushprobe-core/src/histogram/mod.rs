pub mod builder;
pub mod chart;

pub use builder::{MoveHistogram, MoveStats, MAX_AXIS_SPAN};
pub use chart::{render_svg, render_svg_to_string, ChartStyle};
