//! Charts module - pie chart geometry, interactive plots and static rendering

mod pie;
mod plotter;
mod renderer;

pub use pie::{label_color, PieChart, PieSlice};
pub use plotter::{ChartPlotter, SlicePolygon};
pub use renderer::{RenderError, StaticChartRenderer};
