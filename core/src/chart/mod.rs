pub mod figure;
pub mod render;
pub mod style;

pub use figure::{build_series, x_range, Figure, LegendCorner, PlottedSeries};
pub use render::ChartRenderer;
pub use style::{ChartStyle, MarkerShape, SeriesStyle};
