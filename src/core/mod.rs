pub mod axis_band;
pub mod summary;
pub mod types;

pub use axis_band::{AxisBand, CoordinateMapper};
pub use summary::SeriesSummary;
pub use types::{AxisPoint, LayoutBox};
