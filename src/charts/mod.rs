//! Charts module - Raster line chart rendering

mod export;
mod layout;
mod renderer;
mod series;
mod surface;

pub use export::export_png;
pub use layout::ChartLayout;
pub use renderer::{ChartRenderer, ChartStyle};
pub use series::Series;
pub use surface::ChartSurface;
