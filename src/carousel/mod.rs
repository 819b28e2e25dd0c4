//! Carousel module - Auto-advancing feature carousel

mod controller;
mod slides;

pub use controller::{CarouselController, CHART_SLIDE};
pub use slides::{FeatureRegion, SlideSet};
