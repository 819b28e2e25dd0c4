//! GUI module - User interface components

mod app;
mod carousel_panel;
mod chart_view;
mod pricing_panel;
mod simulator_panel;
mod waitlist_window;

pub use app::ShowcaseApp;
pub use carousel_panel::{CarouselAction, CarouselPanel};
pub use chart_view::ChartView;
pub use pricing_panel::{PricingAction, PricingPanel};
pub use simulator_panel::{SimulatorAction, SimulatorPanel};
pub use waitlist_window::WaitlistWindow;
