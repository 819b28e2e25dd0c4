//! Simulator module - Tabbed product demo with stats and sales chart

mod controller;
mod stats;
mod tabs;

pub use controller::{SimulatorController, DASHBOARD_TAB};
pub use stats::StatCounter;
pub use tabs::TabSet;
