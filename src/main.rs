//! Showcase - Interactive Product Demo
//!
//! A desktop rendition of the product page: dashboard simulator with
//! animated stats, auto-advancing feature carousel, pricing and waitlist.

mod carousel;
mod charts;
mod config;
mod gui;
mod simulator;
mod site;
mod timing;

use anyhow::{anyhow, Context};
use config::ShowcaseConfig;
use eframe::egui;
use gui::ShowcaseApp;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("showcase=info")),
        )
        .init();

    let config = match std::env::args_os().nth(1).map(PathBuf::from) {
        Some(path) => ShowcaseConfig::load(&path)
            .with_context(|| format!("loading configuration from {}", path.display()))?,
        None => ShowcaseConfig::default(),
    };
    tracing::info!(
        tabs = config.simulator.tabs.len(),
        slides = config.carousel.slides.len(),
        "Configuration loaded"
    );

    // Configure native options
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 860.0])
            .with_min_inner_size([900.0, 600.0])
            .with_title("Brazweed Showcase"),
        ..Default::default()
    };

    eframe::run_native(
        "Brazweed Showcase",
        options,
        Box::new(move |cc| Ok(Box::new(ShowcaseApp::new(cc, config)))),
    )
    .map_err(|e| anyhow!("failed to start window: {e}"))
}
