//! Showcase Main Application
//! Page header, simulator, feature carousel and pricing in one scrolling
//! view, with the waitlist modal on top.

use crate::carousel::CarouselController;
use crate::charts::{export_png, ChartSurface};
use crate::config::ShowcaseConfig;
use crate::gui::{
    CarouselAction, CarouselPanel, PricingAction, PricingPanel, SimulatorAction, SimulatorPanel,
    WaitlistWindow,
};
use crate::simulator::SimulatorController;
use crate::site::{PricingConfig, PricingToggle, WaitlistModal};
use egui::RichText;
use std::time::{Duration, Instant};

/// Main application window.
pub struct ShowcaseApp {
    simulator: Option<SimulatorController>,
    carousel: Option<CarouselController>,
    simulator_panel: SimulatorPanel,
    carousel_panel: CarouselPanel,

    pricing: PricingConfig,
    pricing_toggle: PricingToggle,
    waitlist: WaitlistModal,

    started_at: Instant,
    status: String,
}

impl ShowcaseApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: ShowcaseConfig) -> Self {
        let mut simulator = SimulatorController::new(&config.simulator, &config.timing);
        if let Some(sim) = simulator.as_mut() {
            sim.start();
        } else {
            tracing::warn!("Simulator has no tabs, section disabled");
        }

        let mut carousel = CarouselController::new(&config.carousel, &config.timing);
        if let Some(carousel) = carousel.as_mut() {
            carousel.start();
        } else {
            tracing::warn!("Carousel has no slides, section disabled");
        }

        Self {
            simulator,
            carousel,
            simulator_panel: SimulatorPanel::new(),
            carousel_panel: CarouselPanel::new(),
            pricing: config.pricing,
            pricing_toggle: PricingToggle::new(),
            waitlist: WaitlistModal::new(config.timing.waitlist_submit()),
            started_at: Instant::now(),
            status: "Ready".to_string(),
        }
    }

    /// Fire every timer that is due at the current elapsed time.
    fn poll_timers(&mut self, now: Duration) {
        if let Some(sim) = self.simulator.as_mut() {
            sim.poll(now);
        }
        if let Some(carousel) = self.carousel.as_mut() {
            carousel.poll(now);
        }
        self.waitlist.poll(now);
    }

    fn next_deadline(&self) -> Option<Duration> {
        [
            self.simulator.as_ref().and_then(|s| s.next_deadline()),
            self.carousel.as_ref().and_then(|c| c.next_deadline()),
            self.waitlist.next_deadline(),
        ]
        .into_iter()
        .flatten()
        .min()
    }

    fn handle_simulator_action(&mut self, action: SimulatorAction) {
        match action {
            SimulatorAction::ActivateTab(id) => {
                if let Some(sim) = self.simulator.as_mut() {
                    sim.activate_tab(&id);
                }
            }
            SimulatorAction::ChartResized => {
                if let Some(sim) = self.simulator.as_mut() {
                    sim.surface_resized();
                }
            }
            SimulatorAction::ExportChart => {
                let surface = self.simulator.as_ref().and_then(|s| s.surface());
                self.status = Self::handle_export(surface, "weekly_sales.png");
            }
        }
    }

    fn handle_carousel_action(&mut self, action: CarouselAction) {
        let Some(carousel) = self.carousel.as_mut() else {
            return;
        };
        match action {
            CarouselAction::ClickIndicator(index) => carousel.click_indicator(index),
            CarouselAction::HoverFeature(slide) => carousel.hover_feature(slide),
            CarouselAction::PointerEntered => carousel.pointer_entered(),
            CarouselAction::PointerLeft => carousel.pointer_left(),
            CarouselAction::ChartResized => carousel.surface_resized(),
            CarouselAction::ExportChart => {
                self.status = Self::handle_export(carousel.surface(), "dashboard_chart.png");
            }
        }
    }

    /// Ask for a destination and save the surface. Returns the status line.
    fn handle_export(surface: Option<&ChartSurface>, default_name: &str) -> String {
        let Some(surface) = surface else {
            return "No chart to export".to_string();
        };

        let output_path = match rfd::FileDialog::new()
            .add_filter("PNG Image", &["png"])
            .set_file_name(default_name)
            .save_file()
        {
            Some(path) => path,
            None => return "Export cancelled".to_string(),
        };

        match export_png(surface, &output_path) {
            Ok(()) => {
                tracing::info!(path = %output_path.display(), "Chart exported");
                format!("Chart saved to {}", output_path.display())
            }
            Err(e) => {
                tracing::warn!(error = %e, "Chart export failed");
                format!("Export error: {}", e)
            }
        }
    }
}

impl eframe::App for ShowcaseApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_timers(self.started_at.elapsed());

        // Header
        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(RichText::new("Brazweed").size(22.0).strong());
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button(RichText::new("Join Waitlist").size(14.0)).clicked() {
                        self.waitlist.open();
                    }
                });
            });
        });

        // Status bar
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.label(RichText::new(&self.status).size(11.0));
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                if let Some(sim) = self.simulator.as_mut() {
                    let actions = self.simulator_panel.show(ui, sim);
                    for action in actions {
                        self.handle_simulator_action(action);
                    }
                    ui.add_space(24.0);
                }

                if let Some(carousel) = self.carousel.as_mut() {
                    let actions = self.carousel_panel.show(ui, carousel);
                    for action in actions {
                        self.handle_carousel_action(action);
                    }
                    ui.add_space(24.0);
                }

                if PricingPanel::show(ui, &mut self.pricing_toggle, &self.pricing)
                    == PricingAction::JoinWaitlist
                {
                    self.waitlist.open();
                }
            });
        });

        WaitlistWindow::show(ctx, &mut self.waitlist);

        // Wake up for the next pending timer
        if let Some(deadline) = self.next_deadline() {
            let wait = deadline.saturating_sub(self.started_at.elapsed());
            ctx.request_repaint_after(wait);
        }
    }
}
