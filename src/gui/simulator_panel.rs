//! Simulator Panel Widget
//! Tab navigation on the left, the active tab's content on the right.

use crate::gui::ChartView;
use crate::simulator::{SimulatorController, DASHBOARD_TAB};
use egui::{Color32, RichText};

const NAV_WIDTH: f32 = 140.0;
const CHART_HEIGHT: f32 = 240.0;
const ACCENT: Color32 = Color32::from_rgb(182, 88, 67);

/// Actions triggered by the simulator panel
#[derive(Debug, Clone, PartialEq)]
pub enum SimulatorAction {
    ActivateTab(String),
    ChartResized,
    ExportChart,
}

pub struct SimulatorPanel {
    chart: ChartView,
}

impl Default for SimulatorPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl SimulatorPanel {
    pub fn new() -> Self {
        Self {
            chart: ChartView::new("sales_chart"),
        }
    }

    pub fn show(&mut self, ui: &mut egui::Ui, sim: &mut SimulatorController) -> Vec<SimulatorAction> {
        let mut actions = Vec::new();

        ui.label(RichText::new("🖥 Interactive Simulator").size(20.0).strong());
        ui.add_space(8.0);

        egui::Frame::none()
            .fill(ui.visuals().widgets.noninteractive.bg_fill)
            .rounding(8.0)
            .inner_margin(12.0)
            .show(ui, |ui| {
                ui.horizontal_top(|ui| {
                    ui.vertical(|ui| {
                        ui.set_width(NAV_WIDTH);
                        for (id, title) in sim.tab_titles() {
                            let active = sim.tabs().is_active(id);
                            if ui.selectable_label(active, RichText::new(title).size(14.0)).clicked() {
                                actions.push(SimulatorAction::ActivateTab(id.to_string()));
                            }
                        }
                    });

                    ui.separator();

                    ui.vertical(|ui| {
                        if sim.tabs().is_active(DASHBOARD_TAB) {
                            self.show_dashboard(ui, sim, &mut actions);
                        } else {
                            if let Some(surface) = sim.surface_mut() {
                                ChartView::hide(surface);
                            }
                            Self::show_placeholder(ui, sim.tabs().active_id());
                        }
                    });
                });
            });

        actions
    }

    fn show_dashboard(
        &mut self,
        ui: &mut egui::Ui,
        sim: &mut SimulatorController,
        actions: &mut Vec<SimulatorAction>,
    ) {
        ui.horizontal(|ui| {
            for entry in sim.stats() {
                egui::Frame::none()
                    .stroke(egui::Stroke::new(1.0, Color32::from_gray(220)))
                    .rounding(6.0)
                    .inner_margin(10.0)
                    .show(ui, |ui| {
                        ui.vertical(|ui| {
                            ui.label(RichText::new(&entry.label).size(11.0).color(Color32::GRAY));
                            ui.label(RichText::new(entry.text()).size(22.0).strong().color(ACCENT));
                        });
                    });
            }
        });

        ui.add_space(10.0);
        ui.label(RichText::new("Weekly Sales").size(14.0).strong());

        match sim.surface_mut() {
            Some(surface) => {
                if self.chart.show(ui, surface, CHART_HEIGHT) {
                    actions.push(SimulatorAction::ChartResized);
                }
                if ui.small_button("💾 Save chart as PNG").clicked() {
                    actions.push(SimulatorAction::ExportChart);
                }
            }
            None => {
                ui.label(RichText::new("No chart").color(Color32::GRAY));
            }
        }
    }

    fn show_placeholder(ui: &mut egui::Ui, tab: &str) {
        let blurb = match tab {
            "inventory" => "Stock levels, reorder points and supplier orders in one place.",
            "sales" => "Every transaction, searchable and exportable.",
            "customers" => "Profiles, purchase history and loyalty rewards.",
            "reports" => "Daily, weekly and compliance reports generated for you.",
            _ => "Coming soon.",
        };
        ui.add_space(20.0);
        ui.label(RichText::new(blurb).size(14.0));
    }
}
