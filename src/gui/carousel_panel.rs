//! Carousel Panel Widget
//! Slide area with indicators on the left, hoverable feature list on the
//! right. Pointer movement is turned into enter/leave edges here; the
//! controller only ever sees transitions.

use crate::carousel::{CarouselController, CHART_SLIDE};
use crate::gui::ChartView;
use egui::{Color32, RichText, Sense};

const SLIDE_WIDTH: f32 = 460.0;
const CHART_HEIGHT: f32 = 200.0;
const INDICATOR_SIZE: f32 = 12.0;
const ACTIVE: Color32 = Color32::from_rgb(182, 88, 67);
const INACTIVE: Color32 = Color32::from_gray(200);

/// Actions triggered by the carousel panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarouselAction {
    ClickIndicator(usize),
    HoverFeature(usize),
    PointerEntered,
    PointerLeft,
    ChartResized,
    ExportChart,
}

pub struct CarouselPanel {
    chart: ChartView,
    pointer_inside: bool,
    hovered_region: Option<usize>,
}

impl Default for CarouselPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl CarouselPanel {
    pub fn new() -> Self {
        Self {
            chart: ChartView::new("carousel_chart"),
            pointer_inside: false,
            hovered_region: None,
        }
    }

    pub fn show(&mut self, ui: &mut egui::Ui, carousel: &mut CarouselController) -> Vec<CarouselAction> {
        let mut actions = Vec::new();

        ui.label(RichText::new("✨ Features").size(20.0).strong());
        ui.add_space(8.0);

        ui.horizontal_top(|ui| {
            let container = egui::Frame::none()
                .fill(ui.visuals().widgets.noninteractive.bg_fill)
                .rounding(8.0)
                .inner_margin(12.0)
                .show(ui, |ui| {
                    ui.set_width(SLIDE_WIDTH);
                    self.show_slide(ui, carousel, &mut actions);
                    ui.add_space(8.0);
                    ui.horizontal(|ui| {
                        Self::show_indicators(ui, carousel, &mut actions);
                        if !carousel.is_autoplaying() {
                            ui.label(RichText::new("⏸ Paused").size(11.0).color(Color32::GRAY));
                        }
                    });
                });

            let inside = ui.rect_contains_pointer(container.response.rect);
            if inside != self.pointer_inside {
                self.pointer_inside = inside;
                actions.push(if inside {
                    CarouselAction::PointerEntered
                } else {
                    CarouselAction::PointerLeft
                });
            }

            ui.add_space(12.0);
            ui.vertical(|ui| {
                self.show_features(ui, carousel, &mut actions);
            });
        });

        actions
    }

    fn show_slide(
        &mut self,
        ui: &mut egui::Ui,
        carousel: &mut CarouselController,
        actions: &mut Vec<CarouselAction>,
    ) {
        let current = carousel.current_slide();
        if let Some(slide) = carousel.slide_content().get(current) {
            ui.label(RichText::new(&slide.title).size(16.0).strong());
            ui.label(RichText::new(&slide.caption).size(12.0).color(Color32::GRAY));
        }
        ui.add_space(6.0);

        if current == CHART_SLIDE {
            if let Some(surface) = carousel.surface_mut() {
                if self.chart.show(ui, surface, CHART_HEIGHT) {
                    actions.push(CarouselAction::ChartResized);
                }
                if ui.small_button("💾 Save chart as PNG").clicked() {
                    actions.push(CarouselAction::ExportChart);
                }
            }
        } else {
            if let Some(surface) = carousel.surface_mut() {
                ChartView::hide(surface);
            }
            ui.allocate_space(egui::vec2(ui.available_width(), CHART_HEIGHT));
        }
    }

    fn show_indicators(
        ui: &mut egui::Ui,
        carousel: &CarouselController,
        actions: &mut Vec<CarouselAction>,
    ) {
        ui.horizontal(|ui| {
            for (i, active) in carousel.slides().projection().into_iter().enumerate() {
                let (rect, response) =
                    ui.allocate_exact_size(egui::vec2(INDICATOR_SIZE, INDICATOR_SIZE), Sense::click());
                let color = if active { ACTIVE } else { INACTIVE };
                ui.painter()
                    .circle_filled(rect.center(), INDICATOR_SIZE / 2.0, color);
                if response.clicked() {
                    actions.push(CarouselAction::ClickIndicator(i));
                }
            }
        });
    }

    fn show_features(
        &mut self,
        ui: &mut egui::Ui,
        carousel: &CarouselController,
        actions: &mut Vec<CarouselAction>,
    ) {
        let current = carousel.current_slide();
        let mut hovered = None;

        for (idx, region) in carousel.features().iter().enumerate() {
            let highlighted = region.slide == Some(current);
            let stroke_color = if highlighted { ACTIVE } else { INACTIVE };

            let frame = egui::Frame::none()
                .stroke(egui::Stroke::new(1.5, stroke_color))
                .rounding(6.0)
                .inner_margin(10.0)
                .show(ui, |ui| {
                    ui.set_width(320.0);
                    ui.label(RichText::new(&region.title).size(14.0).strong());
                    ui.label(RichText::new(&region.description).size(12.0));
                });
            ui.add_space(6.0);

            if ui.rect_contains_pointer(frame.response.rect) {
                hovered = Some(idx);
                if self.hovered_region != Some(idx) {
                    if let Some(slide) = region.slide {
                        actions.push(CarouselAction::HoverFeature(slide));
                    }
                }
            }
        }

        self.hovered_region = hovered;
    }
}
