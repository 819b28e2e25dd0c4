//! Pricing Panel Widget
//! Billing toggle and one card per plan.

use crate::site::{BillingPeriod, PricingConfig, PricingToggle};
use egui::{Color32, RichText};

const SAVINGS_GREEN: Color32 = Color32::from_rgb(40, 167, 69);
const FEATURED: Color32 = Color32::from_rgb(182, 88, 67);

/// Actions triggered by the pricing panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PricingAction {
    None,
    JoinWaitlist,
}

pub struct PricingPanel;

impl PricingPanel {
    pub fn show(
        ui: &mut egui::Ui,
        toggle: &mut PricingToggle,
        config: &PricingConfig,
    ) -> PricingAction {
        let mut action = PricingAction::None;

        ui.label(RichText::new("💳 Pricing").size(20.0).strong());
        ui.add_space(8.0);

        ui.horizontal(|ui| {
            let yearly = toggle.period() == BillingPeriod::Yearly;
            if ui
                .selectable_label(!yearly, RichText::new("Monthly").size(14.0))
                .clicked()
            {
                toggle.set_period(BillingPeriod::Monthly);
            }
            let switch = if yearly { "━◉" } else { "◉━" };
            if ui.button(RichText::new(switch).size(14.0)).clicked() {
                toggle.toggle();
            }
            if ui
                .selectable_label(yearly, RichText::new("Yearly").size(14.0))
                .clicked()
            {
                toggle.set_period(BillingPeriod::Yearly);
            }
        });

        ui.add_space(8.0);

        ui.horizontal_top(|ui| {
            for plan in &config.plans {
                let display = plan.display(toggle.period());
                let border = if plan.featured {
                    FEATURED
                } else {
                    Color32::from_gray(200)
                };

                egui::Frame::none()
                    .stroke(egui::Stroke::new(2.0, border))
                    .rounding(8.0)
                    .inner_margin(14.0)
                    .show(ui, |ui| {
                        ui.set_width(200.0);
                        ui.label(RichText::new(&plan.name).size(16.0).strong());
                        ui.horizontal(|ui| {
                            let amount_color = if display.savings.is_some() {
                                SAVINGS_GREEN
                            } else {
                                ui.visuals().text_color()
                            };
                            ui.label(
                                RichText::new(format!("${}", display.amount))
                                    .size(26.0)
                                    .strong()
                                    .color(amount_color),
                            );
                            ui.label(RichText::new(display.period_label).size(12.0));
                        });
                        ui.label(
                            RichText::new(&config.currency)
                                .size(10.0)
                                .color(Color32::GRAY),
                        );

                        if let Some(savings) = display.savings {
                            ui.label(
                                RichText::new(format!("Save {}%", savings.percent))
                                    .color(SAVINGS_GREEN)
                                    .strong(),
                            );
                            ui.label(
                                RichText::new(format!("${}/month", savings.per_month))
                                    .size(11.0)
                                    .color(SAVINGS_GREEN),
                            );
                        }

                        ui.add_space(6.0);
                        if ui.button("Join Waitlist").clicked() {
                            action = PricingAction::JoinWaitlist;
                        }
                    });
            }
        });

        action
    }
}
