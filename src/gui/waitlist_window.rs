//! Waitlist Window
//! Modal sign-up form shown over the page.

use crate::site::{WaitlistModal, WaitlistState};
use egui::{Align2, Color32, RichText};

const LABEL_WIDTH: f32 = 110.0;

pub struct WaitlistWindow;

impl WaitlistWindow {
    pub fn show(ctx: &egui::Context, modal: &mut WaitlistModal) {
        if !modal.is_open() {
            return;
        }
        if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            modal.close();
            return;
        }

        let mut open = true;
        let mut close_requested = false;

        egui::Window::new("Join Our Waitlist")
            .open(&mut open)
            .collapsible(false)
            .resizable(false)
            .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| match modal.state() {
                WaitlistState::Editing => Self::show_form(ui, modal),
                WaitlistState::Submitting => {
                    ui.horizontal(|ui| {
                        ui.spinner();
                        ui.label("Joining...");
                    });
                }
                WaitlistState::Success => {
                    ui.vertical_centered(|ui| {
                        ui.label(RichText::new("✔").size(40.0).color(Color32::from_rgb(99, 102, 241)));
                        ui.label(RichText::new("Welcome to the waitlist!").size(16.0).strong());
                        ui.label("Thank you for your interest. We'll be in touch soon with launch updates.");
                        ui.add_space(8.0);
                        if ui.button("Close").clicked() {
                            close_requested = true;
                        }
                    });
                }
                WaitlistState::Closed => {}
            });

        if !open || close_requested {
            modal.close();
        }
    }

    fn show_form(ui: &mut egui::Ui, modal: &mut WaitlistModal) {
        ui.label("Be among the first to experience Brazweed's cannabis retail platform.");
        ui.add_space(8.0);

        let form = &mut modal.form;
        egui::Grid::new("waitlist_form")
            .num_columns(2)
            .spacing([8.0, 6.0])
            .show(ui, |ui| {
                let field = |ui: &mut egui::Ui, label: &str, value: &mut String| {
                    ui.add_sized([LABEL_WIDTH, 20.0], egui::Label::new(label));
                    ui.text_edit_singleline(value);
                    ui.end_row();
                };
                field(ui, "Business Name *", &mut form.business_name);
                field(ui, "Contact Name *", &mut form.contact_name);
                field(ui, "Email Address *", &mut form.email);
                field(ui, "Phone Number", &mut form.phone);
            });

        if let Some(err) = modal.error() {
            ui.label(RichText::new(err.to_string()).color(Color32::from_rgb(220, 53, 69)));
        }

        ui.add_space(8.0);
        if ui.button(RichText::new("Join Waitlist").size(14.0)).clicked() {
            // The error stays on the modal and is shown next frame
            if let Err(err) = modal.submit() {
                tracing::debug!(error = %err, "Waitlist form rejected");
            }
        }
    }
}
