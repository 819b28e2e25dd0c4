//! Chart View Widget
//! Shows a chart surface as a texture and sizes the surface to the layout
//! box it is given, in device pixels.

use crate::charts::ChartSurface;
use egui::{TextureHandle, TextureOptions};

pub struct ChartView {
    name: &'static str,
    texture: Option<TextureHandle>,
    uploaded_revision: Option<u64>,
}

impl ChartView {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            texture: None,
            uploaded_revision: None,
        }
    }

    /// Lay the surface out at full available width and draw its pixels.
    ///
    /// Returns true when the surface took a new, non-zero size this frame.
    /// Its content is gone at that point and the owner has to redraw it.
    pub fn show(&mut self, ui: &mut egui::Ui, surface: &mut ChartSurface, height: f32) -> bool {
        let size = egui::vec2(ui.available_width(), height);
        let ppp = ui.ctx().pixels_per_point();
        let resized =
            surface.resize((size.x * ppp).round() as u32, (size.y * ppp).round() as u32);

        self.sync_texture(ui.ctx(), surface);

        match &self.texture {
            Some(texture) if !surface.is_zero_sized() => {
                ui.add(egui::Image::new((texture.id(), size)));
            }
            _ => {
                ui.allocate_space(size);
            }
        }

        resized && !surface.is_zero_sized()
    }

    /// A panel that is not shown has no layout box, so its surface
    /// collapses and loses its content.
    pub fn hide(surface: &mut ChartSurface) {
        surface.resize(0, 0);
    }

    fn sync_texture(&mut self, ctx: &egui::Context, surface: &ChartSurface) {
        if surface.is_zero_sized() || self.uploaded_revision == Some(surface.revision()) {
            return;
        }

        let image = egui::ColorImage::from_rgb(
            [surface.width() as usize, surface.height() as usize],
            surface.pixels(),
        );
        match &mut self.texture {
            Some(texture) => texture.set(image, TextureOptions::LINEAR),
            None => {
                self.texture = Some(ctx.load_texture(self.name, image, TextureOptions::LINEAR));
            }
        }
        self.uploaded_revision = Some(surface.revision());
    }
}
