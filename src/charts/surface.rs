//! Chart Surface Module
//! RGB raster that a chart is drawn into and the GUI shows as a texture.

use image::RgbImage;

const CLEAR: u8 = 255;

/// In-memory RGB raster.
///
/// Resizing discards whatever was drawn, the same way a canvas does when its
/// layout box changes. A panel that was hidden (zero size) therefore comes
/// back blank and has to be redrawn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartSurface {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
    revision: u64,
}

impl Default for ChartSurface {
    fn default() -> Self {
        Self::new(0, 0)
    }
}

impl ChartSurface {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![CLEAR; Self::byte_len(width, height)],
            revision: 0,
        }
    }

    fn byte_len(width: u32, height: u32) -> usize {
        width as usize * height as usize * 3
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// True when there is nothing to draw into.
    pub fn is_zero_sized(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Bumped whenever the pixel content changes.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    pub(crate) fn pixels_mut(&mut self) -> &mut [u8] {
        &mut self.pixels
    }

    pub(crate) fn mark_drawn(&mut self) {
        self.revision += 1;
    }

    /// Resize to the given layout box. Returns true (and clears) on change.
    pub fn resize(&mut self, width: u32, height: u32) -> bool {
        if width == self.width && height == self.height {
            return false;
        }
        self.width = width;
        self.height = height;
        self.pixels = vec![CLEAR; Self::byte_len(width, height)];
        self.revision += 1;
        true
    }

    /// True when no pixel differs from the background.
    pub fn is_blank(&self) -> bool {
        self.pixels.iter().all(|&b| b == CLEAR)
    }

    /// Copy the raster into an `image` buffer for encoding.
    pub fn to_image(&self) -> Option<RgbImage> {
        if self.is_zero_sized() {
            return None;
        }
        RgbImage::from_raw(self.width, self.height, self.pixels.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resize_discards_content() {
        let mut surface = ChartSurface::new(4, 4);
        surface.pixels_mut()[0] = 0;
        assert!(!surface.is_blank());

        assert!(surface.resize(0, 0));
        assert!(surface.is_zero_sized());
        assert!(surface.resize(4, 4));
        assert!(surface.is_blank());
    }

    #[test]
    fn test_same_size_keeps_content() {
        let mut surface = ChartSurface::new(4, 4);
        surface.pixels_mut()[0] = 0;
        let rev = surface.revision();

        assert!(!surface.resize(4, 4));
        assert!(!surface.is_blank());
        assert_eq!(surface.revision(), rev);
    }

    #[test]
    fn test_to_image_dimensions() {
        let surface = ChartSurface::new(8, 3);
        let img = surface.to_image().unwrap();
        assert_eq!(img.dimensions(), (8, 3));
        assert!(ChartSurface::default().to_image().is_none());
    }
}
