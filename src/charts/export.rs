//! Chart Export Module
//! Saves a rendered chart surface as a PNG image.

use crate::charts::ChartSurface;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Chart has not been drawn yet")]
    NothingDrawn,
    #[error("Failed to write image: {0}")]
    Image(#[from] image::ImageError),
}

/// Write `surface` to `path` as PNG.
pub fn export_png(surface: &ChartSurface, path: &Path) -> Result<(), ExportError> {
    if surface.is_blank() {
        return Err(ExportError::NothingDrawn);
    }
    let image = surface.to_image().ok_or(ExportError::NothingDrawn)?;
    image.save_with_format(path, image::ImageFormat::Png)?;
    tracing::info!(path = %path.display(), "Chart exported");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charts::{ChartRenderer, ChartStyle, Series};

    #[test]
    fn test_blank_surface_is_not_exported() {
        let surface = ChartSurface::new(10, 10);
        let path = std::env::temp_dir().join("showcase_blank_export.png");
        assert!(matches!(
            export_png(&surface, &path),
            Err(ExportError::NothingDrawn)
        ));
    }

    #[test]
    fn test_export_writes_png() {
        let mut surface = ChartSurface::new(120, 80);
        ChartRenderer::render(&mut surface, &Series::carousel_sample(), &ChartStyle::carousel())
            .unwrap();

        let path = std::env::temp_dir().join(format!("showcase_export_{}.png", std::process::id()));
        export_png(&surface, &path).unwrap();

        let decoded = image::open(&path).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (120, 80));
        let _ = std::fs::remove_file(&path);
    }
}
