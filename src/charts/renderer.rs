//! Chart Renderer
//! Draws the small demo line charts onto a raster surface with plotters.
//!
//! Two variants share one routine:
//! - Dashboard: vertical grid, thick line, larger points, weekday labels
//! - Carousel: translucent area under the line, thinner line, no labels
//!
//! Every call clears the whole surface and redraws from scratch.

use crate::charts::{ChartLayout, ChartSurface, Series};
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use thiserror::Error;

// Colors
const GRID: RGBColor = RGBColor(0xf0, 0xf0, 0xf0);
const LINE: RGBColor = RGBColor(0xb6, 0x58, 0x43);
const LABEL: RGBColor = RGBColor(0x66, 0x66, 0x66);
const AREA: RGBAColor = RGBAColor(181, 88, 67, 0.1);

/// Distance from the surface bottom to the label baseline.
const LABEL_BASELINE: i32 = 10;

#[derive(Error, Debug)]
pub enum ChartError {
    #[error("Surface has no drawable area ({width}x{height})")]
    EmptySurface { width: u32, height: u32 },
    #[error("Drawing failed: {0}")]
    Drawing(String),
}

impl<E: std::error::Error + Send + Sync> From<DrawingAreaErrorKind<E>> for ChartError {
    fn from(err: DrawingAreaErrorKind<E>) -> Self {
        ChartError::Drawing(err.to_string())
    }
}

/// Visual parameters for one chart variant.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartStyle {
    pub padding: f64,
    pub line_width: u32,
    pub point_radius: u32,
    pub vertical_grid: bool,
    pub fill_area: bool,
    pub show_labels: bool,
    pub label_size: u32,
}

impl ChartStyle {
    /// Sales chart on the simulator dashboard.
    pub fn dashboard() -> Self {
        Self {
            padding: 40.0,
            line_width: 3,
            point_radius: 4,
            vertical_grid: true,
            fill_area: false,
            show_labels: true,
            label_size: 12,
        }
    }

    /// Area chart on the first carousel slide.
    pub fn carousel() -> Self {
        Self {
            padding: 30.0,
            line_width: 2,
            point_radius: 3,
            vertical_grid: false,
            fill_area: true,
            show_labels: false,
            label_size: 12,
        }
    }
}

/// Stateless line chart renderer.
pub struct ChartRenderer;

impl ChartRenderer {
    /// Clear `surface` and draw `series` into it.
    pub fn render(
        surface: &mut ChartSurface,
        series: &Series,
        style: &ChartStyle,
    ) -> Result<(), ChartError> {
        let (width, height) = (surface.width(), surface.height());
        if surface.is_zero_sized() {
            return Err(ChartError::EmptySurface { width, height });
        }

        let layout = ChartLayout::compute(width, height, style.padding, series.values());

        let result = {
            let root = BitMapBackend::with_buffer(surface.pixels_mut(), (width, height))
                .into_drawing_area();
            Self::draw(&root, &layout, series, style, height)
        };

        // Partial drawing still changed the pixels
        surface.mark_drawn();
        result
    }

    /// Redraw a chart owned by a controller, logging instead of failing.
    ///
    /// A missing surface only skips this call. Returns true when drawn.
    pub fn refresh(
        surface: Option<&mut ChartSurface>,
        series: &Series,
        style: &ChartStyle,
        chart: &str,
    ) -> bool {
        let Some(surface) = surface else {
            tracing::debug!(chart, "No surface, skipping render");
            return false;
        };

        match Self::render(surface, series, style) {
            Ok(()) => {
                tracing::debug!(chart, width = surface.width(), height = surface.height(), "Chart rendered");
                true
            }
            Err(err @ ChartError::EmptySurface { .. }) => {
                tracing::debug!(chart, "{}", err);
                false
            }
            Err(err) => {
                tracing::warn!(chart, "Chart render failed: {}", err);
                false
            }
        }
    }

    fn draw<DB: DrawingBackend>(
        root: &DrawingArea<DB, Shift>,
        layout: &ChartLayout,
        series: &Series,
        style: &ChartStyle,
        height: u32,
    ) -> Result<(), ChartError>
    where
        DB::ErrorType: 'static,
    {
        root.fill(&WHITE)?;

        let plot = layout.plot;
        let grid_style = GRID.stroke_width(1);

        for y in layout.horizontal_grid() {
            root.draw(&PathElement::new(
                vec![(px(plot.left), px(y)), (px(plot.right), px(y))],
                grid_style,
            ))?;
        }

        if style.vertical_grid {
            for x in layout.vertical_grid() {
                root.draw(&PathElement::new(
                    vec![(px(x), px(plot.top)), (px(x), px(plot.bottom))],
                    grid_style,
                ))?;
            }
        }

        if style.fill_area {
            let outline: Vec<(i32, i32)> = layout
                .area_outline()
                .into_iter()
                .map(|(x, y)| (px(x), px(y)))
                .collect();
            root.draw(&Polygon::new(outline, AREA.filled()))?;
        }

        let points: Vec<(i32, i32)> = layout.points.iter().map(|&(x, y)| (px(x), px(y))).collect();
        root.draw(&PathElement::new(
            points.clone(),
            LINE.stroke_width(style.line_width),
        ))?;

        for &point in &points {
            root.draw(&Circle::new(point, style.point_radius, LINE.filled()))?;
        }

        if style.show_labels {
            let font = TextStyle::from(("sans-serif", f64::from(style.label_size)).into_font())
                .color(&LABEL)
                .pos(Pos::new(HPos::Center, VPos::Bottom));
            let baseline = height as i32 - LABEL_BASELINE;

            for (&(x, _), label) in points.iter().zip(series.labels()) {
                // Labels are decorative; a missing system font must not lose the chart
                if let Err(err) = root.draw(&Text::new(label.as_str(), (x, baseline), font.clone())) {
                    tracing::debug!("Skipping chart labels: {}", err);
                    break;
                }
            }
        }

        root.present()?;
        Ok(())
    }
}

fn px(v: f64) -> i32 {
    v.round() as i32
}
