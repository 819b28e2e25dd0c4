//! Chart Layout Module
//! Pure geometry for the line charts: plot rectangle, value range and the
//! pixel position of every sample. Kept apart from drawing so the mapping can
//! be checked without a raster backend.

/// Number of horizontal grid lines, top and bottom edges included.
pub const HORIZONTAL_GRID_LINES: usize = 5;

/// Usable plot area in surface pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotRect {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl PlotRect {
    /// Surface bounds inset by `padding` on every side.
    pub fn inset(width: u32, height: u32, padding: f64) -> Self {
        let left = padding;
        let top = padding;
        Self {
            left,
            top,
            right: (width as f64 - padding).max(left),
            bottom: (height as f64 - padding).max(top),
        }
    }

    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }
}

/// Mapped geometry for one render call.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartLayout {
    pub plot: PlotRect,
    pub min_value: f64,
    pub max_value: f64,
    pub points: Vec<(f64, f64)>,
}

impl ChartLayout {
    pub fn compute(width: u32, height: u32, padding: f64, values: &[f64]) -> Self {
        let plot = PlotRect::inset(width, height, padding);

        let min_value = values.iter().copied().fold(f64::INFINITY, f64::min);
        let max_value = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let range = max_value - min_value;

        let step = if values.len() > 1 {
            plot.width() / (values.len() - 1) as f64
        } else {
            0.0
        };

        let points = values
            .iter()
            .enumerate()
            .map(|(i, &value)| {
                let x = plot.left + step * i as f64;
                // Flat series: every point sits on the bottom edge
                let ratio = if range > 0.0 {
                    (value - min_value) / range
                } else {
                    0.0
                };
                let y = plot.bottom - ratio * plot.height();
                (x, y)
            })
            .collect();

        Self {
            plot,
            min_value,
            max_value,
            points,
        }
    }

    /// Y positions of the horizontal grid lines, top to bottom.
    pub fn horizontal_grid(&self) -> [f64; HORIZONTAL_GRID_LINES] {
        let spacing = self.plot.height() / (HORIZONTAL_GRID_LINES - 1) as f64;
        std::array::from_fn(|i| self.plot.top + spacing * i as f64)
    }

    /// X positions of the vertical grid lines, one per sample.
    pub fn vertical_grid(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().map(|&(x, _)| x)
    }

    /// Closed outline of the area between the line and the plot bottom.
    pub fn area_outline(&self) -> Vec<(f64, f64)> {
        let mut outline = Vec::with_capacity(self.points.len() + 2);
        if let Some(&(first_x, _)) = self.points.first() {
            outline.push((first_x, self.plot.bottom));
        }
        outline.extend(self.points.iter().copied());
        outline.push((self.plot.right, self.plot.bottom));
        outline.push((self.plot.left, self.plot.bottom));
        outline
    }
}
