//! Coverage grid produced by the rasterizer.
//!
//! The canvas is divided into square cells of `step` pixels; the rasterizer
//! evaluates one query point per cell. Cells only record coverage and,
//! when the active fitter tracks it, progress along the owning branch.

use glam::DVec2;
use sapling_core::SaplingError;

/// One raster cell.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Cell {
    /// True when the nearest curve came within the brush threshold.
    pub painted: bool,
    /// Progress along the winning branch (0 = base, 1 = tip); only recorded
    /// by fitters that track it.
    pub progress: Option<f64>,
}

/// Cell grid covering a canvas of `width x height` pixels at `step`-pixel
/// granularity, row-major.
#[derive(Debug, Clone, PartialEq)]
pub struct Raster {
    cols: usize,
    rows: usize,
    step: usize,
    cells: Vec<Cell>,
}

impl Raster {
    /// Creates an unpainted grid for the given canvas.
    ///
    /// Returns `SaplingError::InvalidDimensions` if any dimension or the
    /// step is zero, or the cell count overflows.
    pub fn new(width: usize, height: usize, step: usize) -> Result<Self, SaplingError> {
        if width == 0 || height == 0 || step == 0 {
            return Err(SaplingError::InvalidDimensions);
        }
        let cols = width.div_ceil(step);
        let rows = height.div_ceil(step);
        let len = cols
            .checked_mul(rows)
            .ok_or(SaplingError::InvalidDimensions)?;
        Ok(Self {
            cols,
            rows,
            step,
            cells: vec![Cell::default(); len],
        })
    }

    /// Grid width in cells.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Grid height in cells.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Cell edge length in canvas pixels.
    pub fn step(&self) -> usize {
        self.step
    }

    /// Read-only access to the row-major cells.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// The cell at `(col, row)`.
    pub fn get(&self, col: usize, row: usize) -> Cell {
        self.cells[row * self.cols + col]
    }

    /// Overwrites the cell at `(col, row)`.
    pub fn set(&mut self, col: usize, row: usize, cell: Cell) {
        self.cells[row * self.cols + col] = cell;
    }

    /// Canvas-space center of the cell at `(col, row)` — the rasterizer's
    /// query point.
    pub fn cell_center(&self, col: usize, row: usize) -> DVec2 {
        let half = self.step as f64 * 0.5;
        DVec2::new(
            (col * self.step) as f64 + half,
            (row * self.step) as f64 + half,
        )
    }

    /// Number of painted cells.
    pub fn painted_count(&self) -> usize {
        self.cells.iter().filter(|c| c.painted).count()
    }
}
