//! Distance-field scan: one nearest-curve query per raster cell.

use crate::brush::BrushPolicy;
use crate::raster::{Cell, Raster};
use sapling_core::SaplingError;
use sapling_curves::{Algorithm, FitParams, FittedCurve};
use sapling_tree::{Segment, Tree};

/// Fits every segment once, then scans the cell grid: each cell center is
/// tested against every curve, the globally closest one wins, and the cell
/// is painted when that distance is under the brush threshold for the
/// winning segment's tip depth.
///
/// The scan reads only the fitted curves, so repeated calls over the same
/// segments and algorithm produce identical grids.
pub fn rasterize(
    tree: &Tree,
    segments: &[Segment],
    algorithm: Algorithm,
    fit: &FitParams,
    brush: &dyn BrushPolicy,
    width: usize,
    height: usize,
    step: usize,
) -> Result<Raster, SaplingError> {
    let mut raster = Raster::new(width, height, step)?;

    let curves: Vec<(FittedCurve, u32)> = segments
        .iter()
        .map(|segment| {
            (
                FittedCurve::fit(algorithm, segment.curve_points(tree), fit),
                segment.tip_depth,
            )
        })
        .collect();

    for row in 0..raster.rows() {
        for col in 0..raster.cols() {
            let point = raster.cell_center(col, row);
            let mut best: Option<(f64, Option<f64>, u32)> = None;
            for (curve, tip_depth) in &curves {
                let (distance, progress) = curve.distance_and_progress(point);
                if best.map_or(true, |(b, _, _)| distance < b) {
                    best = Some((distance, progress, *tip_depth));
                }
            }
            if let Some((distance, progress, tip_depth)) = best {
                if distance < brush.threshold(tip_depth) {
                    raster.set(
                        col,
                        row,
                        Cell {
                            painted: true,
                            progress,
                        },
                    );
                }
            }
        }
    }

    Ok(raster)
}
