#![deny(unsafe_code)]
//! Rasterization pipeline: seed spec in, painted tree out.
//!
//! [`sketch`] runs the whole chain — validate, grow, extract, fit,
//! rasterize — and returns the node graph, segment list, and coverage grid
//! together. Growth always runs to completion before the scan starts; the
//! scan itself only reads immutable fitted curves.

pub mod brush;
pub mod pixel;
pub mod raster;
pub mod rasterizer;

#[cfg(feature = "png")]
pub mod snapshot;

use glam::DVec2;
use sapling_core::{SaplingError, Seed};
use sapling_curves::{Algorithm, FitParams};
use sapling_tree::{grow, GrowthParams, TreeContext};

pub use brush::{BrushPolicy, DepthTaper};
pub use raster::{Cell, Raster};
pub use rasterizer::rasterize;

/// Vertical clearance between the root node and the bottom canvas edge.
const ROOT_MARGIN: f64 = 10.0;

/// Default trunk-base position: horizontally centered, just above the
/// bottom edge.
pub fn default_root(width: usize, height: usize) -> DVec2 {
    DVec2::new(width as f64 / 2.0, height as f64 - ROOT_MARGIN)
}

/// A fully rendered tree.
#[derive(Debug)]
pub struct Sketch {
    /// Node arena, extracted segments, and any per-segment extraction
    /// failures.
    pub context: TreeContext,
    /// Coverage grid, one cell per `step x step` pixel block.
    pub raster: Raster,
    /// The algorithm the raster was produced with.
    pub algorithm: Algorithm,
}

/// Renders `seed` with the root at [`default_root`].
pub fn sketch(seed: &Seed, brush: &dyn BrushPolicy) -> Result<Sketch, SaplingError> {
    sketch_at(seed, default_root(seed.width, seed.height), brush)
}

/// Renders `seed` with the trunk base pinned at `root`.
///
/// Fails before growing anything if the seed is malformed or names an
/// unknown algorithm — no partial raster is ever produced.
pub fn sketch_at(seed: &Seed, root: DVec2, brush: &dyn BrushPolicy) -> Result<Sketch, SaplingError> {
    seed.validate()?;
    let algorithm = Algorithm::from_name(&seed.algorithm)?;
    let growth = GrowthParams::from_json(&seed.params);
    let fit = FitParams::from_json(&seed.params);

    let context = grow(&seed.seed, root, &growth);
    let raster = rasterize(
        &context.tree,
        &context.segments,
        algorithm,
        &fit,
        brush,
        seed.width,
        seed.height,
        seed.step,
    )?;

    Ok(Sketch {
        context,
        raster,
        algorithm,
    })
}
