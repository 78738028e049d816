#![deny(unsafe_code)]
//! Curve fitting for branch polylines.
//!
//! Three interchangeable smoothing strategies sit behind the closed
//! [`Algorithm`] / [`FittedCurve`] pair: fit once per segment, then answer
//! `distance_and_progress` per pixel. Call sites select an algorithm by name
//! at the boundary and never branch on identity again.

pub mod bezier;
pub mod catmull_rom;
pub mod chaikin;
pub mod geom;

use glam::DVec2;
use sapling_core::params::{param_f64, param_usize};
use sapling_core::SaplingError;
use serde_json::Value;

pub use bezier::BezierCurve;
pub use catmull_rom::CatmullRom;
pub use chaikin::ChaikinCurve;

/// All recognized algorithm names, in display order.
const ALGORITHM_NAMES: &[&str] = &["bezier", "catmull-rom", "chaikin"];

/// The closed set of curve-fitting strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    BezierCurve,
    CatmullRomSpline,
    ChaikinsAlgorithm,
}

impl Algorithm {
    /// Resolves an algorithm by name.
    ///
    /// Returns `SaplingError::UnknownAlgorithm` for anything outside the
    /// recognized set.
    pub fn from_name(name: &str) -> Result<Self, SaplingError> {
        match name {
            "bezier" => Ok(Algorithm::BezierCurve),
            "catmull-rom" => Ok(Algorithm::CatmullRomSpline),
            "chaikin" => Ok(Algorithm::ChaikinsAlgorithm),
            _ => Err(SaplingError::UnknownAlgorithm(name.to_string())),
        }
    }

    /// The canonical name for this algorithm.
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::BezierCurve => "bezier",
            Algorithm::CatmullRomSpline => "catmull-rom",
            Algorithm::ChaikinsAlgorithm => "chaikin",
        }
    }

    /// Returns a slice of all recognized algorithm names.
    pub fn list_names() -> &'static [&'static str] {
        ALGORITHM_NAMES
    }
}

/// Per-fitter tuning knobs, extractable from a JSON params object.
#[derive(Debug, Clone, Copy)]
pub struct FitParams {
    /// Bezier: subdivision stops once a half's box is at most this wide.
    pub bezier_tolerance: f64,
    /// Bezier: hard subdivision ceiling.
    pub bezier_max_depth: u32,
    /// Catmull-Rom: parametric sample spacing per Hermite piece.
    pub catmull_sample_step: f64,
    /// Chaikin: corner-cutting rounds at fit time.
    pub chaikin_iterations: usize,
}

impl Default for FitParams {
    fn default() -> Self {
        Self {
            bezier_tolerance: bezier::DEFAULT_TOLERANCE,
            bezier_max_depth: bezier::DEFAULT_MAX_DEPTH,
            catmull_sample_step: catmull_rom::DEFAULT_SAMPLE_STEP,
            chaikin_iterations: chaikin::DEFAULT_ITERATIONS,
        }
    }
}

impl FitParams {
    /// Extracts parameters from a JSON object, falling back to defaults.
    pub fn from_json(params: &Value) -> Self {
        Self {
            bezier_tolerance: param_f64(params, "bezier_tolerance", bezier::DEFAULT_TOLERANCE),
            bezier_max_depth: param_usize(
                params,
                "bezier_max_depth",
                bezier::DEFAULT_MAX_DEPTH as usize,
            ) as u32,
            catmull_sample_step: param_f64(
                params,
                "catmull_sample_step",
                catmull_rom::DEFAULT_SAMPLE_STEP,
            ),
            chaikin_iterations: param_usize(
                params,
                "chaikin_iterations",
                chaikin::DEFAULT_ITERATIONS,
            ),
        }
    }
}

/// One segment's fitted curve: built once, queried per pixel.
#[derive(Debug, Clone)]
pub enum FittedCurve {
    Bezier(BezierCurve),
    CatmullRom(CatmullRom),
    Chaikin(ChaikinCurve),
}

impl FittedCurve {
    /// Fits `points` (base first) with the chosen strategy. Chaikin performs
    /// its refinement here; Catmull-Rom builds its Hermite pieces; Bezier
    /// just records its control points.
    pub fn fit(algorithm: Algorithm, points: Vec<DVec2>, params: &FitParams) -> Self {
        match algorithm {
            Algorithm::BezierCurve => FittedCurve::Bezier(BezierCurve::new(
                points,
                params.bezier_tolerance,
                params.bezier_max_depth,
            )),
            Algorithm::CatmullRomSpline => {
                FittedCurve::CatmullRom(CatmullRom::new(points, params.catmull_sample_step))
            }
            Algorithm::ChaikinsAlgorithm => {
                FittedCurve::Chaikin(ChaikinCurve::new(&points, params.chaikin_iterations))
            }
        }
    }

    /// Minimum distance from `point` to the fitted curve, plus the progress
    /// of the closest point for strategies that track it (Chaikin only).
    pub fn distance_and_progress(&self, point: DVec2) -> (f64, Option<f64>) {
        match self {
            FittedCurve::Bezier(c) => (c.distance(point), None),
            FittedCurve::CatmullRom(c) => (c.distance(point), None),
            FittedCurve::Chaikin(c) => {
                let (distance, progress) = c.distance_and_progress(point);
                (distance, Some(progress))
            }
        }
    }

    /// Distance without the progress component.
    pub fn distance(&self, point: DVec2) -> f64 {
        self.distance_and_progress(point).0
    }
}
