//! Reproducible specification for one rendered tree.
//!
//! A [`Seed`] captures everything needed to recreate a sketch: seed string,
//! curve algorithm, canvas dimensions, pixel step, and parameter overrides.

use crate::error::SaplingError;
use serde::{Deserialize, Serialize};

/// Default pixel step: each raster cell covers a 3x3 block of canvas pixels.
pub const DEFAULT_PIXEL_STEP: usize = 3;

/// Reproducible specification for one rendered tree.
///
/// Two identical `Seed` values fed to the same binary produce bit-identical
/// output: the seed string drives every random draw, and growth, extraction,
/// fitting, and rasterization are all pure.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Seed {
    /// Seed string folded into the PRNG state.
    pub seed: String,
    /// Curve algorithm name (see the curves crate for the recognized set).
    pub algorithm: String,
    /// Canvas width in pixels.
    pub width: usize,
    /// Canvas height in pixels.
    pub height: usize,
    /// Raster cell edge length in canvas pixels.
    pub step: usize,
    /// Growth and fitter parameter overrides.
    pub params: serde_json::Value,
}

impl Seed {
    /// Creates a new Seed with the default pixel step and empty params.
    pub fn new(seed: &str, algorithm: &str, width: usize, height: usize) -> Self {
        Self {
            seed: seed.to_string(),
            algorithm: algorithm.to_string(),
            width,
            height,
            step: DEFAULT_PIXEL_STEP,
            params: serde_json::Value::Object(serde_json::Map::new()),
        }
    }

    /// Validates that dimensions and step are non-zero and that
    /// `width * height` does not overflow.
    pub fn validate(&self) -> Result<(), SaplingError> {
        if self.width == 0 || self.height == 0 || self.step == 0 {
            return Err(SaplingError::InvalidDimensions);
        }
        self.width
            .checked_mul(self.height)
            .ok_or(SaplingError::InvalidDimensions)?;
        Ok(())
    }
}
