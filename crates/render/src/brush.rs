//! Paint policy: how close a pixel must be to count as covered, and what
//! color covered pixels take.

use sapling_core::params::param_f64;
use sapling_core::Srgb;
use serde_json::Value;

/// Decides pixel coverage and paint color.
///
/// Object-safe so the rasterizer can take any policy behind `&dyn`.
pub trait BrushPolicy {
    /// Maximum curve distance at which a pixel is painted, given the
    /// generation depth of the owning segment's tip.
    fn threshold(&self, tip_depth: u32) -> f64;

    /// Flat paint color for covered pixels.
    fn color(&self) -> Srgb;
}

/// Default brush threshold at the trunk.
const DEFAULT_BASE: f64 = 5.0;
/// Default thickness lost per generation step.
const DEFAULT_PER_DEPTH: f64 = 0.25;
/// Default thickness floor.
const DEFAULT_MIN: f64 = 1.5;

/// Depth-tapered brush: branches thin linearly toward the tips, down to a
/// floor so twigs stay visible.
#[derive(Debug, Clone, Copy)]
pub struct DepthTaper {
    pub base: f64,
    pub per_depth: f64,
    pub min: f64,
    pub color: Srgb,
}

impl Default for DepthTaper {
    fn default() -> Self {
        Self {
            base: DEFAULT_BASE,
            per_depth: DEFAULT_PER_DEPTH,
            min: DEFAULT_MIN,
            color: Srgb::from_u8(34, 139, 34),
        }
    }
}

impl DepthTaper {
    /// Extracts the taper shape from a JSON object, falling back to
    /// defaults. Color is set separately (see [`DepthTaper::with_color`]).
    pub fn from_json(params: &Value) -> Self {
        Self {
            base: param_f64(params, "brush_base", DEFAULT_BASE),
            per_depth: param_f64(params, "brush_per_depth", DEFAULT_PER_DEPTH),
            min: param_f64(params, "brush_min", DEFAULT_MIN),
            ..Self::default()
        }
    }

    /// Returns the same taper with a different paint color.
    pub fn with_color(mut self, color: Srgb) -> Self {
        self.color = color;
        self
    }
}

impl BrushPolicy for DepthTaper {
    fn threshold(&self, tip_depth: u32) -> f64 {
        (self.base - self.per_depth * f64::from(tip_depth)).max(self.min)
    }

    fn color(&self) -> Srgb {
        self.color
    }
}
