//! Bezier distance by recursive de Casteljau subdivision.
//!
//! The whole polyline is one Bezier curve of degree `points - 1`. Distance
//! queries split the curve at t = 0.5 and recurse; a half whose bounding box
//! is small enough (or a split at the depth ceiling) is approximated by the
//! distance to its box center.

use crate::geom::{point_segment_distance, Aabb};
use glam::DVec2;

/// Subdivision stops once both halves' boxes are at most this wide.
pub const DEFAULT_TOLERANCE: f64 = 1.0;
/// Hard subdivision ceiling, independent of the tolerance.
pub const DEFAULT_MAX_DEPTH: u32 = 10;

/// A polyline treated as Bezier control points, plus query settings.
#[derive(Debug, Clone)]
pub struct BezierCurve {
    control: Vec<DVec2>,
    tolerance: f64,
    max_depth: u32,
}

impl BezierCurve {
    pub fn new(control: Vec<DVec2>, tolerance: f64, max_depth: u32) -> Self {
        Self {
            control,
            tolerance,
            max_depth,
        }
    }

    /// Control points the curve was built from.
    pub fn control(&self) -> &[DVec2] {
        &self.control
    }

    /// Minimum distance from `point` to the curve.
    ///
    /// Two control points give the exact closed-form segment distance; one
    /// gives the point distance; an empty curve is infinitely far away.
    pub fn distance(&self, point: DVec2) -> f64 {
        match self.control.len() {
            0 => f64::INFINITY,
            1 => point.distance(self.control[0]),
            _ => subdivide_distance(&self.control, point, self.tolerance, self.max_depth),
        }
    }
}

/// De Casteljau split at `t`: repeatedly lerps adjacent control points,
/// collecting the first point of each level into the left half and the last
/// into the right half.
fn split_at(points: &[DVec2], t: f64) -> (Vec<DVec2>, Vec<DVec2>) {
    let mut left = Vec::with_capacity(points.len());
    let mut right = Vec::with_capacity(points.len());
    let mut working = points.to_vec();
    while !working.is_empty() {
        left.push(working[0]);
        right.push(working[working.len() - 1]);
        working = working.windows(2).map(|w| w[0].lerp(w[1], t)).collect();
    }
    // Collected tip-inward; the right half reads forward after reversal.
    right.reverse();
    (left, right)
}

fn subdivide_distance(points: &[DVec2], point: DVec2, tolerance: f64, depth: u32) -> f64 {
    if points.len() == 2 {
        return point_segment_distance(point, points[0], points[1]);
    }

    let (left, right) = split_at(points, 0.5);
    let left_box = Aabb::from_points(&left);
    let right_box = Aabb::from_points(&right);

    if depth == 0 || (left_box.max_extent() <= tolerance && right_box.max_extent() <= tolerance) {
        return point
            .distance(left_box.center())
            .min(point.distance(right_box.center()));
    }

    subdivide_distance(&left, point, tolerance, depth - 1)
        .min(subdivide_distance(&right, point, tolerance, depth - 1))
}
