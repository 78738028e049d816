//! Chaikin corner-cutting distance with progress.
//!
//! The polyline is refined up front by repeated corner cutting; distance
//! queries walk the refined polyline's consecutive pairs. Because refinement
//! happens once per curve and queries are cheap, this is the practical
//! default for dense rasterization. The query also reports how far along the
//! curve the closest point sits (0 = first input point, 1 = last), which the
//! rasterizer exposes per pixel.

use crate::geom::point_segment_param;
use glam::DVec2;

/// Corner-cutting rounds applied at fit time.
pub const DEFAULT_ITERATIONS: usize = 5;

/// A polyline refined by Chaikin corner cutting.
#[derive(Debug, Clone)]
pub struct ChaikinCurve {
    refined: Vec<DVec2>,
}

/// One round replaces each consecutive pair (p1, p2) with the cut points
/// 0.75·p1 + 0.25·p2 and 0.25·p1 + 0.75·p2, keeping both original endpoints,
/// so each round doubles the interior point count.
pub fn refine(points: &[DVec2], iterations: usize) -> Vec<DVec2> {
    if points.len() < 2 {
        return points.to_vec();
    }
    let mut current = points.to_vec();
    for _ in 0..iterations {
        let mut next = Vec::with_capacity(2 * current.len());
        next.push(current[0]);
        for pair in current.windows(2) {
            next.push(pair[0].lerp(pair[1], 0.25));
            next.push(pair[0].lerp(pair[1], 0.75));
        }
        next.push(current[current.len() - 1]);
        current = next;
    }
    current
}

impl ChaikinCurve {
    pub fn new(points: &[DVec2], iterations: usize) -> Self {
        Self {
            refined: refine(points, iterations),
        }
    }

    /// The refined polyline (base first).
    pub fn refined(&self) -> &[DVec2] {
        &self.refined
    }

    /// Minimum distance from `point` to the refined polyline, and the
    /// fractional position of the closest point along it: the winning pair
    /// index plus its clamped projection parameter, normalized to [0, 1].
    pub fn distance_and_progress(&self, point: DVec2) -> (f64, f64) {
        match self.refined.len() {
            0 => (f64::INFINITY, 0.0),
            1 => (point.distance(self.refined[0]), 0.0),
            _ => {
                let last = (self.refined.len() - 1) as f64;
                let mut best = (f64::INFINITY, 0.0);
                for (i, pair) in self.refined.windows(2).enumerate() {
                    let (d, t) = point_segment_param(point, pair[0], pair[1]);
                    if d < best.0 {
                        best = (d, (i as f64 + t) / last);
                    }
                }
                best
            }
        }
    }
}
