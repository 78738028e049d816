//! Catmull-Rom spline distance via dense Hermite sampling.
//!
//! Each interior polyline point contributes one cubic Hermite piece whose
//! tangents are weighted by the adjacent chord lengths (tension pinned at
//! 0.5). Pieces are built once per curve; a distance query samples every
//! piece at a fixed parametric step and takes the minimum distance over
//! consecutive sample pairs.

use crate::geom::point_segment_distance;
use glam::DVec2;

/// Parametric sample spacing per Hermite piece.
pub const DEFAULT_SAMPLE_STEP: f64 = 1e-3;

/// Tangent tension, taken as a pinned constant.
const TENSION: f64 = 0.5;

/// One cubic Hermite piece spanning two adjacent polyline points.
#[derive(Debug, Clone, Copy)]
struct HermitePiece {
    p1: DVec2,
    p2: DVec2,
    m1: DVec2,
    m2: DVec2,
}

impl HermitePiece {
    fn point_at(&self, t: f64) -> DVec2 {
        let t2 = t * t;
        let t3 = t2 * t;
        let h1 = 2.0 * t3 - 3.0 * t2 + 1.0;
        let h2 = -2.0 * t3 + 3.0 * t2;
        let h3 = t3 - 2.0 * t2 + t;
        let h4 = t3 - t2;
        h1 * self.p1 + h2 * self.p2 + h3 * self.m1 + h4 * self.m2
    }
}

/// A polyline smoothed as a chord-weighted Catmull-Rom spline.
#[derive(Debug, Clone)]
pub struct CatmullRom {
    points: Vec<DVec2>,
    pieces: Vec<HermitePiece>,
    sample_step: f64,
}

impl CatmullRom {
    pub fn new(points: Vec<DVec2>, sample_step: f64) -> Self {
        let pieces = build_pieces(&points);
        Self {
            points,
            pieces,
            sample_step,
        }
    }

    /// Minimum distance from `point` to the sampled spline.
    ///
    /// Fewer than 3 input points carry no interior piece; the distance
    /// degrades to the nearest input point (infinite for an empty polyline).
    pub fn distance(&self, point: DVec2) -> f64 {
        if self.points.len() < 3 {
            return self
                .points
                .iter()
                .map(|p| point.distance(*p))
                .fold(f64::INFINITY, f64::min);
        }

        let samples = (1.0 / self.sample_step).ceil().max(1.0) as usize;
        let mut min = f64::INFINITY;
        for piece in &self.pieces {
            let mut prev = piece.point_at(0.0);
            for i in 1..=samples {
                let t = (i as f64 * self.sample_step).min(1.0);
                let current = piece.point_at(t);
                min = min.min(point_segment_distance(point, prev, current));
                prev = current;
            }
        }
        min
    }
}

/// Builds the Hermite piece for every interior point. Tangents blend the two
/// adjacent chords, each weighted by the other chord's share of their summed
/// length; coincident neighbors (d1 + d2 = 0) get zero tangents instead of a
/// division by zero.
fn build_pieces(points: &[DVec2]) -> Vec<HermitePiece> {
    if points.len() < 3 {
        return Vec::new();
    }
    let t = TENSION;
    let mut pieces = Vec::with_capacity(points.len() - 2);
    for i in 1..points.len() - 1 {
        let p0 = points[i - 1];
        let p1 = points[i];
        let p2 = points[i + 1];
        let d1 = p0.distance(p1);
        let d2 = p1.distance(p2);
        let (m1, m2) = if d1 + d2 == 0.0 {
            (DVec2::ZERO, DVec2::ZERO)
        } else {
            let w_out = d2 / (d1 + d2);
            let w_in = d1 / (d1 + d2);
            (
                (1.0 - t) * w_out * (p1 - p0) + t * w_in * (p2 - p1),
                (1.0 - t) * w_in * (p2 - p1) + t * w_out * (p1 - p0),
            )
        };
        pieces.push(HermitePiece { p1, p2, m1, m2 });
    }
    pieces
}

#[cfg(test)]
mod tests {
    use super::*;

    // Coarser step keeps tests fast; accuracy bounds account for it.
    const TEST_STEP: f64 = 1e-2;

    fn spline(points: &[DVec2]) -> CatmullRom {
        CatmullRom::new(points.to_vec(), TEST_STEP)
    }

    #[test]
    fn interior_vertices_lie_on_the_spline() {
        let pts = [
            DVec2::new(0.0, 100.0),
            DVec2::new(6.0, 80.0),
            DVec2::new(2.0, 60.0),
            DVec2::new(10.0, 40.0),
        ];
        let s = spline(&pts);
        // Pieces interpolate their endpoints, covering points[1..].
        for p in &pts[1..] {
            assert!(s.distance(*p) < 1e-9, "vertex {p:?} off the spline");
        }
    }

    #[test]
    fn straight_polyline_spline_is_the_line() {
        let pts: Vec<DVec2> = (0..5).map(|i| DVec2::new(0.0, 20.0 * i as f64)).collect();
        let s = CatmullRom::new(pts, TEST_STEP);
        for y in [20.0, 35.0, 50.0, 80.0] {
            assert!(s.distance(DVec2::new(0.0, y)) < 1e-9);
        }
        let d = s.distance(DVec2::new(12.0, 50.0));
        assert!((d - 12.0).abs() < 1e-6, "lateral distance {d}");
    }

    #[test]
    fn fewer_than_three_points_use_nearest_input_point() {
        let two = spline(&[DVec2::new(0.0, 0.0), DVec2::new(10.0, 0.0)]);
        // Nearest of the two endpoints, not the chord between them.
        assert!((two.distance(DVec2::new(9.0, 4.0)) - (1.0f64 + 16.0).sqrt()).abs() < 1e-12);
        let one = spline(&[DVec2::new(3.0, 4.0)]);
        assert!((one.distance(DVec2::ZERO) - 5.0).abs() < 1e-12);
        assert!(spline(&[]).distance(DVec2::ZERO).is_infinite());
    }

    #[test]
    fn coincident_neighbors_do_not_divide_by_zero() {
        let p = DVec2::new(5.0, 5.0);
        let s = spline(&[p, p, p]);
        let d = s.distance(DVec2::new(5.0, 9.0));
        assert!((d - 4.0).abs() < 1e-12);
    }

    #[test]
    fn distance_decreases_toward_the_spline() {
        let s = spline(&[
            DVec2::new(0.0, 0.0),
            DVec2::new(10.0, 10.0),
            DVec2::new(20.0, 0.0),
        ]);
        let far = s.distance(DVec2::new(10.0, 40.0));
        let near = s.distance(DVec2::new(10.0, 14.0));
        assert!(near < far);
    }
}
