//! Shared planar geometry: point-to-segment distance and bounding boxes.

use glam::DVec2;

/// Distance from `point` to the line segment `a`..`b`, with the projection
/// parameter clamped to the segment. A zero-length segment degrades to the
/// distance to `a`.
pub fn point_segment_distance(point: DVec2, a: DVec2, b: DVec2) -> f64 {
    point_segment_param(point, a, b).0
}

/// Like [`point_segment_distance`], also returning the clamped projection
/// parameter t in [0, 1] of the closest point (0 = `a`, 1 = `b`).
pub fn point_segment_param(point: DVec2, a: DVec2, b: DVec2) -> (f64, f64) {
    let d = b - a;
    let len_sq = d.length_squared();
    if len_sq == 0.0 {
        return (point.distance(a), 0.0);
    }
    let t = ((point - a).dot(d) / len_sq).clamp(0.0, 1.0);
    (point.distance(a + t * d), t)
}

/// Axis-aligned bounding box.
#[derive(Debug, Clone, Copy)]
pub struct Aabb {
    pub min: DVec2,
    pub max: DVec2,
}

impl Aabb {
    /// Tight box around `points`. An empty slice gives an inverted box whose
    /// extent is -inf; callers never query that case.
    pub fn from_points(points: &[DVec2]) -> Aabb {
        let mut min = DVec2::splat(f64::INFINITY);
        let mut max = DVec2::splat(f64::NEG_INFINITY);
        for p in points {
            min = min.min(*p);
            max = max.max(*p);
        }
        Aabb { min, max }
    }

    /// The larger of the box's two side lengths.
    pub fn max_extent(&self) -> f64 {
        let d = self.max - self.min;
        d.x.max(d.y)
    }

    /// Box center.
    pub fn center(&self) -> DVec2 {
        (self.min + self.max) * 0.5
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn projection_interior_hits_perpendicular_foot() {
        let (d, t) = point_segment_param(
            DVec2::new(5.0, 3.0),
            DVec2::new(0.0, 0.0),
            DVec2::new(10.0, 0.0),
        );
        assert!((d - 3.0).abs() < 1e-12);
        assert!((t - 0.5).abs() < 1e-12);
    }

    #[test]
    fn projection_clamps_to_endpoints() {
        let a = DVec2::new(0.0, 0.0);
        let b = DVec2::new(10.0, 0.0);
        let (d, t) = point_segment_param(DVec2::new(-4.0, 3.0), a, b);
        assert!((d - 5.0).abs() < 1e-12);
        assert_eq!(t, 0.0);
        let (d, t) = point_segment_param(DVec2::new(14.0, 3.0), a, b);
        assert!((d - 5.0).abs() < 1e-12);
        assert_eq!(t, 1.0);
    }

    #[test]
    fn zero_length_segment_degrades_to_point_distance() {
        let a = DVec2::new(2.0, 2.0);
        let (d, t) = point_segment_param(DVec2::new(2.0, 6.0), a, a);
        assert!((d - 4.0).abs() < 1e-12);
        assert_eq!(t, 0.0);
    }

    #[test]
    fn on_segment_distance_is_zero() {
        let d = point_segment_distance(
            DVec2::new(3.0, 3.0),
            DVec2::new(0.0, 0.0),
            DVec2::new(10.0, 10.0),
        );
        assert!(d < 1e-12);
    }

    #[test]
    fn aabb_bounds_and_center() {
        let bbox = Aabb::from_points(&[
            DVec2::new(-1.0, 4.0),
            DVec2::new(3.0, -2.0),
            DVec2::new(0.0, 0.0),
        ]);
        assert_eq!(bbox.min, DVec2::new(-1.0, -2.0));
        assert_eq!(bbox.max, DVec2::new(3.0, 4.0));
        assert_eq!(bbox.center(), DVec2::new(1.0, 1.0));
        assert!((bbox.max_extent() - 6.0).abs() < 1e-12);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn distance_nonnegative_and_param_clamped(
                px in -1e3_f64..1e3, py in -1e3_f64..1e3,
                ax in -1e3_f64..1e3, ay in -1e3_f64..1e3,
                bx in -1e3_f64..1e3, by in -1e3_f64..1e3,
            ) {
                let p = DVec2::new(px, py);
                let a = DVec2::new(ax, ay);
                let b = DVec2::new(bx, by);
                let (d, t) = point_segment_param(p, a, b);
                prop_assert!(d >= 0.0);
                prop_assert!((0.0..=1.0).contains(&t));
                // Never farther than either endpoint.
                prop_assert!(d <= p.distance(a) + 1e-9);
                prop_assert!(d <= p.distance(b) + 1e-9);
            }

            #[test]
            fn aabb_contains_all_its_points(
                points in prop::collection::vec((-1e3_f64..1e3, -1e3_f64..1e3), 1..12),
            ) {
                let points: Vec<DVec2> =
                    points.into_iter().map(|(x, y)| DVec2::new(x, y)).collect();
                let bbox = Aabb::from_points(&points);
                for p in &points {
                    prop_assert!(p.x >= bbox.min.x && p.x <= bbox.max.x);
                    prop_assert!(p.y >= bbox.min.y && p.y <= bbox.max.y);
                }
                prop_assert!(bbox.max_extent() >= 0.0);
            }
        }
    }
}
