use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Closed scalar interval produced by projecting a polygon onto an axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Projection {
    pub min: f32,
    pub max: f32,
}

impl Projection {
    pub fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Projects every point onto `axis`. An empty slice yields an empty
    /// (inverted) interval that overlaps nothing.
    pub fn from_points(points: &[Vec2], axis: Vec2) -> Self {
        points.iter().fold(
            Self::new(f32::INFINITY, f32::NEG_INFINITY),
            |acc, point| {
                let d = point.dot(axis);
                Self::new(acc.min.min(d), acc.max.max(d))
            },
        )
    }

    /// Inclusive interval intersection test.
    pub fn overlaps(a: &Projection, b: &Projection) -> bool {
        a.min <= b.max && b.min <= a.max
    }

    pub fn contains(&self, value: f32) -> bool {
        self.min <= value && value <= self.max
    }

    /// `true` when `self` encloses `other`, bounds included.
    pub fn encloses(&self, other: &Projection) -> bool {
        self.min <= other.min && self.max >= other.max
    }

    pub fn length(&self) -> f32 {
        self.max - self.min
    }
}

/// Signed penetration depth of `a` into `b` along the projected axis.
///
/// A positive value means `a` escapes towards the positive axis direction, a
/// negative value towards the negative one. The magnitude is the shortest
/// distance that separates the intervals (down to touching).
pub fn compute_mtv(a: &Projection, b: &Projection) -> f32 {
    if a.encloses(b) || b.encloses(a) {
        let push_positive = b.max - a.min;
        let push_negative = a.max - b.min;
        return if push_positive <= push_negative {
            push_positive
        } else {
            -push_negative
        };
    }

    if a.min > b.min {
        b.max - a.min
    } else {
        -(a.max - b.min)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn overlap_is_inclusive() {
        let a = Projection::new(0.0, 1.0);
        let touching = Projection::new(1.0, 2.0);
        let apart = Projection::new(1.0001, 2.0);
        assert!(Projection::overlaps(&a, &touching));
        assert!(Projection::overlaps(&touching, &a));
        assert!(!Projection::overlaps(&a, &apart));
    }

    #[test]
    fn mtv_sign_follows_greater_minimum() {
        let left = Projection::new(0.0, 2.0);
        let right = Projection::new(1.5, 3.5);
        assert_relative_eq!(compute_mtv(&right, &left), 0.5);
        assert_relative_eq!(compute_mtv(&left, &right), -0.5);
    }

    #[test]
    fn mtv_containment_picks_cheaper_escape() {
        let outer = Projection::new(0.0, 10.0);
        let near_top = Projection::new(8.0, 9.0);
        // pushing `near_top` up costs 2, down costs 9
        assert_relative_eq!(compute_mtv(&near_top, &outer), 2.0);
        // pushing `outer` down below `near_top` costs 2 as well
        assert_relative_eq!(compute_mtv(&outer, &near_top), -2.0);

        let near_bottom = Projection::new(1.0, 2.0);
        assert_relative_eq!(compute_mtv(&near_bottom, &outer), -2.0);
    }

    #[test]
    fn identical_intervals_escape_positive() {
        let p = Projection::new(-1.0, 1.0);
        assert_relative_eq!(compute_mtv(&p, &p), 2.0);
    }

    #[test]
    fn touching_intervals_have_zero_depth() {
        let a = Projection::new(0.0, 1.0);
        let b = Projection::new(1.0, 2.0);
        assert_relative_eq!(compute_mtv(&a, &b).abs(), 0.0);
    }

    #[test]
    fn from_points_spans_extremes() {
        let points = [Vec2::new(1.0, 0.0), Vec2::new(-3.0, 2.0), Vec2::new(0.5, 5.0)];
        let p = Projection::from_points(&points, Vec2::X);
        assert_eq!(p, Projection::new(-3.0, 1.0));
        assert!(p.contains(0.0));
        assert_relative_eq!(p.length(), 4.0);
    }
}
