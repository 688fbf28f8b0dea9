use glam::Vec2;

use crate::{
    collision::projection::{compute_mtv, Projection},
    core::collider::PolygonGeometry,
};

/// Outcome of a SAT test between two overlapping polygons.
///
/// `axis` is a unit vector oriented so that moving the first polygon along it
/// (or the second one against it) separates the pair; `depth` is the distance
/// needed to do so.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SatContact {
    pub axis: Vec2,
    pub depth: f32,
}

impl SatContact {
    /// Minimum translation vector for the first polygon.
    pub fn push(&self) -> Vec2 {
        self.axis * self.depth
    }
}

/// Separating Axis Theorem test for convex polygons.
pub struct NarrowPhase;

impl NarrowPhase {
    /// Face normals of both polygons, `a` first. Parallel duplicates are kept.
    pub fn candidate_axes<'a, A, B>(a: &'a A, b: &'a B) -> impl Iterator<Item = Vec2> + 'a
    where
        A: PolygonGeometry + ?Sized,
        B: PolygonGeometry + ?Sized,
    {
        a.normals().iter().chain(b.normals()).copied()
    }

    /// Returns `None` as soon as a separating axis is found. Otherwise picks
    /// the axis of least penetration; on ties the earliest axis wins.
    ///
    /// A pair without any candidate axis is treated as separated.
    pub fn collide<A, B>(a: &A, position_a: Vec2, b: &B, position_b: Vec2) -> Option<SatContact>
    where
        A: PolygonGeometry + ?Sized,
        B: PolygonGeometry + ?Sized,
    {
        let mut best: Option<SatContact> = None;

        for axis in Self::candidate_axes(a, b) {
            let pa = a.project(axis, position_a);
            let pb = b.project(axis, position_b);

            if !Projection::overlaps(&pa, &pb) {
                return None;
            }

            let mtv = compute_mtv(&pa, &pb);
            let depth = mtv.abs();
            if best.map_or(true, |current| depth < current.depth) {
                best = Some(SatContact {
                    axis: if mtv < 0.0 { -axis } else { axis },
                    depth,
                });
            }
        }

        best
    }
}
