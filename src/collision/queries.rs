use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::{
    config::MAX_RAY_DISTANCE,
    core::{collider::PolygonGeometry, types::TransformHandle},
};

/// Half-line (or segment, when `distance` is finite) used for ray queries.
///
/// `direction` does not need to be unit length; all distances reported for a
/// ray are parameters along `direction`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ray {
    start: Vec2,
    direction: Vec2,
    distance: f32,
}

impl Default for Ray {
    fn default() -> Self {
        Self::unbounded(Vec2::ZERO, Vec2::X)
    }
}

impl Ray {
    pub fn new(start: Vec2, direction: Vec2, distance: f32) -> Self {
        Self {
            start,
            direction,
            distance,
        }
    }

    pub fn unbounded(start: Vec2, direction: Vec2) -> Self {
        Self::new(start, direction, MAX_RAY_DISTANCE)
    }

    pub fn start(&self) -> Vec2 {
        self.start
    }

    pub fn direction(&self) -> Vec2 {
        self.direction
    }

    pub fn distance(&self) -> f32 {
        self.distance
    }

    pub fn is_unbounded(&self) -> bool {
        self.distance >= MAX_RAY_DISTANCE
    }

    pub fn point_at(&self, d: f32) -> Vec2 {
        self.start + self.direction * d
    }

    /// Axis perpendicular to the ray direction.
    pub fn perpendicular(&self) -> Vec2 {
        Vec2::new(self.direction.y, -self.direction.x)
    }
}

/// Result of a ray query, also used as the accumulator while scanning.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayHit {
    pub other: Option<TransformHandle>,
    pub distance: f32,
}

impl RayHit {
    /// Empty accumulator for `ray`: no hit, bounded by the ray's own distance.
    pub fn miss(ray: &Ray) -> Self {
        Self {
            other: None,
            distance: ray.distance(),
        }
    }

    pub fn is_hit(&self) -> bool {
        self.other.is_some()
    }

    /// Records `other` at `distance` if it is strictly nearer than the current
    /// bound, or if nothing has been hit yet and it lies within the bound.
    pub fn offer(&mut self, other: TransformHandle, distance: f32) -> bool {
        let accepted = match self.other {
            Some(_) => distance < self.distance,
            None => distance <= self.distance,
        };
        if accepted {
            self.other = Some(other);
            self.distance = distance;
        }
        accepted
    }
}

/// Cheap necessary condition: the infinite line through the ray crosses the
/// polygon's projection on the ray's perpendicular axis.
pub fn ray_may_cross<G: PolygonGeometry + ?Sized>(ray: &Ray, geometry: &G, position: Vec2) -> bool {
    let normal = ray.perpendicular();
    geometry
        .project(normal, position)
        .contains(ray.start().dot(normal))
}

/// Walks the polygon edges in winding order and returns the ray parameter of
/// the first edge crossed within `[0, max_distance]`.
///
/// This is the first crossing in enumeration order, not necessarily the nearest
/// one on the polygon.
pub fn first_edge_crossing(ray: &Ray, points: &[Vec2], max_distance: f32) -> Option<f32> {
    let count = points.len();
    let dir = ray.direction();
    for i in 0..count {
        let c = points[i];
        let m = points[(i + 1) % count] - c;
        let det = m.perp_dot(dir);
        if det == 0.0 {
            continue;
        }
        let n = (ray.start() - c).perp_dot(dir) / det;
        if !(0.0..=1.0).contains(&n) {
            continue;
        }
        let t = (c - ray.start()).perp_dot(m) / dir.perp_dot(m);
        if t >= 0.0 && t <= max_distance {
            return Some(t);
        }
    }
    None
}
