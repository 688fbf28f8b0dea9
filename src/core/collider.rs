use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::collision::projection::Projection;

static RECT_NORMALS: [Vec2; 2] = [Vec2::X, Vec2::Y];
const DEGENERATE_EDGE_EPSILON: f32 = 1e-12;

/// Geometry queries the collider space needs from a collider.
///
/// Everything is expressed in world space for a given owner position.
pub trait PolygonGeometry {
    /// One unit normal per distinct face, in world orientation.
    fn normals(&self) -> &[Vec2];

    /// Vertices in world space, winding order preserved.
    fn points(&self, position: Vec2) -> Vec<Vec2>;

    /// Projects the world-space polygon onto `axis`.
    fn project(&self, axis: Vec2, position: Vec2) -> Projection {
        Projection::from_points(&self.points(position), axis)
    }
}

/// Convex polygon in local space.
///
/// Face normals are derived on construction; zero-length edges contribute no
/// normal so they can never show up as a degenerate separating axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<Vec2>", into = "Vec<Vec2>")]
pub struct ConvexPolygon {
    vertices: Vec<Vec2>,
    normals: Vec<Vec2>,
}

impl ConvexPolygon {
    pub fn new(vertices: Vec<Vec2>) -> Self {
        let count = vertices.len();
        let normals = (0..count)
            .filter_map(|i| {
                let edge = vertices[(i + 1) % count] - vertices[i];
                (edge.length_squared() > DEGENERATE_EDGE_EPSILON)
                    .then(|| Vec2::new(edge.y, -edge.x).normalize())
            })
            .collect();
        Self { vertices, normals }
    }

    /// Regular polygon centred on the origin, first vertex on +X, counter-clockwise.
    pub fn regular(sides: usize, radius: f32) -> Self {
        let step = std::f32::consts::TAU / sides as f32;
        Self::new(
            (0..sides)
                .map(|i| Vec2::from_angle(step * i as f32) * radius)
                .collect(),
        )
    }

    pub fn vertices(&self) -> &[Vec2] {
        &self.vertices
    }

    pub fn face_normals(&self) -> &[Vec2] {
        &self.normals
    }
}

impl From<Vec<Vec2>> for ConvexPolygon {
    fn from(vertices: Vec<Vec2>) -> Self {
        Self::new(vertices)
    }
}

impl From<ConvexPolygon> for Vec<Vec2> {
    fn from(polygon: ConvexPolygon) -> Self {
        polygon.vertices
    }
}

/// Enumeration of supported collider geometries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ColliderShape {
    /// Axis-aligned rectangle centred on the owner.
    Rect { half_extents: Vec2 },
    Polygon(ConvexPolygon),
}

impl PolygonGeometry for ColliderShape {
    fn normals(&self) -> &[Vec2] {
        match self {
            ColliderShape::Rect { .. } => &RECT_NORMALS,
            ColliderShape::Polygon(polygon) => polygon.face_normals(),
        }
    }

    fn points(&self, position: Vec2) -> Vec<Vec2> {
        match self {
            ColliderShape::Rect { half_extents } => {
                let h = *half_extents;
                vec![
                    position + Vec2::new(-h.x, -h.y),
                    position + Vec2::new(h.x, -h.y),
                    position + Vec2::new(h.x, h.y),
                    position + Vec2::new(-h.x, h.y),
                ]
            }
            ColliderShape::Polygon(polygon) => {
                polygon.vertices().iter().map(|v| position + *v).collect()
            }
        }
    }

    fn project(&self, axis: Vec2, position: Vec2) -> Projection {
        match self {
            ColliderShape::Rect { half_extents } => {
                let center = position.dot(axis);
                let radius = half_extents.x * axis.x.abs() + half_extents.y * axis.y.abs();
                Projection::new(center - radius, center + radius)
            }
            ColliderShape::Polygon(_) => Projection::from_points(&self.points(position), axis),
        }
    }
}

/// Collider component: a shape placed at an offset from its owner's transform.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Collider {
    pub shape: ColliderShape,
    pub offset: Vec2,
}

impl Default for Collider {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl Collider {
    pub fn rect(half_extents: Vec2) -> Self {
        Self::builder().rect(half_extents).build()
    }

    pub fn polygon(vertices: Vec<Vec2>) -> Self {
        Self::builder().polygon(vertices).build()
    }

    pub fn builder() -> ColliderBuilder {
        ColliderBuilder::new()
    }
}

impl PolygonGeometry for Collider {
    fn normals(&self) -> &[Vec2] {
        self.shape.normals()
    }

    fn points(&self, position: Vec2) -> Vec<Vec2> {
        self.shape.points(position + self.offset)
    }

    fn project(&self, axis: Vec2, position: Vec2) -> Projection {
        self.shape.project(axis, position + self.offset)
    }
}

pub struct ColliderBuilder {
    shape: ColliderShape,
    offset: Vec2,
}

impl Default for ColliderBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ColliderBuilder {
    pub fn new() -> Self {
        Self {
            shape: ColliderShape::Rect {
                half_extents: Vec2::splat(0.5),
            },
            offset: Vec2::ZERO,
        }
    }

    pub fn rect(mut self, half_extents: Vec2) -> Self {
        self.shape = ColliderShape::Rect { half_extents };
        self
    }

    pub fn polygon(mut self, vertices: Vec<Vec2>) -> Self {
        self.shape = ColliderShape::Polygon(ConvexPolygon::new(vertices));
        self
    }

    pub fn offset(mut self, offset: Vec2) -> Self {
        self.offset = offset;
        self
    }

    pub fn build(self) -> Collider {
        Collider {
            shape: self.shape,
            offset: self.offset,
        }
    }
}
