use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::{collider::Collider, rigidbody::RigidBody};
use crate::utils::allocator::{Arena, Handle};

/// World-space placement of an entity. Only translation is modelled.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Transform {
    pub position: Vec2,
}

impl Transform {
    pub fn from_position(position: Vec2) -> Self {
        Self { position }
    }

    pub fn from_xy(x: f32, y: f32) -> Self {
        Self::from_position(Vec2::new(x, y))
    }

    pub fn translate(&mut self, delta: Vec2) {
        self.position += delta;
    }
}

pub type TransformHandle = Handle<Transform>;
pub type BodyHandle = Handle<RigidBody>;
pub type ColliderHandle = Handle<Collider>;

/// Component arenas owned by a scene.
///
/// The collider space only keeps handles into these arenas; it never inserts
/// or frees components itself.
#[derive(Default)]
pub struct ComponentStore {
    pub transforms: Arena<Transform>,
    pub bodies: Arena<RigidBody>,
    pub colliders: Arena<Collider>,
}

impl ComponentStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn position(&self, transform: TransformHandle) -> Option<Vec2> {
        self.transforms.get(transform).map(|tf| tf.position)
    }

    pub fn inverse_mass(&self, body: BodyHandle) -> Option<f32> {
        self.bodies.get(body).map(|rb| rb.inverse_mass)
    }
}
