//! Core component types: transforms, rigid bodies, colliders and their store.

pub mod types;
pub mod rigidbody;
pub mod collider;

pub use types::{BodyHandle, ColliderHandle, ComponentStore, Transform, TransformHandle};
pub use rigidbody::RigidBody;
pub use collider::{Collider, ColliderBuilder, ColliderShape, ConvexPolygon, PolygonGeometry};
