//! Collider Space – 2D collision registry for convex polygons.
//!
//! A [`ColliderSpace`] keeps non-owning handles to the transforms, rigid
//! bodies and colliders of one scene. Each fixed step it runs an all-pairs
//! Separating Axis Theorem pass, pushes overlapping bodies apart along the
//! axis of least penetration (split by inverse mass), and notifies a
//! [`CollisionListener`]. It also answers ray queries against the same set.
//!
//! [`Scene`] bundles the component arenas with a space and a fixed-step clock.

pub mod collision;
pub mod config;
pub mod core;
pub mod scene;
pub mod space;
pub mod utils;

pub use glam::Vec2;

pub use collision::{
    events::{CollisionInfo, CollisionListener, EventRecorder, FnListener, SpaceEvent, TriggerInfo},
    narrowphase::{NarrowPhase, SatContact},
    projection::{compute_mtv, Projection},
    queries::{Ray, RayHit},
};
pub use config::MAX_RAY_DISTANCE;
pub use core::{
    collider::{Collider, ColliderBuilder, ColliderShape, ConvexPolygon, PolygonGeometry},
    rigidbody::RigidBody,
    types::{BodyHandle, ColliderHandle, ComponentStore, Transform, TransformHandle},
};
pub use scene::Scene;
pub use space::{ColliderOwner, ColliderSpace};
pub use utils::{
    allocator::{Arena, Handle},
    profiling::SpaceStats,
};
