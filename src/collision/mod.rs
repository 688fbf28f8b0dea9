//! Collision detection modules: projections, SAT narrow phase, ray queries, events.

pub mod projection;
pub mod narrowphase;
pub mod queries;
pub mod events;

pub use projection::{compute_mtv, Projection};
pub use narrowphase::{NarrowPhase, SatContact};
pub use queries::{Ray, RayHit};
pub use events::{
    CollisionInfo, CollisionListener, EventRecorder, FnListener, SpaceEvent, TriggerInfo,
};
