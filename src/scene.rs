use std::{collections::HashSet, time::Instant};

use glam::Vec2;
use log::debug;

use crate::{
    collision::{events::CollisionListener, queries::Ray, queries::RayHit},
    config::{DEFAULT_FRAME_BUDGET_MS, DEFAULT_TIME_STEP},
    core::{
        collider::Collider,
        rigidbody::RigidBody,
        types::{BodyHandle, ComponentStore, Transform, TransformHandle},
    },
    space::{ColliderOwner, ColliderSpace},
    utils::logging::warn_if_over_budget,
};

/// Owns the components of one scene together with its [`ColliderSpace`].
///
/// Entities are registered with the space when they are spawned and dropped
/// from it before their components are freed, so the space never sees a
/// handle outliving its component through this API.
pub struct Scene {
    store: ComponentStore,
    space: ColliderSpace,
    time_step: f32,
    time_accumulated: f32,
    frame_budget_ms: f32,
}

impl Default for Scene {
    fn default() -> Self {
        Self::new(DEFAULT_TIME_STEP)
    }
}

impl Scene {
    pub fn new(time_step: f32) -> Self {
        let ts = if time_step <= 0.0 {
            DEFAULT_TIME_STEP
        } else {
            time_step
        };

        Self {
            store: ComponentStore::new(),
            space: ColliderSpace::new(),
            time_step: ts,
            time_accumulated: 0.0,
            frame_budget_ms: DEFAULT_FRAME_BUDGET_MS,
        }
    }

    pub fn time_step(&self) -> f32 {
        self.time_step
    }

    pub fn set_frame_budget_ms(&mut self, budget_ms: f32) {
        self.frame_budget_ms = budget_ms;
    }

    /// Creates an entity from a transform and a collider and registers it.
    pub fn spawn(&mut self, transform: Transform, collider: Collider) -> ColliderOwner {
        let owner = ColliderOwner::new(
            self.store.transforms.insert(transform),
            self.store.colliders.insert(collider),
        );
        self.space.insert(owner);
        owner
    }

    pub fn spawn_with_body(
        &mut self,
        transform: Transform,
        collider: Collider,
        body: RigidBody,
    ) -> ColliderOwner {
        let owner = self.spawn(transform, collider);
        let body = self.attach_body(owner.transform, body);
        ColliderOwner { body, ..owner }
    }

    /// Gives a registered entity a rigid body, replacing any previous one.
    pub fn attach_body(&mut self, transform: TransformHandle, body: RigidBody) -> Option<BodyHandle> {
        let owner = self.owner(transform)?;
        if let Some(previous) = owner.body {
            self.store.bodies.remove(previous);
        }
        let handle = self.store.bodies.insert(body);
        self.space.update_rigid_body(transform, Some(handle));
        Some(handle)
    }

    pub fn detach_body(&mut self, transform: TransformHandle) -> Option<RigidBody> {
        let body = self.owner(transform)?.body?;
        self.space.update_rigid_body(transform, None);
        self.store.bodies.remove(body)
    }

    /// Unregisters the entity, then frees its components.
    pub fn despawn(&mut self, transform: TransformHandle) -> bool {
        let Some(owner) = self.owner(transform) else {
            return false;
        };
        self.space.remove_transform(transform);
        self.store.colliders.remove(owner.collider);
        if let Some(body) = owner.body {
            self.store.bodies.remove(body);
        }
        self.store.transforms.remove(transform);
        true
    }

    /// Advances by `dt`, running one collision pass per elapsed fixed step.
    /// Returns the number of passes run.
    pub fn step<L: CollisionListener + ?Sized>(&mut self, dt: f32, listener: &mut L) -> usize {
        let started = Instant::now();
        self.time_accumulated += dt;

        let mut ticks = 0;
        while self.time_accumulated >= self.time_step {
            self.time_accumulated -= self.time_step;
            self.fixed_update(listener);
            ticks += 1;
        }

        if ticks > 0 {
            self.space.stats().report();
            warn_if_over_budget("scene step", started.elapsed(), self.frame_budget_ms);
        }
        ticks
    }

    pub fn fixed_update<L: CollisionListener + ?Sized>(&mut self, listener: &mut L) {
        self.space.update(&mut self.store, listener);
    }

    pub fn raycast(&self, ray: &Ray, ignored: &HashSet<TransformHandle>) -> RayHit {
        let hit = self.space.raycast(&self.store, ray, ignored);
        if hit.is_hit() {
            debug!("ray hit {:?} at {}", hit.other, hit.distance);
        }
        hit
    }

    pub fn owner(&self, transform: TransformHandle) -> Option<ColliderOwner> {
        self.space
            .owners()
            .iter()
            .find(|owner| owner.transform == transform)
            .copied()
    }

    pub fn position(&self, transform: TransformHandle) -> Option<Vec2> {
        self.store.position(transform)
    }

    pub fn set_position(&mut self, transform: TransformHandle, position: Vec2) -> bool {
        match self.store.transforms.get_mut(transform) {
            Some(tf) => {
                tf.position = position;
                true
            }
            None => false,
        }
    }

    pub fn store(&self) -> &ComponentStore {
        &self.store
    }

    pub fn space(&self) -> &ColliderSpace {
        &self.space
    }
}
