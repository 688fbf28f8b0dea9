use std::{collections::HashSet, time::Duration};

use glam::Vec2;
use log::{debug, trace};

use crate::{
    collision::{
        events::{CollisionInfo, CollisionListener, TriggerInfo},
        narrowphase::NarrowPhase,
        queries::{first_edge_crossing, ray_may_cross, Ray, RayHit},
    },
    config::MASS_FRACTION_TOLERANCE,
    core::{
        collider::PolygonGeometry,
        types::{BodyHandle, ColliderHandle, ComponentStore, TransformHandle},
    },
    utils::{logging::ScopedTimer, profiling::SpaceStats},
};

/// One collidable entity registered in a [`ColliderSpace`].
///
/// The handles point into the scene's [`ComponentStore`] and must stay valid
/// for as long as the owner is registered. Owners whose handles have gone
/// stale are skipped during scans.
///
/// Equality is deliberately coarse: two owners compare equal when they share
/// a transform *or* the same rigid body. It exists for removal matching, not
/// identity. Two owners without a body never match through the body branch.
#[derive(Debug, Clone, Copy)]
pub struct ColliderOwner {
    pub transform: TransformHandle,
    pub body: Option<BodyHandle>,
    pub collider: ColliderHandle,
}

impl ColliderOwner {
    pub fn new(transform: TransformHandle, collider: ColliderHandle) -> Self {
        Self {
            transform,
            body: None,
            collider,
        }
    }

    pub fn with_body(mut self, body: BodyHandle) -> Self {
        self.body = Some(body);
        self
    }

    /// Key matching every owner registered with `transform`.
    pub fn for_transform(transform: TransformHandle) -> Self {
        Self::new(transform, ColliderHandle::default())
    }
}

impl PartialEq for ColliderOwner {
    fn eq(&self, other: &Self) -> bool {
        self.transform == other.transform || (self.body.is_some() && self.body == other.body)
    }
}

/// Registry of the collidable entities of one scene.
///
/// Runs an all-pairs SAT pass on [`update`](Self::update), pushes overlapping
/// bodies apart in proportion to their inverse mass and answers ray queries.
/// The space is single-writer: nothing may insert or remove owners while
/// `update` or `raycast` is running.
#[derive(Debug, Default)]
pub struct ColliderSpace {
    owners: Vec<ColliderOwner>,
    stats: SpaceStats,
}

impl ColliderSpace {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, owner: ColliderOwner) {
        self.owners.push(owner);
    }

    /// Removes every registered owner equal to `owner` (see [`ColliderOwner`]'s equality).
    pub fn remove(&mut self, owner: &ColliderOwner) -> usize {
        let before = self.owners.len();
        self.owners.retain(|registered| registered != owner);
        before - self.owners.len()
    }

    pub fn remove_transform(&mut self, transform: TransformHandle) -> usize {
        self.remove(&ColliderOwner::for_transform(transform))
    }

    /// Attaches (or detaches with `None`) a rigid body on the first owner using `transform`.
    pub fn update_rigid_body(
        &mut self,
        transform: TransformHandle,
        body: Option<BodyHandle>,
    ) -> bool {
        match self
            .owners
            .iter_mut()
            .find(|owner| owner.transform == transform)
        {
            Some(owner) => {
                owner.body = body;
                true
            }
            None => false,
        }
    }

    pub fn contains_transform(&self, transform: TransformHandle) -> bool {
        self.owners.iter().any(|owner| owner.transform == transform)
    }

    pub fn owners(&self) -> &[ColliderOwner] {
        &self.owners
    }

    pub fn len(&self) -> usize {
        self.owners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.owners.is_empty()
    }

    pub fn clear(&mut self) {
        self.owners.clear();
    }

    pub fn stats(&self) -> &SpaceStats {
        &self.stats
    }

    /// Tests every unordered pair of owners and resolves the overlapping ones.
    ///
    /// `listener` is called synchronously from inside the scan, in pair order
    /// and with owner 0 before owner 1. The listener cannot reach this space
    /// while the scan runs; any insert or remove it wants must be deferred
    /// until `update` returns.
    pub fn update<L: CollisionListener + ?Sized>(
        &mut self,
        store: &mut ComponentStore,
        listener: &mut L,
    ) {
        self.stats.begin_update(self.owners.len());
        let mut elapsed = Duration::ZERO;
        {
            let _timer = ScopedTimer::recording("space::update", &mut elapsed);
            for i in 0..self.owners.len() {
                for j in (i + 1)..self.owners.len() {
                    let (c0, c1) = (self.owners[i], self.owners[j]);
                    self.check_collision(&c0, &c1, store, listener);
                }
            }
        }
        self.stats.update_time = elapsed;
    }

    fn check_collision<L: CollisionListener + ?Sized>(
        &mut self,
        c0: &ColliderOwner,
        c1: &ColliderOwner,
        store: &mut ComponentStore,
        listener: &mut L,
    ) {
        let (Some(collider0), Some(collider1)) = (
            store.colliders.get(c0.collider),
            store.colliders.get(c1.collider),
        ) else {
            return;
        };
        let (Some(position0), Some(position1)) =
            (store.position(c0.transform), store.position(c1.transform))
        else {
            return;
        };

        self.stats.pairs_tested += 1;
        let Some(contact) = NarrowPhase::collide(collider0, position0, collider1, position1)
        else {
            return;
        };

        self.stats.overlaps += 1;
        self.resolve(c0, c1, contact.push(), store, listener);
    }

    /// Applies `push` to an overlapping pair and notifies both sides.
    ///
    /// When both owners carry a body, owner 0 moves by `push * f0` and owner 1
    /// by `-push * f1`, where `f` is each side's share of the summed inverse
    /// mass; both then receive `on_collision`. A pair whose inverse masses sum
    /// to zero is left in place. `on_trigger` is sent to both sides in every case.
    pub fn resolve<L: CollisionListener + ?Sized>(
        &mut self,
        c0: &ColliderOwner,
        c1: &ColliderOwner,
        push: Vec2,
        store: &mut ComponentStore,
        listener: &mut L,
    ) {
        let inverse_masses = match (c0.body, c1.body) {
            (Some(b0), Some(b1)) => store.inverse_mass(b0).zip(store.inverse_mass(b1)),
            _ => None,
        };

        if let Some((inv0, inv1)) = inverse_masses {
            let total = inv0 + inv1;
            if total == 0.0 {
                debug!(
                    "skipping correction between {:?} and {:?}: both immovable",
                    c0.transform, c1.transform
                );
            } else {
                let f0 = inv0 / total;
                let f1 = inv1 / total;
                debug_assert!(
                    (f0 + f1 - 1.0).abs() < MASS_FRACTION_TOLERANCE,
                    "mass fractions must sum to 1, got {f0} + {f1}"
                );

                let correction0 = push * f0;
                let correction1 = -push * f1;
                if let Some(tf) = store.transforms.get_mut(c0.transform) {
                    tf.translate(correction0);
                }
                if let Some(tf) = store.transforms.get_mut(c1.transform) {
                    tf.translate(correction1);
                }
                self.stats.resolutions += 1;
                trace!(
                    "resolved {:?} by {correction0} and {:?} by {correction1}",
                    c0.transform,
                    c1.transform
                );

                listener.on_collision(
                    c0,
                    &CollisionInfo {
                        other: c1.transform,
                        other_collider: c1.collider,
                        correction: correction0,
                    },
                );
                listener.on_collision(
                    c1,
                    &CollisionInfo {
                        other: c0.transform,
                        other_collider: c0.collider,
                        correction: correction1,
                    },
                );
            }
        }

        listener.on_trigger(
            c0,
            &TriggerInfo {
                other: c1.transform,
                other_collider: c1.collider,
            },
        );
        listener.on_trigger(
            c1,
            &TriggerInfo {
                other: c0.transform,
                other_collider: c0.collider,
            },
        );
    }

    /// Casts `ray` against every owner whose transform is not in `ignored`.
    ///
    /// Owners are visited in registration order. Within one polygon the first
    /// edge crossed in winding order within the ray's own distance is that
    /// polygon's hit; it then only replaces the accumulated hit if it is
    /// nearer. A hit at distance zero ends the scan.
    pub fn raycast(
        &self,
        store: &ComponentStore,
        ray: &Ray,
        ignored: &HashSet<TransformHandle>,
    ) -> RayHit {
        self.raycast_inspect(store, ray, ignored, |_, _| {})
    }

    /// Same as [`raycast`](Self::raycast), calling `inspect` with the
    /// accumulator after every candidate owner has been evaluated.
    pub fn raycast_inspect<F>(
        &self,
        store: &ComponentStore,
        ray: &Ray,
        ignored: &HashSet<TransformHandle>,
        mut inspect: F,
    ) -> RayHit
    where
        F: FnMut(TransformHandle, &RayHit),
    {
        let _timer = ScopedTimer::new("space::raycast");
        let mut hit = RayHit::miss(ray);
        for owner in &self.owners {
            if ignored.contains(&owner.transform) {
                continue;
            }
            let (Some(collider), Some(position)) = (
                store.colliders.get(owner.collider),
                store.position(owner.transform),
            ) else {
                continue;
            };

            if ray_may_cross(ray, collider, position) {
                let points = collider.points(position);
                if let Some(t) = first_edge_crossing(ray, &points, ray.distance()) {
                    hit.offer(owner.transform, t);
                }
            }
            inspect(owner.transform, &hit);

            if hit.is_hit() && hit.distance == 0.0 {
                break;
            }
        }
        hit
    }
}
