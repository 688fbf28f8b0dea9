//! Collision and trigger notifications dispatched by the collider space.

use glam::Vec2;

use crate::{
    core::types::{ColliderHandle, TransformHandle},
    space::ColliderOwner,
};

/// Physical collision between two owners that both carry a rigid body.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollisionInfo {
    pub other: TransformHandle,
    pub other_collider: ColliderHandle,
    /// Translation that was applied to the receiving side.
    pub correction: Vec2,
}

/// Overlap notification, sent whether or not the pair has mass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TriggerInfo {
    pub other: TransformHandle,
    pub other_collider: ColliderHandle,
}

/// Receives notifications while [`ColliderSpace::update`](crate::space::ColliderSpace::update) runs.
///
/// Calls are synchronous and happen in the middle of the all-pairs scan.
/// The space is mutably borrowed for the whole scan, so structural changes
/// (spawning, despawning, attaching bodies) have to be recorded here and
/// applied once `update` has returned.
pub trait CollisionListener {
    fn on_collision(&mut self, _owner: &ColliderOwner, _info: &CollisionInfo) {}

    fn on_trigger(&mut self, _owner: &ColliderOwner, _info: &TriggerInfo) {}
}

impl CollisionListener for () {}

impl<L: CollisionListener + ?Sized> CollisionListener for &mut L {
    fn on_collision(&mut self, owner: &ColliderOwner, info: &CollisionInfo) {
        (**self).on_collision(owner, info);
    }

    fn on_trigger(&mut self, owner: &ColliderOwner, info: &TriggerInfo) {
        (**self).on_trigger(owner, info);
    }
}

/// Event captured by [`EventRecorder`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SpaceEvent {
    Collision {
        owner: TransformHandle,
        info: CollisionInfo,
    },
    Trigger {
        owner: TransformHandle,
        info: TriggerInfo,
    },
}

impl SpaceEvent {
    pub fn owner(&self) -> TransformHandle {
        match self {
            SpaceEvent::Collision { owner, .. } | SpaceEvent::Trigger { owner, .. } => *owner,
        }
    }

    pub fn other(&self) -> TransformHandle {
        match self {
            SpaceEvent::Collision { info, .. } => info.other,
            SpaceEvent::Trigger { info, .. } => info.other,
        }
    }
}

/// Listener that stores every notification in dispatch order.
#[derive(Debug, Default, Clone)]
pub struct EventRecorder {
    pub events: Vec<SpaceEvent>,
}

impl EventRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn collisions(&self) -> impl Iterator<Item = (TransformHandle, &CollisionInfo)> + '_ {
        self.events.iter().filter_map(|event| match event {
            SpaceEvent::Collision { owner, info } => Some((*owner, info)),
            SpaceEvent::Trigger { .. } => None,
        })
    }

    pub fn triggers(&self) -> impl Iterator<Item = (TransformHandle, &TriggerInfo)> + '_ {
        self.events.iter().filter_map(|event| match event {
            SpaceEvent::Trigger { owner, info } => Some((*owner, info)),
            SpaceEvent::Collision { .. } => None,
        })
    }

    /// `true` if any event was delivered to or about `transform`.
    pub fn involves(&self, transform: TransformHandle) -> bool {
        self.events
            .iter()
            .any(|event| event.owner() == transform || event.other() == transform)
    }
}

impl CollisionListener for EventRecorder {
    fn on_collision(&mut self, owner: &ColliderOwner, info: &CollisionInfo) {
        self.events.push(SpaceEvent::Collision {
            owner: owner.transform,
            info: *info,
        });
    }

    fn on_trigger(&mut self, owner: &ColliderOwner, info: &TriggerInfo) {
        self.events.push(SpaceEvent::Trigger {
            owner: owner.transform,
            info: *info,
        });
    }
}

/// Adapts a pair of closures into a [`CollisionListener`].
pub struct FnListener<C, T>
where
    C: FnMut(&ColliderOwner, &CollisionInfo),
    T: FnMut(&ColliderOwner, &TriggerInfo),
{
    on_collision: C,
    on_trigger: T,
}

impl<C, T> FnListener<C, T>
where
    C: FnMut(&ColliderOwner, &CollisionInfo),
    T: FnMut(&ColliderOwner, &TriggerInfo),
{
    pub fn new(on_collision: C, on_trigger: T) -> Self {
        Self {
            on_collision,
            on_trigger,
        }
    }
}

impl<C, T> CollisionListener for FnListener<C, T>
where
    C: FnMut(&ColliderOwner, &CollisionInfo),
    T: FnMut(&ColliderOwner, &TriggerInfo),
{
    fn on_collision(&mut self, owner: &ColliderOwner, info: &CollisionInfo) {
        (self.on_collision)(owner, info);
    }

    fn on_trigger(&mut self, owner: &ColliderOwner, info: &TriggerInfo) {
        (self.on_trigger)(owner, info);
    }
}
