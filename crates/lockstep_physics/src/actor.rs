//! Actors: the simulated bodies tracked by the world

use crate::{Collider, LayerMask, Transform};
use serde::{Deserialize, Serialize};
use slotmap::new_key_type;

new_key_type! {
    /// Key to an actor in the physics world
    ///
    /// Generational index into the world's actor arena. Stale keys resolve
    /// to `None` rather than aliasing a reused slot.
    pub struct ActorKey;
}

/// Motion kind of an actor
///
/// Static actors never integrate and are never moved by resolution;
/// pairs of static actors are not even tested for overlap.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActorType {
    #[default]
    Static,
    Dynamic,
}

/// A simulated body with a transform, colliders, and capability masks
///
/// Actors are created and owned exclusively by
/// [`PhysicsWorld`](crate::PhysicsWorld); identity for pairing purposes is
/// the [`ActorKey`] handed out at creation.
#[derive(Clone, Debug)]
pub struct Actor {
    /// Kinematic state, readable between steps
    pub transform: Transform,
    colliders: Vec<Collider>,
    actor_type: ActorType,
    active: bool,
    collision_mask: LayerMask,
    resolution_mask: LayerMask,
}

impl Actor {
    pub(crate) fn new(
        actor_type: ActorType,
        collision_mask: LayerMask,
        resolution_mask: LayerMask,
        active: bool,
    ) -> Self {
        Self {
            transform: Transform::identity(),
            // room for a typical compound actor without reallocating
            colliders: Vec::with_capacity(10),
            actor_type,
            active,
            collision_mask,
            resolution_mask,
        }
    }

    /// Attach a collider; insertion order decides which collider pair wins
    /// when several overlap at once
    pub fn add_collider(&mut self, collider: Collider) {
        self.colliders.push(collider);
    }

    pub fn colliders(&self) -> &[Collider] {
        &self.colliders
    }

    /// Mutable access to the attached colliders, e.g. to toggle their
    /// active flags
    pub fn colliders_mut(&mut self) -> &mut [Collider] {
        &mut self.colliders
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    pub fn actor_type(&self) -> ActorType {
        self.actor_type
    }

    pub fn set_actor_type(&mut self, actor_type: ActorType) {
        self.actor_type = actor_type;
    }

    /// Mask gating whether overlap with another actor is *detected*
    pub fn collision_mask(&self) -> LayerMask {
        self.collision_mask
    }

    pub fn collision_mask_mut(&mut self) -> &mut LayerMask {
        &mut self.collision_mask
    }

    /// Mask gating whether a detected overlap is *corrected*
    pub fn resolution_mask(&self) -> LayerMask {
        self.resolution_mask
    }

    pub fn resolution_mask_mut(&mut self) -> &mut LayerMask {
        &mut self.resolution_mask
    }
}
