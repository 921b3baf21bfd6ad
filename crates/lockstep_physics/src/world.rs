//! Physics world and the per-step pipeline

use crate::pair::{CollisionPair, PairKey};
use crate::{Actor, ActorKey, ActorType, CollisionInfo, LayerMask};
use lockstep_math::Scalar;
use log::{debug, trace};
use serde::{Deserialize, Serialize};
use slotmap::SlotMap;
use std::collections::BTreeMap;

const HALF: Scalar = Scalar::from_bits(1i64 << 31);

/// Configuration for the stepper
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct PhysicsConfig {
    /// Substeps per `step` call; each substep runs the full
    /// movement/collect/resolve sequence on an even share of the delta
    pub substeps: u32,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self { substeps: 1 }
    }
}

impl PhysicsConfig {
    /// Create a config with the given substep count
    pub fn new(substeps: u32) -> Self {
        Self { substeps }
    }
}

/// Receives the finalized collision set once per step, after resolution
///
/// The slice is in deterministic (pair-key) order and is empty when nothing
/// collided. Calling back into the world's `step` from the callback is not
/// supported.
pub trait CollisionObserver {
    fn on_collisions(&mut self, collisions: &[CollisionPair]);
}

/// The physics world owning all actors
///
/// Sole mutation point for actor transforms: integration and resolution
/// both happen inside [`step`](Self::step), and between calls the world is
/// quiescent and safe to read.
pub struct PhysicsWorld {
    /// All actors in the world (using generational keys)
    actors: SlotMap<ActorKey, Actor>,
    /// This step's collision set, keyed by symmetric pair identity;
    /// cleared and rebuilt on every substep
    last_collisions: BTreeMap<PairKey, CollisionPair>,
    /// Observer handed the collision set after each step
    observer: Option<Box<dyn CollisionObserver>>,
    /// Stepper configuration
    pub config: PhysicsConfig,
}

impl PhysicsWorld {
    /// Create a new physics world with default configuration
    pub fn new() -> Self {
        Self::with_config(PhysicsConfig::default())
    }

    /// Create a new physics world with custom configuration
    pub fn with_config(config: PhysicsConfig) -> Self {
        Self {
            // room for a small scene without reallocating
            actors: SlotMap::with_capacity_and_key(25),
            last_collisions: BTreeMap::new(),
            observer: None,
            config,
        }
    }

    /// Create an actor and return its key
    pub fn create_actor(
        &mut self,
        actor_type: ActorType,
        collision_mask: LayerMask,
        resolution_mask: LayerMask,
        enabled: bool,
    ) -> ActorKey {
        self.actors
            .insert(Actor::new(actor_type, collision_mask, resolution_mask, enabled))
    }

    /// Get an immutable reference to an actor by key
    pub fn get_actor(&self, key: ActorKey) -> Option<&Actor> {
        self.actors.get(key)
    }

    /// Get a mutable reference to an actor by key
    pub fn get_actor_mut(&mut self, key: ActorKey) -> Option<&mut Actor> {
        self.actors.get_mut(key)
    }

    /// Number of actors in the world
    pub fn actor_count(&self) -> usize {
        self.actors.len()
    }

    /// Iterate over all actor keys
    pub fn actor_keys(&self) -> impl Iterator<Item = ActorKey> + '_ {
        self.actors.keys()
    }

    /// Iterate over all actors with their keys
    pub fn actors(&self) -> impl Iterator<Item = (ActorKey, &Actor)> + '_ {
        self.actors.iter()
    }

    /// Install the observer notified after each step
    pub fn set_observer(&mut self, observer: Box<dyn CollisionObserver>) {
        self.observer = Some(observer);
    }

    /// The collision set recorded by the most recent step
    pub fn collisions(&self) -> impl Iterator<Item = &CollisionPair> + '_ {
        self.last_collisions.values()
    }

    /// The collision recorded between two actors this step, if any
    pub fn collision_between(&self, a: ActorKey, b: ActorKey) -> Option<CollisionInfo> {
        self.last_collisions
            .get(&PairKey::new(a, b))
            .map(|pair| pair.info)
    }

    /// Advance the simulation by `delta` seconds
    ///
    /// Runs the configured number of substeps, then notifies the observer
    /// once with the final substep's collision set.
    pub fn step(&mut self, delta: Scalar) {
        self.step_substeps(delta, self.config.substeps);
    }

    /// Advance the simulation by `delta` seconds over an explicit number of
    /// substeps
    ///
    /// The delta is divided evenly; each substep integrates, collects, and
    /// resolves. Finer substeps reduce resolution error at proportional
    /// cost. A substep count of zero is treated as one.
    pub fn step_substeps(&mut self, delta: Scalar, substeps: u32) {
        let substeps = substeps.max(1);
        let subdelta = delta / Scalar::from_num(substeps);
        debug!("step: delta={delta} substeps={substeps}");

        for _ in 0..substeps {
            self.apply_movement(subdelta);
            self.collect_collisions();
            self.resolve_collisions();
        }

        self.notify_actors();
    }

    /// Integrate motion for one substep
    ///
    /// Every actor's `old_position` is refreshed first, active or not, so
    /// consumers can always diff this step's displacement. Only active
    /// dynamic actors then integrate (semi-implicit Euler).
    fn apply_movement(&mut self, delta: Scalar) {
        for (_key, actor) in &mut self.actors {
            actor.transform.old_position = actor.transform.position;

            if actor.actor_type() != ActorType::Dynamic || !actor.is_active() {
                continue;
            }

            let acceleration = actor.transform.acceleration;
            actor.transform.velocity += acceleration * delta;
            let velocity = actor.transform.velocity;
            actor.transform.position += velocity * delta;
        }
    }

    /// Broad + narrow phase: record at most one collision per actor pair
    ///
    /// Exhaustive pairwise scan, deduplicated through the symmetric pair
    /// key. O(n²·c²) in actors and colliders; intended for small worlds.
    fn collect_collisions(&mut self) {
        self.last_collisions.clear();

        let keys: Vec<ActorKey> = self.actors.keys().collect();
        for &key_a in &keys {
            let actor_a = &self.actors[key_a];
            if !actor_a.is_active() {
                continue;
            }

            for &key_b in &keys {
                if key_b == key_a {
                    continue;
                }

                let actor_b = &self.actors[key_b];
                if !actor_b.is_active() {
                    continue;
                }

                // one record per unordered pair per step
                let pair_key = PairKey::new(key_a, key_b);
                if self.last_collisions.contains_key(&pair_key) {
                    continue;
                }

                let both_static = actor_a.actor_type() == ActorType::Static
                    && actor_b.actor_type() == ActorType::Static;
                if both_static || !actor_a.collision_mask().intersects(actor_b.collision_mask()) {
                    continue;
                }

                // first colliding shape pair wins; the rest are skipped
                'colliders: for collider_a in actor_a.colliders() {
                    if !collider_a.is_active() {
                        continue;
                    }
                    for collider_b in actor_b.colliders() {
                        if !collider_b.is_active() {
                            continue;
                        }
                        if let Some(info) = collider_a.check_collision(
                            &actor_a.transform,
                            &actor_b.transform,
                            collider_b,
                        ) {
                            trace!("collision recorded: depth={}", info.depth);
                            self.last_collisions
                                .insert(pair_key, CollisionPair::new(key_a, key_b, info));
                            break 'colliders;
                        }
                    }
                }
            }
        }
    }

    /// Positional correction for every recorded pair
    ///
    /// A pair is corrected only when the actors share a resolution mask
    /// bit. Dynamic-dynamic pairs split the depth evenly; a dynamic actor
    /// against a static one absorbs the full depth. Static-static pairs
    /// never reach this point. Purely positional: velocities are untouched.
    fn resolve_collisions(&mut self) {
        let pairs: Vec<CollisionPair> = self.last_collisions.values().copied().collect();

        for pair in pairs {
            let (type_a, type_b, resolvable) = {
                let actor_a = &self.actors[pair.a];
                let actor_b = &self.actors[pair.b];
                (
                    actor_a.actor_type(),
                    actor_b.actor_type(),
                    actor_a
                        .resolution_mask()
                        .intersects(actor_b.resolution_mask()),
                )
            };

            if !resolvable {
                continue;
            }

            let info = pair.info;
            match (type_a, type_b) {
                (ActorType::Dynamic, ActorType::Dynamic) => {
                    let half_push = info.normal * (info.depth * HALF);

                    let transform_a = &mut self.actors[pair.a].transform;
                    transform_a.old_position = transform_a.position;
                    transform_a.position -= half_push;

                    let transform_b = &mut self.actors[pair.b].transform;
                    transform_b.old_position = transform_b.position;
                    transform_b.position += half_push;
                }
                (ActorType::Dynamic, ActorType::Static) => {
                    let push = info.normal * info.depth;
                    let transform_a = &mut self.actors[pair.a].transform;
                    transform_a.old_position = transform_a.position;
                    transform_a.position -= push;
                }
                (ActorType::Static, ActorType::Dynamic) => {
                    let push = info.normal * info.depth;
                    let transform_b = &mut self.actors[pair.b].transform;
                    transform_b.old_position = transform_b.position;
                    transform_b.position += push;
                }
                // excluded during collection
                (ActorType::Static, ActorType::Static) => {}
            }
        }
    }

    /// Hand the finalized collision set to the observer, if any
    fn notify_actors(&mut self) {
        let pairs: Vec<CollisionPair> = self.last_collisions.values().copied().collect();
        trace!("notifying observer of {} collision pair(s)", pairs.len());
        if let Some(observer) = self.observer.as_deref_mut() {
            observer.on_collisions(&pairs);
        }
    }
}

impl Default for PhysicsWorld {
    fn default() -> Self {
        Self::new()
    }
}
