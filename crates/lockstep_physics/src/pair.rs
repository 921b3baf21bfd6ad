//! Per-step collision records

use crate::{ActorKey, CollisionInfo};
use slotmap::Key;

/// Symmetric identity of an unordered actor pair
///
/// Built from the canonical ordering of the two keys' bit patterns, so
/// `(A, B)` and `(B, A)` produce the same key for equality, ordering, and
/// hashing. Used to deduplicate pairs within a step and as the map key for
/// the step's collision set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PairKey(u64, u64);

impl PairKey {
    pub fn new(a: ActorKey, b: ActorKey) -> Self {
        let a = a.data().as_ffi();
        let b = b.data().as_ffi();
        if a <= b {
            Self(a, b)
        } else {
            Self(b, a)
        }
    }
}

/// An unordered actor pair plus the collision computed for it this step
///
/// Rebuilt from scratch every step; nothing here persists across steps.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CollisionPair {
    pub a: ActorKey,
    pub b: ActorKey,
    pub info: CollisionInfo,
}

impl CollisionPair {
    /// Record a collision between two live actors
    ///
    /// # Panics
    ///
    /// Panics if either key is the null key. A null key here means the
    /// broad phase recorded a pair it never looked up, which is a bug in
    /// the caller rather than recoverable input.
    pub fn new(a: ActorKey, b: ActorKey, info: CollisionInfo) -> Self {
        assert!(
            !a.is_null() && !b.is_null(),
            "collision pair requires live actor keys"
        );
        Self { a, b, info }
    }

    /// The symmetric identity of this pair
    pub fn key(&self) -> PairKey {
        PairKey::new(self.a, self.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ActorType, LayerMask, PhysicsWorld};
    use lockstep_math::{Scalar, Vec3};

    fn two_keys() -> (ActorKey, ActorKey) {
        let mut world = PhysicsWorld::new();
        let a = world.create_actor(ActorType::Dynamic, LayerMask::empty(), LayerMask::empty(), true);
        let b = world.create_actor(ActorType::Dynamic, LayerMask::empty(), LayerMask::empty(), true);
        (a, b)
    }

    fn dummy_info() -> CollisionInfo {
        CollisionInfo {
            depth: Scalar::from_num(0.5),
            normal: Vec3::X,
        }
    }

    #[test]
    fn test_pair_key_is_symmetric() {
        let (a, b) = two_keys();
        assert_eq!(PairKey::new(a, b), PairKey::new(b, a));
    }

    #[test]
    fn test_pair_keys_differ_for_distinct_pairs() {
        let mut world = PhysicsWorld::new();
        let keys: Vec<ActorKey> = (0..3)
            .map(|_| {
                world.create_actor(
                    ActorType::Dynamic,
                    LayerMask::empty(),
                    LayerMask::empty(),
                    true,
                )
            })
            .collect();
        assert_ne!(PairKey::new(keys[0], keys[1]), PairKey::new(keys[0], keys[2]));
        assert_ne!(PairKey::new(keys[0], keys[1]), PairKey::new(keys[1], keys[2]));
    }

    #[test]
    fn test_collision_pair_key_matches_pair_key() {
        let (a, b) = two_keys();
        let pair = CollisionPair::new(a, b, dummy_info());
        assert_eq!(pair.key(), PairKey::new(b, a));
    }

    #[test]
    #[should_panic(expected = "live actor keys")]
    fn test_null_actor_key_panics() {
        let (a, _) = two_keys();
        CollisionPair::new(a, ActorKey::null(), dummy_info());
    }
}
