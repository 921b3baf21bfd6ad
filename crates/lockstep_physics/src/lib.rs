//! Deterministic collision pipeline for lockstep simulations
//!
//! This crate provides a fixed-point 3D physics stepper, including:
//! - Actors with kinematic transforms and capability masks
//! - Collider shapes (spheres, AABBs) attached at local offsets
//! - Narrow-phase intersection with penetration depth and normal
//! - Positional overlap resolution
//!
//! Every quantity is a Q32.32 fixed-point number, so stepping a world with
//! the same inputs produces bit-identical state on every platform.

pub mod actor;
pub mod collider;
pub mod collision;
pub mod mask;
pub mod pair;
pub mod transform;
pub mod world;

// Re-export commonly used types
pub use actor::{Actor, ActorKey, ActorType};
pub use collider::{Collider, ColliderShape, ColliderType};
pub use collision::{aabb_vs_aabb, aabb_vs_sphere, sphere_vs_sphere, world_point, CollisionInfo, EPSILON};
pub use mask::LayerMask;
pub use pair::{CollisionPair, PairKey};
pub use transform::Transform;
pub use world::{CollisionObserver, PhysicsConfig, PhysicsWorld};
