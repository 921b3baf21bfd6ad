//! Fixed-Point 3D Mathematics
//!
//! This crate provides the deterministic math types for the lockstep
//! physics engine. All arithmetic runs on a fixed-point scalar so that
//! simulations produce bit-identical results on every platform.
//!
//! ## Core Types
//!
//! - [`Scalar`] - Q32.32 fixed-point number (the only numeric type in the
//!   simulation hot path)
//! - [`Vec3`] - 3D vector over [`Scalar`]
//! - [`Quat`] - unit quaternion for orientations

mod quat;
mod scalar;
mod vec3;

pub use quat::Quat;
pub use scalar::Scalar;
pub use vec3::Vec3;

// Square root for fixed-point scalars, re-exported so callers can bring the
// trait into scope alongside the types.
pub use fixed_sqrt::FixedSqrt;
