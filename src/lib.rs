//! Lockstep - deterministic fixed-point physics demo
//!
//! Library surface of the demo application; the simulation itself lives in
//! the `lockstep_physics` and `lockstep_math` crates.

pub mod config;
