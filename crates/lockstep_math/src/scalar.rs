//! Fixed-point scalar type

use fixed::types::I32F32;

/// Fixed-point scalar used throughout the simulation.
///
/// Q32.32 format: 32 integer bits, 32 fractional bits in a signed 64-bit
/// word. Range is roughly ±2.1 billion with a resolution of 2⁻³², which is
/// plenty for world coordinates while keeping every operation exact and
/// platform-independent. Derived quantities that square a length (distance
/// checks, dot products) stay in range as long as world coordinates are
/// kept within ~±46k units.
pub type Scalar = I32F32;
