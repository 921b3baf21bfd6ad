//! Narrow-phase intersection algorithms
//!
//! Pure functions over world-space shape placements. Each returns `None`
//! for a miss, or the penetration depth and separation normal for a hit.
//! The normal always points from the first shape's center toward the
//! second's; degenerate (coincident-center) cases fall back to the world-up
//! direction instead of failing.

use crate::Transform;
use lockstep_math::{FixedSqrt, Scalar, Vec3};

const ZERO: Scalar = Scalar::from_bits(0);

/// Depth bias, roughly 1e-4 in Q32.32.
///
/// Added to every reported depth so resolution always moves bodies strictly
/// apart rather than leaving them exactly touching. Also gates the
/// degenerate-normal fallback.
pub const EPSILON: Scalar = Scalar::from_bits(429_497);

/// Penetration data for a single collision
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CollisionInfo {
    /// Penetration distance along `normal`, strictly positive for a hit
    pub depth: Scalar,
    /// Unit separation direction from the first shape toward the second
    pub normal: Vec3,
}

/// World-space placement of a collider offset
///
/// `position + rotate(local, rotation)`, skipping the rotation entirely
/// while the orientation is exactly identity.
#[inline]
pub fn world_point(transform: &Transform, local: Vec3) -> Vec3 {
    if transform.rotation.is_identity() {
        transform.position + local
    } else {
        transform.position + transform.rotation.rotate(local)
    }
}

/// Sphere vs sphere intersection
///
/// Compares squared distance against the squared radii sum, so the miss
/// path never pays for a square root. Touching counts as a hit.
pub fn sphere_vs_sphere(
    center_a: Vec3,
    radius_a: Scalar,
    center_b: Vec3,
    radius_b: Scalar,
) -> Option<CollisionInfo> {
    let delta = center_b - center_a;
    let distance_squared = delta.length_squared();
    let radii = radius_a + radius_b;

    if distance_squared <= radii * radii {
        Some(CollisionInfo {
            depth: radii - distance_squared.sqrt() + EPSILON,
            normal: separation_normal(center_a, center_b),
        })
    } else {
        None
    }
}

/// AABB vs AABB intersection
///
/// Slab overlap test per axis. The reported depth is the smallest positive
/// per-axis overlap extent, paired with a center-to-center normal. That
/// normal is not axis-aligned, so depth and direction can disagree for
/// off-axis overlaps; the behavior is kept as-is for parity with existing
/// simulations.
pub fn aabb_vs_aabb(
    center_a: Vec3,
    half_extents_a: Vec3,
    center_b: Vec3,
    half_extents_b: Vec3,
) -> Option<CollisionInfo> {
    let min_a = center_a - half_extents_a;
    let max_a = center_a + half_extents_a;
    let min_b = center_b - half_extents_b;
    let max_b = center_b + half_extents_b;

    let overlaps = min_a.x <= max_b.x
        && max_a.x >= min_b.x
        && min_a.y <= max_b.y
        && max_a.y >= min_b.y
        && min_a.z <= max_b.z
        && max_a.z >= min_b.z;

    if overlaps {
        Some(CollisionInfo {
            depth: overlap_depth(min_a, max_a, min_b, max_b) + EPSILON,
            normal: separation_normal(center_a, center_b),
        })
    } else {
        None
    }
}

/// AABB vs sphere intersection
///
/// Clamps the sphere center to the box to find the closest point, then
/// compares squared distance against the squared radius. The normal points
/// from the box center toward the sphere center.
pub fn aabb_vs_sphere(
    box_center: Vec3,
    half_extents: Vec3,
    sphere_center: Vec3,
    radius: Scalar,
) -> Option<CollisionInfo> {
    let closest =
        sphere_center.clamp_components(box_center - half_extents, box_center + half_extents);
    let delta = sphere_center - closest;
    let distance_squared = delta.length_squared();

    if distance_squared <= radius * radius {
        Some(CollisionInfo {
            depth: radius - distance_squared.sqrt() + EPSILON,
            normal: separation_normal(box_center, sphere_center),
        })
    } else {
        None
    }
}

/// Smallest positive overlap extent across the three axes
fn overlap_depth(min_a: Vec3, max_a: Vec3, min_b: Vec3, max_b: Vec3) -> Scalar {
    let x_overlap = ZERO.max((max_a.x - min_b.x).min(max_b.x - min_a.x));
    let y_overlap = ZERO.max((max_a.y - min_b.y).min(max_b.y - min_a.y));
    let z_overlap = ZERO.max((max_a.z - min_b.z).min(max_b.z - min_a.z));
    x_overlap.min(y_overlap).min(z_overlap)
}

/// Unit direction from one center to the other, with the up-vector fallback
/// when the centers (near-)coincide
fn separation_normal(from: Vec3, to: Vec3) -> Vec3 {
    let delta = to - from;
    if delta.length_squared() < EPSILON * EPSILON {
        Vec3::UP
    } else {
        delta.normalized()
    }
}
