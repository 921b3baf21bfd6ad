//! Collider shapes and pairwise dispatch

use crate::collision::{self, CollisionInfo};
use crate::Transform;
use lockstep_math::{Scalar, Vec3};
use serde::{Deserialize, Serialize};

/// Tag identifying a collider's shape variant
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColliderType {
    Sphere,
    Aabb,
}

/// Collider geometry, defined in actor-local space
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColliderShape {
    /// Sphere with a non-negative radius
    Sphere { radius: Scalar },
    /// Box centered on the collider's world position, each half-extent
    /// component non-negative
    Aabb { half_extents: Vec3 },
}

/// A geometric shape attached to an actor at a local offset
///
/// World placement is `actor position + rotate(local_position, actor
/// rotation)`; the geometry itself never rotates (AABBs stay axis-aligned).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Collider {
    /// Offset from the owning actor's position
    pub local_position: Vec3,
    shape: ColliderShape,
    active: bool,
}

impl Collider {
    /// Create an active sphere collider
    pub fn sphere(local_position: Vec3, radius: Scalar) -> Self {
        debug_assert!(!radius.is_negative());
        Self {
            local_position,
            shape: ColliderShape::Sphere { radius },
            active: true,
        }
    }

    /// Create an active axis-aligned box collider
    pub fn aabb(local_position: Vec3, half_extents: Vec3) -> Self {
        debug_assert!(
            !half_extents.x.is_negative()
                && !half_extents.y.is_negative()
                && !half_extents.z.is_negative()
        );
        Self {
            local_position,
            shape: ColliderShape::Aabb { half_extents },
            active: true,
        }
    }

    pub fn shape(&self) -> &ColliderShape {
        &self.shape
    }

    /// The shape variant tag
    pub fn collider_type(&self) -> ColliderType {
        match self.shape {
            ColliderShape::Sphere { .. } => ColliderType::Sphere,
            ColliderShape::Aabb { .. } => ColliderType::Aabb,
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    /// World-space center of this collider under the given transform
    #[inline]
    pub fn world_center(&self, transform: &Transform) -> Vec3 {
        collision::world_point(transform, self.local_position)
    }

    /// Narrow-phase test against another collider
    ///
    /// Dispatches on the pair of shape variants, normalising mixed-pair
    /// argument order so only three algorithms exist. The returned normal
    /// always points from this collider's shape toward the other's, which
    /// is what resolution relies on to push bodies apart.
    pub fn check_collision(
        &self,
        transform: &Transform,
        other_transform: &Transform,
        other: &Collider,
    ) -> Option<CollisionInfo> {
        match (self.shape, other.shape) {
            (
                ColliderShape::Sphere { radius: radius_a },
                ColliderShape::Sphere { radius: radius_b },
            ) => collision::sphere_vs_sphere(
                self.world_center(transform),
                radius_a,
                other.world_center(other_transform),
                radius_b,
            ),
            (ColliderShape::Sphere { radius }, ColliderShape::Aabb { half_extents }) => {
                // aabb_vs_sphere reports the normal from box toward sphere;
                // here the sphere is first, so flip it
                collision::aabb_vs_sphere(
                    other.world_center(other_transform),
                    half_extents,
                    self.world_center(transform),
                    radius,
                )
                .map(|mut info| {
                    info.normal = -info.normal;
                    info
                })
            }
            (ColliderShape::Aabb { half_extents }, ColliderShape::Sphere { radius }) => {
                collision::aabb_vs_sphere(
                    self.world_center(transform),
                    half_extents,
                    other.world_center(other_transform),
                    radius,
                )
            }
            (
                ColliderShape::Aabb { half_extents: half_a },
                ColliderShape::Aabb { half_extents: half_b },
            ) => collision::aabb_vs_aabb(
                self.world_center(transform),
                half_a,
                other.world_center(other_transform),
                half_b,
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collision::EPSILON;
    use lockstep_math::Quat;

    fn fp(v: f64) -> Scalar {
        Scalar::from_num(v)
    }

    fn vec_approx_eq(a: Vec3, b: Vec3) -> bool {
        let eps = fp(0.001);
        (a.x - b.x).abs() < eps && (a.y - b.y).abs() < eps && (a.z - b.z).abs() < eps
    }

    #[test]
    fn test_collider_type_tags() {
        let sphere = Collider::sphere(Vec3::ZERO, fp(1.0));
        let aabb = Collider::aabb(Vec3::ZERO, Vec3::from_ints(1, 1, 1));
        assert_eq!(sphere.collider_type(), ColliderType::Sphere);
        assert_eq!(aabb.collider_type(), ColliderType::Aabb);
    }

    #[test]
    fn test_active_flag() {
        let mut collider = Collider::sphere(Vec3::ZERO, fp(1.0));
        assert!(collider.is_active());
        collider.set_active(false);
        assert!(!collider.is_active());
    }

    #[test]
    fn test_world_center_applies_offset() {
        let collider = Collider::sphere(Vec3::from_ints(0, 1, 0), fp(0.5));
        let tf = Transform::from_position(Vec3::from_ints(2, 0, 0));
        assert_eq!(collider.world_center(&tf), Vec3::from_ints(2, 1, 0));
    }

    #[test]
    fn test_world_center_rotates_offset() {
        let collider = Collider::sphere(Vec3::from_ints(1, 0, 0), fp(0.5));
        let mut tf = Transform::from_position(Vec3::ZERO);
        tf.rotation = Quat::new(fp(0.0), fp(0.0), fp(1.0), fp(0.0)); // 180° about Z
        assert!(vec_approx_eq(
            collider.world_center(&tf),
            Vec3::from_ints(-1, 0, 0)
        ));
    }

    #[test]
    fn test_sphere_sphere_dispatch() {
        let a = Collider::sphere(Vec3::ZERO, fp(1.0));
        let b = Collider::sphere(Vec3::ZERO, fp(1.0));
        let tf_a = Transform::from_position(Vec3::ZERO);
        let tf_b = Transform::from_position(Vec3::new(fp(1.5), fp(0.0), fp(0.0)));

        let info = a.check_collision(&tf_a, &tf_b, &b).expect("should collide");
        assert_eq!(info.depth, fp(0.5) + EPSILON);
        assert_eq!(info.normal, Vec3::X);
    }

    #[test]
    fn test_mixed_pair_normal_points_from_self_to_other() {
        let sphere = Collider::sphere(Vec3::ZERO, fp(1.0));
        let aabb = Collider::aabb(Vec3::ZERO, Vec3::from_ints(1, 1, 1));
        // Sphere left of the box, overlapping
        let tf_sphere = Transform::from_position(Vec3::ZERO);
        let tf_box = Transform::from_position(Vec3::new(fp(1.5), fp(0.0), fp(0.0)));

        let sphere_first = sphere
            .check_collision(&tf_sphere, &tf_box, &aabb)
            .expect("should collide");
        let box_first = aabb
            .check_collision(&tf_box, &tf_sphere, &sphere)
            .expect("should collide");

        // Sphere → box is +X; box → sphere is -X
        assert_eq!(sphere_first.normal, Vec3::X);
        assert_eq!(box_first.normal, -Vec3::X);
        assert_eq!(sphere_first.depth, box_first.depth);
    }

    #[test]
    fn test_aabb_aabb_dispatch() {
        let a = Collider::aabb(Vec3::ZERO, Vec3::from_ints(1, 1, 1));
        let b = Collider::aabb(Vec3::ZERO, Vec3::from_ints(1, 1, 1));
        let tf_a = Transform::from_position(Vec3::ZERO);
        let tf_far = Transform::from_position(Vec3::from_ints(3, 0, 0));
        let tf_near = Transform::from_position(Vec3::new(fp(1.5), fp(0.0), fp(0.0)));

        assert!(a.check_collision(&tf_a, &tf_far, &b).is_none());
        assert!(a.check_collision(&tf_a, &tf_near, &b).is_some());
    }
}
