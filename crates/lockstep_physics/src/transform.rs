//! Per-actor kinematic state

use lockstep_math::{Quat, Vec3};
use serde::{Deserialize, Serialize};

/// Kinematic state of an actor
///
/// Mutated only by the world: integration advances `velocity` and
/// `position`, resolution nudges `position`. `old_position` is a snapshot
/// taken before either kind of movement, so callers can diff a step's
/// displacement or roll back for interpolation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transform {
    /// Position in world space
    pub position: Vec3,
    /// Position before this step's movement and corrections
    pub old_position: Vec3,
    /// Velocity in units per second
    pub velocity: Vec3,
    /// Acceleration in units per second squared
    pub acceleration: Vec3,
    /// Orientation as a unit quaternion
    pub rotation: Quat,
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}

impl Transform {
    /// Create a transform at the origin with no motion or rotation
    pub fn identity() -> Self {
        Self {
            position: Vec3::ZERO,
            old_position: Vec3::ZERO,
            velocity: Vec3::ZERO,
            acceleration: Vec3::ZERO,
            rotation: Quat::IDENTITY,
        }
    }

    /// Create a transform at the given position
    pub fn from_position(position: Vec3) -> Self {
        Self {
            position,
            old_position: position,
            ..Self::identity()
        }
    }

    /// Displacement accumulated since the last `old_position` snapshot
    #[inline]
    pub fn displacement(&self) -> Vec3 {
        self.position - self.old_position
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lockstep_math::Scalar;

    #[test]
    fn test_identity() {
        let tf = Transform::identity();
        assert_eq!(tf.position, Vec3::ZERO);
        assert_eq!(tf.old_position, Vec3::ZERO);
        assert_eq!(tf.velocity, Vec3::ZERO);
        assert_eq!(tf.acceleration, Vec3::ZERO);
        assert!(tf.rotation.is_identity());
        assert_eq!(Transform::default(), tf);
    }

    #[test]
    fn test_from_position() {
        let pos = Vec3::from_ints(1, 2, 3);
        let tf = Transform::from_position(pos);
        assert_eq!(tf.position, pos);
        assert_eq!(tf.old_position, pos);
        assert_eq!(tf.velocity, Vec3::ZERO);
    }

    #[test]
    fn test_displacement() {
        let mut tf = Transform::from_position(Vec3::ZERO);
        tf.position = Vec3::new(
            Scalar::from_num(0.5),
            Scalar::from_num(0),
            Scalar::from_num(0),
        );
        assert_eq!(tf.displacement().x, Scalar::from_num(0.5));
    }
}
