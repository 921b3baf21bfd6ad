//! Quaternion type for orientations

use crate::{Scalar, Vec3};
use fixed_sqrt::FixedSqrt;
use serde::{Deserialize, Serialize};

const ZERO: Scalar = Scalar::from_bits(0);
const ONE: Scalar = Scalar::from_bits(1i64 << 32);
const TWO: Scalar = Scalar::from_bits(2i64 << 32);

/// Unit quaternion (x, y, z, w) with fixed-point components
///
/// There are no trig-based constructors: deterministic simulations build
/// quaternions from explicit components (half-angle sines and cosines for
/// the common axis rotations are expressible through the fixed-point
/// square root, e.g. sin 45° = sqrt(1/2)).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quat {
    pub x: Scalar,
    pub y: Scalar,
    pub z: Scalar,
    pub w: Scalar,
}

impl Quat {
    /// The identity rotation
    pub const IDENTITY: Self = Self { x: ZERO, y: ZERO, z: ZERO, w: ONE };

    /// Create a new quaternion from components
    #[inline]
    pub const fn new(x: Scalar, y: Scalar, z: Scalar, w: Scalar) -> Self {
        Self { x, y, z, w }
    }

    /// Exact comparison against the identity rotation
    ///
    /// Used as the fast-path check that skips rotating collider offsets.
    #[inline]
    pub fn is_identity(self) -> bool {
        self == Self::IDENTITY
    }

    /// The conjugate (inverse for unit quaternions)
    #[inline]
    pub fn conjugate(self) -> Self {
        Self::new(-self.x, -self.y, -self.z, self.w)
    }

    /// Squared magnitude over all four components
    #[inline]
    pub fn length_squared(self) -> Scalar {
        self.x * self.x + self.y * self.y + self.z * self.z + self.w * self.w
    }

    /// Magnitude
    #[inline]
    pub fn length(self) -> Scalar {
        self.length_squared().sqrt()
    }

    /// Normalize to unit length, returning the identity for a zero quaternion
    pub fn normalized(self) -> Self {
        let len = self.length();
        if len > ZERO {
            Self::new(self.x / len, self.y / len, self.z / len, self.w / len)
        } else {
            Self::IDENTITY
        }
    }

    /// Rotate a vector by this quaternion
    ///
    /// Uses the expanded sandwich product: v' = v + 2w(u × v) + 2u × (u × v)
    /// where u is the vector part. Assumes a unit quaternion.
    pub fn rotate(self, v: Vec3) -> Vec3 {
        let u = Vec3::new(self.x, self.y, self.z);
        let t = u.cross(v) * TWO;
        v + t * self.w + u.cross(t)
    }
}

impl Default for Quat {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl std::ops::Mul for Quat {
    type Output = Self;

    /// Hamilton product; `a * b` applies `b` first, then `a`
    fn mul(self, rhs: Self) -> Self {
        Self::new(
            self.w * rhs.x + self.x * rhs.w + self.y * rhs.z - self.z * rhs.y,
            self.w * rhs.y - self.x * rhs.z + self.y * rhs.w + self.z * rhs.x,
            self.w * rhs.z + self.x * rhs.y - self.y * rhs.x + self.z * rhs.w,
            self.w * rhs.w - self.x * rhs.x - self.y * rhs.y - self.z * rhs.z,
        )
    }
}
