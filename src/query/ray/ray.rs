//! Structure needed to cast rays.

use crate::math::{Point, Real, Rotation, Vector};

/// A ray that can be cast against bounding volumes.
///
/// The direction does not need to be normalized. When it is, times of impact are
/// actual distances along the ray.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Ray {
    /// Starting point of the ray.
    pub origin: Point<Real>,
    /// Direction of the ray.
    pub dir: Vector<Real>,
}

impl Ray {
    /// Creates a new ray starting from `origin` and with the direction `dir`.
    pub fn new(origin: Point<Real>, dir: Vector<Real>) -> Ray {
        Ray { origin, dir }
    }

    /// Translates this ray by the given vector. Its direction is left unchanged.
    #[inline]
    pub fn translate_by(&self, v: Vector<Real>) -> Self {
        Self::new(self.origin + v, self.dir)
    }

    /// Expresses this ray in the frame rotated by `rotation` around `center`.
    ///
    /// This is the inverse of the transform that maps the local frame to the world.
    #[inline]
    pub fn inverse_transform_by(&self, center: &Point<Real>, rotation: &Rotation<Real>) -> Self {
        Self::new(
            Point::from(rotation.inverse_transform_vector(&(self.origin - center))),
            rotation.inverse_transform_vector(&self.dir),
        )
    }

    /// Computes the point at the given parameter on this ray.
    ///
    /// This is computed as `self.origin + self.dir * t`.
    #[inline]
    pub fn point_at(&self, t: Real) -> Point<Real> {
        self.origin + self.dir * t
    }
}
