//! Definition of the plane shape.

use crate::math::{Point, Real, UnitVector, Vector, Vector4, ZERO_TOLERANCE};
use na::Unit;

/// The position of a shape relative to a plane.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PlaneIntersectionType {
    /// The shape lies entirely in the half-space the plane normal points to.
    Front,
    /// The shape lies entirely in the half-space opposite to the plane normal.
    Back,
    /// The shape touches or crosses the plane.
    Intersects,
}

/// An infinite plane satisfying `normal · p + d = 0`.
///
/// The positive half-space (`normal · p + d > 0`) is the "front" of the plane.
#[derive(PartialEq, Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Plane {
    /// The plane unit normal, pointing toward its front half-space.
    pub normal: UnitVector<Real>,
    /// The plane offset: the signed distance from the plane to the origin, along `-normal`.
    pub d: Real,
}

impl Plane {
    /// Creates a plane from its unit normal and offset.
    #[inline]
    pub fn new(normal: UnitVector<Real>, d: Real) -> Self {
        Self { normal, d }
    }

    /// Creates the plane with the given normal and passing through `point`.
    #[inline]
    pub fn from_point_normal(point: &Point<Real>, normal: UnitVector<Real>) -> Self {
        Self::new(normal, -normal.dot(&point.coords))
    }

    /// Creates a plane from the (not necessarily normalized) coefficients `(a, b, c, d)`
    /// of the equation `a·x + b·y + c·z + d = 0`.
    ///
    /// If `(a, b, c)` is too small to be normalized, the result is the plane with the
    /// `+Y` normal and zero offset.
    pub fn from_coefficients(coeffs: &Vector4<Real>) -> Self {
        let abc = coeffs.xyz();
        let norm = abc.norm();

        if norm < ZERO_TOLERANCE {
            log::debug!("Degenerate plane coefficients {coeffs:?}, using the +Y plane instead.");
            return Self::new(Vector::y_axis(), 0.0);
        }

        Self::new(Unit::new_unchecked(abc / norm), coeffs.w / norm)
    }

    /// The signed distance from `point` to this plane, positive on its front side.
    #[inline]
    pub fn signed_distance(&self, point: &Point<Real>) -> Real {
        self.normal.dot(&point.coords) + self.d
    }

    /// Classifies `point` against this plane.
    ///
    /// Points closer than [`ZERO_TOLERANCE`] to the plane are reported as
    /// [`PlaneIntersectionType::Intersects`].
    #[inline]
    pub fn classify_point(&self, point: &Point<Real>) -> PlaneIntersectionType {
        let dist = self.signed_distance(point);

        if dist > ZERO_TOLERANCE {
            PlaneIntersectionType::Front
        } else if dist < -ZERO_TOLERANCE {
            PlaneIntersectionType::Back
        } else {
            PlaneIntersectionType::Intersects
        }
    }

    /// Orthogonal projection of `point` on this plane.
    #[inline]
    pub fn project_point(&self, point: &Point<Real>) -> Point<Real> {
        *point - *self.normal * self.signed_distance(point)
    }

    /// The point shared by three planes.
    ///
    /// Returns `None` if at least two of the planes are parallel.
    pub fn intersect_three(p1: &Plane, p2: &Plane, p3: &Plane) -> Option<Point<Real>> {
        let n23 = p2.normal.cross(&p3.normal);
        let denom = p1.normal.dot(&n23);

        if denom.abs() < ZERO_TOLERANCE {
            return None;
        }

        let n31 = p3.normal.cross(&p1.normal);
        let n12 = p1.normal.cross(&p2.normal);

        Some(Point::from(
            -(n23 * p1.d + n31 * p2.d + n12 * p3.d) / denom,
        ))
    }
}
