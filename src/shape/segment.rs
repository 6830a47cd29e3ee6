//! Definition of the segment shape.

use crate::math::{Point, Real, UnitVector, Vector, DEFAULT_EPSILON};
use na::{self, Unit};
use std::mem;

/// A segment shape.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Segment {
    /// The segment first point.
    pub a: Point<Real>,
    /// The segment second point.
    pub b: Point<Real>,
}

impl Segment {
    /// Creates a new segment from two points.
    #[inline]
    pub fn new(a: Point<Real>, b: Point<Real>) -> Segment {
        Segment { a, b }
    }

    /// The direction of this segment scaled by its length.
    ///
    /// Points from `self.a` toward `self.b`.
    #[inline]
    pub fn scaled_direction(&self) -> Vector<Real> {
        self.b - self.a
    }

    /// The length of this segment.
    #[inline]
    pub fn length(&self) -> Real {
        self.scaled_direction().norm()
    }

    /// Swaps the two vertices of this segment.
    pub fn swap(&mut self) {
        mem::swap(&mut self.a, &mut self.b)
    }

    /// The unit direction of this segment.
    ///
    /// Points from `self.a` toward `self.b`.
    /// Returns `None` is both points are equal.
    pub fn direction(&self) -> Option<UnitVector<Real>> {
        Unit::try_new(self.scaled_direction(), DEFAULT_EPSILON)
    }

    /// The midpoint of this segment.
    #[inline]
    pub fn center(&self) -> Point<Real> {
        na::center(&self.a, &self.b)
    }

    /// The point `a + (b - a) * t`.
    #[inline]
    pub fn point_at(&self, t: Real) -> Point<Real> {
        self.a + self.scaled_direction() * t
    }

    /// Projects `pt` on this segment.
    ///
    /// Returns the closest point and its parameter `t ∈ [0, 1]` along the segment.
    pub fn project_point(&self, pt: &Point<Real>) -> (Point<Real>, Real) {
        let ab = self.scaled_direction();
        let sqnab = ab.norm_squared();

        if sqnab <= DEFAULT_EPSILON {
            return (self.a, 0.0);
        }

        let t = ((pt - self.a).dot(&ab) / sqnab).clamp(0.0, 1.0);
        (self.a + ab * t, t)
    }

    /// The distance between `pt` and its projection on this segment.
    #[inline]
    pub fn distance_to_point(&self, pt: &Point<Real>) -> Real {
        na::distance(&self.project_point(pt).0, pt)
    }

    /// Computes the pair of closest points between `self` and `other`.
    ///
    /// The first returned point lies on `self`, the second on `other`.
    pub fn closest_points(&self, other: &Segment) -> (Point<Real>, Point<Real>) {
        let d1 = self.scaled_direction();
        let d2 = other.scaled_direction();
        let r = self.a - other.a;
        let a = d1.norm_squared();
        let e = d2.norm_squared();
        let f = d2.dot(&r);

        let s: Real;
        let t: Real;

        if a <= DEFAULT_EPSILON && e <= DEFAULT_EPSILON {
            return (self.a, other.a);
        }

        if a <= DEFAULT_EPSILON {
            s = 0.0;
            t = (f / e).clamp(0.0, 1.0);
        } else {
            let c = d1.dot(&r);

            if e <= DEFAULT_EPSILON {
                t = 0.0;
                s = (-c / a).clamp(0.0, 1.0);
            } else {
                let b = d1.dot(&d2);
                let denom = a * e - b * b;

                // Parallel segments: pick an arbitrary `s`, `t` gets fixed below.
                let s0 = if denom > DEFAULT_EPSILON {
                    ((b * f - c * e) / denom).clamp(0.0, 1.0)
                } else {
                    0.0
                };
                let t0 = (b * s0 + f) / e;

                if t0 < 0.0 {
                    t = 0.0;
                    s = (-c / a).clamp(0.0, 1.0);
                } else if t0 > 1.0 {
                    t = 1.0;
                    s = ((b - c) / a).clamp(0.0, 1.0);
                } else {
                    t = t0;
                    s = s0;
                }
            }
        }

        (self.point_at(s), other.point_at(t))
    }

    /// The distance between the closest points of `self` and `other`.
    #[inline]
    pub fn distance_to_segment(&self, other: &Segment) -> Real {
        let (p1, p2) = self.closest_points(other);
        na::distance(&p1, &p2)
    }
}

impl From<[Point<Real>; 2]> for Segment {
    fn from(arr: [Point<Real>; 2]) -> Self {
        Segment::new(arr[0], arr[1])
    }
}
