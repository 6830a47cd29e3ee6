//! Definition of the triangle shape.

use crate::math::{Point, Real, UnitVector, Vector, DEFAULT_EPSILON, ZERO_TOLERANCE};
use crate::shape::Segment;
use na::{self, Unit};

/// A triangle shape.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Triangle {
    /// The triangle first point.
    pub a: Point<Real>,
    /// The triangle second point.
    pub b: Point<Real>,
    /// The triangle third point.
    pub c: Point<Real>,
}

impl From<[Point<Real>; 3]> for Triangle {
    fn from(arr: [Point<Real>; 3]) -> Self {
        Triangle::new(arr[0], arr[1], arr[2])
    }
}

impl Triangle {
    /// Creates a triangle from three points.
    #[inline]
    pub fn new(a: Point<Real>, b: Point<Real>, c: Point<Real>) -> Triangle {
        Triangle { a, b, c }
    }

    /// The three vertices of this triangle.
    #[inline]
    pub fn vertices(&self) -> [Point<Real>; 3] {
        [self.a, self.b, self.c]
    }

    /// The three edges of this triangle: `AB`, `BC` and `CA`.
    #[inline]
    pub fn edges(&self) -> [Segment; 3] {
        [
            Segment::new(self.a, self.b),
            Segment::new(self.b, self.c),
            Segment::new(self.c, self.a),
        ]
    }

    /// The normal of this triangle assuming it is oriented ccw.
    ///
    /// The normal points such that it is collinear to `AB × AC` (where `×` denotes the cross
    /// product).
    #[inline]
    pub fn scaled_normal(&self) -> Vector<Real> {
        let ab = self.b - self.a;
        let ac = self.c - self.a;
        ab.cross(&ac)
    }

    /// The unit normal of this triangle, or `None` if it is degenerate.
    #[inline]
    pub fn normal(&self) -> Option<UnitVector<Real>> {
        Unit::try_new(self.scaled_normal(), DEFAULT_EPSILON)
    }

    /// The barycenter of this triangle.
    #[inline]
    pub fn center(&self) -> Point<Real> {
        Point::from((self.a.coords + self.b.coords + self.c.coords) / 3.0)
    }

    /// The point of this triangle closest to `pt`.
    pub fn project_point(&self, pt: &Point<Real>) -> Point<Real> {
        let ab = self.b - self.a;
        let ac = self.c - self.a;
        let ap = pt - self.a;

        let d1 = ab.dot(&ap);
        let d2 = ac.dot(&ap);
        if d1 <= 0.0 && d2 <= 0.0 {
            return self.a;
        }

        let bp = pt - self.b;
        let d3 = ab.dot(&bp);
        let d4 = ac.dot(&bp);
        if d3 >= 0.0 && d4 <= d3 {
            return self.b;
        }

        let vc = d1 * d4 - d3 * d2;
        if vc <= 0.0 && d1 >= 0.0 && d3 <= 0.0 {
            let v = d1 / (d1 - d3);
            return self.a + ab * v;
        }

        let cp = pt - self.c;
        let d5 = ab.dot(&cp);
        let d6 = ac.dot(&cp);
        if d6 >= 0.0 && d5 <= d6 {
            return self.c;
        }

        let vb = d5 * d2 - d1 * d6;
        if vb <= 0.0 && d2 >= 0.0 && d6 <= 0.0 {
            let w = d2 / (d2 - d6);
            return self.a + ac * w;
        }

        let va = d3 * d6 - d5 * d4;
        if va <= 0.0 && (d4 - d3) >= 0.0 && (d5 - d6) >= 0.0 {
            let w = (d4 - d3) / ((d4 - d3) + (d5 - d6));
            return self.b + (self.c - self.b) * w;
        }

        let sum = va + vb + vc;

        if sum.abs() <= DEFAULT_EPSILON {
            // Flat triangle: the closest point lies on one of its edges.
            return self.closest_edge_point(pt);
        }

        let denom = 1.0 / sum;
        let v = vb * denom;
        let w = vc * denom;
        self.a + ab * v + ac * w
    }

    fn closest_edge_point(&self, pt: &Point<Real>) -> Point<Real> {
        let mut best = self.a;
        let mut best_dist = Real::MAX;

        for edge in self.edges() {
            let proj = edge.project_point(pt).0;
            let dist = na::distance_squared(&proj, pt);

            if dist < best_dist {
                best_dist = dist;
                best = proj;
            }
        }

        best
    }

    /// The distance between `pt` and the closest point of this triangle.
    #[inline]
    pub fn distance_to_point(&self, pt: &Point<Real>) -> Real {
        na::distance(&self.project_point(pt), pt)
    }

    /// Tests if `segment` touches this triangle.
    pub fn intersects_segment(&self, segment: &Segment) -> bool {
        let e1 = self.b - self.a;
        let e2 = self.c - self.a;
        let dir = segment.scaled_direction();
        let h = dir.cross(&e2);
        let det = e1.dot(&h);

        if det.abs() < DEFAULT_EPSILON {
            return self.intersects_coplanar_segment(segment);
        }

        let inv_det = 1.0 / det;
        let s = segment.a - self.a;
        let u = inv_det * s.dot(&h);
        if u < 0.0 || u > 1.0 {
            return false;
        }

        let q = s.cross(&e1);
        let v = inv_det * dir.dot(&q);
        if v < 0.0 || u + v > 1.0 {
            return false;
        }

        let t = inv_det * e2.dot(&q);
        t >= 0.0 && t <= 1.0
    }

    // Handles segments parallel to the triangle plane, and flat triangles.
    fn intersects_coplanar_segment(&self, segment: &Segment) -> bool {
        if let Some(normal) = self.normal() {
            if normal.dot(&(segment.a - self.a)).abs() > ZERO_TOLERANCE {
                return false;
            }
        }

        self.distance_to_point(&segment.a) <= ZERO_TOLERANCE
            || self.distance_to_point(&segment.b) <= ZERO_TOLERANCE
            || self
                .edges()
                .iter()
                .any(|edge| edge.distance_to_segment(segment) <= ZERO_TOLERANCE)
    }
}
