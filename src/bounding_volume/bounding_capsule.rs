//! Bounding capsule.

use crate::bounding_volume::{
    BoundingType, BoundingVolume, ContainmentType, CornerCache, OrientedBoundingBox, PointBuffer,
    TypedBoundingVolume,
};
use crate::math::{Point, Real, Rotation, UnitVector, Vector, PI};
use crate::query::details::cast_ray_capsule;
use crate::query::Ray;
use crate::shape::{Plane, PlaneIntersectionType, Segment, Triangle};
use crate::utils::{self, within_tolerance};
use na::{ComplexField, Unit};

/// A capsule bounding volume: the set of points within `radius` of a segment.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, PartialEq, Clone)]
pub struct BoundingCapsule {
    segment: Segment,
    radius: Real,
    #[cfg_attr(feature = "serde", serde(skip))]
    corners: CornerCache,
}

impl Default for BoundingCapsule {
    /// A zero capsule at the origin.
    fn default() -> Self {
        Self::new(Point::origin(), Point::origin(), 0.0)
    }
}

impl BoundingCapsule {
    /// Creates a new capsule around the segment `[a, b]`.
    ///
    /// # Panics
    /// If `radius` is negative.
    pub fn new(a: Point<Real>, b: Point<Real>, radius: Real) -> Self {
        assert!(radius >= 0.0, "The bounding capsule radius must be non-negative.");
        Self {
            segment: Segment::new(a, b),
            radius,
            corners: CornerCache::new(),
        }
    }

    /// Fits a capsule to a set of points, aligned with their principal axis.
    ///
    /// The radius is the largest distance from a point to the principal axis, and the
    /// segment is then shortened as much as possible while keeping every point inside
    /// of the end caps. Returns a zero capsule at the origin if `pts` is empty.
    pub fn from_points(pts: &[Point<Real>]) -> Self {
        if pts.is_empty() {
            return Self::default();
        }

        let (center, cov) = utils::center_cov(pts);
        let eigen = cov.symmetric_eigen();
        let imax = eigen.eigenvalues.imax();
        let axis = Unit::try_new(eigen.eigenvectors.column(imax).into_owned(), 0.0)
            .unwrap_or_else(Vector::x_axis);

        let local = |pt: &Point<Real>| {
            let dpt = pt - center;
            let t = dpt.dot(&axis);
            (t, (dpt - *axis * t).norm())
        };

        let radius = pts
            .iter()
            .map(|pt| local(pt).1)
            .fold(0.0, Real::max);

        let (mut tmin, mut tmax) = (Real::MAX, -Real::MAX);

        for pt in pts {
            let (t, dist) = local(pt);
            let cap = ComplexField::sqrt((radius * radius - dist * dist).max(0.0));
            tmin = tmin.min(t + cap);
            tmax = tmax.max(t - cap);
        }

        if tmin > tmax {
            // Every point fits in a single sphere.
            tmin = (tmin + tmax) * 0.5;
            tmax = tmin;
        }

        let segment = Segment::new(center + *axis * tmin, center + *axis * tmax);
        // The end caps are placed with rounding, so the radius is settled on the segment.
        let radius = pts
            .iter()
            .map(|pt| segment.distance_to_point(pt))
            .fold(radius, Real::max);

        Self::new(segment.a, segment.b, radius)
    }

    /// The segment at the core of this capsule.
    #[inline]
    pub fn segment(&self) -> &Segment {
        &self.segment
    }

    /// The radius of this capsule.
    #[inline]
    pub fn radius(&self) -> Real {
        self.radius
    }

    /// Half the length of the segment of this capsule.
    #[inline]
    pub fn half_length(&self) -> Real {
        self.segment.length() * 0.5
    }

    /// Sets the segment at the core of this capsule.
    pub fn set_segment(&mut self, a: Point<Real>, b: Point<Real>) {
        self.segment = Segment::new(a, b);
        self.corners.invalidate();
    }

    /// Sets the radius of this capsule.
    ///
    /// # Panics
    /// If `radius` is negative.
    pub fn set_radius(&mut self, radius: Real) {
        assert!(radius >= 0.0, "The bounding capsule radius must be non-negative.");
        self.radius = radius;
        self.corners.invalidate();
    }

    /// The direction of the capsule segment, or the `+X` axis if it is degenerate.
    fn axis(&self) -> UnitVector<Real> {
        self.segment.direction().unwrap_or_else(Vector::x_axis)
    }

    /// The box aligned with the segment of this capsule and enclosing it.
    pub fn to_obb(&self) -> OrientedBoundingBox {
        let axis = self.axis();
        let [b1, b2] = utils::orthonormal_complement(&axis);
        OrientedBoundingBox::from_axes(
            self.segment.center(),
            [axis, b1, b2],
            Vector::new(self.half_length() + self.radius, self.radius, self.radius),
        )
    }

    fn contains_exactly(&self, point: &Point<Real>) -> bool {
        self.segment.distance_to_point(point) <= self.radius
    }

    fn contains_ball(&self, center: &Point<Real>, radius: Real) -> bool {
        within_tolerance(self.segment.distance_to_point(center) + radius, self.radius)
    }

    fn distance_to_triangle(&self, triangle: &Triangle) -> Real {
        if triangle.intersects_segment(&self.segment) {
            return 0.0;
        }

        let to_ends = triangle
            .distance_to_point(&self.segment.a)
            .min(triangle.distance_to_point(&self.segment.b));
        triangle
            .edges()
            .iter()
            .map(|edge| edge.distance_to_segment(&self.segment))
            .fold(to_ends, Real::min)
    }
}

impl BoundingVolume for BoundingCapsule {
    #[inline]
    fn bounding_type(&self) -> BoundingType {
        BoundingType::Capsule
    }

    #[inline]
    fn center(&self) -> Point<Real> {
        self.segment.center()
    }

    fn set_center(&mut self, center: Point<Real>) {
        let shift = center - self.segment.center();
        self.segment = Segment::new(self.segment.a + shift, self.segment.b + shift);
        self.corners.invalidate();
    }

    fn volume(&self) -> Real {
        let r2 = self.radius * self.radius;
        PI * r2 * self.segment.length() + 4.0 / 3.0 * PI * r2 * self.radius
    }

    fn corners(&self) -> &[Point<Real>] {
        self.corners.get_or_compute(|| {
            let mut res = [Point::origin(); 8];
            self.to_obb().copy_corners_to(&mut res);
            res
        })
    }

    fn distance_to_point(&self, point: &Point<Real>) -> Real {
        let dist = self.segment.distance_to_point(point);

        if dist <= self.radius {
            0.0
        } else {
            dist - self.radius
        }
    }

    fn contains_point(&self, point: &Point<Real>) -> ContainmentType {
        if self.contains_exactly(point) {
            ContainmentType::Inside
        } else {
            ContainmentType::Outside
        }
    }

    fn contains_segment(&self, segment: &Segment) -> ContainmentType {
        if self.contains_exactly(&segment.a) && self.contains_exactly(&segment.b) {
            ContainmentType::Inside
        } else if within_tolerance(self.segment.distance_to_segment(segment), self.radius) {
            ContainmentType::Intersects
        } else {
            ContainmentType::Outside
        }
    }

    fn contains_triangle(&self, triangle: &Triangle) -> ContainmentType {
        if triangle.vertices().iter().all(|v| self.contains_exactly(v)) {
            ContainmentType::Inside
        } else if within_tolerance(self.distance_to_triangle(triangle), self.radius) {
            ContainmentType::Intersects
        } else {
            ContainmentType::Outside
        }
    }

    fn contains_volume(&self, other: &dyn BoundingVolume) -> ContainmentType {
        match other.as_typed_volume() {
            TypedBoundingVolume::Sphere(s) => {
                if self.contains_ball(&s.center(), s.radius()) {
                    ContainmentType::Inside
                } else if self.intersects_volume(other) {
                    ContainmentType::Intersects
                } else {
                    ContainmentType::Outside
                }
            }
            TypedBoundingVolume::Capsule(capsule) => {
                let segment = capsule.segment();

                if self.contains_ball(&segment.a, capsule.radius())
                    && self.contains_ball(&segment.b, capsule.radius())
                {
                    ContainmentType::Inside
                } else if self.intersects_volume(other) {
                    ContainmentType::Intersects
                } else {
                    ContainmentType::Outside
                }
            }
            TypedBoundingVolume::Aabb(_)
            | TypedBoundingVolume::Obb(_)
            | TypedBoundingVolume::Frustum(_) => {
                if other.corners().iter().all(|c| self.contains_ball(c, 0.0)) {
                    ContainmentType::Inside
                } else if other.intersects_volume(self) {
                    ContainmentType::Intersects
                } else {
                    ContainmentType::Outside
                }
            }
            TypedBoundingVolume::Custom(_) => self.contains_general(other),
        }
    }

    fn intersects_volume(&self, other: &dyn BoundingVolume) -> bool {
        match other.as_typed_volume() {
            TypedBoundingVolume::Sphere(s) => within_tolerance(
                self.segment.distance_to_point(&s.center()),
                self.radius + s.radius(),
            ),
            TypedBoundingVolume::Capsule(capsule) => within_tolerance(
                self.segment.distance_to_segment(capsule.segment()),
                self.radius + capsule.radius(),
            ),
            // These have a dedicated capsule test.
            TypedBoundingVolume::Aabb(_)
            | TypedBoundingVolume::Obb(_)
            | TypedBoundingVolume::Frustum(_) => other.intersects_volume(self),
            TypedBoundingVolume::Custom(_) => self.intersects_general(other),
        }
    }

    fn intersects_plane(&self, plane: &Plane) -> PlaneIntersectionType {
        let da = plane.signed_distance(&self.segment.a);
        let db = plane.signed_distance(&self.segment.b);

        if da.min(db) > self.radius {
            PlaneIntersectionType::Front
        } else if da.max(db) < -self.radius {
            PlaneIntersectionType::Back
        } else {
            PlaneIntersectionType::Intersects
        }
    }

    fn merge(&mut self, other: &dyn BoundingVolume) {
        let mut pts = Vec::with_capacity(self.corner_count() + other.corner_count());
        pts.extend_from_slice(self.corners());
        pts.extend_from_slice(other.corners());
        *self = Self::from_points(&pts);
    }

    fn transform(
        &mut self,
        scale: &Vector<Real>,
        rotation: &Rotation<Real>,
        translation: &Vector<Real>,
    ) {
        let transform_point =
            |pt: &Point<Real>| rotation * Point::from(pt.coords.component_mul(scale)) + translation;
        self.segment = Segment::new(
            transform_point(&self.segment.a),
            transform_point(&self.segment.b),
        );
        self.radius *= scale.abs().max();
        self.corners.invalidate();
    }

    fn compute_from_points(&mut self, points: &PointBuffer) {
        *self = match points.as_slice() {
            Some(slice) => Self::from_points(slice),
            None => Self::from_points(&points.to_vec()),
        };
    }

    fn clone_dyn(&self) -> Box<dyn BoundingVolume> {
        Box::new(self.clone())
    }

    #[inline]
    fn cast_ray(&self, ray: &Ray, max_toi: Real) -> Option<Real> {
        cast_ray_capsule(&self.segment, self.radius, ray, max_toi)
    }
}
