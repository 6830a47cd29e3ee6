//! Oriented Bounding Box.

use crate::bounding_volume::{
    Aabb, BoundingType, BoundingVolume, ContainmentType, CornerCache, PointBuffer,
    TypedBoundingVolume,
};
use crate::math::{Matrix, Point, Real, Rotation, UnitVector, Vector, DIM};
use crate::query::details::{
    cast_local_ray_box, distance_segment_convex, intersection_test_box_box,
    intersection_test_box_frustum, intersection_test_box_segment, intersection_test_box_triangle,
    intersection_test_sphere_box,
};
use crate::query::Ray;
use crate::shape::{Plane, PlaneIntersectionType, Segment, Triangle};
use crate::utils::{self, rounding_slack, within_tolerance, SEARCH_TOLERANCE};
use na::Unit;

/// An Oriented Bounding Box.
///
/// The box is centered at `center`, its faces are orthogonal to the three orthonormal
/// `axes` (the columns of a rotation matrix), and it extends by `half_extents[i]` on
/// both sides of its center along the `i`-th axis.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, PartialEq, Clone)]
pub struct OrientedBoundingBox {
    center: Point<Real>,
    axes: Matrix<Real>,
    half_extents: Vector<Real>,
    #[cfg_attr(feature = "serde", serde(skip))]
    corners: CornerCache,
}

impl Default for OrientedBoundingBox {
    /// A zero-sized box at the origin, aligned with the coordinate axes.
    fn default() -> Self {
        Self::from_matrix(Point::origin(), Matrix::identity(), Vector::zeros())
    }
}

impl OrientedBoundingBox {
    /// Creates a box with the given center, orientation, and half-extents.
    pub fn new(
        center: Point<Real>,
        rotation: &Rotation<Real>,
        half_extents: Vector<Real>,
    ) -> Self {
        Self::from_matrix(center, rotation.to_rotation_matrix().into_inner(), half_extents)
    }

    /// Creates a box from its center, its three axes, and its half-extents.
    ///
    /// The axes must be orthonormal.
    pub fn from_axes(
        center: Point<Real>,
        axes: [UnitVector<Real>; 3],
        half_extents: Vector<Real>,
    ) -> Self {
        Self::from_matrix(
            center,
            Matrix::from_columns(&axes.map(|axis| axis.into_inner())),
            half_extents,
        )
    }

    fn from_matrix(center: Point<Real>, axes: Matrix<Real>, half_extents: Vector<Real>) -> Self {
        Self {
            center,
            axes,
            half_extents: half_extents.abs(),
            corners: CornerCache::new(),
        }
    }

    /// The oriented box with the same extents as an axis-aligned box.
    pub fn from_aabb(aabb: &Aabb) -> Self {
        Self::from_matrix(aabb.center(), Matrix::identity(), aabb.half_extents())
    }

    /// Fits a box to a set of points, aligned with their principal axes.
    ///
    /// Every point of `pts` is inside of the returned box. Returns a zero-sized box at
    /// the origin if `pts` is empty.
    pub fn from_points(pts: &[Point<Real>]) -> Self {
        if pts.is_empty() {
            return Self::default();
        }

        let (center, axes, half_extents) = utils::gauss_points_fit(pts);
        let mut res = Self::from_matrix(center, axes, half_extents);

        // The fit projects the points differently from `to_local_point`.
        for pt in pts {
            let local = res.to_local_point(pt);
            res.half_extents = res.half_extents.sup(&local.coords.abs());
        }

        res
    }

    /// Creates the box enclosing another bounding volume.
    pub fn from_volume(volume: &dyn BoundingVolume) -> Self {
        let mut res = Self::default();
        res.set_from_volume(volume);
        res
    }

    /// The axes of this box, as the columns of a rotation matrix.
    #[inline]
    pub fn axes(&self) -> &Matrix<Real> {
        &self.axes
    }

    /// The `i`-th axis of this box.
    #[inline]
    pub fn axis(&self, i: usize) -> UnitVector<Real> {
        Unit::new_unchecked(self.axes.column(i).into_owned())
    }

    /// The axes of this box, as an array.
    #[inline]
    pub fn axis_vectors(&self) -> [Vector<Real>; 3] {
        [
            self.axes.column(0).into_owned(),
            self.axes.column(1).into_owned(),
            self.axes.column(2).into_owned(),
        ]
    }

    /// The half-extents of this box along each of its axes.
    #[inline]
    pub fn half_extents(&self) -> &Vector<Real> {
        &self.half_extents
    }

    /// The extents of this box along each of its axes.
    #[inline]
    pub fn extents(&self) -> Vector<Real> {
        self.half_extents * 2.0
    }

    /// Sets the center, axes and half-extents of this box.
    pub fn set(
        &mut self,
        center: Point<Real>,
        rotation: &Rotation<Real>,
        half_extents: Vector<Real>,
    ) {
        *self = Self::new(center, rotation, half_extents);
    }

    /// Sets the orientation of this box.
    pub fn set_rotation(&mut self, rotation: &Rotation<Real>) {
        self.axes = rotation.to_rotation_matrix().into_inner();
        self.corners.invalidate();
    }

    /// Sets the half-extents of this box.
    pub fn set_half_extents(&mut self, half_extents: Vector<Real>) {
        self.half_extents = half_extents.abs();
        self.corners.invalidate();
    }

    /// Replaces this box with a box enclosing `volume`.
    ///
    /// Spheres and AABBs give the enclosing axis-aligned box. Capsules give the box
    /// aligned with their segment. Frustums and unknown volumes are fitted from their
    /// corners.
    pub fn set_from_volume(&mut self, volume: &dyn BoundingVolume) {
        *self = match volume.as_typed_volume() {
            TypedBoundingVolume::Sphere(s) => {
                Self::from_matrix(s.center(), Matrix::identity(), Vector::repeat(s.radius()))
            }
            TypedBoundingVolume::Aabb(aabb) => Self::from_aabb(aabb),
            TypedBoundingVolume::Obb(obb) => obb.clone(),
            TypedBoundingVolume::Capsule(capsule) => capsule.to_obb(),
            TypedBoundingVolume::Frustum(_) | TypedBoundingVolume::Custom(_) => {
                Self::from_points(volume.corners())
            }
        };
    }

    /// Expresses a point in the local frame of this box.
    #[inline]
    pub fn to_local_point(&self, point: &Point<Real>) -> Point<Real> {
        Point::from(self.axes.tr_mul(&(point - self.center)))
    }

    /// Expresses a vector in the local frame of this box.
    #[inline]
    pub fn to_local_vector(&self, vector: &Vector<Real>) -> Vector<Real> {
        self.axes.tr_mul(vector)
    }

    /// The point of this box closest to `point`.
    ///
    /// Returns `point` itself if it is inside of the box.
    pub fn closest_point(&self, point: &Point<Real>) -> Point<Real> {
        let local = self.to_local_point(point);
        let clamped = local
            .coords
            .zip_map(&self.half_extents, |x, e| x.clamp(-e, e));
        self.center + self.axes * clamped
    }

    /// Does the sphere of center `center` and radius `radius` lie inside of this box?
    fn contains_sphere(&self, center: &Point<Real>, radius: Real) -> bool {
        let local = self.to_local_point(center);
        (0..DIM).all(|i| within_tolerance(local[i].abs() + radius, self.half_extents[i]))
    }

    /// Are the corners of another volume inside of this box, up to rounding?
    fn encloses_corners(&self, corners: &[Point<Real>]) -> bool {
        let magnitude = self.center.coords.amax() + self.half_extents.amax();
        corners.iter().all(|pt| {
            let local = self.to_local_point(pt);
            let slack = rounding_slack(magnitude.max(pt.coords.amax()));
            (0..DIM).all(|i| local[i].abs() <= self.half_extents[i] + slack)
        })
    }

    /// Answers `Inside` if `inside`, and `Intersects` if `intersects` holds.
    fn containment_of_polytope(
        &self,
        inside: bool,
        intersects: impl FnOnce() -> bool,
    ) -> ContainmentType {
        if inside {
            ContainmentType::Inside
        } else if intersects() {
            ContainmentType::Intersects
        } else {
            ContainmentType::Outside
        }
    }

    fn distance_to_segment(&self, segment: &Segment) -> Real {
        if intersection_test_box_segment(self, segment) {
            return 0.0;
        }

        distance_segment_convex(segment, SEARCH_TOLERANCE, |pt| {
            self.distance_to_point(pt)
        })
    }

    fn compute_corners(&self) -> [Point<Real>; 8] {
        let [ax, ay, az] = self.axis_vectors();
        let ex = ax * self.half_extents.x;
        let ey = ay * self.half_extents.y;
        let ez = az * self.half_extents.z;
        let c = self.center;

        [
            c - ex - ey - ez,
            c + ex - ey - ez,
            c + ex + ey - ez,
            c - ex + ey - ez,
            c - ex - ey + ez,
            c + ex - ey + ez,
            c + ex + ey + ez,
            c - ex + ey + ez,
        ]
    }
}

impl BoundingVolume for OrientedBoundingBox {
    #[inline]
    fn bounding_type(&self) -> BoundingType {
        BoundingType::OrientedBoundingBox
    }

    #[inline]
    fn center(&self) -> Point<Real> {
        self.center
    }

    fn set_center(&mut self, center: Point<Real>) {
        self.center = center;
        self.corners.invalidate();
    }

    #[inline]
    fn volume(&self) -> Real {
        self.extents().product()
    }

    fn corners(&self) -> &[Point<Real>] {
        self.corners.get_or_compute(|| self.compute_corners())
    }

    fn distance_to_point(&self, point: &Point<Real>) -> Real {
        let local = self.to_local_point(point);
        let excess = local
            .coords
            .zip_map(&self.half_extents, |x, e| (x.abs() - e).max(0.0));
        excess.norm()
    }

    fn contains_point(&self, point: &Point<Real>) -> ContainmentType {
        let local = self.to_local_point(point);

        if (0..DIM).all(|i| local[i].abs() <= self.half_extents[i]) {
            ContainmentType::Inside
        } else {
            ContainmentType::Outside
        }
    }

    fn contains_segment(&self, segment: &Segment) -> ContainmentType {
        let inside = self.contains_points(&[segment.a, segment.b]) == ContainmentType::Inside;
        self.containment_of_polytope(inside, || intersection_test_box_segment(self, segment))
    }

    fn contains_triangle(&self, triangle: &Triangle) -> ContainmentType {
        let inside = self.contains_points(&triangle.vertices()) == ContainmentType::Inside;
        self.containment_of_polytope(inside, || intersection_test_box_triangle(self, triangle))
    }

    fn contains_volume(&self, other: &dyn BoundingVolume) -> ContainmentType {
        match other.as_typed_volume() {
            TypedBoundingVolume::Sphere(s) => {
                if self.contains_sphere(&s.center(), s.radius()) {
                    ContainmentType::Inside
                } else if intersection_test_sphere_box(&s.center(), s.radius(), self) {
                    ContainmentType::Intersects
                } else {
                    ContainmentType::Outside
                }
            }
            TypedBoundingVolume::Aabb(aabb) => self.contains_volume(&aabb.to_obb()),
            TypedBoundingVolume::Obb(obb) => self
                .containment_of_polytope(self.encloses_corners(obb.corners()), || {
                    intersection_test_box_box(self, obb)
                }),
            TypedBoundingVolume::Capsule(capsule) => {
                let segment = capsule.segment();

                if self.contains_sphere(&segment.a, capsule.radius())
                    && self.contains_sphere(&segment.b, capsule.radius())
                {
                    ContainmentType::Inside
                } else if within_tolerance(self.distance_to_segment(segment), capsule.radius()) {
                    ContainmentType::Intersects
                } else {
                    ContainmentType::Outside
                }
            }
            TypedBoundingVolume::Frustum(frustum) => self
                .containment_of_polytope(self.encloses_corners(frustum.corners()), || {
                    intersection_test_box_frustum(self, frustum)
                }),
            TypedBoundingVolume::Custom(_) => self.contains_general(other),
        }
    }

    fn intersects_volume(&self, other: &dyn BoundingVolume) -> bool {
        match other.as_typed_volume() {
            TypedBoundingVolume::Sphere(s) => {
                intersection_test_sphere_box(&s.center(), s.radius(), self)
            }
            TypedBoundingVolume::Aabb(aabb) => intersection_test_box_box(self, &aabb.to_obb()),
            TypedBoundingVolume::Obb(obb) => intersection_test_box_box(self, obb),
            TypedBoundingVolume::Capsule(capsule) => {
                within_tolerance(self.distance_to_segment(capsule.segment()), capsule.radius())
            }
            TypedBoundingVolume::Frustum(frustum) => intersection_test_box_frustum(self, frustum),
            TypedBoundingVolume::Custom(_) => self.intersects_general(other),
        }
    }

    fn intersects_plane(&self, plane: &Plane) -> PlaneIntersectionType {
        let local_normal = self.to_local_vector(&plane.normal);
        let radius = local_normal.abs().dot(&self.half_extents);
        let dist = plane.signed_distance(&self.center);

        if dist > radius {
            PlaneIntersectionType::Front
        } else if dist < -radius {
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
        self.center =
            rotation * Point::from(self.center.coords.component_mul(scale)) + translation;
        self.half_extents = self.half_extents.component_mul(&scale.abs());
        self.axes = rotation.to_rotation_matrix().into_inner() * self.axes;
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

    fn cast_ray(&self, ray: &Ray, max_toi: Real) -> Option<Real> {
        let local_ray = Ray::new(self.to_local_point(&ray.origin), self.to_local_vector(&ray.dir));
        cast_local_ray_box(&self.half_extents, &local_ray, max_toi)
    }
}
