//! View frustum.

use crate::bounding_volume::{
    BoundingType, BoundingVolume, ContainmentType, CornerCache, PointBuffer, TypedBoundingVolume,
};
use crate::math::{HomogeneousMatrix, Point, Real, Rotation, Vector, ZERO_TOLERANCE};
use crate::query::details::{
    cast_ray_convex_planes, distance_segment_convex, intersection_test_box_frustum,
    intersection_test_frustum_frustum, intersection_test_frustum_segment,
    intersection_test_frustum_triangle,
};
use crate::query::Ray;
use crate::shape::{Plane, PlaneIntersectionType, Segment, Triangle};
use crate::utils::{self, within_tolerance, SEARCH_TOLERANCE};
use na::ComplexField;
use num_derive::FromPrimitive;
use std::sync::OnceLock;

/// The six planes bounding a frustum, in storage order.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, FromPrimitive)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum FrustumPlane {
    /// The left plane.
    Left = 0,
    /// The right plane.
    Right = 1,
    /// The top plane.
    Top = 2,
    /// The bottom plane.
    Bottom = 3,
    /// The near plane.
    Near = 4,
    /// The far plane.
    Far = 5,
}

impl FrustumPlane {
    /// Every frustum plane, in storage order.
    pub const ALL: [FrustumPlane; 6] = [
        FrustumPlane::Left,
        FrustumPlane::Right,
        FrustumPlane::Top,
        FrustumPlane::Bottom,
        FrustumPlane::Near,
        FrustumPlane::Far,
    ];
}

/// A right-handed perspective projection matrix mapping depth to `[0, 1]`.
///
/// The camera looks toward `-Z`, `fovy` is the vertical field of view in radians, and
/// `aspect` is the width divided by the height of the viewport.
#[rustfmt::skip]
pub fn perspective_rh_zo(aspect: Real, fovy: Real, znear: Real, zfar: Real) -> HomogeneousMatrix<Real> {
    let f = 1.0 / ComplexField::tan(fovy * 0.5);
    let range = znear - zfar;

    HomogeneousMatrix::new(
        f / aspect, 0.0, 0.0, 0.0,
        0.0, f, 0.0, 0.0,
        0.0, 0.0, zfar / range, znear * zfar / range,
        0.0, 0.0, -1.0, 0.0,
    )
}

/// A right-handed orthographic projection matrix mapping depth to `[0, 1]`.
///
/// The camera looks toward `-Z`.
#[rustfmt::skip]
pub fn orthographic_rh_zo(
    left: Real,
    right: Real,
    bottom: Real,
    top: Real,
    znear: Real,
    zfar: Real,
) -> HomogeneousMatrix<Real> {
    let width = right - left;
    let height = top - bottom;
    let depth = zfar - znear;

    HomogeneousMatrix::new(
        2.0 / width, 0.0, 0.0, -(right + left) / width,
        0.0, 2.0 / height, 0.0, -(top + bottom) / height,
        0.0, 0.0, -1.0 / depth, -znear / depth,
        0.0, 0.0, 0.0, 1.0,
    )
}

/// The convex region seen by a camera, bounded by six planes.
///
/// The planes are extracted from a view-projection matrix using the column-vector
/// convention (`clip = view_projection * point`) and a `[0, 1]` clip-space depth
/// range. Every plane normal points toward the inside of the frustum.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone)]
pub struct BoundingFrustum {
    view_projection: HomogeneousMatrix<Real>,
    planes: [Plane; 6],
    #[cfg_attr(feature = "serde", serde(skip))]
    corners: CornerCache,
    #[cfg_attr(feature = "serde", serde(skip))]
    center: OnceLock<Point<Real>>,
}

impl PartialEq for BoundingFrustum {
    fn eq(&self, other: &Self) -> bool {
        self.view_projection == other.view_projection
    }
}

impl Default for BoundingFrustum {
    /// The frustum of the identity view-projection.
    fn default() -> Self {
        Self::new(HomogeneousMatrix::identity())
    }
}

impl BoundingFrustum {
    /// Corner vertex indices of each of the 12 frustum edges.
    pub const EDGES_VERTEX_IDS: [(usize, usize); 12] = [
        (0, 1),
        (1, 2),
        (2, 3),
        (3, 0),
        (4, 5),
        (5, 6),
        (6, 7),
        (7, 4),
        (0, 7),
        (1, 6),
        (2, 5),
        (3, 4),
    ];

    /// The three planes meeting at each corner.
    const CORNER_PLANES: [[FrustumPlane; 3]; 8] = [
        [FrustumPlane::Near, FrustumPlane::Bottom, FrustumPlane::Left],
        [FrustumPlane::Near, FrustumPlane::Top, FrustumPlane::Left],
        [FrustumPlane::Near, FrustumPlane::Top, FrustumPlane::Right],
        [FrustumPlane::Near, FrustumPlane::Bottom, FrustumPlane::Right],
        [FrustumPlane::Far, FrustumPlane::Bottom, FrustumPlane::Right],
        [FrustumPlane::Far, FrustumPlane::Top, FrustumPlane::Right],
        [FrustumPlane::Far, FrustumPlane::Top, FrustumPlane::Left],
        [FrustumPlane::Far, FrustumPlane::Bottom, FrustumPlane::Left],
    ];

    /// Creates the frustum of a view-projection matrix.
    pub fn new(view_projection: HomogeneousMatrix<Real>) -> Self {
        Self {
            view_projection,
            planes: Self::extract_planes(&view_projection),
            corners: CornerCache::new(),
            center: OnceLock::new(),
        }
    }

    fn extract_planes(m: &HomogeneousMatrix<Real>) -> [Plane; 6] {
        let row = |i: usize| m.row(i).transpose();
        let (r0, r1, r2, r3) = (row(0), row(1), row(2), row(3));

        [
            Plane::from_coefficients(&(r3 + r0)),
            Plane::from_coefficients(&(r3 - r0)),
            Plane::from_coefficients(&(r3 - r1)),
            Plane::from_coefficients(&(r3 + r1)),
            Plane::from_coefficients(&r2),
            Plane::from_coefficients(&(r3 - r2)),
        ]
    }

    /// The view-projection matrix this frustum is derived from.
    #[inline]
    pub fn view_projection(&self) -> &HomogeneousMatrix<Real> {
        &self.view_projection
    }

    /// Replaces the view-projection matrix, re-deriving every plane.
    pub fn set_view_projection(&mut self, view_projection: HomogeneousMatrix<Real>) {
        self.view_projection = view_projection;
        self.planes = Self::extract_planes(&view_projection);
        let _ = self.center.take();
        self.corners.invalidate();
    }

    /// The six planes of this frustum, in the order of [`FrustumPlane::ALL`].
    #[inline]
    pub fn planes(&self) -> &[Plane; 6] {
        &self.planes
    }

    /// One plane of this frustum.
    #[inline]
    pub fn plane(&self, plane: FrustumPlane) -> &Plane {
        &self.planes[plane as usize]
    }

    /// The plane with the given index (see [`FrustumPlane`] for the order).
    ///
    /// # Panics
    /// If `index >= 6`.
    pub fn plane_at(&self, index: usize) -> &Plane {
        assert!(
            index < self.planes.len(),
            "Frustum plane index {index} out of bounds: a frustum has 6 planes."
        );
        &self.planes[index]
    }

    /// The near plane.
    #[inline]
    pub fn near(&self) -> &Plane {
        self.plane(FrustumPlane::Near)
    }

    /// The far plane.
    #[inline]
    pub fn far(&self) -> &Plane {
        self.plane(FrustumPlane::Far)
    }

    /// The inward normals of the six planes.
    pub fn face_normals(&self) -> [Vector<Real>; 6] {
        self.planes.map(|plane| plane.normal.into_inner())
    }

    /// The directions of the 12 edges of this frustum, in the order of
    /// [`Self::EDGES_VERTEX_IDS`].
    ///
    /// An arbitrary view-projection (with an oblique near plane, for example) has faces
    /// that are not parallelograms, so every edge is listed.
    pub fn edge_directions(&self) -> [Vector<Real>; 12] {
        let c = self.corners();
        Self::EDGES_VERTEX_IDS.map(|(i, j)| c[j] - c[i])
    }

    /// The 12 edges of this frustum.
    pub fn edges(&self) -> [Segment; 12] {
        let c = self.corners();
        Self::EDGES_VERTEX_IDS.map(|(i, j)| Segment::new(c[i], c[j]))
    }

    fn compute_corners(&self) -> [Point<Real>; 8] {
        Self::CORNER_PLANES.map(|[p1, p2, p3]| {
            Plane::intersect_three(self.plane(p1), self.plane(p2), self.plane(p3))
                .unwrap_or_else(|| {
                    log::debug!(
                        "The {p1:?}, {p2:?} and {p3:?} frustum planes do not meet at a single point."
                    );
                    Point::origin()
                })
        })
    }

    /// Does the sphere lie strictly in front of every plane?
    fn contains_sphere(&self, center: &Point<Real>, radius: Real) -> bool {
        self.planes
            .iter()
            .all(|plane| plane.signed_distance(center) > radius)
    }

    fn containment_of_polytope(
        &self,
        vertices: &[Point<Real>],
        intersects: impl FnOnce() -> bool,
    ) -> ContainmentType {
        match self.contains_points(vertices) {
            ContainmentType::Inside => ContainmentType::Inside,
            ContainmentType::Intersects => ContainmentType::Intersects,
            ContainmentType::Outside if intersects() => ContainmentType::Intersects,
            ContainmentType::Outside => ContainmentType::Outside,
        }
    }

    fn distance_to_segment(&self, segment: &Segment) -> Real {
        if intersection_test_frustum_segment(self, segment) {
            return 0.0;
        }

        distance_segment_convex(segment, SEARCH_TOLERANCE, |pt| {
            self.distance_to_point(pt)
        })
    }

    fn quad_area(a: &Point<Real>, b: &Point<Real>, c: &Point<Real>, d: &Point<Real>) -> Real {
        (c - a).cross(&(d - b)).norm() * 0.5
    }
}

impl BoundingVolume for BoundingFrustum {
    #[inline]
    fn bounding_type(&self) -> BoundingType {
        BoundingType::Frustum
    }

    fn center(&self) -> Point<Real> {
        *self.center.get_or_init(|| utils::center(self.corners()))
    }

    /// Translates this frustum so its center becomes `center`.
    fn set_center(&mut self, center: Point<Real>) {
        // `transform` moves the frustum by the inverse of its translation.
        let delta = self.center() - center;
        self.transform(&Vector::repeat(1.0), &Rotation::identity(), &delta);
    }

    fn volume(&self) -> Real {
        let c = self.corners();
        let near_area = Self::quad_area(&c[0], &c[1], &c[2], &c[3]);
        let far_area = Self::quad_area(&c[4], &c[5], &c[6], &c[7]);
        let near_center = utils::center(&c[..4]);
        let height = self.far().signed_distance(&near_center).abs();

        if height < ZERO_TOLERANCE {
            log::debug!("Degenerate frustum with coincident near and far planes.");
        }

        if relative_eq!(near_area, far_area, epsilon = ZERO_TOLERANCE) {
            near_area * height
        } else {
            height / 3.0 * (near_area + far_area + ComplexField::sqrt(near_area * far_area))
        }
    }

    fn corners(&self) -> &[Point<Real>] {
        self.corners.get_or_compute(|| self.compute_corners())
    }

    fn distance_to_point(&self, point: &Point<Real>) -> Real {
        let dists = self.planes.map(|plane| plane.signed_distance(point));

        if dists.iter().all(|d| *d >= -ZERO_TOLERANCE) {
            return 0.0;
        }

        // The closest point is either the projection on a face, if that projection
        // lies within the other planes, or a point on an edge.
        let on_faces = self.planes.iter().enumerate().filter_map(|(i, plane)| {
            let proj = plane.project_point(point);
            let valid = self
                .planes
                .iter()
                .enumerate()
                .all(|(j, other)| j == i || other.signed_distance(&proj) >= -ZERO_TOLERANCE);
            valid.then(|| dists[i].abs())
        });
        let on_edges = self.edges().map(|edge| edge.distance_to_point(point));

        on_faces.chain(on_edges).fold(Real::MAX, Real::min)
    }

    fn contains_point(&self, point: &Point<Real>) -> ContainmentType {
        let mut result = ContainmentType::Inside;

        for plane in &self.planes {
            match plane.classify_point(point) {
                PlaneIntersectionType::Back => return ContainmentType::Outside,
                PlaneIntersectionType::Intersects => result = ContainmentType::Intersects,
                PlaneIntersectionType::Front => {}
            }
        }

        result
    }

    fn contains_segment(&self, segment: &Segment) -> ContainmentType {
        self.containment_of_polytope(&[segment.a, segment.b], || {
            intersection_test_frustum_segment(self, segment)
        })
    }

    fn contains_triangle(&self, triangle: &Triangle) -> ContainmentType {
        self.containment_of_polytope(&triangle.vertices(), || {
            intersection_test_frustum_triangle(self, triangle)
        })
    }

    fn contains_volume(&self, other: &dyn BoundingVolume) -> ContainmentType {
        match other.as_typed_volume() {
            TypedBoundingVolume::Sphere(s) => {
                if self.contains_sphere(&s.center(), s.radius()) {
                    ContainmentType::Inside
                } else if self.intersects_volume(other) {
                    ContainmentType::Intersects
                } else {
                    ContainmentType::Outside
                }
            }
            TypedBoundingVolume::Aabb(aabb) => self.contains_volume(&aabb.to_obb()),
            TypedBoundingVolume::Obb(obb) => self.containment_of_polytope(obb.corners(), || {
                intersection_test_box_frustum(obb, self)
            }),
            TypedBoundingVolume::Capsule(capsule) => {
                let segment = capsule.segment();

                if self.contains_sphere(&segment.a, capsule.radius())
                    && self.contains_sphere(&segment.b, capsule.radius())
                {
                    ContainmentType::Inside
                } else if self.intersects_volume(other) {
                    ContainmentType::Intersects
                } else {
                    ContainmentType::Outside
                }
            }
            TypedBoundingVolume::Frustum(frustum) => self
                .containment_of_polytope(frustum.corners(), || {
                    intersection_test_frustum_frustum(self, frustum)
                }),
            TypedBoundingVolume::Custom(_) => self.contains_general(other),
        }
    }

    fn intersects_volume(&self, other: &dyn BoundingVolume) -> bool {
        match other.as_typed_volume() {
            TypedBoundingVolume::Sphere(s) => {
                within_tolerance(self.distance_to_point(&s.center()), s.radius())
            }
            TypedBoundingVolume::Aabb(aabb) => intersection_test_box_frustum(&aabb.to_obb(), self),
            TypedBoundingVolume::Obb(obb) => intersection_test_box_frustum(obb, self),
            TypedBoundingVolume::Capsule(capsule) => {
                within_tolerance(self.distance_to_segment(capsule.segment()), capsule.radius())
            }
            TypedBoundingVolume::Frustum(frustum) => {
                intersection_test_frustum_frustum(self, frustum)
            }
            TypedBoundingVolume::Custom(_) => self.intersects_general(other),
        }
    }

    fn intersects_plane(&self, plane: &Plane) -> PlaneIntersectionType {
        let (min, max) = self
            .corners()
            .iter()
            .map(|c| plane.signed_distance(c))
            .fold((Real::MAX, -Real::MAX), |(min, max), d| (min.min(d), max.max(d)));

        if min > 0.0 {
            PlaneIntersectionType::Front
        } else if max < 0.0 {
            PlaneIntersectionType::Back
        } else {
            PlaneIntersectionType::Intersects
        }
    }

    /// # Panics
    /// Always: a frustum is derived from a camera and cannot enclose other volumes.
    fn merge(&mut self, other: &dyn BoundingVolume) {
        panic!(
            "A bounding frustum cannot be merged with a {:?}.",
            other.bounding_type()
        );
    }

    /// Folds a scaling, then a rotation, then a translation, into the view-projection
    /// matrix as `view_projection * transform`, and re-derives every plane.
    ///
    /// Points go through the transform before being projected, so the region covered
    /// by the frustum moves by the inverse of the transform: a translation by `t` moves
    /// the frustum by `-t`. A zero scale component gives a degenerate frustum that is
    /// unbounded along the collapsed axis. Repeated transforms accumulate rounding
    /// errors and do not round-trip exactly.
    fn transform(
        &mut self,
        scale: &Vector<Real>,
        rotation: &Rotation<Real>,
        translation: &Vector<Real>,
    ) {
        let transform = HomogeneousMatrix::new_translation(translation)
            * rotation.to_homogeneous()
            * HomogeneousMatrix::new_nonuniform_scaling(scale);
        self.set_view_projection(self.view_projection * transform);
    }

    /// # Panics
    /// Always: a frustum is derived from a camera and cannot be fitted to points.
    fn compute_from_points(&mut self, _: &PointBuffer) {
        panic!("A bounding frustum cannot be computed from a set of points.");
    }

    fn clone_dyn(&self) -> Box<dyn BoundingVolume> {
        Box::new(self.clone())
    }

    #[inline]
    fn cast_ray(&self, ray: &Ray, max_toi: Real) -> Option<Real> {
        cast_ray_convex_planes(&self.planes, ray, max_toi)
    }
}
