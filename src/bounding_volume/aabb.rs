//! Axis Aligned Bounding Box.

use crate::bounding_volume::{
    BoundingType, BoundingVolume, ContainmentType, CornerCache, OrientedBoundingBox,
    PointBuffer,
};
use crate::math::{Point, Real, Rotation, Vector, DIM};
use crate::query::details::{
    cast_local_ray_box, intersection_test_box_segment, intersection_test_box_triangle,
};
use crate::query::Ray;
use crate::shape::{Plane, PlaneIntersectionType, Segment, Triangle};

/// An Axis-Aligned Bounding Box.
///
/// An AABB is the simplest bounding volume: a box whose faces are parallel to the
/// coordinate axes, stored as its minimum and maximum corners. Queries that are not
/// trivial for an axis-aligned box go through its [`OrientedBoundingBox`] form.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, PartialEq, Clone)]
pub struct Aabb {
    mins: Point<Real>,
    maxs: Point<Real>,
    #[cfg_attr(feature = "serde", serde(skip))]
    corners: CornerCache,
}

impl Default for Aabb {
    /// A zero-sized AABB at the origin.
    fn default() -> Self {
        Self::new(Point::origin(), Point::origin())
    }
}

impl Aabb {
    /// The vertex indices of each edge of this AABB.
    pub const EDGES_VERTEX_IDS: [(usize, usize); 12] = [
        (0, 1),
        (1, 2),
        (3, 2),
        (0, 3),
        (4, 5),
        (5, 6),
        (7, 6),
        (4, 7),
        (0, 4),
        (1, 5),
        (2, 6),
        (3, 7),
    ];

    /// Creates a new AABB.
    ///
    /// # Arguments:
    ///   * `mins` - position of the point with the smallest coordinates.
    ///   * `maxs` - position of the point with the highest coordinates. Each component of `mins`
    ///     must be smaller than the related components of `maxs`.
    #[inline]
    pub fn new(mins: Point<Real>, maxs: Point<Real>) -> Aabb {
        assert!(
            (0..DIM).all(|i| mins[i] <= maxs[i]),
            "The AABB minimum corner {mins:?} must not exceed its maximum corner {maxs:?}."
        );
        Aabb {
            mins,
            maxs,
            corners: CornerCache::new(),
        }
    }

    /// Creates a new AABB from its center and its half-extents.
    #[inline]
    pub fn from_half_extents(center: Point<Real>, half_extents: Vector<Real>) -> Self {
        let half_extents = half_extents.abs();
        Self::new(center - half_extents, center + half_extents)
    }

    /// Creates a new AABB from a set of point references.
    pub fn from_points_ref<'a, I>(pts: I) -> Self
    where
        I: IntoIterator<Item = &'a Point<Real>>,
    {
        super::aabb_utils::local_point_cloud_aabb(pts.into_iter().copied())
    }

    /// Creates a new AABB from a set of points.
    pub fn from_points<I>(pts: I) -> Self
    where
        I: IntoIterator<Item = Point<Real>>,
    {
        super::aabb_utils::local_point_cloud_aabb(pts)
    }

    /// The point with the smallest coordinates.
    #[inline]
    pub fn mins(&self) -> &Point<Real> {
        &self.mins
    }

    /// The point with the largest coordinates.
    #[inline]
    pub fn maxs(&self) -> &Point<Real> {
        &self.maxs
    }

    /// The half extents of this AABB.
    #[inline]
    pub fn half_extents(&self) -> Vector<Real> {
        (self.maxs - self.mins) * 0.5
    }

    /// The extents of this AABB.
    #[inline]
    pub fn extents(&self) -> Vector<Real> {
        self.maxs - self.mins
    }

    /// Enlarges this AABB so it also contains the point `pt`.
    pub fn take_point(&mut self, pt: Point<Real>) {
        self.mins = self.mins.inf(&pt);
        self.maxs = self.maxs.sup(&pt);
        self.corners.invalidate();
    }

    /// The oriented box with the same extents as this AABB.
    #[inline]
    pub fn to_obb(&self) -> OrientedBoundingBox {
        OrientedBoundingBox::from_aabb(self)
    }

    /// The vertices of this AABB.
    #[inline]
    pub fn vertices(&self) -> [Point<Real>; 8] {
        [
            Point::new(self.mins.x, self.mins.y, self.mins.z),
            Point::new(self.maxs.x, self.mins.y, self.mins.z),
            Point::new(self.maxs.x, self.maxs.y, self.mins.z),
            Point::new(self.mins.x, self.maxs.y, self.mins.z),
            Point::new(self.mins.x, self.mins.y, self.maxs.z),
            Point::new(self.maxs.x, self.mins.y, self.maxs.z),
            Point::new(self.maxs.x, self.maxs.y, self.maxs.z),
            Point::new(self.mins.x, self.maxs.y, self.maxs.z),
        ]
    }

    /// Tests if this AABB contains the point `point`, boundary included.
    #[inline]
    pub fn contains_local_point(&self, point: &Point<Real>) -> bool {
        (0..DIM).all(|i| self.mins[i] <= point[i] && point[i] <= self.maxs[i])
    }
}

impl BoundingVolume for Aabb {
    #[inline]
    fn bounding_type(&self) -> BoundingType {
        BoundingType::AxisAlignedBoundingBox
    }

    #[inline]
    fn center(&self) -> Point<Real> {
        na::center(&self.mins, &self.maxs)
    }

    fn set_center(&mut self, center: Point<Real>) {
        let half_extents = self.half_extents();
        self.mins = center - half_extents;
        self.maxs = center + half_extents;
        self.corners.invalidate();
    }

    #[inline]
    fn volume(&self) -> Real {
        self.extents().product()
    }

    fn corners(&self) -> &[Point<Real>] {
        self.corners.get_or_compute(|| self.vertices())
    }

    fn distance_to_point(&self, point: &Point<Real>) -> Real {
        if self.contains_local_point(point) {
            return 0.0;
        }

        let mins_pt = self.mins - point;
        let pt_maxs = point - self.maxs;
        mins_pt.sup(&pt_maxs).sup(&Vector::zeros()).norm()
    }

    fn contains_point(&self, point: &Point<Real>) -> ContainmentType {
        if self.contains_local_point(point) {
            ContainmentType::Inside
        } else {
            ContainmentType::Outside
        }
    }

    fn contains_segment(&self, segment: &Segment) -> ContainmentType {
        if self.contains_local_point(&segment.a) && self.contains_local_point(&segment.b) {
            ContainmentType::Inside
        } else if intersection_test_box_segment(&self.to_obb(), segment) {
            ContainmentType::Intersects
        } else {
            ContainmentType::Outside
        }
    }

    fn contains_triangle(&self, triangle: &Triangle) -> ContainmentType {
        if triangle.vertices().iter().all(|v| self.contains_local_point(v)) {
            ContainmentType::Inside
        } else if intersection_test_box_triangle(&self.to_obb(), triangle) {
            ContainmentType::Intersects
        } else {
            ContainmentType::Outside
        }
    }

    fn contains_volume(&self, other: &dyn BoundingVolume) -> ContainmentType {
        self.to_obb().contains_volume(other)
    }

    fn intersects_volume(&self, other: &dyn BoundingVolume) -> bool {
        self.to_obb().intersects_volume(other)
    }

    fn intersects_plane(&self, plane: &Plane) -> PlaneIntersectionType {
        self.to_obb().intersects_plane(plane)
    }

    fn merge(&mut self, other: &dyn BoundingVolume) {
        for corner in other.corners() {
            self.mins = self.mins.inf(corner);
            self.maxs = self.maxs.sup(corner);
        }
        self.corners.invalidate();
    }

    fn transform(
        &mut self,
        scale: &Vector<Real>,
        rotation: &Rotation<Real>,
        translation: &Vector<Real>,
    ) {
        *self = super::aabb_utils::point_cloud_aabb(scale, rotation, translation, self.corners());
    }

    fn compute_from_points(&mut self, points: &PointBuffer) {
        *self = Aabb::from_points(points.iter());
    }

    fn clone_dyn(&self) -> Box<dyn BoundingVolume> {
        Box::new(self.clone())
    }

    fn cast_ray(&self, ray: &Ray, max_toi: Real) -> Option<Real> {
        let local_ray = ray.translate_by(-self.center().coords);
        cast_local_ray_box(&self.half_extents(), &local_ray, max_toi)
    }
}
