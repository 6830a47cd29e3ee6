use crate::bounding_volume::{
    Aabb, BoundingCapsule, BoundingFrustum, BoundingSphere, OrientedBoundingBox, PointBuffer,
    PointBufferError,
};
use crate::math::{Point, Real, Rotation, Vector, ZERO_TOLERANCE};
use crate::query::details::cast_local_ray_box;
use crate::query::Ray;
use crate::shape::{Plane, PlaneIntersectionType, Segment, Triangle};
use downcast_rs::{impl_downcast, DowncastSync};
use num_derive::FromPrimitive;
use std::fmt::Debug;

/// The kind of a bounding volume.
///
/// Can be converted from its integer discriminant with [`num::FromPrimitive`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, FromPrimitive)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum BoundingType {
    /// A [`BoundingSphere`].
    Sphere = 0,
    /// An [`Aabb`].
    AxisAlignedBoundingBox = 1,
    /// An [`OrientedBoundingBox`].
    OrientedBoundingBox = 2,
    /// A [`BoundingCapsule`].
    Capsule = 3,
    /// A [`BoundingFrustum`].
    Frustum = 4,
    /// A user-defined volume bounding a mesh.
    Mesh = 5,
}

/// The result of a containment test.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ContainmentType {
    /// The tested object lies entirely inside of the volume.
    Inside,
    /// The tested object lies entirely outside of the volume.
    Outside,
    /// The tested object is partially inside of the volume.
    Intersects,
}

/// A bounding volume downcast to its concrete type.
///
/// This is what the pairwise queries match on. Volumes that are not provided by
/// this crate end up in the `Custom` arm and are handled through their corners.
#[derive(Copy, Clone, Debug)]
pub enum TypedBoundingVolume<'a> {
    /// A bounding sphere.
    Sphere(&'a BoundingSphere),
    /// An axis-aligned bounding box.
    Aabb(&'a Aabb),
    /// An oriented bounding box.
    Obb(&'a OrientedBoundingBox),
    /// A bounding capsule.
    Capsule(&'a BoundingCapsule),
    /// A view frustum.
    Frustum(&'a BoundingFrustum),
    /// Any other bounding volume.
    Custom(&'a dyn BoundingVolume),
}

/// Trait implemented by every bounding volume.
///
/// A bounding volume is a closed convex region of space that encloses some geometry.
/// Its corners are the vertices of a convex polytope enclosing it (the volume itself
/// for boxes and frustums); they are computed lazily and cached until the next
/// mutation.
///
/// Queries taking another volume accept any `&dyn BoundingVolume`. Pairs of volume
/// kinds with a dedicated test use it; the other pairs fall back to the
/// corner-based [`BoundingVolume::contains_general`] and
/// [`BoundingVolume::intersects_general`].
pub trait BoundingVolume: DowncastSync + Debug {
    /// The kind of this bounding volume.
    fn bounding_type(&self) -> BoundingType;

    /// The center of this bounding volume.
    fn center(&self) -> Point<Real>;

    /// Moves this bounding volume so that its center becomes `center`.
    fn set_center(&mut self, center: Point<Real>);

    /// The volume of this bounding volume.
    fn volume(&self) -> Real;

    /// The corners of the convex polytope enclosing this bounding volume.
    fn corners(&self) -> &[Point<Real>];

    /// The distance from `point` to this bounding volume, zero if the point is inside.
    fn distance_to_point(&self, point: &Point<Real>) -> Real;

    /// Classifies a point against this bounding volume.
    ///
    /// Points on the boundary are `Inside`, except for volumes bounded by planes that
    /// report points lying on one of them as [`ContainmentType::Intersects`].
    fn contains_point(&self, point: &Point<Real>) -> ContainmentType;

    /// Classifies a segment against this bounding volume.
    fn contains_segment(&self, segment: &Segment) -> ContainmentType;

    /// Classifies a triangle against this bounding volume.
    fn contains_triangle(&self, triangle: &Triangle) -> ContainmentType;

    /// Classifies another bounding volume against this one.
    fn contains_volume(&self, other: &dyn BoundingVolume) -> ContainmentType;

    /// Tests if another bounding volume intersects this one.
    fn intersects_volume(&self, other: &dyn BoundingVolume) -> bool;

    /// Classifies this bounding volume against a plane.
    fn intersects_plane(&self, plane: &Plane) -> PlaneIntersectionType;

    /// Enlarges this bounding volume so it also encloses `other`.
    fn merge(&mut self, other: &dyn BoundingVolume);

    /// Applies a scaling, then a rotation, then a translation, to this bounding volume.
    fn transform(
        &mut self,
        scale: &Vector<Real>,
        rotation: &Rotation<Real>,
        translation: &Vector<Real>,
    );

    /// Refits this bounding volume so it encloses the given points.
    ///
    /// An empty set of points results in a zero-sized volume at the origin.
    fn compute_from_points(&mut self, points: &PointBuffer);

    /// Clones this bounding volume into a box.
    fn clone_dyn(&self) -> Box<dyn BoundingVolume>;

    /// Is this bounding volume degenerate, i.e., is its volume zero?
    #[inline]
    fn is_minimum_bounding_volume(&self) -> bool {
        self.volume().abs() < ZERO_TOLERANCE
    }

    /// The number of corners returned by [`BoundingVolume::corners`].
    #[inline]
    fn corner_count(&self) -> usize {
        self.corners().len()
    }

    /// Copies the corners of this bounding volume into `out`.
    ///
    /// # Panics
    /// If `out` is shorter than [`BoundingVolume::corner_count`].
    fn copy_corners_to(&self, out: &mut [Point<Real>]) {
        let corners = self.corners();
        assert!(
            out.len() >= corners.len(),
            "The output buffer holds {} points but {} corners must be copied.",
            out.len(),
            corners.len()
        );
        out[..corners.len()].copy_from_slice(corners);
    }

    /// Classifies a set of points against this bounding volume.
    ///
    /// The result is `Inside` if every point is inside, `Outside` if every point is
    /// outside (or if there is no point), and `Intersects` otherwise.
    fn contains_points(&self, points: &[Point<Real>]) -> ContainmentType {
        classify_points(self, points)
    }

    /// Classifies another bounding volume against this one, using only its corners.
    fn contains_general(&self, other: &dyn BoundingVolume) -> ContainmentType {
        log::trace!(
            "Corner-based containment of a {:?} in a {:?}.",
            other.bounding_type(),
            self.bounding_type()
        );
        self.contains_points(other.corners())
    }

    /// Tests if another bounding volume intersects this one, using only its corners.
    ///
    /// This may miss intersections where no corner of `other` is inside of `self`.
    fn intersects_general(&self, other: &dyn BoundingVolume) -> bool {
        log::trace!(
            "Corner-based intersection of a {:?} with a {:?}.",
            other.bounding_type(),
            self.bounding_type()
        );
        other
            .corners()
            .iter()
            .any(|corner| self.contains_point(corner) != ContainmentType::Outside)
    }

    /// Tests if a segment intersects this bounding volume.
    #[inline]
    fn intersects_segment(&self, segment: &Segment) -> bool {
        self.contains_segment(segment) != ContainmentType::Outside
    }

    /// Tests if a triangle intersects this bounding volume.
    #[inline]
    fn intersects_triangle(&self, triangle: &Triangle) -> bool {
        self.contains_triangle(triangle) != ContainmentType::Outside
    }

    /// Computes the time of impact of a ray on this bounding volume.
    ///
    /// Returns `Some(0.0)` if the ray starts inside of the volume. The default
    /// implementation casts the ray on the axis-aligned box enclosing the corners, so
    /// it may report hits slightly before the actual volume, or hits on a volume the
    /// ray misses.
    fn cast_ray(&self, ray: &Ray, max_toi: Real) -> Option<Real> {
        let corners = self.corners();

        if corners.is_empty() {
            return None;
        }

        let aabb = Aabb::from_points_ref(corners);
        let local_ray = ray.translate_by(-aabb.center().coords);
        cast_local_ray_box(&aabb.half_extents(), &local_ray, max_toi)
    }

    /// Refits this bounding volume so it encloses `points[base_vertex + i]` for each
    /// `i` in `indices`.
    fn compute_from_indexed_points(
        &mut self,
        points: &[Point<Real>],
        indices: &[u32],
        base_vertex: usize,
    ) -> Result<(), PointBufferError> {
        let buffer = PointBuffer::indexed(points, indices, base_vertex)?;
        self.compute_from_points(&buffer);
        Ok(())
    }

    /// A copy of this bounding volume enlarged to also enclose `other`.
    fn merged(&self, other: &dyn BoundingVolume) -> Self
    where
        Self: Sized + Clone,
    {
        let mut res = self.clone();
        res.merge(other);
        res
    }

    /// A copy of this bounding volume scaled, then rotated, then translated.
    fn transformed(
        &self,
        scale: &Vector<Real>,
        rotation: &Rotation<Real>,
        translation: &Vector<Real>,
    ) -> Self
    where
        Self: Sized + Clone,
    {
        let mut res = self.clone();
        res.transform(scale, rotation, translation);
        res
    }
}

impl_downcast!(sync BoundingVolume);

impl dyn BoundingVolume {
    /// Downcasts this bounding volume to its concrete type.
    pub fn as_typed_volume(&self) -> TypedBoundingVolume<'_> {
        let typed = match self.bounding_type() {
            BoundingType::Sphere => self
                .downcast_ref::<BoundingSphere>()
                .map(TypedBoundingVolume::Sphere),
            BoundingType::AxisAlignedBoundingBox => {
                self.downcast_ref::<Aabb>().map(TypedBoundingVolume::Aabb)
            }
            BoundingType::OrientedBoundingBox => self
                .downcast_ref::<OrientedBoundingBox>()
                .map(TypedBoundingVolume::Obb),
            BoundingType::Capsule => self
                .downcast_ref::<BoundingCapsule>()
                .map(TypedBoundingVolume::Capsule),
            BoundingType::Frustum => self
                .downcast_ref::<BoundingFrustum>()
                .map(TypedBoundingVolume::Frustum),
            BoundingType::Mesh => None,
        };

        typed.unwrap_or(TypedBoundingVolume::Custom(self))
    }

    /// Converts this bounding volume to a sphere, if it is one.
    pub fn as_sphere(&self) -> Option<&BoundingSphere> {
        self.downcast_ref()
    }

    /// Converts this bounding volume to an oriented box, if it is one.
    pub fn as_obb(&self) -> Option<&OrientedBoundingBox> {
        self.downcast_ref()
    }

    /// Converts this bounding volume to a frustum, if it is one.
    pub fn as_frustum(&self) -> Option<&BoundingFrustum> {
        self.downcast_ref()
    }

    /// A boxed copy of this bounding volume enlarged to also enclose `other`.
    pub fn merged_dyn(&self, other: &dyn BoundingVolume) -> Box<dyn BoundingVolume> {
        let mut res = self.clone_dyn();
        res.merge(other);
        res
    }

    /// A boxed copy of this bounding volume scaled, then rotated, then translated.
    pub fn transformed_dyn(
        &self,
        scale: &Vector<Real>,
        rotation: &Rotation<Real>,
        translation: &Vector<Real>,
    ) -> Box<dyn BoundingVolume> {
        let mut res = self.clone_dyn();
        res.transform(scale, rotation, translation);
        res
    }
}

impl Clone for Box<dyn BoundingVolume> {
    fn clone(&self) -> Self {
        self.clone_dyn()
    }
}

#[cfg(feature = "parallel")]
const PARALLEL_CLASSIFICATION_THRESHOLD: usize = 4096;

#[derive(Copy, Clone, Default)]
struct PointSetClassification {
    inside: bool,
    outside: bool,
    intersects: bool,
}

impl PointSetClassification {
    #[inline]
    fn add(mut self, containment: ContainmentType) -> Self {
        match containment {
            ContainmentType::Inside => self.inside = true,
            ContainmentType::Outside => self.outside = true,
            ContainmentType::Intersects => self.intersects = true,
        }
        self
    }

    #[cfg(feature = "parallel")]
    #[inline]
    fn combine(self, other: Self) -> Self {
        Self {
            inside: self.inside || other.inside,
            outside: self.outside || other.outside,
            intersects: self.intersects || other.intersects,
        }
    }

    fn result(self) -> ContainmentType {
        if (self.inside && self.outside) || self.intersects {
            ContainmentType::Intersects
        } else if self.inside {
            ContainmentType::Inside
        } else {
            ContainmentType::Outside
        }
    }
}

/// Classifies a set of points against a bounding volume.
///
/// With the `parallel` feature enabled, large point sets are classified on several
/// threads.
pub fn classify_points<V: BoundingVolume + ?Sized>(
    volume: &V,
    points: &[Point<Real>],
) -> ContainmentType {
    #[cfg(feature = "parallel")]
    if points.len() >= PARALLEL_CLASSIFICATION_THRESHOLD {
        use rayon::prelude::*;

        return points
            .par_iter()
            .fold(PointSetClassification::default, |acc, pt| {
                acc.add(volume.contains_point(pt))
            })
            .reduce(PointSetClassification::default, PointSetClassification::combine)
            .result();
    }

    points
        .iter()
        .fold(PointSetClassification::default(), |acc, pt| {
            acc.add(volume.contains_point(pt))
        })
        .result()
}
