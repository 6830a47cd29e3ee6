//! Bounding sphere.

use crate::bounding_volume::bounding_sphere_utils as utils;
use crate::bounding_volume::{
    BoundingType, BoundingVolume, ContainmentType, CornerCache, PointBuffer,
    TypedBoundingVolume,
};
use crate::math::{Point, Real, Rotation, Vector, PI};
use crate::query::details::{
    cast_ray_sphere, intersection_test_sphere_box, intersection_test_sphere_sphere,
};
use crate::query::Ray;
use crate::shape::{Plane, PlaneIntersectionType, Segment, Triangle};
use crate::utils::{rounding_slack, within_tolerance};
use num::Zero;

/// A Bounding Sphere.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, PartialEq, Clone)]
pub struct BoundingSphere {
    center: Point<Real>,
    radius: Real,
    #[cfg_attr(feature = "serde", serde(skip))]
    corners: CornerCache,
}

impl Default for BoundingSphere {
    /// A zero sphere at the origin.
    fn default() -> Self {
        Self::new(Point::origin(), 0.0)
    }
}

impl BoundingSphere {
    /// Creates a new bounding sphere.
    ///
    /// # Panics
    /// If `radius` is negative.
    pub fn new(center: Point<Real>, radius: Real) -> BoundingSphere {
        assert!(radius >= 0.0, "The bounding sphere radius must be non-negative.");
        BoundingSphere {
            center,
            radius,
            corners: CornerCache::new(),
        }
    }

    /// Creates the bounding sphere of a set of points, centered at their barycenter.
    pub fn from_points(pts: &[Point<Real>]) -> BoundingSphere {
        let (center, radius) = utils::point_cloud_bounding_sphere(pts);
        BoundingSphere::new(center, radius)
    }

    /// Creates the smallest sphere enclosing a set of points.
    pub fn minimal_from_points(points: &PointBuffer) -> BoundingSphere {
        let mut pts = points.to_vec();
        let (center, radius) = utils::point_cloud_minimal_sphere(&mut pts);
        BoundingSphere::new(center, radius)
    }

    /// Creates the sphere enclosing another bounding volume.
    pub fn from_volume(volume: &dyn BoundingVolume) -> BoundingSphere {
        let mut res = BoundingSphere::default();
        res.set_from_volume(volume);
        res
    }

    /// The bounding sphere radius.
    #[inline]
    pub fn radius(&self) -> Real {
        self.radius
    }

    /// Sets the bounding sphere radius.
    ///
    /// # Panics
    /// If `radius` is negative.
    pub fn set_radius(&mut self, radius: Real) {
        assert!(radius >= 0.0, "The bounding sphere radius must be non-negative.");
        self.radius = radius;
        self.corners.invalidate();
    }

    /// Sets both the center and the radius of this sphere.
    pub fn set(&mut self, center: Point<Real>, radius: Real) {
        *self = BoundingSphere::new(center, radius);
    }

    /// Replaces this sphere with a sphere enclosing `volume`.
    ///
    /// Boxes and capsules give a sphere sharing their center. Frustums and
    /// unknown volumes give the barycentric sphere of their corners.
    pub fn set_from_volume(&mut self, volume: &dyn BoundingVolume) {
        match volume.as_typed_volume() {
            TypedBoundingVolume::Sphere(s) => self.set(s.center, s.radius),
            TypedBoundingVolume::Aabb(aabb) => {
                self.set(aabb.center(), aabb.half_extents().norm())
            }
            TypedBoundingVolume::Obb(obb) => {
                self.set(obb.center(), (obb.axes() * obb.half_extents()).norm())
            }
            TypedBoundingVolume::Capsule(capsule) => self.set(
                capsule.center(),
                capsule.segment().length() * 0.5 + capsule.radius(),
            ),
            TypedBoundingVolume::Frustum(_) | TypedBoundingVolume::Custom(_) => {
                *self = BoundingSphere::from_points(volume.corners())
            }
        }
    }

    /// Enlarges this sphere so it also contains `point`.
    ///
    /// The center moves halfway toward the point, and the radius grows by the same
    /// amount, so the previous sphere stays enclosed. The result is generally not the
    /// smallest such sphere.
    pub fn extend(&mut self, point: &Point<Real>) {
        let dist = na::distance(point, &self.center);

        if dist <= self.radius {
            return;
        }

        self.center = na::center(&self.center, point);
        self.radius = (self.radius + dist * 0.5).max(na::distance(point, &self.center));
        self.corners.invalidate();
    }

    /// Merges this sphere with the sphere of center `center` and radius `radius`.
    fn merge_sphere(&mut self, center: &Point<Real>, radius: Real) {
        let mut dir = center - self.center;
        let norm = dir.normalize_mut();

        if norm.is_zero() {
            if radius > self.radius {
                self.radius = radius
            }
        } else {
            let (old_center, old_radius) = (self.center, self.radius);
            let s_center_dir = self.center.coords.dot(&dir);
            let o_center_dir = center.coords.dot(&dir);

            let right = if s_center_dir + self.radius > o_center_dir + radius {
                self.center + dir * self.radius
            } else {
                center + dir * radius
            };

            let left = if -s_center_dir + self.radius > -o_center_dir + radius {
                self.center - dir * self.radius
            } else {
                center - dir * radius
            };

            self.center = na::center(&left, &right);
            // Rounding must not leave either operand outside.
            self.radius = na::distance(&right, &self.center)
                .max(na::distance(&self.center, &old_center) + old_radius)
                .max(na::distance(&self.center, center) + radius);
        }

        self.corners.invalidate();
    }

    fn containment_of_sphere(&self, center: &Point<Real>, radius: Real) -> ContainmentType {
        let dist = na::distance(&self.center, center);

        if within_tolerance(dist + radius, self.radius) {
            ContainmentType::Inside
        } else if intersection_test_sphere_sphere(&self.center, self.radius, center, radius) {
            ContainmentType::Intersects
        } else {
            ContainmentType::Outside
        }
    }

    /// Are the corners of another volume inside of this sphere, up to rounding?
    fn encloses_corners(&self, corners: &[Point<Real>]) -> bool {
        let magnitude = self.center.coords.amax() + self.radius;
        corners.iter().all(|pt| {
            na::distance(pt, &self.center)
                <= self.radius + rounding_slack(magnitude.max(pt.coords.amax()))
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

    fn compute_corners(&self) -> [Point<Real>; 8] {
        let r = self.radius;
        let c = self.center;
        [
            c + Vector::new(-r, -r, -r),
            c + Vector::new(r, -r, -r),
            c + Vector::new(r, r, -r),
            c + Vector::new(-r, r, -r),
            c + Vector::new(-r, -r, r),
            c + Vector::new(r, -r, r),
            c + Vector::new(r, r, r),
            c + Vector::new(-r, r, r),
        ]
    }
}

impl BoundingVolume for BoundingSphere {
    #[inline]
    fn bounding_type(&self) -> BoundingType {
        BoundingType::Sphere
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
        4.0 / 3.0 * PI * self.radius * self.radius * self.radius
    }

    fn corners(&self) -> &[Point<Real>] {
        self.corners.get_or_compute(|| self.compute_corners())
    }

    fn distance_to_point(&self, point: &Point<Real>) -> Real {
        let dist = na::distance(point, &self.center);

        if dist <= self.radius {
            0.0
        } else {
            dist - self.radius
        }
    }

    fn contains_point(&self, point: &Point<Real>) -> ContainmentType {
        if na::distance(point, &self.center) <= self.radius {
            ContainmentType::Inside
        } else {
            ContainmentType::Outside
        }
    }

    fn contains_segment(&self, segment: &Segment) -> ContainmentType {
        let inside = self.contains_points(&[segment.a, segment.b]) == ContainmentType::Inside;
        self.containment_of_polytope(inside, || {
            segment.distance_to_point(&self.center) <= self.radius
        })
    }

    fn contains_triangle(&self, triangle: &Triangle) -> ContainmentType {
        let inside = self.contains_points(&triangle.vertices()) == ContainmentType::Inside;
        self.containment_of_polytope(inside, || {
            triangle.distance_to_point(&self.center) <= self.radius
        })
    }

    fn contains_volume(&self, other: &dyn BoundingVolume) -> ContainmentType {
        match other.as_typed_volume() {
            TypedBoundingVolume::Sphere(s) => self.containment_of_sphere(&s.center, s.radius),
            TypedBoundingVolume::Aabb(aabb) => {
                let obb = aabb.to_obb();
                self.containment_of_polytope(self.encloses_corners(other.corners()), || {
                    intersection_test_sphere_box(&self.center, self.radius, &obb)
                })
            }
            TypedBoundingVolume::Obb(obb) => {
                self.containment_of_polytope(self.encloses_corners(other.corners()), || {
                    intersection_test_sphere_box(&self.center, self.radius, obb)
                })
            }
            TypedBoundingVolume::Capsule(capsule) => {
                let segment = capsule.segment();
                let inside = [segment.a, segment.b].iter().all(|end| {
                    within_tolerance(
                        na::distance(end, &self.center) + capsule.radius(),
                        self.radius,
                    )
                });

                if inside {
                    ContainmentType::Inside
                } else if within_tolerance(
                    segment.distance_to_point(&self.center),
                    self.radius + capsule.radius(),
                ) {
                    ContainmentType::Intersects
                } else {
                    ContainmentType::Outside
                }
            }
            TypedBoundingVolume::Frustum(frustum) => {
                self.containment_of_polytope(self.encloses_corners(other.corners()), || {
                    within_tolerance(frustum.distance_to_point(&self.center), self.radius)
                })
            }
            TypedBoundingVolume::Custom(_) => self.contains_general(other),
        }
    }

    fn intersects_volume(&self, other: &dyn BoundingVolume) -> bool {
        match other.as_typed_volume() {
            TypedBoundingVolume::Sphere(s) => {
                intersection_test_sphere_sphere(&self.center, self.radius, &s.center, s.radius)
            }
            TypedBoundingVolume::Aabb(aabb) => {
                intersection_test_sphere_box(&self.center, self.radius, &aabb.to_obb())
            }
            TypedBoundingVolume::Obb(obb) => {
                intersection_test_sphere_box(&self.center, self.radius, obb)
            }
            TypedBoundingVolume::Capsule(capsule) => within_tolerance(
                capsule.segment().distance_to_point(&self.center),
                self.radius + capsule.radius(),
            ),
            TypedBoundingVolume::Frustum(frustum) => {
                within_tolerance(frustum.distance_to_point(&self.center), self.radius)
            }
            TypedBoundingVolume::Custom(_) => self.intersects_general(other),
        }
    }

    fn intersects_plane(&self, plane: &Plane) -> PlaneIntersectionType {
        let dist = plane.signed_distance(&self.center);

        if dist > self.radius {
            PlaneIntersectionType::Front
        } else if dist < -self.radius {
            PlaneIntersectionType::Back
        } else {
            PlaneIntersectionType::Intersects
        }
    }

    fn merge(&mut self, other: &dyn BoundingVolume) {
        let enclosing;
        let other = match other.as_typed_volume() {
            TypedBoundingVolume::Sphere(s) => s,
            _ => {
                enclosing = BoundingSphere::from_volume(other);
                &enclosing
            }
        };

        self.merge_sphere(&other.center, other.radius);
    }

    fn transform(
        &mut self,
        scale: &Vector<Real>,
        rotation: &Rotation<Real>,
        translation: &Vector<Real>,
    ) {
        self.center = rotation * self.center + translation;
        self.radius *= scale.abs().max();
        self.corners.invalidate();
    }

    fn compute_from_points(&mut self, points: &PointBuffer) {
        *self = match points.as_slice() {
            Some(slice) => BoundingSphere::from_points(slice),
            None => BoundingSphere::from_points(&points.to_vec()),
        };
    }

    fn clone_dyn(&self) -> Box<dyn BoundingVolume> {
        Box::new(self.clone())
    }

    #[inline]
    fn cast_ray(&self, ray: &Ray, max_toi: Real) -> Option<Real> {
        cast_ray_sphere(&self.center, self.radius, ray, max_toi)
    }
}
