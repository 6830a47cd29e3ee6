use crate::bounding_volume::OrientedBoundingBox;
use crate::math::{Point, Real};
use crate::utils::within_tolerance;

/// Intersection test between spheres.
#[inline]
pub fn intersection_test_sphere_sphere(
    center1: &Point<Real>,
    radius1: Real,
    center2: &Point<Real>,
    radius2: Real,
) -> bool {
    let distance_squared = (center2 - center1).norm_squared();
    let sum_radius = radius1 + radius2;
    distance_squared <= sum_radius * sum_radius
}

/// Intersection test between a sphere and an oriented box.
///
/// The sphere intersects the box iff the point of the box closest to the sphere
/// center is within `radius` of that center.
#[inline]
pub fn intersection_test_sphere_box(
    center: &Point<Real>,
    radius: Real,
    obb: &OrientedBoundingBox,
) -> bool {
    let closest = obb.closest_point(center);
    within_tolerance(na::distance(&closest, center), radius)
}
