use crate::math::{Point, Real};
use crate::query::Ray;
use na::ComplexField;

/// Computes the time of impact of a ray on a solid sphere.
///
/// Returns `Some(0.0)` if the ray origin lies inside of the sphere, and `None` if the
/// ray misses the sphere or hits it after `max_toi`.
#[inline]
pub fn cast_ray_sphere(
    center: &Point<Real>,
    radius: Real,
    ray: &Ray,
    max_toi: Real,
) -> Option<Real> {
    let dcenter = ray.origin - *center;

    if dcenter.norm() <= radius {
        return Some(0.0);
    }

    let a = ray.dir.norm_squared();
    let b = dcenter.dot(&ray.dir);
    let c = dcenter.norm_squared() - radius * radius;

    if b > 0.0 || a == 0.0 {
        // The origin is outside and the ray points away from the sphere.
        return None;
    }

    let delta = b * b - a * c;

    if delta < 0.0 {
        return None;
    }

    let toi = (-b - ComplexField::sqrt(delta)) / a;
    (toi <= max_toi).then_some(toi.max(0.0))
}
