use crate::math::{Real, ZERO_TOLERANCE};
use crate::query::details::cast_ray_sphere;
use crate::query::Ray;
use crate::shape::Segment;
use na::ComplexField;

/// Computes the time of impact of a ray on a solid capsule.
///
/// The capsule is the set of points within `radius` of `segment`. Returns
/// `Some(0.0)` if the ray origin lies inside of the capsule.
pub fn cast_ray_capsule(
    segment: &Segment,
    radius: Real,
    ray: &Ray,
    max_toi: Real,
) -> Option<Real> {
    if segment.distance_to_point(&ray.origin) <= radius {
        return Some(0.0);
    }

    // The end caps.
    let mut best = [segment.a, segment.b]
        .iter()
        .filter_map(|cap| cast_ray_sphere(cap, radius, ray, max_toi))
        .reduce(Real::min);

    // The cylindrical body.
    let axis = segment.scaled_direction();
    let m = ray.origin - segment.a;
    let md = m.dot(&axis);
    let nd = ray.dir.dot(&axis);
    let nn = axis.norm_squared();
    let a = nn * ray.dir.norm_squared() - nd * nd;

    // `a` is `nn * |dir|² * sin²` of the angle between the ray and the axis.
    if a > ZERO_TOLERANCE * nn * ray.dir.norm_squared() {
        let b = nn * m.dot(&ray.dir) - nd * md;
        let c = nn * (m.norm_squared() - radius * radius) - md * md;
        let delta = b * b - a * c;

        if delta >= 0.0 {
            let toi = (-b - ComplexField::sqrt(delta)) / a;
            let along_axis = md + toi * nd;

            if toi >= 0.0 && toi <= max_toi && along_axis >= 0.0 && along_axis <= nn {
                best = Some(best.map_or(toi, |b| b.min(toi)));
            }
        }
    }

    best
}
