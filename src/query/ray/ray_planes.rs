use crate::math::{Point, Real, Vector, ZERO_TOLERANCE};
use crate::query::Ray;
use crate::shape::Plane;

/// Clips the parametric line `origin + dir * t`, `t ∈ [tmin, tmax]`, against the
/// positive half-spaces of a set of planes.
///
/// Returns the parameter interval of the part of the line lying in front of every
/// plane, or `None` if that part is empty. A zero `dir` is parallel to every plane.
pub fn clip_line_with_planes(
    origin: &Point<Real>,
    dir: &Vector<Real>,
    planes: &[Plane],
    mut tmin: Real,
    mut tmax: Real,
) -> Option<(Real, Real)> {
    let dir_norm = dir.norm();

    for plane in planes {
        let dist = plane.signed_distance(origin);
        let denom = plane.normal.dot(dir);

        // The cosine of the angle between `dir` and the normal decides parallelism.
        if denom.abs() <= ZERO_TOLERANCE * dir_norm {
            // Parallel to the plane: either always in front, or never.
            if dist < 0.0 {
                return None;
            }
            continue;
        }

        // The signed distance along the line is `dist + denom * t`.
        let t = -dist / denom;

        if denom > 0.0 {
            tmin = tmin.max(t);
        } else {
            tmax = tmax.min(t);
        }

        if tmin > tmax {
            return None;
        }
    }

    Some((tmin, tmax))
}

/// Computes the time of impact of a ray on the convex region in front of every plane.
///
/// Returns `Some(0.0)` if the ray origin lies inside of that region.
#[inline]
pub fn cast_ray_convex_planes(planes: &[Plane], ray: &Ray, max_toi: Real) -> Option<Real> {
    clip_line_with_planes(&ray.origin, &ray.dir, planes, 0.0, max_toi).map(|(tmin, _)| tmin)
}
