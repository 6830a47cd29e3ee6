use crate::math::{Real, Vector, DIM, ZERO_TOLERANCE};
use crate::query::Ray;

/// Computes the time of impact of a ray on a solid box centered at the origin and
/// aligned with the coordinate axes.
///
/// The ray must already be expressed in the local frame of the box. Returns
/// `Some(0.0)` if the ray origin lies inside of the box.
pub fn cast_local_ray_box(
    half_extents: &Vector<Real>,
    ray: &Ray,
    max_toi: Real,
) -> Option<Real> {
    let mut tmin: Real = 0.0;
    let mut tmax: Real = max_toi;
    let dir_norm = ray.dir.norm();

    for i in 0..DIM {
        let origin = ray.origin[i];
        let extent = half_extents[i];

        if ray.dir[i].abs() <= ZERO_TOLERANCE * dir_norm {
            if origin < -extent || origin > extent {
                return None;
            }
        } else {
            let denom = 1.0 / ray.dir[i];
            let mut inter_with_near_plane = (-extent - origin) * denom;
            let mut inter_with_far_plane = (extent - origin) * denom;

            if inter_with_near_plane > inter_with_far_plane {
                core::mem::swap(&mut inter_with_near_plane, &mut inter_with_far_plane)
            }

            tmin = tmin.max(inter_with_near_plane);
            tmax = tmax.min(inter_with_far_plane);

            if tmin > tmax {
                return None;
            }
        }
    }

    Some(tmin)
}
