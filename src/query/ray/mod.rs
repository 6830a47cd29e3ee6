//! Ray definition and ray casts against the bounding-volume primitives.

pub use self::ray::Ray;
pub use self::ray_box::cast_local_ray_box;
pub use self::ray_capsule::cast_ray_capsule;
pub use self::ray_planes::{cast_ray_convex_planes, clip_line_with_planes};
pub use self::ray_sphere::cast_ray_sphere;

#[doc(hidden)]
pub mod ray;
mod ray_box;
mod ray_capsule;
mod ray_planes;
mod ray_sphere;
