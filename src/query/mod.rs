//! Non-persistent geometric queries shared by the bounding volumes.
//!
//! The functions exported by the `details` submodule are the pairwise tests the
//! volumes dispatch to. They have the form `[operation]_[shape1]_[shape2]()` where:
//!
//! * `[operation]` can be `intersection_test`, `distance` or `cast_ray`.
//! * `[shape1]` and `[shape2]` identify the types of the operands, e.g., `sphere`,
//!   `box`, `frustum`, `segment`.
//!
//! Ray picking over a set of volumes is exposed through [`pick`] and [`PickResults`].

pub use self::pick::{pick, PickHit, PickResults};
pub use self::ray::Ray;
pub use self::sat::ConvexPolytope;

mod distance;
mod intersection_test;
mod pick;
mod ray;
pub mod sat;

/// Queries dedicated to specific pairs of shapes.
pub mod details {
    pub use super::distance::*;
    pub use super::intersection_test::*;
    pub use super::ray::{
        cast_local_ray_box, cast_ray_capsule, cast_ray_convex_planes, cast_ray_sphere,
        clip_line_with_planes,
    };
}
