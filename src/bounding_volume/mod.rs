//! Bounding volumes.

#[doc(inline)]
pub use crate::bounding_volume::aabb::Aabb;
#[doc(inline)]
pub use crate::bounding_volume::bounding_capsule::BoundingCapsule;
#[doc(inline)]
pub use crate::bounding_volume::bounding_frustum::{
    orthographic_rh_zo, perspective_rh_zo, BoundingFrustum, FrustumPlane,
};
#[doc(inline)]
pub use crate::bounding_volume::bounding_sphere::BoundingSphere;
#[doc(inline)]
pub use crate::bounding_volume::bounding_volume::{
    BoundingType, BoundingVolume, ContainmentType, TypedBoundingVolume,
};
pub use crate::bounding_volume::corner_cache::CornerCache;
#[doc(inline)]
pub use crate::bounding_volume::oriented_bounding_box::OrientedBoundingBox;
pub use crate::bounding_volume::point_buffer::{PointBuffer, PointBufferError};

#[doc(hidden)]
pub mod bounding_volume;

#[doc(hidden)]
pub mod aabb;
mod aabb_utils;
#[doc(hidden)]
pub mod bounding_capsule;
#[doc(hidden)]
pub mod bounding_frustum;
#[doc(hidden)]
pub mod bounding_sphere;
mod bounding_sphere_utils;
mod bounding_volume_approx;
mod corner_cache;
#[doc(hidden)]
pub mod oriented_bounding_box;
mod point_buffer;

/// Free functions for some special cases of bounding-volume computation.
pub mod details {
    pub use super::aabb_utils::{local_point_cloud_aabb, point_cloud_aabb};
    pub use super::bounding_sphere_utils::{
        exact_sphere2, exact_sphere3, exact_sphere4, point_cloud_bounding_sphere,
        point_cloud_bounding_sphere_with_center, point_cloud_minimal_sphere,
    };
    pub use super::bounding_volume::classify_points;
}
