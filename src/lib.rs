/*!
bvol3d
========

**bvol3d** is a 3-dimensional bounding-volume library written with the rust
programming language.

It provides bounding spheres, oriented bounding boxes and view frustums behind a
single object-safe [`BoundingVolume`](bounding_volume::BoundingVolume) trait, together
with the containment, intersection, merging and fitting queries used by culling,
picking and collision pre-filtering systems.

*/

#![deny(non_camel_case_types)]
#![deny(unused_parens)]
#![deny(non_upper_case_globals)]
#![deny(unused_results)]
#![warn(missing_docs)]
#![warn(unused_imports)]
#![allow(missing_copy_implementations)]
#![allow(clippy::too_many_arguments)]
#![allow(clippy::module_inception)]
#![allow(clippy::manual_range_contains)] // This usually makes it way more verbose that it could be.

#[cfg(all(feature = "f32", feature = "f64"))]
std::compile_error!("The `f32` and `f64` features are mutually exclusive. Use the `bvol3d-f64` crate for double precision.");

#[cfg(feature = "serde")]
#[macro_use]
extern crate serde;
#[macro_use]
extern crate approx;
extern crate num_traits as num;

pub extern crate nalgebra as na;

pub mod bounding_volume;
pub mod query;
pub mod shape;
pub mod utils;

mod real {
    /// The scalar type used throughout this crate.
    #[cfg(feature = "f64")]
    pub use f64 as Real;

    /// The scalar type used throughout this crate.
    #[cfg(feature = "f32")]
    pub use f32 as Real;

    /// Archimedes' constant, in the precision of [`Real`].
    #[cfg(feature = "f64")]
    pub use core::f64::consts::PI;

    /// Archimedes' constant, in the precision of [`Real`].
    #[cfg(feature = "f32")]
    pub use core::f32::consts::PI;
}

/// Compilation flags dependent aliases for mathematical types.
pub mod math {
    pub use super::real::*;
    pub use na::{Matrix3, Matrix4, Point3, UnitVector3, Vector3, Vector4};
    use na::{UnitQuaternion, U3};

    /// The default tolerance used for geometric operations.
    pub const DEFAULT_EPSILON: Real = Real::EPSILON;

    /// The tolerance below which a scalar is considered to be zero.
    ///
    /// This is the threshold used by degenerate-input checks (singular systems,
    /// zero-length directions, zero volumes).
    pub const ZERO_TOLERANCE: Real = 1.0e-6;

    /// The dimension of the space.
    pub const DIM: usize = 3;

    /// The dimension of the ambient space.
    pub type Dim = U3;

    /// The point type.
    pub use Point3 as Point;

    /// The vector type.
    pub use Vector3 as Vector;

    /// The unit vector type.
    pub use UnitVector3 as UnitVector;

    /// The 3×3 matrix type.
    pub use Matrix3 as Matrix;

    /// The homogeneous (4×4) matrix type used by view-projection transforms.
    pub use Matrix4 as HomogeneousMatrix;

    /// The rotation type.
    pub type Rotation<N> = UnitQuaternion<N>;
}
