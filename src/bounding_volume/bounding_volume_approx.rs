use crate::bounding_volume::{
    Aabb, BoundingCapsule, BoundingFrustum, BoundingSphere, BoundingVolume, OrientedBoundingBox,
};
use crate::math::Real;
use approx::{AbsDiffEq, RelativeEq};

// Compares the defining parameters of a volume, component-wise. The cached corners
// are derived data and are never compared.
macro_rules! impl_approx_eq(
    ($t: ty, |$a: ident, $b: ident| [$($lhs: expr => $rhs: expr),* $(,)*]) => {
        impl AbsDiffEq for $t {
            type Epsilon = Real;

            fn default_epsilon() -> Self::Epsilon {
                Real::default_epsilon()
            }

            fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
                let ($a, $b) = (self, other);
                true $(&& $lhs.abs_diff_eq(&$rhs, epsilon))*
            }
        }

        impl RelativeEq for $t {
            fn default_max_relative() -> Self::Epsilon {
                Real::default_max_relative()
            }

            fn relative_eq(
                &self,
                other: &Self,
                epsilon: Self::Epsilon,
                max_relative: Self::Epsilon,
            ) -> bool {
                let ($a, $b) = (self, other);
                true $(&& $lhs.relative_eq(&$rhs, epsilon, max_relative))*
            }
        }
    }
);

impl_approx_eq!(BoundingSphere, |a, b| [
    a.center() => b.center(),
    a.radius() => b.radius(),
]);

impl_approx_eq!(Aabb, |a, b| [
    a.mins() => b.mins(),
    a.maxs() => b.maxs(),
]);

impl_approx_eq!(OrientedBoundingBox, |a, b| [
    a.center() => b.center(),
    a.axes() => b.axes(),
    a.half_extents() => b.half_extents(),
]);

impl_approx_eq!(BoundingCapsule, |a, b| [
    a.segment().a => b.segment().a,
    a.segment().b => b.segment().b,
    a.radius() => b.radius(),
]);

impl_approx_eq!(BoundingFrustum, |a, b| [
    a.view_projection() => b.view_projection(),
]);
