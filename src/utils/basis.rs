use crate::math::{Real, UnitVector, Vector};
use na::Unit;

/// Two unit vectors completing `axis` into a right-handed orthonormal frame
/// `[axis, b1, b2]`.
///
/// Branchless construction from Duff et al., "Building an Orthonormal Basis,
/// Revisited" (2017).
pub fn orthonormal_complement(axis: &UnitVector<Real>) -> [UnitVector<Real>; 2] {
    let sign = (1.0 as Real).copysign(axis.z);
    let a = -1.0 / (sign + axis.z);
    let b = axis.x * axis.y * a;

    [
        Unit::new_unchecked(Vector::new(
            1.0 + sign * axis.x * axis.x * a,
            sign * b,
            -sign * axis.x,
        )),
        Unit::new_unchecked(Vector::new(b, sign + axis.y * axis.y * a, -axis.y)),
    ]
}
