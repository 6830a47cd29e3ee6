use crate::math::Real;

/// Parameter tolerance of the golden-section searches along segments.
pub const SEARCH_TOLERANCE: Real = 1.0e-5;

/// Number of ulps a derived quantity may drift away from the bound it was built to meet.
const ROUNDING_ULPS: Real = 32.0;

/// The rounding error accumulated by a handful of arithmetic operations on values of
/// magnitude `magnitude`.
#[inline]
pub fn rounding_slack(magnitude: Real) -> Real {
    ROUNDING_ULPS * Real::EPSILON * (1.0 + magnitude.abs())
}

/// Checks `value <= limit`, up to the rounding error of `limit`.
///
/// This is only meant for quantities derived from geometry that was built to meet
/// `limit`: the corners or end caps of another volume, or the support points of a fit.
/// Point queries compare exactly.
#[inline]
pub fn within_tolerance(value: Real, limit: Real) -> bool {
    value <= limit + rounding_slack(limit)
}
