use crate::math::{Point, Real};
use crate::shape::Segment;
use crate::utils::minimize_convex_on_unit_interval;

const MAX_ITERS: usize = 64;

/// Distance between a segment and a convex volume known through its point distance.
///
/// `distance_to_point` must be the (unsigned, zero inside) distance from a point to a
/// convex set. Its restriction to the segment is then a convex function of the
/// segment parameter, and is minimized with a golden-section search.
pub fn distance_segment_convex(
    segment: &Segment,
    tolerance: Real,
    distance_to_point: impl Fn(&Point<Real>) -> Real,
) -> Real {
    let length = segment.length();

    if length <= tolerance {
        return distance_to_point(&segment.a);
    }

    let (_, dist) = minimize_convex_on_unit_interval(
        |t| distance_to_point(&segment.point_at(t)),
        tolerance / length,
        MAX_ITERS,
    );
    dist
}
