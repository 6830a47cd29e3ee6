use crate::bounding_volume::Aabb;
use crate::math::{Point, Real, Rotation, Vector};

/// Computes the AABB of a set of points after scaling, rotating and translating them.
///
/// Returns a zero-sized AABB at the origin if `pts` is empty.
pub fn point_cloud_aabb<'a, I>(
    scale: &Vector<Real>,
    rotation: &Rotation<Real>,
    translation: &Vector<Real>,
    pts: I,
) -> Aabb
where
    I: IntoIterator<Item = &'a Point<Real>>,
{
    local_point_cloud_aabb(
        pts.into_iter()
            .map(|pt| rotation * Point::from(pt.coords.component_mul(scale)) + translation),
    )
}

/// Computes the AABB of a set of points.
///
/// Returns a zero-sized AABB at the origin if `pts` is empty.
pub fn local_point_cloud_aabb<I>(pts: I) -> Aabb
where
    I: IntoIterator<Item = Point<Real>>,
{
    let mut it = pts.into_iter();

    let Some(p0) = it.next() else {
        return Aabb::default();
    };

    let mut min: Point<Real> = p0;
    let mut max: Point<Real> = p0;

    for pt in it {
        min = min.inf(&pt);
        max = max.sup(&pt);
    }

    Aabb::new(min, max)
}
