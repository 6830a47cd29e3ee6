use crate::math::{Point, Real, Vector, ZERO_TOLERANCE};
use crate::utils::{self, within_tolerance};
use arrayvec::ArrayVec;
use na::ComplexField;

/// Computes the bounding sphere of a set of points, centered at `center`.
#[inline]
pub fn point_cloud_bounding_sphere_with_center(
    pts: &[Point<Real>],
    center: Point<Real>,
) -> (Point<Real>, Real) {
    let mut sqradius = 0.0;

    for pt in pts.iter() {
        let distance_squared = na::distance_squared(pt, &center);

        if distance_squared > sqradius {
            sqradius = distance_squared
        }
    }

    (center, ComplexField::sqrt(sqradius))
}

/// Computes a bounding sphere of a set of points, centered at their barycenter.
///
/// This is fast but not minimal. Returns a zero sphere at the origin if `pts` is empty.
#[inline]
pub fn point_cloud_bounding_sphere(pts: &[Point<Real>]) -> (Point<Real>, Real) {
    if pts.is_empty() {
        return (Point::origin(), 0.0);
    }

    point_cloud_bounding_sphere_with_center(pts, utils::center(pts))
}

/// The sphere of smallest radius passing through two points.
#[inline]
pub fn exact_sphere2(a: &Point<Real>, b: &Point<Real>) -> (Point<Real>, Real) {
    (na::center(a, b), na::distance(a, b) * 0.5)
}

/// The sphere of smallest radius passing through three points.
///
/// Its center is the circumcenter of the triangle `abc`. Returns a zero sphere at the
/// origin if the points are collinear, relative to the length of the triangle edges.
pub fn exact_sphere3(a: &Point<Real>, b: &Point<Real>, c: &Point<Real>) -> (Point<Real>, Real) {
    let ab = b - a;
    let ac = c - a;
    let normal = ab.cross(&ac);
    let denom = 2.0 * normal.norm_squared();

    // |ab × ac|² = |ab|²|ac|² sin²θ, so this is a bound on the angle at `a`.
    if denom <= ZERO_TOLERANCE * ab.norm_squared() * ac.norm_squared() {
        log::debug!("Singular three-point sphere through {a:?}, {b:?}, {c:?}.");
        return (Point::origin(), 0.0);
    }

    let to_center =
        (normal.cross(&ab) * ac.norm_squared() + ac.cross(&normal) * ab.norm_squared()) / denom;
    (a + to_center, to_center.norm())
}

/// The sphere passing through four points.
///
/// Its center is the circumcenter of the tetrahedron `abcd`. Returns a zero sphere at
/// the origin if the points are coplanar, relative to the length of the tetrahedron
/// edges.
pub fn exact_sphere4(
    a: &Point<Real>,
    b: &Point<Real>,
    c: &Point<Real>,
    d: &Point<Real>,
) -> (Point<Real>, Real) {
    let u = b - a;
    let v = c - a;
    let w = d - a;
    let vw = v.cross(&w);
    let det = 2.0 * u.dot(&vw);

    if det.abs() <= ZERO_TOLERANCE * u.norm() * v.norm() * w.norm() {
        log::debug!("Singular four-point sphere through {a:?}, {b:?}, {c:?}, {d:?}.");
        return (Point::origin(), 0.0);
    }

    let to_center: Vector<Real> =
        (vw * u.norm_squared() + w.cross(&u) * v.norm_squared() + u.cross(&v) * w.norm_squared())
            / det;
    (a + to_center, to_center.norm())
}

/// The smallest sphere having every support point on its boundary.
///
/// An empty support yields a sphere with a negative radius, which contains nothing.
fn support_sphere(support: &[Point<Real>]) -> (Point<Real>, Real) {
    match support {
        [] => (Point::origin(), -1.0),
        [a] => (*a, 0.0),
        [a, b] => exact_sphere2(a, b),
        [a, b, c] => exact_sphere3(a, b, c),
        [a, b, c, d] => exact_sphere4(a, b, c, d),
        _ => unreachable!(),
    }
}

/// Computes the minimal bounding sphere of a set of points.
///
/// This is Welzl's algorithm with the move-to-front heuristic: every time a point is
/// found outside of the current sphere, it becomes part of the support of the
/// sphere computed for the points preceding it, and is moved to the front of the
/// slice so later passes consider it early. The order of `pts` is modified.
///
/// Every point of `pts` is within the returned radius of the returned center. Returns
/// a zero sphere at the origin if `pts` is empty.
pub fn point_cloud_minimal_sphere(pts: &mut [Point<Real>]) -> (Point<Real>, Real) {
    if pts.is_empty() {
        return (Point::origin(), 0.0);
    }

    let end = pts.len();
    let mut support = ArrayVec::new();
    let (center, radius) = move_to_front(pts, end, &mut support);

    // The support test accepts points a few ulps outside of the sphere.
    let radius = pts
        .iter()
        .map(|pt| na::distance(pt, &center))
        .fold(radius.max(0.0), Real::max);
    (center, radius)
}

fn move_to_front(
    pts: &mut [Point<Real>],
    end: usize,
    support: &mut ArrayVec<Point<Real>, 4>,
) -> (Point<Real>, Real) {
    let mut sphere = support_sphere(support);

    if support.is_full() {
        return sphere;
    }

    for i in 0..end {
        let pt = pts[i];

        if !within_tolerance(na::distance(&pt, &sphere.0), sphere.1) {
            support.push(pt);
            sphere = move_to_front(pts, i, support);
            let _ = support.pop();
            pts.swap(0, i);
        }
    }

    sphere
}
