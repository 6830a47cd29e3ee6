use crate::math::{Matrix, Point, Real, Vector};

/// The centroid of a set of points, all points having the same weight.
///
/// # Panics
/// If `pts` is empty.
pub fn center(pts: &[Point<Real>]) -> Point<Real> {
    assert!(
        !pts.is_empty(),
        "Cannot compute the center of an empty point set."
    );

    let sum = pts
        .iter()
        .fold(Vector::zeros(), |acc: Vector<Real>, pt| acc + pt.coords);
    Point::from(sum / pts.len() as Real)
}

/// The centroid and the covariance matrix of a set of points.
///
/// # Panics
/// If `pts` is empty.
pub fn center_cov(pts: &[Point<Real>]) -> (Point<Real>, Matrix<Real>) {
    let center = center(pts);
    let normalizer = 1.0 / pts.len() as Real;
    let cov = pts.iter().fold(Matrix::zeros(), |acc: Matrix<Real>, pt| {
        let dpt = pt - center;
        acc + dpt * (dpt * normalizer).transpose()
    });

    (center, cov)
}
