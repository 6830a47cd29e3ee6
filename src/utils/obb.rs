use crate::math::{Matrix, Point, Real, Vector, DIM};

/// Fits an oriented box to the given set of points using their Gauss fit.
///
/// The box axes are the eigenvectors of the covariance matrix of `pts`, and its
/// extents are the ranges of the points projected on those axes. The returned box
/// is guaranteed to contain every point but is not the smallest enclosing box.
///
/// Returns the box center, a rotation matrix with the box axes as columns, and the
/// box half-extents along each of those axes.
///
/// # Panics
///
/// Panics if `pts` is empty.
pub fn gauss_points_fit(pts: &[Point<Real>]) -> (Point<Real>, Matrix<Real>, Vector<Real>) {
    let (_, cov) = crate::utils::center_cov(pts);
    let axes = orthonormalize(cov.symmetric_eigen().eigenvectors);

    let mut mins = Vector::repeat(Real::MAX);
    let mut maxs = Vector::repeat(-Real::MAX);

    for pt in pts {
        for i in 0..DIM {
            let dot = axes.column(i).dot(&pt.coords);
            mins[i] = mins[i].min(dot);
            maxs[i] = maxs[i].max(dot);
        }
    }

    let local_center = (maxs + mins) / 2.0;

    (
        Point::from(axes * local_center),
        axes,
        (maxs - mins) / 2.0,
    )
}

/// Turns the eigenvectors into a right-handed orthonormal frame.
fn orthonormalize(eigv: Matrix<Real>) -> Matrix<Real> {
    let x = eigv.column(0).into_owned();
    let y = eigv.column(1).into_owned();

    let Some(x) = x.try_normalize(crate::math::ZERO_TOLERANCE) else {
        log::debug!("Degenerate Gauss fit eigenvectors, falling back to the identity frame.");
        return Matrix::identity();
    };
    let Some(y) = (y - x * x.dot(&y)).try_normalize(crate::math::ZERO_TOLERANCE) else {
        log::debug!("Degenerate Gauss fit eigenvectors, falling back to the identity frame.");
        return Matrix::identity();
    };

    Matrix::from_columns(&[x, y, x.cross(&y)])
}
