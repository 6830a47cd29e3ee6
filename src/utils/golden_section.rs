use crate::math::Real;

const INV_PHI: Real = 0.618_033_988_749_895;

/// Finds the minimum of a convex function `f` on the interval `[0, 1]`.
///
/// Uses a golden-section search stopping once the bracketing interval is smaller than
/// `tolerance` or after `max_iters` iterations. Returns the minimizing parameter and the
/// value of `f` there. Both interval endpoints are always considered.
pub fn minimize_convex_on_unit_interval(
    mut f: impl FnMut(Real) -> Real,
    tolerance: Real,
    max_iters: usize,
) -> (Real, Real) {
    let (mut a, mut b): (Real, Real) = (0.0, 1.0);
    let mut c = b - (b - a) * INV_PHI;
    let mut d = a + (b - a) * INV_PHI;
    let mut fc = f(c);
    let mut fd = f(d);

    for _ in 0..max_iters {
        if b - a <= tolerance {
            break;
        }

        if fc < fd {
            b = d;
            d = c;
            fd = fc;
            c = b - (b - a) * INV_PHI;
            fc = f(c);
        } else {
            a = c;
            c = d;
            fc = fd;
            d = a + (b - a) * INV_PHI;
            fd = f(d);
        }
    }

    let mut best = if fc < fd { (c, fc) } else { (d, fd) };

    for t in [0.0, 1.0] {
        let ft = f(t);
        if ft < best.1 {
            best = (t, ft);
        }
    }

    best
}
