//! Separating-axis tests between convex polytopes given by their vertex sets.
//!
//! Two convex polytopes are disjoint if and only if there exists an axis on which the
//! projections of their vertices do not overlap. For polyhedra it is sufficient to
//! check the face normals of both shapes and the cross products of every pair of edge
//! directions. Degenerate polytopes (triangles, segments) are handled by giving them
//! the face normals and edge directions they actually have.

use crate::math::{Point, Real, Vector, ZERO_TOLERANCE};

/// A convex polytope described by the data needed by separating-axis tests.
#[derive(Copy, Clone, Debug)]
pub struct ConvexPolytope<'a> {
    /// The vertices of the polytope.
    pub vertices: &'a [Point<Real>],
    /// The (not necessarily normalized) face normals of the polytope.
    pub face_normals: &'a [Vector<Real>],
    /// The (not necessarily normalized) directions of the edges of the polytope.
    ///
    /// Parallel edges only need to be listed once.
    pub edge_directions: &'a [Vector<Real>],
}

/// Projects a set of points on an axis, returning the `(min, max)` interval.
#[inline]
pub fn project_on_axis(vertices: &[Point<Real>], axis: &Vector<Real>) -> (Real, Real) {
    vertices
        .iter()
        .map(|pt| pt.coords.dot(axis))
        .fold((Real::MAX, -Real::MAX), |(min, max), proj| {
            (min.min(proj), max.max(proj))
        })
}

/// Checks if the projections of two vertex sets on `axis` are disjoint.
///
/// Touching projections are not considered disjoint.
#[inline]
pub fn separated_along_axis(
    vertices1: &[Point<Real>],
    vertices2: &[Point<Real>],
    axis: &Vector<Real>,
) -> bool {
    let (min1, max1) = project_on_axis(vertices1, axis);
    let (min2, max2) = project_on_axis(vertices2, axis);
    max1 < min2 || max2 < min1
}

/// Tests if two convex polytopes intersect.
///
/// Empty vertex sets never intersect anything.
pub fn convex_polytopes_intersect(poly1: &ConvexPolytope, poly2: &ConvexPolytope) -> bool {
    if poly1.vertices.is_empty() || poly2.vertices.is_empty() {
        return false;
    }

    for normal in poly1.face_normals.iter().chain(poly2.face_normals.iter()) {
        if separated_along_axis(poly1.vertices, poly2.vertices, normal) {
            return false;
        }
    }

    for e1 in poly1.edge_directions {
        for e2 in poly2.edge_directions {
            let axis = e1.cross(e2);

            // Parallel edges do not define a candidate axis.
            if axis.norm_squared()
                <= ZERO_TOLERANCE * ZERO_TOLERANCE * e1.norm_squared() * e2.norm_squared()
            {
                continue;
            }

            if separated_along_axis(poly1.vertices, poly2.vertices, &axis) {
                return false;
            }
        }
    }

    true
}
