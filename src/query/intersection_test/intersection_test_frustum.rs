use crate::bounding_volume::{BoundingFrustum, BoundingVolume, OrientedBoundingBox};
use crate::query::details::clip_line_with_planes;
use crate::query::sat::{self, ConvexPolytope};
use crate::shape::{Segment, Triangle};

/// Test if a segment intersects a frustum.
///
/// The segment is clipped against the six frustum planes.
#[inline]
pub fn intersection_test_frustum_segment(frustum: &BoundingFrustum, segment: &Segment) -> bool {
    clip_line_with_planes(
        &segment.a,
        &segment.scaled_direction(),
        frustum.planes(),
        0.0,
        1.0,
    )
    .is_some()
}

/// Test if a triangle intersects a frustum.
pub fn intersection_test_frustum_triangle(frustum: &BoundingFrustum, triangle: &Triangle) -> bool {
    let normals = frustum.face_normals();
    let edges = frustum.edge_directions();
    let vertices = triangle.vertices();
    let tri_normal = [triangle.scaled_normal()];
    let tri_edges = triangle.edges().map(|e| e.scaled_direction());

    sat::convex_polytopes_intersect(
        &ConvexPolytope {
            vertices: frustum.corners(),
            face_normals: &normals,
            edge_directions: &edges,
        },
        &ConvexPolytope {
            vertices: &vertices,
            face_normals: &tri_normal,
            edge_directions: &tri_edges,
        },
    )
}

/// Test if an oriented box intersects a frustum.
pub fn intersection_test_box_frustum(obb: &OrientedBoundingBox, frustum: &BoundingFrustum) -> bool {
    let axes = obb.axis_vectors();
    let normals = frustum.face_normals();
    let edges = frustum.edge_directions();

    sat::convex_polytopes_intersect(
        &ConvexPolytope {
            vertices: obb.corners(),
            face_normals: &axes,
            edge_directions: &axes,
        },
        &ConvexPolytope {
            vertices: frustum.corners(),
            face_normals: &normals,
            edge_directions: &edges,
        },
    )
}

/// Test if two frustums intersect.
pub fn intersection_test_frustum_frustum(
    frustum1: &BoundingFrustum,
    frustum2: &BoundingFrustum,
) -> bool {
    let normals1 = frustum1.face_normals();
    let edges1 = frustum1.edge_directions();
    let normals2 = frustum2.face_normals();
    let edges2 = frustum2.edge_directions();

    sat::convex_polytopes_intersect(
        &ConvexPolytope {
            vertices: frustum1.corners(),
            face_normals: &normals1,
            edge_directions: &edges1,
        },
        &ConvexPolytope {
            vertices: frustum2.corners(),
            face_normals: &normals2,
            edge_directions: &edges2,
        },
    )
}
