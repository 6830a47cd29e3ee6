use crate::bounding_volume::{BoundingVolume, OrientedBoundingBox};
use crate::query::details::cast_local_ray_box;
use crate::query::sat::{self, ConvexPolytope};
use crate::query::Ray;
use crate::shape::{Segment, Triangle};

/// Test if a segment intersects an oriented box.
///
/// The segment is expressed in the local frame of the box and clipped against its
/// slabs.
pub fn intersection_test_box_segment(obb: &OrientedBoundingBox, segment: &Segment) -> bool {
    let a = obb.to_local_point(&segment.a);
    let b = obb.to_local_point(&segment.b);
    let local_ray = Ray::new(a, b - a);
    cast_local_ray_box(obb.half_extents(), &local_ray, 1.0).is_some()
}

/// Test if a triangle intersects an oriented box.
pub fn intersection_test_box_triangle(obb: &OrientedBoundingBox, triangle: &Triangle) -> bool {
    let axes = obb.axis_vectors();
    let vertices = triangle.vertices();
    let normal = [triangle.scaled_normal()];
    let edges = triangle.edges().map(|e| e.scaled_direction());

    sat::convex_polytopes_intersect(
        &ConvexPolytope {
            vertices: obb.corners(),
            face_normals: &axes,
            edge_directions: &axes,
        },
        &ConvexPolytope {
            vertices: &vertices,
            face_normals: &normal,
            edge_directions: &edges,
        },
    )
}
