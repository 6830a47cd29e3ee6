use crate::bounding_volume::{BoundingVolume, OrientedBoundingBox};
use crate::query::sat::{self, ConvexPolytope};

/// Intersection test between oriented boxes.
///
/// This is a separating-axis test on the 3 face normals of each box and the 9 cross
/// products of their edge directions.
pub fn intersection_test_box_box(obb1: &OrientedBoundingBox, obb2: &OrientedBoundingBox) -> bool {
    let axes1 = obb1.axis_vectors();
    let axes2 = obb2.axis_vectors();

    sat::convex_polytopes_intersect(
        &ConvexPolytope {
            vertices: obb1.corners(),
            face_normals: &axes1,
            edge_directions: &axes1,
        },
        &ConvexPolytope {
            vertices: obb2.corners(),
            face_normals: &axes2,
            edge_directions: &axes2,
        },
    )
}
