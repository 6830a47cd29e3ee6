//! Pairwise intersection tests between bounding-volume primitives.

pub use self::intersection_test_box_box::intersection_test_box_box;
pub use self::intersection_test_box_segment::{
    intersection_test_box_segment, intersection_test_box_triangle,
};
pub use self::intersection_test_frustum::{
    intersection_test_box_frustum, intersection_test_frustum_frustum,
    intersection_test_frustum_segment, intersection_test_frustum_triangle,
};
pub use self::intersection_test_sphere::{
    intersection_test_sphere_box, intersection_test_sphere_sphere,
};

mod intersection_test_box_box;
mod intersection_test_box_segment;
mod intersection_test_frustum;
mod intersection_test_sphere;
