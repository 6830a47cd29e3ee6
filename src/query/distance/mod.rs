//! Distance computations between bounding-volume primitives.

pub use self::distance_segment_convex::distance_segment_convex;

mod distance_segment_convex;
