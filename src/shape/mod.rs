//! Primitive shapes consumed by the bounding-volume queries.

pub use self::plane::{Plane, PlaneIntersectionType};
pub use self::segment::Segment;
pub use self::triangle::Triangle;

mod plane;
mod segment;
mod triangle;
