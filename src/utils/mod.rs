//! Various unsorted geometrical operators.

pub use self::basis::orthonormal_complement;
pub use self::golden_section::minimize_convex_on_unit_interval;
pub use self::moments::{center, center_cov};
pub use self::obb::gauss_points_fit;
pub use self::tolerance::{rounding_slack, within_tolerance, SEARCH_TOLERANCE};

mod basis;
mod golden_section;
mod moments;
mod obb;
mod tolerance;
