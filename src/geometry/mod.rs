//! Planar geometry used to outline communities

pub mod point;
pub mod directions;
pub mod centroid;
pub mod outline;

pub use point::Point2;
pub use directions::{DIRECTIONS, DIRECTION_COUNT};
pub use centroid::centroid;
pub use outline::project_outline;
