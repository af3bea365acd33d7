//! Node collection consumed by the zone computation

pub mod snapshot;
pub mod builder;

pub use builder::NodeSnapshotBuilder;
pub use snapshot::{GroupId, Node, NodeSnapshot};
