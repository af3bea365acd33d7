//! Error types for zone computation

use thiserror::Error;

/// Errors raised while partitioning nodes or building community geometry.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ZoneError {
    /// A centroid was requested for a bucket with no members.
    #[error("degenerate input: community {group} has no members")]
    DegenerateInput {
        /// Display form of the offending group.
        group: String,
    },

    /// An active index points past the end of the node collection.
    #[error("active index {index} out of range for {node_count} nodes")]
    UnknownNode {
        index: u32,
        node_count: usize,
    },

    /// An active node id was not present in the node collection.
    #[error("unknown node id `{0}`")]
    UnknownNodeId(String),

    /// The same node id was registered twice.
    #[error("duplicate node id `{0}`")]
    DuplicateNode(String),
}
