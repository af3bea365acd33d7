//! Read-only view of positioned nodes for one computation pass

use crate::geometry::Point2;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Community identifier carried by a node.
///
/// Groups are opaque: numeric groups are kept by their decimal text, so
/// `5` and `"5"` name the same community.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GroupId(String);

impl GroupId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for GroupId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for GroupId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<i64> for GroupId {
    fn from(n: i64) -> Self {
        Self(n.to_string())
    }
}

/// A positioned graph node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    /// Unique identifier
    pub id: String,

    /// Current position
    pub x: f64,
    pub y: f64,

    /// Community membership; `None` falls into the default community
    pub group: Option<GroupId>,
}

impl Node {
    pub fn new(id: impl Into<String>, x: f64, y: f64, group: Option<GroupId>) -> Self {
        Self {
            id: id.into(),
            x,
            y,
            group,
        }
    }

    /// Position as a point
    pub fn position(&self) -> Point2 {
        Point2::new(self.x, self.y)
    }
}

/// Node records plus the ordered list of nodes taking part in the layout.
///
/// `active` holds positions into `nodes`; its order is the iteration order
/// used for partitioning.
#[derive(Debug, Clone, Default)]
pub struct NodeSnapshot {
    /// All known nodes, in registration order
    pub nodes: Vec<Node>,

    /// Indices into `nodes`, in simulation order
    pub active: Vec<u32>,

    /// Mapping from node ids to indices
    pub(crate) id_to_index: HashMap<String, u32>,
}

impl NodeSnapshot {
    /// Number of registered nodes
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of active nodes
    pub fn active_count(&self) -> usize {
        self.active.len()
    }

    /// Node at a given index
    pub fn node(&self, index: u32) -> Option<&Node> {
        self.nodes.get(index as usize)
    }

    /// Index of the node with the given id
    pub fn index_of(&self, id: &str) -> Option<u32> {
        self.id_to_index.get(id).copied()
    }

    /// Node with the given id
    pub fn node_by_id(&self, id: &str) -> Option<&Node> {
        self.index_of(id).and_then(|idx| self.node(idx))
    }

    /// Mutable access for the layout owner between passes
    pub fn node_mut(&mut self, id: &str) -> Option<&mut Node> {
        let idx = self.index_of(id)?;
        self.nodes.get_mut(idx as usize)
    }
}
