//! Snapshot construction

use crate::error::ZoneError;
use crate::graph::{GroupId, Node, NodeSnapshot};
use std::collections::HashMap;

/// Builder for incrementally constructing a NodeSnapshot
pub struct NodeSnapshotBuilder {
    /// Mapping from string IDs to node indices
    id_to_index: HashMap<String, u32>,

    /// Node records
    nodes: Vec<Node>,

    /// Explicit active order; all nodes in registration order when unset
    active: Option<Vec<u32>>,
}

impl NodeSnapshotBuilder {
    /// Create a new builder with the given capacity
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            id_to_index: HashMap::with_capacity(capacity),
            nodes: Vec::with_capacity(capacity),
            active: None,
        }
    }

    /// Register a node, rejecting duplicate ids
    pub fn add_node(
        &mut self,
        id: &str,
        x: f64,
        y: f64,
        group: Option<GroupId>,
    ) -> Result<u32, ZoneError> {
        if self.id_to_index.contains_key(id) {
            return Err(ZoneError::DuplicateNode(id.to_string()));
        }

        let idx = self.nodes.len() as u32;
        self.id_to_index.insert(id.to_string(), idx);
        self.nodes.push(Node::new(id, x, y, group));

        Ok(idx)
    }

    /// Set the active order by node id
    pub fn set_active<I, S>(&mut self, ids: I) -> Result<(), ZoneError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut active = Vec::new();
        for id in ids {
            let id = id.as_ref();
            let idx = self
                .id_to_index
                .get(id)
                .copied()
                .ok_or_else(|| ZoneError::UnknownNodeId(id.to_string()))?;
            active.push(idx);
        }

        self.active = Some(active);
        Ok(())
    }

    /// Set the active order by raw index; indices are checked when partitioning
    pub fn set_active_indices(&mut self, indices: Vec<u32>) {
        self.active = Some(indices);
    }

    /// Build the snapshot
    pub fn build(self) -> NodeSnapshot {
        let node_count = self.nodes.len() as u32;
        let active = self.active.unwrap_or_else(|| (0..node_count).collect());

        NodeSnapshot {
            nodes: self.nodes,
            active,
            id_to_index: self.id_to_index,
        }
    }
}

impl Default for NodeSnapshotBuilder {
    fn default() -> Self {
        Self::with_capacity(0)
    }
}
