//! Grouping of active nodes into per-community buckets

use crate::error::ZoneError;
use crate::graph::{GroupId, NodeSnapshot};
use std::collections::HashMap;

/// Members sharing one group
#[derive(Debug, Clone, PartialEq)]
pub struct Bucket {
    /// Group of the bucket; `None` is the default bucket
    pub group: Option<GroupId>,

    /// Node indices in first-seen order
    pub members: Vec<u32>,
}

/// Ordered buckets for one pass.
///
/// Bucket 0 is always the default bucket; the others follow in the order
/// their group was first seen.
#[derive(Debug, Clone, PartialEq)]
pub struct Partition {
    buckets: Vec<Bucket>,
}

impl Partition {
    /// All buckets, including an empty default bucket
    pub fn buckets(&self) -> &[Bucket] {
        &self.buckets
    }

    /// Buckets with at least one member
    pub fn non_empty(&self) -> impl Iterator<Item = &Bucket> {
        self.buckets.iter().filter(|b| !b.members.is_empty())
    }

    /// Number of non-empty buckets
    pub fn community_count(&self) -> usize {
        self.non_empty().count()
    }

    /// Consume the partition, yielding non-empty buckets
    pub fn into_non_empty(self) -> impl Iterator<Item = Bucket> {
        self.buckets.into_iter().filter(|b| !b.members.is_empty())
    }
}

/// Builder assigning nodes to buckets on first sight of their group
pub struct PartitionBuilder {
    /// Mapping from group to bucket position
    group_to_bucket: HashMap<GroupId, usize>,

    /// Buckets in creation order, default bucket first
    buckets: Vec<Bucket>,

    /// Nodes already placed in this pass
    assigned: Vec<bool>,
}

impl PartitionBuilder {
    /// Create a builder for a collection of `node_count` nodes
    pub fn new(node_count: usize) -> Self {
        Self {
            group_to_bucket: HashMap::new(),
            buckets: vec![Bucket {
                group: None,
                members: Vec::new(),
            }],
            assigned: vec![false; node_count],
        }
    }

    /// Get or create the bucket for a group
    fn bucket_for(&mut self, group: Option<&GroupId>) -> usize {
        let group = match group {
            Some(g) => g,
            None => return 0,
        };

        if let Some(&pos) = self.group_to_bucket.get(group) {
            return pos;
        }

        let pos = self.buckets.len();
        self.group_to_bucket.insert(group.clone(), pos);
        self.buckets.push(Bucket {
            group: Some(group.clone()),
            members: Vec::new(),
        });

        pos
    }

    /// Place a node; returns false when it was already placed
    pub fn assign(&mut self, index: u32, group: Option<&GroupId>) -> Result<bool, ZoneError> {
        let node_count = self.assigned.len();
        let slot = self
            .assigned
            .get_mut(index as usize)
            .ok_or(ZoneError::UnknownNode { index, node_count })?;

        if *slot {
            return Ok(false);
        }
        *slot = true;

        let pos = self.bucket_for(group);
        self.buckets[pos].members.push(index);

        Ok(true)
    }

    /// Finish the pass
    pub fn build(self) -> Partition {
        Partition {
            buckets: self.buckets,
        }
    }
}

/// Partition the active nodes of a snapshot by group
pub fn partition_nodes(snapshot: &NodeSnapshot) -> Result<Partition, ZoneError> {
    let mut builder = PartitionBuilder::new(snapshot.node_count());

    for &idx in &snapshot.active {
        let node = snapshot.node(idx).ok_or(ZoneError::UnknownNode {
            index: idx,
            node_count: snapshot.node_count(),
        })?;

        if !builder.assign(idx, node.group.as_ref())? {
            log::debug!("Node {} listed more than once in active order", node.id);
        }
    }

    Ok(builder.build())
}
