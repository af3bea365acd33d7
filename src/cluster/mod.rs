//! Community partitioning and zone geometry

pub mod partition;
pub mod zones;
pub mod metrics;

use crate::error::ZoneError;
use crate::geometry::{centroid, project_outline, Point2, DIRECTION_COUNT};
use crate::graph::{GroupId, Node, NodeSnapshot};
use serde::{Deserialize, Serialize};

pub use partition::{partition_nodes, Bucket, Partition, PartitionBuilder};
pub use zones::{CommunityZoneFinder, ZoneSink};

/// Geometry of one community for a single pass
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Community {
    /// Shared group; `None` for the default community
    pub group: Option<GroupId>,

    /// Number of members
    pub node_count: usize,

    /// Members (node indices) in partition order
    pub members: Vec<u32>,

    /// Center of mass of the members
    pub center: Point2,

    /// Twelve offsets from `center`, in direction-table order
    pub outline: [Point2; DIRECTION_COUNT],
}

impl Community {
    /// Build the geometry for a bucket of member indices
    pub fn build(
        group: Option<GroupId>,
        members: Vec<u32>,
        snapshot: &NodeSnapshot,
    ) -> Result<Self, ZoneError> {
        let positions = members
            .iter()
            .map(|&idx| {
                snapshot
                    .node(idx)
                    .map(Node::position)
                    .ok_or(ZoneError::UnknownNode {
                        index: idx,
                        node_count: snapshot.node_count(),
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let center = centroid(&positions).map_err(|_| ZoneError::DegenerateInput {
            group: group_label(group.as_ref()),
        })?;
        let outline = project_outline(&positions, center);

        Ok(Self {
            group,
            node_count: members.len(),
            members,
            center,
            outline,
        })
    }

    /// Member nodes, in partition order
    pub fn nodes<'a>(&'a self, snapshot: &'a NodeSnapshot) -> impl Iterator<Item = &'a Node> + 'a {
        self.members.iter().filter_map(move |&idx| snapshot.node(idx))
    }

    /// Outline in world coordinates
    pub fn absolute_outline(&self) -> [Point2; DIRECTION_COUNT] {
        self.outline.map(|p| self.center + p)
    }

    /// Group name for log and error messages; outputs carry `group` itself
    pub fn label(&self) -> String {
        group_label(self.group.as_ref())
    }
}

/// Display name for a group in messages
pub fn group_label(group: Option<&GroupId>) -> String {
    match group {
        Some(g) => format!("`{}`", g),
        None => "<default>".to_string(),
    }
}

/// Options accepted by [`CommunityZoneFinder::configure`].
///
/// No option changes the computation yet; keys are stored as given.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ZoneOptions {
    #[serde(flatten)]
    pub reserved: serde_json::Map<String, serde_json::Value>,
}
