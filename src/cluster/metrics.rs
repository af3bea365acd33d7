//! Zone statistics and metrics

use crate::cluster::Community;
use crate::graph::{GroupId, NodeSnapshot};
use serde::{Deserialize, Serialize};

/// Summary figures for one community zone
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZoneMetrics {
    /// Group of the zone; `None` for the default community
    pub group: Option<GroupId>,

    /// Number of members
    pub node_count: usize,

    /// Area enclosed by the straight-edged outline polygon
    pub outline_area: f64,

    /// Mean distance of members from the center
    pub mean_radius: f64,

    /// Whether every outline point is finite
    pub drawable: bool,
}

/// Calculate metrics for every community of a pass
pub fn calculate_zone_metrics(communities: &[Community], snapshot: &NodeSnapshot) -> Vec<ZoneMetrics> {
    communities
        .iter()
        .map(|community| ZoneMetrics {
            group: community.group.clone(),
            node_count: community.node_count,
            outline_area: outline_area(community),
            mean_radius: mean_radius(community, snapshot),
            drawable: community.outline.iter().all(|p| p.is_finite()),
        })
        .collect()
}

/// Shoelace area of the outline polygon
pub fn outline_area(community: &Community) -> f64 {
    let points = &community.outline;
    let n = points.len();

    let twice_area: f64 = (0..n)
        .map(|i| {
            let a = points[i];
            let b = points[(i + 1) % n];
            a.x * b.y - b.x * a.y
        })
        .sum();

    twice_area.abs() * 0.5
}

/// Mean distance of members from the community center
pub fn mean_radius(community: &Community, snapshot: &NodeSnapshot) -> f64 {
    if community.node_count == 0 {
        return 0.0;
    }

    let total: f64 = community
        .nodes(snapshot)
        .map(|node| (node.position() - community.center).length())
        .sum();

    total / community.node_count as f64
}
