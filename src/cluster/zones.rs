//! Per-pass orchestration: partition, then outline every community

use anyhow::Result;
use crate::cluster::{partition_nodes, Community, ZoneOptions};
use crate::error::ZoneError;
use crate::graph::NodeSnapshot;

/// Consumer of the communities computed in one pass (usually a renderer).
pub trait ZoneSink {
    /// Receive the communities of the latest pass, in first-seen group order
    fn accept(&mut self, communities: &[Community]) -> Result<()>;
}

/// Keeps the last accepted pass
impl ZoneSink for Vec<Community> {
    fn accept(&mut self, communities: &[Community]) -> Result<()> {
        self.clear();
        self.extend_from_slice(communities);
        Ok(())
    }
}

/// Computes community zones from the current node positions.
///
/// Holds no state between passes besides its options; every call to
/// [`solve`](Self::solve) starts from scratch.
#[derive(Debug, Clone, Default)]
pub struct CommunityZoneFinder {
    options: ZoneOptions,
}

impl CommunityZoneFinder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store options for later passes
    pub fn configure(&mut self, options: ZoneOptions) {
        if !options.reserved.is_empty() {
            log::debug!(
                "Storing {} zone option(s) with no effect: {:?}",
                options.reserved.len(),
                options.reserved.keys().collect::<Vec<_>>()
            );
        }
        self.options = options;
    }

    /// Options stored by the last `configure`
    pub fn options(&self) -> &ZoneOptions {
        &self.options
    }

    /// Run one full pass over the snapshot
    pub fn solve(&self, snapshot: &NodeSnapshot) -> Result<Vec<Community>, ZoneError> {
        let partition = partition_nodes(snapshot)?;
        log::debug!(
            "Partitioned {} active nodes into {} communities",
            snapshot.active_count(),
            partition.community_count()
        );

        partition
            .into_non_empty()
            .map(|bucket| Community::build(bucket.group, bucket.members, snapshot))
            .collect()
    }

    /// Run one pass and hand the result to `sink`.
    ///
    /// On failure the sink is not called, so it keeps the previous pass.
    pub fn solve_into<S: ZoneSink + ?Sized>(
        &self,
        snapshot: &NodeSnapshot,
        sink: &mut S,
    ) -> Result<usize> {
        let communities = self.solve(snapshot)?;
        sink.accept(&communities)?;
        Ok(communities.len())
    }
}
