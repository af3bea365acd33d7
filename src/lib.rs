//! Community partitioning and zone outlines for positioned graph nodes

pub mod config;
pub mod error;
pub mod geometry;
pub mod graph;
pub mod cluster;
pub mod data;
pub mod storage;
pub mod viz;

pub use anyhow::{Result, anyhow};
pub use cluster::{Community, CommunityZoneFinder, ZoneOptions, ZoneSink};
pub use error::ZoneError;
pub use geometry::{Point2, DIRECTIONS, DIRECTION_COUNT};
pub use graph::{GroupId, Node, NodeSnapshot, NodeSnapshotBuilder};
