//! Loading node snapshots from disk

pub mod json;
pub mod parquet;

use anyhow::{anyhow, Result};
use crate::graph::NodeSnapshot;
use std::path::Path;

/// Load a snapshot, choosing the reader by file extension
pub fn load_snapshot(path: &str) -> Result<NodeSnapshot> {
    let extension = Path::new(path)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase());

    match extension.as_deref() {
        Some("json") => json::load_node_snapshot(path),
        Some("parquet") => parquet::load_node_snapshot(path),
        _ => Err(anyhow!("Unsupported snapshot format: {}", path)),
    }
}
