//! JSON snapshot files
//!
//! ```json
//! { "nodes": [{ "id": 1, "x": 0.5, "y": -2.0, "group": 5 }], "active": [1] }
//! ```
//!
//! `group` may be missing or null; `active` defaults to every node in file
//! order. Ids and groups may be strings or numbers.

use anyhow::{anyhow, Result};
use crate::graph::{GroupId, NodeSnapshot, NodeSnapshotBuilder};
use serde::Deserialize;
use serde_json::Value;
use std::fs;

#[derive(Debug, Deserialize)]
struct RawSnapshot {
    nodes: Vec<RawNode>,
    #[serde(default)]
    active: Option<Vec<Value>>,
}

#[derive(Debug, Deserialize)]
struct RawNode {
    id: Value,
    x: f64,
    y: f64,
    #[serde(default)]
    group: Value,
}

/// Text form of a string or numeric identifier
fn identifier(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Parse a snapshot from JSON text
pub fn parse_node_snapshot(text: &str) -> Result<NodeSnapshot> {
    let raw: RawSnapshot = serde_json::from_str(text)?;

    let mut builder = NodeSnapshotBuilder::with_capacity(raw.nodes.len());
    for node in &raw.nodes {
        let id = identifier(&node.id)
            .ok_or_else(|| anyhow!("Node id must be a string or number, got {}", node.id))?;
        let group = match &node.group {
            Value::Null => None,
            other => Some(GroupId::from(identifier(other).ok_or_else(|| {
                anyhow!("Group of node {} must be a string or number", id)
            })?)),
        };
        builder.add_node(&id, node.x, node.y, group)?;
    }

    if let Some(active) = &raw.active {
        let ids = active
            .iter()
            .map(|v| identifier(v).ok_or_else(|| anyhow!("Active entry must be a node id, got {}", v)))
            .collect::<Result<Vec<_>>>()?;
        builder.set_active(&ids)?;
    }

    Ok(builder.build())
}

/// Load a snapshot from a JSON file
pub fn load_node_snapshot(path: &str) -> Result<NodeSnapshot> {
    log::info!("Reading JSON snapshot: {}", path);

    let text = fs::read_to_string(path)
        .map_err(|e| anyhow!("Failed to read {}: {}", path, e))?;
    let snapshot = parse_node_snapshot(&text)?;

    log::info!(
        "Loaded {} nodes ({} active)",
        snapshot.node_count(),
        snapshot.active_count()
    );

    Ok(snapshot)
}
