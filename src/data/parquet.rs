//! Parquet snapshot files
//!
//! Expected columns: `id`, `x`, `y` and an optional nullable `group`.
//! Every row is active, in file order.

use anyhow::{anyhow, Result};
use polars::prelude::*;
use crate::graph::{GroupId, NodeSnapshot, NodeSnapshotBuilder};

/// Load node positions and groups from a parquet file
pub fn load_node_snapshot(path: &str) -> Result<NodeSnapshot> {
    log::info!("Reading parquet file: {}", path);

    if !std::path::Path::new(path).exists() {
        return Err(anyhow!("File not found: {}", path));
    }

    let df = LazyFrame::scan_parquet(path, Default::default())?.collect()?;
    log::info!("File schema: {:?}", df.schema());

    // Normalise column types so numeric ids and integer coordinates load too
    let id_col = df.column("id")?.cast(&DataType::String)?;
    let x_col = df.column("x")?.cast(&DataType::Float64)?;
    let y_col = df.column("y")?.cast(&DataType::Float64)?;
    let group_col = match df.column("group") {
        Ok(col) => Some(col.cast(&DataType::String)?),
        Err(_) => {
            log::info!("No group column; all nodes go to the default community");
            None
        }
    };

    let ids = id_col.str()?;
    let xs = x_col.f64()?;
    let ys = y_col.f64()?;
    let groups = group_col.as_ref().map(|col| col.str()).transpose()?;

    let row_count = df.height();
    let mut builder = NodeSnapshotBuilder::with_capacity(row_count);

    for i in 0..row_count {
        let id = ids.get(i).ok_or_else(|| anyhow!("Row {} has no id", i))?;
        let x = xs.get(i).ok_or_else(|| anyhow!("Node {} has no x", id))?;
        let y = ys.get(i).ok_or_else(|| anyhow!("Node {} has no y", id))?;
        let group = groups.and_then(|g| g.get(i)).map(GroupId::from);

        builder.add_node(id, x, y, group)?;
    }

    let snapshot = builder.build();
    log::info!("Loaded {} nodes", snapshot.node_count());

    Ok(snapshot)
}
