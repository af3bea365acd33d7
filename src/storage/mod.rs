//! Results persistence module

use anyhow::Result;
use crate::cluster::metrics::{calculate_zone_metrics, ZoneMetrics};
use crate::cluster::Community;
use crate::graph::NodeSnapshot;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use serde_json::{json, to_string_pretty};

/// Save zone results to the specified directory
pub fn save_results(
    communities: &[Community],
    snapshot: &NodeSnapshot,
    output_dir: &str,
) -> Result<()> {
    log::info!("Saving {} communities to {}", communities.len(), output_dir);

    fs::create_dir_all(output_dir)?;

    let metrics = calculate_zone_metrics(communities, snapshot);

    save_summary(communities, &metrics, snapshot, output_dir)?;
    save_communities(communities, &metrics, snapshot, output_dir)?;

    log::info!("Results saved successfully");

    Ok(())
}

/// Output directory for the `index`-th of `total` input snapshots.
///
/// A single input writes straight into `output_dir`; several inputs get
/// `<index>_<file stem>` subdirectories so equal stems never share one.
pub fn snapshot_output_dir(output_dir: &Path, input: &str, index: usize, total: usize) -> PathBuf {
    if total <= 1 {
        return output_dir.to_path_buf();
    }

    let stem = Path::new(input)
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "snapshot".to_string());

    output_dir.join(format!("{}_{}", index, stem))
}

/// Save summary information
fn save_summary(
    communities: &[Community],
    metrics: &[ZoneMetrics],
    snapshot: &NodeSnapshot,
    output_dir: &str,
) -> Result<()> {
    log::info!("Saving summary information");

    let path = Path::new(output_dir).join("summary.json");
    let mut file = File::create(path)?;

    let sizes = communities.iter().map(|c| c.node_count);
    let summary = json!({
        "snapshot": {
            "node_count": snapshot.node_count(),
            "active_count": snapshot.active_count(),
        },
        "community_stats": {
            "community_count": communities.len(),
            "largest_community_size": sizes.clone().max().unwrap_or(0),
            "smallest_community_size": sizes.clone().min().unwrap_or(0),
            "avg_community_size": sizes.sum::<usize>() as f64 /
                                  if communities.is_empty() { 1.0 } else { communities.len() as f64 },
            "undrawable_count": metrics.iter().filter(|m| !m.drawable).count(),
        }
    });

    file.write_all(to_string_pretty(&summary)?.as_bytes())?;

    Ok(())
}

/// Save individual community information
fn save_communities(
    communities: &[Community],
    metrics: &[ZoneMetrics],
    snapshot: &NodeSnapshot,
    output_dir: &str,
) -> Result<()> {
    log::info!("Saving individual community information");

    let communities_dir = Path::new(output_dir).join("communities");
    fs::create_dir_all(&communities_dir)?;

    for (position, (community, metric)) in communities.iter().zip(metrics).enumerate() {
        let path = communities_dir.join(format!("community_{}.json", position));
        let mut file = File::create(path)?;

        let member_ids: Vec<&str> = community.nodes(snapshot).map(|n| n.id.as_str()).collect();

        let community_json = json!({
            "position": position,
            "group": community.group,
            "node_count": community.node_count,
            "center": community.center,
            "outline": community.outline,
            "absolute_outline": community.absolute_outline(),
            "metrics": metric,
            "members": member_ids,
        });

        file.write_all(to_string_pretty(&community_json)?.as_bytes())?;
    }

    // All communities in one file, in pass order
    let all_path = Path::new(output_dir).join("communities.json");
    let mut all_file = File::create(all_path)?;

    let all_json = json!({
        "communities": communities.iter().zip(metrics).map(|(c, m)| {
            json!({
                "group": c.group,
                "node_count": c.node_count,
                "center": c.center,
                "outline": c.absolute_outline(),
                "outline_area": m.outline_area,
            })
        }).collect::<Vec<_>>()
    });

    all_file.write_all(to_string_pretty(&all_json)?.as_bytes())?;

    Ok(())
}
