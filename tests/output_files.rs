use community_zones::cluster::ZoneSink;
use community_zones::config::Config;
use community_zones::viz::SvgZoneRenderer;
use community_zones::{data, storage, CommunityZoneFinder};
use serde_json::Value;
use std::fs;
use tempfile::tempdir;

const SNAPSHOT: &str = r#"{
    "nodes": [
        {"id": 1, "x": 10, "y": 0, "group": 5},
        {"id": 2, "x": -10, "y": 0, "group": 5},
        {"id": 3, "x": 0, "y": 10, "group": 5},
        {"id": 4, "x": 0, "y": -10, "group": 5},
        {"id": 5, "x": 100, "y": 100}
    ],
    "active": [1, 2, 3, 4, 5]
}"#;

#[test]
fn test_json_snapshot_round_trips_through_storage() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("frame.json");
    fs::write(&input, SNAPSHOT).unwrap();

    let snapshot = data::load_snapshot(input.to_str().unwrap()).unwrap();
    let communities = CommunityZoneFinder::new().solve(&snapshot).unwrap();

    let out = dir.path().join("out");
    storage::save_results(&communities, &snapshot, out.to_str().unwrap()).unwrap();

    let summary: Value =
        serde_json::from_str(&fs::read_to_string(out.join("summary.json")).unwrap()).unwrap();
    assert_eq!(summary["community_stats"]["community_count"], 2);
    assert_eq!(summary["community_stats"]["largest_community_size"], 4);
    assert_eq!(summary["snapshot"]["active_count"], 5);

    let first: Value = serde_json::from_str(
        &fs::read_to_string(out.join("communities").join("community_0.json")).unwrap(),
    )
    .unwrap();
    assert_eq!(first["group"], Value::Null);
    assert_eq!(first["members"], serde_json::json!(["5"]));
    assert_eq!(first["outline"].as_array().unwrap().len(), 12);

    let all: Value =
        serde_json::from_str(&fs::read_to_string(out.join("communities.json")).unwrap()).unwrap();
    assert_eq!(all["communities"][1]["group"], "5");
    assert_eq!(all["communities"][1]["node_count"], 4);
}

#[test]
fn test_svg_renderer_draws_every_zone() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("frame.json");
    fs::write(&input, SNAPSHOT).unwrap();

    let snapshot = data::load_snapshot(input.to_str().unwrap()).unwrap();
    let config = Config::default();
    let path = dir.path().join("render").join("zones.svg");

    let mut renderer = SvgZoneRenderer::new(&snapshot, &config, &path);
    let count = CommunityZoneFinder::new()
        .solve_into(&snapshot, &mut renderer)
        .unwrap();
    assert_eq!(count, 2);

    let svg = fs::read_to_string(&path).unwrap();
    assert!(svg.starts_with("<svg"));
    assert_eq!(svg.matches("class=\"zone\"").count(), 2);
    assert_eq!(svg.matches("class=\"node\"").count(), 5);
    assert!(svg.contains("data-default-group=\"true\""));
    assert!(svg.contains("data-group=\"5\""));
}

#[test]
fn test_unknown_extension_is_rejected() {
    assert!(data::load_snapshot("nodes.csv").is_err());
}
