use community_zones::cluster::partition_nodes;
use community_zones::geometry::{centroid, project_outline};
use community_zones::{
    CommunityZoneFinder, GroupId, NodeSnapshot, NodeSnapshotBuilder, Point2, DIRECTION_COUNT,
};

fn snapshot_of(nodes: &[(&str, f64, f64, Option<&str>)]) -> NodeSnapshot {
    let mut builder = NodeSnapshotBuilder::with_capacity(nodes.len());
    for &(id, x, y, group) in nodes {
        builder.add_node(id, x, y, group.map(GroupId::from)).unwrap();
    }
    builder.build()
}

#[test]
fn test_centroid_is_component_mean() {
    let c = centroid(&[
        Point2::new(0.0, 0.0),
        Point2::new(4.0, 0.0),
        Point2::new(0.0, 4.0),
    ])
    .unwrap();

    assert!((c.x - 4.0 / 3.0).abs() < 1e-12);
    assert!((c.y - 4.0 / 3.0).abs() < 1e-12);
}

#[test]
fn test_outline_length_is_fixed() {
    for n in [1usize, 2, 7] {
        let points: Vec<Point2> = (0..n)
            .map(|i| Point2::new(i as f64 * 3.0, (i * i) as f64))
            .collect();
        let center = centroid(&points).unwrap();
        assert_eq!(project_outline(&points, center).len(), DIRECTION_COUNT);
    }
}

#[test]
fn test_partition_example_uses_default_bucket() {
    let mut snapshot = snapshot_of(&[
        ("1", 0.0, 0.0, Some("5")),
        ("2", 1.0, 0.0, Some("5")),
        ("3", 2.0, 0.0, None),
    ]);
    snapshot.active = vec![0, 1, 2];

    let partition = partition_nodes(&snapshot).unwrap();
    assert_eq!(partition.community_count(), 2);

    let communities = CommunityZoneFinder::new().solve(&snapshot).unwrap();
    let members: Vec<Vec<&str>> = communities
        .iter()
        .map(|c| c.nodes(&snapshot).map(|n| n.id.as_str()).collect())
        .collect();

    assert_eq!(members, vec![vec!["3"], vec!["1", "2"]]);
    assert_eq!(communities[0].group, None);
    assert_eq!(communities[1].group, Some(GroupId::from("5")));
}

#[test]
fn test_square_community_is_label_independent() {
    let labelled = |order: [usize; 4]| {
        let corners = [(10.0, 0.0), (-10.0, 0.0), (0.0, 10.0), (0.0, -10.0)];
        let names = ["p", "q", "r", "s"];
        let nodes: Vec<(&str, f64, f64, Option<&str>)> = order
            .iter()
            .zip(names)
            .map(|(&k, name)| (name, corners[k].0, corners[k].1, Some("sq")))
            .collect();
        snapshot_of(&nodes)
    };

    let finder = CommunityZoneFinder::new();
    let reference = finder.solve(&labelled([0, 1, 2, 3])).unwrap();
    let outline = reference[0].outline;

    assert_eq!(outline[0], Point2::new(0.0, 10.0));
    assert_eq!(outline[3], Point2::new(10.0, 0.0));
    assert_eq!(outline[6], Point2::new(0.0, -10.0));
    assert_eq!(outline[9], Point2::new(-10.0, 0.0));

    for order in [[3, 2, 1, 0], [2, 0, 3, 1], [1, 3, 0, 2]] {
        let other = finder.solve(&labelled(order)).unwrap();
        assert_eq!(other[0].outline, outline);
        assert_eq!(other[0].center, reference[0].center);
    }
}

#[test]
fn test_repeated_solves_are_identical() {
    let snapshot = snapshot_of(&[
        ("a", 1.25, -3.5, Some("x")),
        ("b", 7.0, 2.0, Some("x")),
        ("c", -4.0, 9.5, Some("x")),
        ("d", 40.0, 40.0, Some("y")),
        ("e", 44.5, 31.0, Some("y")),
    ]);
    let finder = CommunityZoneFinder::new();

    let first = finder.solve(&snapshot).unwrap();
    let second = finder.solve(&snapshot).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_regrouping_one_node_leaves_other_zones_alone() {
    let mut snapshot = snapshot_of(&[
        ("a1", 0.0, 0.0, Some("a")),
        ("a2", 8.0, 3.0, Some("a")),
        ("b1", 30.0, 30.0, Some("b")),
        ("b2", 36.0, 28.0, Some("b")),
        ("b3", 33.0, 40.0, Some("b")),
        ("c1", -30.0, 10.0, Some("c")),
        ("c2", -26.0, 18.0, Some("c")),
    ]);
    let finder = CommunityZoneFinder::new();
    let before = finder.solve(&snapshot).unwrap();

    snapshot.node_mut("b3").unwrap().group = Some(GroupId::from("c"));
    let after = finder.solve(&snapshot).unwrap();

    let find = |list: &[community_zones::Community], g: &str| {
        list.iter()
            .find(|c| c.group.as_ref().map(|x| x.as_str()) == Some(g))
            .cloned()
            .unwrap()
    };

    assert_eq!(find(&before, "a"), find(&after, "a"));
    assert_ne!(find(&before, "b").outline, find(&after, "b").outline);
    assert_ne!(find(&before, "c").outline, find(&after, "c").outline);
}

#[test]
fn test_member_behind_center_shapes_outline() {
    let snapshot = snapshot_of(&[
        ("near", 2.0, 0.0, Some("g")),
        ("up", -1.0, 10.0, Some("g")),
        ("down", -1.0, -10.0, Some("g")),
    ]);

    let communities = CommunityZoneFinder::new().solve(&snapshot).unwrap();
    let zone = &communities[0];

    assert_eq!(zone.center, Point2::zero());
    assert_eq!(zone.outline[3], Point2::new(-101.0, 0.0));
    assert_eq!(zone.outline[3].x.abs(), 101.0);
    assert!(zone.outline.iter().all(|p| p.is_finite()));
}
