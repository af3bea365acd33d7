//! Zone rendering module
//!
//! Draws each community as a soft closed shape: consecutive outline points
//! serve as quadratic control points, with the midpoints between them as
//! on-curve anchors, closing back to the first point.

use anyhow::Result;
use crate::cluster::{Community, ZoneSink};
use crate::config::Config;
use crate::geometry::Point2;
use crate::graph::NodeSnapshot;
use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

/// SVG path data for a closed, curved outline
pub fn zone_path(outline: &[Point2]) -> String {
    let n = outline.len();
    if n == 0 {
        return String::new();
    }

    let start = outline[n - 1].midpoint(outline[0]);
    let mut d = format!("M {:.3} {:.3}", start.x, start.y);

    for i in 0..n {
        let control = outline[i];
        let anchor = control.midpoint(outline[(i + 1) % n]);
        let _ = write!(
            d,
            " Q {:.3} {:.3} {:.3} {:.3}",
            control.x, control.y, anchor.x, anchor.y
        );
    }
    d.push_str(" Z");

    d
}

/// Escape text for use inside an XML attribute value
fn escape_xml_attr(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

/// Attribute naming the community a zone belongs to
fn group_attr(community: &Community) -> String {
    match &community.group {
        Some(group) => format!("data-group=\"{}\"", escape_xml_attr(group.as_str())),
        None => "data-default-group=\"true\"".to_string(),
    }
}

/// Fill colour for the community at `position`
fn zone_colour(position: usize) -> String {
    let hue = (position as f64 * 137.508) % 360.0;
    format!("hsl({:.0}, 65%, 55%)", hue)
}

/// Axis-aligned extent of everything that will be drawn
fn drawing_bounds(communities: &[Community], snapshot: &NodeSnapshot) -> Option<(Point2, Point2)> {
    let zone_points = communities
        .iter()
        .map(|c| c.absolute_outline())
        .filter(|outline| outline.iter().all(|p| p.is_finite()))
        .flat_map(|outline| outline.into_iter());
    let node_points = communities
        .iter()
        .flat_map(|c| c.nodes(snapshot))
        .map(|n| n.position());

    zone_points
        .chain(node_points)
        .filter(|p| p.is_finite())
        .fold(None, |bounds, p| match bounds {
            None => Some((p, p)),
            Some((lo, hi)) => Some((
                Point2::new(lo.x.min(p.x), lo.y.min(p.y)),
                Point2::new(hi.x.max(p.x), hi.y.max(p.y)),
            )),
        })
}

/// Render one pass as an SVG document
pub fn render_svg(communities: &[Community], snapshot: &NodeSnapshot, config: &Config) -> String {
    let (lo, hi) = drawing_bounds(communities, snapshot)
        .unwrap_or((Point2::zero(), Point2::zero()));
    let margin = config.canvas_margin;
    let width = (hi.x - lo.x) + 2.0 * margin;
    let height = (hi.y - lo.y) + 2.0 * margin;

    let mut svg = String::new();
    let _ = writeln!(
        svg,
        "<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"{:.3} {:.3} {:.3} {:.3}\">",
        lo.x - margin,
        lo.y - margin,
        width.max(1.0),
        height.max(1.0)
    );

    for (position, community) in communities.iter().enumerate() {
        let outline = community.absolute_outline();
        if !outline.iter().all(|p| p.is_finite()) {
            log::warn!("Skipping zone for community {}: non-finite outline", community.label());
            continue;
        }

        let _ = writeln!(
            svg,
            "  <path class=\"zone\" {} d=\"{}\" fill=\"{}\" fill-opacity=\"{:.2}\" stroke=\"none\"/>",
            group_attr(community),
            zone_path(&outline),
            zone_colour(position),
            config.zone_opacity
        );
    }

    for (position, community) in communities.iter().enumerate() {
        for node in community.nodes(snapshot) {
            let _ = writeln!(
                svg,
                "  <circle class=\"node\" cx=\"{:.3}\" cy=\"{:.3}\" r=\"{:.3}\" fill=\"{}\"/>",
                node.x,
                node.y,
                config.node_radius,
                zone_colour(position)
            );
        }
    }

    svg.push_str("</svg>\n");
    svg
}

/// Writes each accepted pass to an SVG file
pub struct SvgZoneRenderer<'a> {
    snapshot: &'a NodeSnapshot,
    config: &'a Config,
    path: PathBuf,
}

impl<'a> SvgZoneRenderer<'a> {
    pub fn new(snapshot: &'a NodeSnapshot, config: &'a Config, path: impl AsRef<Path>) -> Self {
        Self {
            snapshot,
            config,
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl ZoneSink for SvgZoneRenderer<'_> {
    fn accept(&mut self, communities: &[Community]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let svg = render_svg(communities, self.snapshot, self.config);
        fs::write(&self.path, svg)?;

        log::info!("Rendered {} zones to {}", communities.len(), self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cluster::CommunityZoneFinder;
    use crate::graph::{GroupId, NodeSnapshotBuilder};

    #[test]
    fn test_zone_path_is_closed_quadratic_chain() {
        let outline = [
            Point2::new(0.0, 10.0),
            Point2::new(10.0, 0.0),
            Point2::new(0.0, -10.0),
            Point2::new(-10.0, 0.0),
        ];
        let d = zone_path(&outline);

        assert!(d.starts_with("M -5.000 5.000"));
        assert_eq!(d.matches(" Q ").count(), 4);
        assert!(d.contains("Q 0.000 10.000 5.000 5.000"));
        assert!(d.ends_with("-5.000 5.000 Z"));
    }

    #[test]
    fn test_escape_xml_attr() {
        assert_eq!(escape_xml_attr("<>&\"'"), "&lt;&gt;&amp;&quot;&apos;");
        assert_eq!(escape_xml_attr("plain"), "plain");
    }

    #[test]
    fn test_group_names_are_escaped_in_svg() {
        let mut builder = NodeSnapshotBuilder::default();
        builder
            .add_node("n", 1.0, 2.0, Some(GroupId::from("x\"><script>")))
            .unwrap();
        builder.add_node("m", 5.0, 5.0, None).unwrap();
        let snapshot = builder.build();

        let communities = CommunityZoneFinder::new().solve(&snapshot).unwrap();
        let svg = render_svg(&communities, &snapshot, &Config::default());

        assert!(!svg.contains("<script>"));
        assert!(svg.contains("data-group=\"x&quot;&gt;&lt;script&gt;\""));
        assert!(svg.contains("data-default-group=\"true\""));
    }

    #[test]
    fn test_empty_outline_has_no_path() {
        assert_eq!(zone_path(&[]), "");
    }
}
