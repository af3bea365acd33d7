//! Configuration management for the zone tool

/// Rendering and output settings
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Empty space kept around the drawing, in layout units
    pub canvas_margin: f64,

    /// Radius of the dot drawn for each node
    pub node_radius: f64,

    /// Fill opacity of community zones (0.0-1.0)
    pub zone_opacity: f64,

    /// Only write JSON results, no SVG
    pub skip_render: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            canvas_margin: 40.0,
            node_radius: 4.0,
            zone_opacity: 0.2,
            skip_render: false,
        }
    }
}

impl Config {
    /// Create a new configuration with custom values
    pub fn new(
        canvas_margin: f64,
        node_radius: f64,
        zone_opacity: f64,
        skip_render: bool,
    ) -> Self {
        Self {
            canvas_margin,
            node_radius,
            zone_opacity: zone_opacity.clamp(0.0, 1.0),
            skip_render,
        }
    }
}
