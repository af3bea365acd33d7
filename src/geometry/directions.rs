//! The fixed direction table sampled by the outline projector.
//!
//! Twelve unit vectors, 30° apart, starting at 90° and turning clockwise
//! (θ_j = 90° − 30°·j). Renderers connect outline points in this order, so
//! the order is part of the output contract.

use crate::geometry::Point2;

/// Number of sampled directions (and outline points per community).
pub const DIRECTION_COUNT: usize = 12;

const HALF: f64 = 0.5;
const SQRT3_2: f64 = 0.866_025_403_784_438_6;

/// Unit vectors in outline order.
///
/// Exact canonical values rather than `sin_cos` results, so axis-aligned
/// directions have components of exactly 0 and ±1.
pub const DIRECTIONS: [Point2; DIRECTION_COUNT] = [
    Point2::new(0.0, 1.0),         // 90°
    Point2::new(HALF, SQRT3_2),    // 60°
    Point2::new(SQRT3_2, HALF),    // 30°
    Point2::new(1.0, 0.0),         // 0°
    Point2::new(SQRT3_2, -HALF),   // -30°
    Point2::new(HALF, -SQRT3_2),   // -60°
    Point2::new(0.0, -1.0),        // -90°
    Point2::new(-HALF, -SQRT3_2),  // -120°
    Point2::new(-SQRT3_2, -HALF),  // -150°
    Point2::new(-1.0, 0.0),        // -180°
    Point2::new(-SQRT3_2, HALF),   // -210°
    Point2::new(-HALF, SQRT3_2),   // -240°
];
