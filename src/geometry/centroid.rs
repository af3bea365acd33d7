//! Center of mass of a node set

use crate::error::ZoneError;
use crate::geometry::Point2;

/// Arithmetic mean of `points`.
///
/// Empty input is rejected instead of producing NaN coordinates.
pub fn centroid(points: &[Point2]) -> Result<Point2, ZoneError> {
    if points.is_empty() {
        return Err(ZoneError::DegenerateInput {
            group: "<unnamed>".to_string(),
        });
    }

    let sum = points
        .iter()
        .fold(Point2::zero(), |acc, &p| acc + p);
    let n = points.len() as f64;

    Ok(Point2::new(sum.x / n, sum.y / n))
}
