//! Extremal projection of a node set onto the direction table.
//!
//! For every direction `d` and member offset `r = p - center`, the candidate
//! point is `q = (|r|² / (r·d)) · d`: where the ray along `d` meets the line
//! through the member perpendicular to `r`. Per direction the candidate with
//! the largest `|q.x|` is kept.
//!
//! # Selection rule
//!
//! - The accumulator starts at the center offset `(0, 0)` with signed
//!   distance 0.
//! - Every member with a finite scale `|r|² / (r·d)` takes part, including
//!   members behind the center (negative scale). Offsets perpendicular to `d`
//!   (infinite scale) and members sitting on the center (`0/0`) are skipped
//!   instead of letting ±∞ or NaN reach the outline.
//! - The primary key is `|q.x|`, compared strictly. Equal keys fall back to
//!   the larger signed distance along `d`.
//!
//! This is a heuristic, not a support function: the polygon does not have
//! to contain every member.

use crate::geometry::{Point2, DIRECTIONS, DIRECTION_COUNT};

/// Candidate kept for one direction.
#[derive(Clone, Copy)]
struct Extremum {
    point: Point2,
    distance: f64,
}

impl Extremum {
    const ORIGIN: Self = Self {
        point: Point2::zero(),
        distance: 0.0,
    };

    fn is_beaten_by(&self, point: Point2, distance: f64) -> bool {
        let (best, cand) = (self.point.x.abs(), point.x.abs());
        cand > best || (cand == best && distance > self.distance)
    }
}

/// Projects `points` around `center` onto the twelve directions.
///
/// Returned points are offsets relative to `center`, in direction-table
/// order. A member set of one collapses to twelve zero offsets.
pub fn project_outline(points: &[Point2], center: Point2) -> [Point2; DIRECTION_COUNT] {
    let mut best = [Extremum::ORIGIN; DIRECTION_COUNT];

    for &p in points {
        let r = p - center;
        let l2 = r.length_squared();

        for (slot, &d) in best.iter_mut().zip(DIRECTIONS.iter()) {
            let scale = l2 / r.dot(d);
            if !scale.is_finite() {
                continue;
            }

            let q = d * scale;
            if slot.is_beaten_by(q, scale) {
                *slot = Extremum {
                    point: q,
                    distance: scale,
                };
            }
        }
    }

    best.map(|e| e.point)
}
