//! Unit tangents used as boundary conditions for a fit.
//!
//! All indices are absolute indices into the full point slice.

use kurbo::{Point, Vec2};

use crate::geom::FitVec;

/// Tangent leaving `points[i]` toward its successor.
pub fn left(points: &[Point], i: usize) -> Vec2 {
    (points[i + 1] - points[i]).unit_or_zero()
}

/// Tangent leaving `points[i]` back toward its predecessor.
pub fn right(points: &[Point], i: usize) -> Vec2 {
    (points[i - 1] - points[i]).unit_or_zero()
}

/// Tangent at an interior split point `c`, pointing back along the path.
///
/// Averages the incoming and outgoing chords so both halves of a split
/// meet with the same direction (negated on the right half).
pub fn center(points: &[Point], c: usize) -> Vec2 {
    let before = points[c - 1] - points[c];
    let after = points[c] - points[c + 1];
    ((before + after) / 2.0).unit_or_zero()
}
