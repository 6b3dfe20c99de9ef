//! How far a subrange strays from its fitted cubic.
//!
//! Distances are measured at each point's current parameter, not to the
//! nearest point on the curve; the fitter uses the worst one both as its
//! acceptance test and as the place to split.

use kurbo::{CubicBez, Point};

use super::bezier;

/// Worst deviation of a subrange from a fitted cubic.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MaxError {
    /// Euclidean distance (not squared) from the worst point to the curve
    /// evaluated at that point's parameter.
    pub distance: f64,
    /// Absolute index of the worst point; always strictly inside the
    /// subrange when it has interior points.
    pub index: usize,
}

/// Measure how far the interior points of `points[first..=last]` lie from
/// `curve` at their parameters `u`.
///
/// The end points are skipped since the fit pins them. On ties the later
/// point wins. A NaN distance counts as infinitely far.
pub fn max_error(points: &[Point], first: usize, last: usize, curve: &CubicBez, u: &[f64]) -> MaxError {
    let mut worst = MaxError {
        distance: 0.0,
        index: first + (last - first + 1) / 2,
    };
    for i in first + 1..last {
        let on_curve = bezier::eval_cubic(curve, u[i - first]);
        let mut dist = on_curve.distance(points[i]);
        if dist.is_nan() {
            // A diverged parameter must never pass as a good fit.
            dist = f64::INFINITY;
        }
        if dist >= worst.distance {
            worst = MaxError { distance: dist, index: i };
        }
    }
    worst
}
