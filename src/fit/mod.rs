//! Recursive cubic fitting of digitized points.
//!
//! Per subrange:
//! 1. Two points: emit the one-third-handle cubic directly
//! 2. Chord-length parameterize and least-squares fit
//! 3. Close miss: refine the parameters with Newton-Raphson and refit
//! 4. Otherwise split at the worst point and fit both halves
//!
//! Based on Schneider, "An Algorithm for Automatically Fitting Digitized
//! Curves", Graphics Gems (1990).

pub mod bezier;
pub mod deviation;
pub mod least_squares;
pub mod param;
pub mod tangent;

use kurbo::{CubicBez, Point, Vec2};
use log::trace;

use crate::config::FitConfig;

/// Fit the whole of `points` with end tangents taken from the first and
/// last chords.
///
/// `points` must hold at least two points; validation happens in the
/// public entry points.
pub(crate) fn fit_cubics(points: &[Point], config: &FitConfig) -> Vec<CubicBez> {
    let last = points.len() - 1;
    let t_hat1 = tangent::left(points, 0);
    let t_hat2 = tangent::right(points, last);

    let mut out = Vec::new();
    fit_range(points, 0, last, t_hat1, t_hat2, config, &mut out);
    out
}

/// Fit `points[first..=last]`, appending the accepted segments to `out`
/// in path order.
///
/// `t_hat1` leaves `points[first]` into the subrange, `t_hat2` leaves
/// `points[last]` back into it. Every split index lies strictly inside
/// the subrange, so recursion ends at the two-point case.
fn fit_range(
    points: &[Point],
    first: usize,
    last: usize,
    t_hat1: Vec2,
    t_hat2: Vec2,
    config: &FitConfig,
    out: &mut Vec<CubicBez>,
) {
    if last - first + 1 == 2 {
        out.push(least_squares::wu_barsky(points[first], points[last], t_hat1, t_hat2));
        return;
    }

    let tolerance = config.tolerance;

    // ── Direct fit ──────────────────────────────────────
    let mut u = param::chord_length(points, first, last);
    let mut curve = least_squares::generate(points, first, last, &u, t_hat1, t_hat2);
    let mut worst = deviation::max_error(points, first, last, &curve, &u);
    if worst.distance < tolerance {
        trace!("fit [{first}, {last}] accepted, error {:.4}", worst.distance);
        out.push(curve);
        return;
    }

    // ── Refinement ──────────────────────────────────────
    if config.reparameterize && worst.distance < tolerance * tolerance {
        for iteration in 0..config.max_iterations {
            u = param::reparameterize(points, first, last, &u, &curve);
            curve = least_squares::generate(points, first, last, &u, t_hat1, t_hat2);
            worst = deviation::max_error(points, first, last, &curve, &u);
            if worst.distance < tolerance {
                trace!(
                    "fit [{first}, {last}] accepted after {} refinements, error {:.4}",
                    iteration + 1,
                    worst.distance,
                );
                out.push(curve);
                return;
            }
        }
    }

    // ── Split ───────────────────────────────────────────
    let split = worst.index;
    trace!(
        "fit [{first}, {last}] split at {split}, error {:.4} > {tolerance}",
        worst.distance,
    );
    let t_center = tangent::center(points, split);
    fit_range(points, first, split, t_hat1, t_center, config, out);
    fit_range(points, split, last, -t_center, t_hat2, config, out);
}
