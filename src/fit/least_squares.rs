//! Least-squares cubic through a subrange with fixed end tangents.
//!
//! The end points are pinned to the subrange ends; only the handle
//! lengths `alpha_l` and `alpha_r` along `t_hat1` and `t_hat2` are
//! solved for, from the 2x2 normal equations (Cramer's rule).

use kurbo::{CubicBez, Point, Vec2};

use crate::geom::{is_near_zero, FitVec, NEAR_ZERO};

/// Handle lengths below this fall back to [`wu_barsky`].
/// A zero handle makes the curve's derivative vanish at an end, which
/// stalls Newton-Raphson refinement.
const MIN_ALPHA: f64 = 1.0e-6;

// ── Bernstein basis ──────────────────────────────────────

fn b0(u: f64) -> f64 {
    let s = 1.0 - u;
    s * s * s
}

fn b1(u: f64) -> f64 {
    let s = 1.0 - u;
    3.0 * u * s * s
}

fn b2(u: f64) -> f64 {
    let s = 1.0 - u;
    3.0 * u * u * s
}

fn b3(u: f64) -> f64 {
    u * u * u
}

// ── Fitting ──────────────────────────────────────────────

/// Best-fit cubic for `points[first..=last]` given the parameters `u`
/// (one per point) and the unit end tangents.
///
/// Falls back to [`wu_barsky`] when either solved handle length is
/// negative or too small.
pub fn generate(
    points: &[Point],
    first: usize,
    last: usize,
    u: &[f64],
    t_hat1: Vec2,
    t_hat2: Vec2,
) -> CubicBez {
    let p_first = points[first];
    let p_last = points[last];

    let mut c = [[0.0; 2]; 2];
    let mut x = [0.0; 2];

    for (&p, &t) in points[first..=last].iter().zip(u) {
        let a0 = t_hat1.with_length(b1(t));
        let a1 = t_hat2.with_length(b2(t));

        c[0][0] += a0.dot(a0);
        c[0][1] += a0.dot(a1);
        c[1][1] += a1.dot(a1);

        let on_chord = p_first.to_vec2() * (b0(t) + b1(t)) + p_last.to_vec2() * (b2(t) + b3(t));
        let tmp = p.to_vec2() - on_chord;
        x[0] += a0.dot(tmp);
        x[1] += a1.dot(tmp);
    }
    c[1][0] = c[0][1];

    let mut det_c0_c1 = c[0][0] * c[1][1] - c[1][0] * c[0][1];
    let det_c0_x = c[0][0] * x[1] - c[0][1] * x[0];
    let det_x_c1 = x[0] * c[1][1] - x[1] * c[0][1];

    if is_near_zero(det_c0_c1) {
        det_c0_c1 = c[0][0] * c[1][1] * NEAR_ZERO;
    }
    if is_near_zero(det_c0_c1) {
        det_c0_c1 = NEAR_ZERO;
    }
    let alpha_l = det_x_c1 / det_c0_c1;
    let alpha_r = det_c0_x / det_c0_c1;

    // Also catches NaN: every comparison with NaN is false.
    if !(alpha_l >= MIN_ALPHA && alpha_r >= MIN_ALPHA) {
        return wu_barsky(p_first, p_last, t_hat1, t_hat2);
    }

    CubicBez::new(
        p_first,
        p_first + t_hat1.with_length(alpha_l),
        p_last + t_hat2.with_length(alpha_r),
        p_last,
    )
}

/// Heuristic cubic from `p0` to `p3`: both handles one third of the
/// chord length along their tangents.
pub fn wu_barsky(p0: Point, p3: Point, t_hat1: Vec2, t_hat2: Vec2) -> CubicBez {
    let dist = p3.distance(p0) / 3.0;
    CubicBez::new(
        p0,
        p0 + t_hat1.with_length(dist),
        p3 + t_hat2.with_length(dist),
        p3,
    )
}
