//! Parameter estimates for the points of a subrange.
//!
//! A parameter array holds one `t` per point of `points[first..=last]`.
//! Every fitting attempt owns its array; refinement builds a new one.

use kurbo::{CubicBez, Point};

use super::bezier;
use crate::geom::NEAR_ZERO;

/// Chord-length parameterization of `points[first..=last]`.
///
/// Entry `i` is the cumulative distance from `points[first]` to
/// `points[first + i]`, divided by the total length, so the array runs
/// from 0.0 to 1.0 at any coordinate scale. Only if every point coincides
/// (total length exactly zero) is the divisor replaced by [`NEAR_ZERO`],
/// which leaves all entries at 0.0.
pub fn chord_length(points: &[Point], first: usize, last: usize) -> Vec<f64> {
    let mut u = Vec::with_capacity(last - first + 1);
    u.push(0.0);
    let mut total = 0.0;
    for pair in points[first..=last].windows(2) {
        total += pair[1].distance(pair[0]);
        u.push(total);
    }

    let denominator = if total == 0.0 { NEAR_ZERO } else { total };
    for t in u.iter_mut().skip(1) {
        *t /= denominator;
    }
    u
}

/// New parameter array with one Newton-Raphson step applied per point.
pub fn reparameterize(
    points: &[Point],
    first: usize,
    last: usize,
    u: &[f64],
    curve: &CubicBez,
) -> Vec<f64> {
    points[first..=last]
        .iter()
        .zip(u)
        .map(|(&p, &t)| newton_step(curve, p, t))
        .collect()
}

/// One Newton-Raphson step toward the parameter of the point on `curve`
/// closest to `p`, starting from `u`.
///
/// Solves `(Q(u) - p) . Q'(u) = 0`. The denominator carries squared
/// coordinate units, so it is replaced by [`NEAR_ZERO`] only when it is
/// exactly zero; the step is then taken as is.
pub fn newton_step(curve: &CubicBez, p: Point, u: f64) -> f64 {
    let q = bezier::control_points(curve);
    let q1: [Point; 3] = bezier::derivative(&q);
    let q2: [Point; 2] = bezier::derivative(&q1);

    let diff = bezier::eval(q, u) - p;
    let d1 = bezier::eval(q1, u).to_vec2();
    let d2 = bezier::eval(q2, u).to_vec2();

    let numerator = diff.dot(d1);
    let mut denominator = d1.dot(d1) + diff.dot(d2);
    if denominator == 0.0 {
        denominator = NEAR_ZERO;
    }
    u - numerator / denominator
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    fn pts(raw: &[(f64, f64)]) -> Vec<Point> {
        raw.iter().map(|&p| p.into()).collect()
    }

    #[test]
    fn chord_length_is_normalized() {
        let p = pts(&[(0.0, 0.0), (3.0, 4.0), (3.0, 9.0), (3.0, 10.0)]);
        let u = chord_length(&p, 0, 3);
        assert_eq!(u.len(), 4);
        assert_eq!(u[0], 0.0);
        // 5 + 5 + 1 = 11 total
        assert_relative_eq!(u[1], 5.0 / 11.0);
        assert_relative_eq!(u[2], 10.0 / 11.0);
        assert_relative_eq!(u[3], 1.0);
    }

    #[test]
    fn chord_length_on_subrange() {
        let p = pts(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0), (4.0, 0.0)]);
        let u = chord_length(&p, 1, 3);
        assert_eq!(u.len(), 3);
        assert_relative_eq!(u[1], 1.0 / 3.0);
        assert_relative_eq!(u[2], 1.0);
    }

    #[test]
    fn chord_length_ends_at_one_for_tiny_subranges() {
        let p = pts(&[(0.0, 0.0), (1e-12, 1e-12), (2e-12, 0.0)]);
        let u = chord_length(&p, 0, 2);
        assert_eq!(u[0], 0.0);
        assert_relative_eq!(u[1], 0.5);
        assert_eq!(*u.last().unwrap(), 1.0);
    }

    #[test]
    fn chord_length_of_coincident_points_is_finite() {
        let p = pts(&[(2.0, 2.0), (2.0, 2.0), (2.0, 2.0)]);
        let u = chord_length(&p, 0, 2);
        assert!(u.iter().all(|t| t.is_finite()));
        assert!(u.iter().all(|&t| t == 0.0));
    }

    #[test]
    fn newton_step_moves_toward_closest_point() {
        // Straight line from (0,0) to (3,0) with evenly spread handles: Q(t) = (3t, 0).
        let line = CubicBez::new((0.0, 0.0), (1.0, 0.0), (2.0, 0.0), (3.0, 0.0));
        let t = newton_step(&line, Point::new(1.5, 1.0), 0.2);
        assert_abs_diff_eq!(t, 0.5, epsilon = 1e-12);
    }

    #[test]
    fn newton_step_is_scale_independent() {
        // Same configuration as above shrunk by 1e-6: the denominator is 9e-12.
        let s = 1e-6;
        let line = CubicBez::new((0.0, 0.0), (s, 0.0), (2.0 * s, 0.0), (3.0 * s, 0.0));
        let t = newton_step(&line, Point::new(1.5 * s, s), 0.2);
        assert_abs_diff_eq!(t, 0.5, epsilon = 1e-9);
    }

    #[test]
    fn newton_step_survives_flat_curve() {
        let dot = CubicBez::new((1.0, 1.0), (1.0, 1.0), (1.0, 1.0), (1.0, 1.0));
        let t = newton_step(&dot, Point::new(1.0, 1.0), 0.3);
        assert!(t.is_finite());
        assert_abs_diff_eq!(t, 0.3);
    }

    #[test]
    fn reparameterize_keeps_length() {
        let line = CubicBez::new((0.0, 0.0), (1.0, 0.0), (2.0, 0.0), (3.0, 0.0));
        let p = pts(&[(0.0, 0.0), (1.0, 0.1), (3.0, 0.0)]);
        let u = chord_length(&p, 0, 2);
        let u2 = reparameterize(&p, 0, 2, &u, &line);
        assert_eq!(u2.len(), u.len());
        assert_abs_diff_eq!(u2[1], 1.0 / 3.0, epsilon = 1e-12);
    }
}
