//! Fit quality evaluation.
//!
//! Measures how far each input point lies from the fitted path, using
//! the true nearest point on any segment rather than the parameter the
//! fitter assigned to it.

use std::fmt;

use kurbo::{CubicBez, ParamCurveNearest, Point};

/// Accuracy passed to kurbo's nearest-point solver.
const NEAREST_ACCURACY: f64 = 1e-9;

/// Quality summary of one fitted stroke.
#[derive(Debug, Clone, PartialEq)]
pub struct FitReport {
    /// Number of input points.
    pub points: usize,
    /// Number of cubic segments in the fit.
    pub segments: usize,
    /// Largest distance from an input point to the path.
    pub max_deviation: f64,
    /// Mean distance from an input point to the path.
    pub mean_deviation: f64,
    /// Index of the point at `max_deviation`.
    pub worst_index: usize,
}

impl FitReport {
    /// Whether every input point lies within `tolerance` of the path.
    pub fn within(&self, tolerance: f64) -> bool {
        self.max_deviation <= tolerance
    }
}

/// Compare `points` against the fitted `segments`.
///
/// An empty `segments` slice leaves every deviation at infinity.
pub fn evaluate(points: &[Point], segments: &[CubicBez]) -> FitReport {
    let mut max_deviation: f64 = 0.0;
    let mut worst_index = 0;
    let mut sum = 0.0;

    for (i, &p) in points.iter().enumerate() {
        let d = distance_to_path(p, segments);
        sum += d;
        if d > max_deviation {
            max_deviation = d;
            worst_index = i;
        }
    }

    let mean_deviation = if points.is_empty() {
        0.0
    } else {
        sum / points.len() as f64
    };

    FitReport {
        points: points.len(),
        segments: segments.len(),
        max_deviation,
        mean_deviation,
        worst_index,
    }
}

/// Distance from `p` to the closest point on any of `segments`.
pub fn distance_to_path(p: Point, segments: &[CubicBez]) -> f64 {
    segments
        .iter()
        .map(|seg| seg.nearest(p, NEAREST_ACCURACY).distance_sq)
        .fold(f64::INFINITY, f64::min)
        .sqrt()
}

impl fmt::Display for FitReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "  Fit         {} points \u{2192} {} segments",
            self.points, self.segments,
        )?;
        writeln!(
            f,
            "  Deviation   max {:.4} (point {})  mean {:.4}",
            self.max_deviation, self.worst_index, self.mean_deviation,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn distance_to_straight_segment() {
        let line = CubicBez::new((0.0, 0.0), (1.0, 0.0), (2.0, 0.0), (3.0, 0.0));
        let d = distance_to_path(Point::new(1.5, 2.0), &[line]);
        assert_abs_diff_eq!(d, 2.0, epsilon = 1e-6);
    }

    #[test]
    fn report_finds_worst_point() {
        let line = CubicBez::new((0.0, 0.0), (1.0, 0.0), (2.0, 0.0), (3.0, 0.0));
        let points = [
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.5),
            Point::new(2.0, -1.0),
            Point::new(3.0, 0.0),
        ];
        let report = evaluate(&points, &[line]);
        assert_eq!(report.points, 4);
        assert_eq!(report.segments, 1);
        assert_eq!(report.worst_index, 2);
        assert_abs_diff_eq!(report.max_deviation, 1.0, epsilon = 1e-6);
        assert_abs_diff_eq!(report.mean_deviation, 0.375, epsilon = 1e-6);
        assert!(report.within(1.0 + 1e-6));
        assert!(!report.within(0.5));
    }

    #[test]
    fn display_is_two_lines() {
        let report = FitReport {
            points: 10,
            segments: 2,
            max_deviation: 0.25,
            mean_deviation: 0.1,
            worst_index: 4,
        };
        let text = report.to_string();
        assert_eq!(text.lines().count(), 2);
        assert!(text.contains("10 points"));
        assert!(text.contains("max 0.2500 (point 4)"));
    }
}
