//! freehand-fit: digitized points → minimal cubic bezier paths.
//!
//! Converts freehand-drawn or traced point sequences into a short chain
//! of cubic bezier segments that stays within a given distance of every
//! input point.
//!
//! # Example
//!
//! ```
//! use freehand_fit::{fit_curve, kurbo::Point};
//!
//! let points = [Point::new(0.0, 0.0), Point::new(5.0, 4.0), Point::new(10.0, 0.0)];
//! let segments = fit_curve(&points, 0.5)?;
//! assert_eq!(segments[0].p0, points[0]);
//! assert_eq!(segments.last().unwrap().p3, points[2]);
//! # Ok::<(), freehand_fit::FitError>(())
//! ```

#![forbid(unsafe_code)]

mod config;
mod geom;

pub mod error;
pub mod eval;
pub mod fit;

// Point files and SVG documents are for the command-line tool; the
// fitting API above does not depend on them.
#[cfg(feature = "cli")]
pub mod input;
#[cfg(feature = "cli")]
pub mod output;

// Re-export kurbo so downstream users get the same version
// used in the returned segments and paths.
pub use kurbo;

pub use config::FitConfig;
pub use error::FitError;

use kurbo::{BezPath, CubicBez, Point};
use log::debug;
use rayon::prelude::*;

/// Fit `points` with cubic segments deviating at most `tolerance` from
/// every point, using default settings otherwise.
///
/// Segment `i` ends exactly where segment `i + 1` starts, and every
/// segment end point is one of the input points.
pub fn fit_curve(points: &[Point], tolerance: f64) -> Result<Vec<CubicBez>, FitError> {
    fit_curve_with(points, &FitConfig::with_tolerance(tolerance))
}

/// Like [`fit_curve`], with every setting taken from `config`.
pub fn fit_curve_with(points: &[Point], config: &FitConfig) -> Result<Vec<CubicBez>, FitError> {
    validate(points, config)?;
    let segments = fit::fit_cubics(points, config);
    debug!(
        "fitted {} points into {} segments (tolerance {})",
        points.len(),
        segments.len(),
        config.tolerance,
    );
    Ok(segments)
}

/// Fit `points` and return the result as a single open `BezPath`.
pub fn fit_path(points: &[Point], config: &FitConfig) -> Result<BezPath, FitError> {
    fit_curve_with(points, config).map(|segments| segments_to_path(&segments))
}

/// Fit independent strokes in parallel.
///
/// Results keep the order of `strokes`; a stroke that fails validation
/// does not affect the others.
pub fn fit_strokes(strokes: &[Vec<Point>], config: &FitConfig) -> Vec<Result<BezPath, FitError>> {
    strokes
        .par_iter()
        .map(|stroke| fit_path(stroke, config))
        .collect()
}

/// Chain cubic segments into one path: a `MoveTo` to the first start
/// point followed by one `CurveTo` per segment.
pub fn segments_to_path(segments: &[CubicBez]) -> BezPath {
    let mut path = BezPath::new();
    if let Some(first) = segments.first() {
        path.move_to(first.p0);
        for seg in segments {
            path.curve_to(seg.p1, seg.p2, seg.p3);
        }
    }
    path
}

/// Reject input the fitter has no meaning for.
fn validate(points: &[Point], config: &FitConfig) -> Result<(), FitError> {
    if points.len() < 2 {
        return Err(FitError::TooFewPoints { count: points.len() });
    }
    if !config.tolerance.is_finite() || config.tolerance <= 0.0 {
        return Err(FitError::InvalidTolerance(config.tolerance));
    }
    if let Some(index) = points.iter().position(|p| !p.is_finite()) {
        return Err(FitError::NonFinitePoint { index });
    }
    Ok(())
}
