use thiserror::Error;

/// Errors that can occur while fitting or while reading point input.
///
/// Numeric degeneracies inside the fitter (coincident points, singular
/// systems, flat derivatives) are never reported here; they are absorbed
/// by the fitter itself.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum FitError {
    #[error("at least 2 points are required, got {count}")]
    TooFewPoints { count: usize },

    #[error("tolerance must be finite and positive, got {0}")]
    InvalidTolerance(f64),

    #[error("point {index} has a non-finite coordinate")]
    NonFinitePoint { index: usize },

    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}
