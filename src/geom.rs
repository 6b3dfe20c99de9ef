//! Shared geometry utilities.
//!
//! The fitter works on plain kurbo values: `Point` for samples and
//! on-curve positions, `Vec2` for tangents and offsets. The few vector
//! operations kurbo does not provide in the form the fitter needs live in
//! [`FitVec`].

use kurbo::Vec2;

/// Stand-in for a zero divisor, and the cutoff below which a
/// dimensionless quantity counts as zero.
pub const NEAR_ZERO: f64 = 1e-11;

/// Whether the dimensionless value `x` is numerically zero.
///
/// Only for scale-free quantities. Lengths and other values carrying
/// coordinate units are compared against exactly 0.0, so tiny strokes
/// behave like large ones.
#[inline]
pub fn is_near_zero(x: f64) -> bool {
    x.abs() < NEAR_ZERO
}

/// Zero-safe vector operations used by the fitter.
pub trait FitVec: Sized {
    /// Unit vector in the same direction.
    ///
    /// A zero vector is returned unchanged instead of producing NaN.
    fn unit_or_zero(self) -> Self;

    /// Vector in the same direction with length `len`.
    ///
    /// A negative `len` flips the direction. A zero vector stays zero.
    fn with_length(self, len: f64) -> Self;
}

impl FitVec for Vec2 {
    fn unit_or_zero(self) -> Vec2 {
        let len = self.hypot();
        if len == 0.0 {
            return self;
        }
        self / len
    }

    fn with_length(self, len: f64) -> Vec2 {
        let current = self.hypot();
        if current == 0.0 {
            return self;
        }
        self * (len / current)
    }
}
