/// All fitting parameters in one struct.
/// Adjustable at runtime (CLI flags, editor sliders).
#[derive(Debug, Clone, PartialEq)]
pub struct FitConfig {
    /// Maximum allowed distance between an input point and the fitted
    /// curve, in the units of the input coordinates.
    /// Smaller = more segments, closer fit.
    pub tolerance: f64,
    /// Newton-Raphson refinement rounds tried before a subrange is split.
    pub max_iterations: usize,
    /// If false, a failed direct fit is split immediately without
    /// trying to refine the parameterization first.
    pub reparameterize: bool,
}

impl FitConfig {
    /// Default settings with the given tolerance.
    pub fn with_tolerance(tolerance: f64) -> Self {
        Self {
            tolerance,
            ..Self::default()
        }
    }
}

impl Default for FitConfig {
    fn default() -> Self {
        Self {
            tolerance: 1.0,
            max_iterations: 4,
            reparameterize: true,
        }
    }
}
