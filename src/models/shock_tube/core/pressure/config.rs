/// Grid settings for a driver pressure scan.
///
/// The scan spans `[lower_factor, upper_factor]` times the baseline driver
/// pressure required for the incident shock.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PressureSearchConfig {
    /// Number of evenly spaced pressures, endpoints included.
    pub samples: usize,

    pub lower_factor: f64,
    pub upper_factor: f64,

    /// Convergence tolerance on `|τ|` reserved for iterative refinement.
    ///
    /// The fixed grid does not consult it.
    pub tolerance: f64,

    /// Iteration limit reserved for iterative refinement.
    ///
    /// The fixed grid does not consult it.
    pub max_iters: usize,
}

impl Default for PressureSearchConfig {
    fn default() -> Self {
        Self {
            samples: 200,
            lower_factor: 0.5,
            upper_factor: 2.0,
            tolerance: 0.01,
            max_iters: 100,
        }
    }
}
