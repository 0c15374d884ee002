use twine_solvers::equation::bisection;
use uom::si::{f64::Pressure, pressure::pascal};

/// Solver configuration for recovering an incident Mach number from a driver
/// pressure.
#[derive(Debug, Clone, Copy)]
pub struct MachSolveConfig {
    /// Maximum iteration count for the bisection solve.
    pub max_iters: usize,

    /// Absolute tolerance on the Mach number.
    pub mach_tol: f64,

    /// Absolute tolerance for the pressure residual (required - target).
    pub pressure_tol: Pressure,

    /// Upper end of the Mach number bracket.
    pub max_mach: f64,
}

impl Default for MachSolveConfig {
    fn default() -> Self {
        Self {
            max_iters: 100,
            mach_tol: 1e-10,
            pressure_tol: Pressure::new::<pascal>(1e-6),
            max_mach: 20.0,
        }
    }
}

impl MachSolveConfig {
    /// Converts this configuration into a bisection solver configuration.
    pub(super) fn bisection(&self) -> bisection::Config {
        bisection::Config {
            max_iters: self.max_iters,
            x_abs_tol: self.mach_tol,
            x_rel_tol: 0.0,
            residual_tol: self.pressure_tol.get::<pascal>(),
        }
    }
}
