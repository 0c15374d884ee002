use thiserror::Error;
use twine_solvers::equation::bisection;
use uom::si::f64::Pressure;

use crate::models::shock_tube::core::InputError;

/// Errors that can occur while solving for the incident Mach number.
#[derive(Debug, Error)]
pub enum MachError {
    /// A known pressure or temperature is not strictly positive.
    #[error("invalid solve input")]
    Input(#[from] InputError),

    /// The driver pressure does not exceed the driven pressure, so no shock forms.
    #[error("driver pressure {driver:?} must exceed driven pressure {driven:?}")]
    NoShock { driver: Pressure, driven: Pressure },

    /// The bisection solver encountered an error.
    #[error("bisection solver error")]
    Bisection(#[from] bisection::Error),

    /// The solver reached the iteration limit without converging.
    #[error("solver hit iteration limit: residual={residual:?}")]
    MaxIters {
        /// Best driver pressure residual achieved.
        residual: Pressure,

        /// Iteration count performed by the solver.
        iters: usize,
    },
}
