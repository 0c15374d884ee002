//! Incident Mach number and driver pressure related through the shock tube
//! equation.
//!
//! The forward direction (Mach number to required driver pressure) is closed
//! form. The inverse is solved iteratively by bisection on the Mach number.

mod config;
mod error;
mod problem;

pub use config::MachSolveConfig;
pub use error::MachError;

use tracing::debug;
use twine_solvers::equation::bisection;
use uom::si::{f64::Pressure, pressure::pascal, thermodynamic_temperature::kelvin};

use crate::support::gas::GasProperties;

use super::{
    Known, Section,
    relations::{Infeasible, PerfectGas, driver_pressure_ratio},
    states::IncidentShock,
};

use problem::{RequiredPressureModel, RequiredPressureProblem};

/// Driver pressure needed to launch a shock into fixed driven conditions.
#[derive(Debug, Clone, Copy)]
pub(super) struct RequiredPressure {
    driven: Section,
    driver_temperature: f64,
    driven_gas: PerfectGas,
    driver_gas: PerfectGas,
}

impl RequiredPressure {
    pub(super) fn new(known: &Known, driver_gas: &GasProperties) -> Self {
        Self {
            driven: known.driven,
            driver_temperature: known.driver_temperature.get::<kelvin>(),
            driven_gas: PerfectGas::of(&known.driven_gas),
            driver_gas: PerfectGas::of(driver_gas),
        }
    }

    /// Required driver pressure in Pa for an incident shock of Mach `mach`.
    pub(super) fn at(&self, mach: f64) -> Result<f64, Infeasible> {
        let shock = IncidentShock::new(mach, self.driven, self.driven_gas);
        let a4 = self.driver_gas.sound_speed(self.driver_temperature);
        let p41 = driver_pressure_ratio(self.driven_gas, self.driver_gas, shock.a1, a4, shock.p21)?;
        Ok(p41 * shock.p1)
    }
}

/// A Mach number paired with the driver pressure it requires, in Pa.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct DriverPressure {
    mach: f64,
    pressure: f64,
}

/// Converged incident Mach number for a given driver pressure.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MachSolution {
    pub mach: f64,
    pub iters: usize,
}

/// Returns the driver pressure that produces an incident shock of Mach `mach`.
///
/// Returns `None` when no finite driver pressure can, which happens when the
/// driver gas cannot expand fast enough to match the induced gas velocity, or
/// when a known pressure or temperature is not strictly positive.
///
/// # Example
///
/// ```
/// use shock_tailor::models::shock_tube::{Known, Section, driver_pressure_for_mach};
/// use shock_tailor::support::gas::Gas;
/// use uom::si::{f64::*, pressure::pascal, thermodynamic_temperature::kelvin};
///
/// let t = ThermodynamicTemperature::new::<kelvin>(300.0);
/// let known = Known {
///     driven: Section::new(Pressure::new::<pascal>(101_325.0), t),
///     driver_temperature: t,
///     driven_gas: Gas::Air.properties(),
/// };
///
/// let p4 = driver_pressure_for_mach(3.0, &known, &Gas::Helium.properties()).unwrap();
/// assert!(p4 > known.driven.pressure);
///
/// assert!(driver_pressure_for_mach(10.0, &known, &Gas::Air.properties()).is_none());
/// ```
#[must_use]
pub fn driver_pressure_for_mach(
    mach: f64,
    known: &Known,
    driver_gas: &GasProperties,
) -> Option<Pressure> {
    known.validate().ok()?;

    RequiredPressure::new(known, driver_gas)
        .at(mach)
        .ok()
        .map(Pressure::new::<pascal>)
}

/// Solves for the incident Mach number produced by a driver pressure.
///
/// Bisects on the Mach number over `[1, max_mach]`. Trial Mach numbers that no
/// driver pressure can reach are treated as requiring too much pressure.
///
/// # Errors
///
/// Returns [`MachError::Input`] if a known pressure or temperature is not
/// strictly positive, [`MachError::NoShock`] if the driver pressure does not
/// exceed the driven pressure, or a solver error if the bracket holds no root
/// or the iteration limit is reached.
pub fn solve_mach(
    driver_pressure: Pressure,
    known: &Known,
    driver_gas: &GasProperties,
    config: &MachSolveConfig,
) -> Result<MachSolution, MachError> {
    known.validate()?;

    if driver_pressure.is_nan() || driver_pressure <= known.driven.pressure {
        return Err(MachError::NoShock {
            driver: driver_pressure,
            driven: known.driven.pressure,
        });
    }

    let required = RequiredPressure::new(known, driver_gas);
    let model = RequiredPressureModel::new(&required);
    let problem = RequiredPressureProblem::new(driver_pressure.get::<pascal>());

    let solution = bisection::solve(
        &model,
        &problem,
        [1.0, config.max_mach],
        &config.bisection(),
        |event: &bisection::Event<'_, _, _>| {
            if event.result().is_err() {
                return Some(bisection::Action::assume_positive());
            }
            None
        },
    )?;

    if solution.status != bisection::Status::Converged {
        return Err(MachError::MaxIters {
            residual: Pressure::new::<pascal>(solution.residual),
            iters: solution.iters,
        });
    }

    let mach = solution.snapshot.output.mach;
    debug!(mach, iters = solution.iters, "incident Mach number converged");

    Ok(MachSolution {
        mach,
        iters: solution.iters,
    })
}
