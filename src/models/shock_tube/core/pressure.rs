//! Driver pressure scan for a fixed driver gas.

mod config;
mod error;

pub use config::PressureSearchConfig;
pub use error::PressureSearchError;

use tracing::{debug, trace};
use uom::si::{f64::Pressure, pressure::pascal};

use crate::support::gas::GasProperties;

use super::{
    Known, ShockTubeStates, TailoredResult, evaluate,
    grid::{linspace, min_abs_tau},
    input::validate_mach,
    mach::RequiredPressure,
    states::solve_states,
};

/// One driver pressure and its tailoring parameter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PressureSample {
    pub driver_pressure: Pressure,
    pub tau: f64,
}

/// Outcome of a driver pressure scan.
#[derive(Debug, Clone, PartialEq)]
pub struct PressureSearch {
    /// Driver pressure with the smallest `|τ|`.
    pub best_pressure: Pressure,
    /// Driver pressure the shock tube equation requires for the Mach number.
    pub baseline: Pressure,
    /// Tailoring evaluation at `best_pressure`.
    pub tailored: TailoredResult,
    /// Full states at `best_pressure`.
    pub states: ShockTubeStates,
    /// Every grid point in ascending pressure.
    pub samples: Vec<PressureSample>,
}

/// Scans driver pressures around the baseline for the one closest to tailored.
///
/// Every grid point is run through the full state solve at the fixed Mach
/// number. If no grid point yields a finite `τ` the baseline is reported.
///
/// # Errors
///
/// Returns [`PressureSearchError::Input`] if `mach` does not exceed one or a
/// known pressure or temperature is not strictly positive, and
/// [`PressureSearchError::NoBaseline`] if the driver gas cannot produce the
/// incident shock at any pressure.
///
/// # Example
///
/// ```
/// use shock_tailor::models::shock_tube::{Known, PressureSearchConfig, Section, search_pressure};
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
/// let search = search_pressure(
///     4.58,
///     &known,
///     &Gas::Hydrogen.properties(),
///     &PressureSearchConfig::default(),
/// )
/// .unwrap();
///
/// assert_eq!(search.samples.len(), 200);
/// assert!(search.tailored.tau.abs() <= search.samples[0].tau.abs());
/// ```
pub fn search_pressure(
    mach: f64,
    known: &Known,
    driver_gas: &GasProperties,
    config: &PressureSearchConfig,
) -> Result<PressureSearch, PressureSearchError> {
    validate_mach(mach)?;
    known.validate()?;

    let baseline = RequiredPressure::new(known, driver_gas)
        .at(mach)
        .map_err(|reason| {
            trace!(mach, %reason, "no baseline driver pressure");
            PressureSearchError::NoBaseline { mach }
        })?;

    let solve_at = |pressure: f64| {
        solve_states(
            mach,
            known.driven,
            known.driver_at(Pressure::new::<pascal>(pressure)),
            &known.driven_gas,
            driver_gas,
        )
    };

    let samples: Vec<PressureSample> = linspace(
        baseline * config.lower_factor,
        baseline * config.upper_factor,
        config.samples,
    )
    .map(|pressure| PressureSample {
        driver_pressure: Pressure::new::<pascal>(pressure),
        tau: evaluate(&solve_at(pressure)).tau,
    })
    .collect();

    let best_pressure = min_abs_tau(&samples, |sample| sample.tau)
        .map_or(baseline, |sample| sample.driver_pressure.get::<pascal>());

    let states = solve_at(best_pressure);
    let tailored = evaluate(&states);

    debug!(
        best_pressure,
        baseline,
        tau = tailored.tau,
        "pressure scan complete"
    );

    Ok(PressureSearch {
        best_pressure: Pressure::new::<pascal>(best_pressure),
        baseline: Pressure::new::<pascal>(baseline),
        tailored,
        states,
        samples,
    })
}
