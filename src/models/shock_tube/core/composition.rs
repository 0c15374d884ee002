//! Driver gas composition scans.
//!
//! Both scans sweep the mole fraction `X` of a two-species driver over an even
//! grid on `[0, 1]` and keep the sample closest to tailored operation. Samples
//! the driver cannot physically realize are dropped from the result.

mod config;
mod error;

pub use config::CompositionSearchConfig;
pub use error::CompositionSearchError;

use tracing::{debug, trace};
use uom::si::{
    f64::{MassDensity, Pressure, Velocity},
    mass_density::kilogram_per_cubic_meter,
    pressure::pascal,
    thermodynamic_temperature::kelvin,
    velocity::meter_per_second,
};

use crate::support::{
    gas::{Gas, GasError, GasProperties, Mixture},
    units::AcousticImpedance,
};

use super::{
    Known, MachSolveConfig, evaluate,
    grid::{linspace, min_abs_tau},
    input::validate_mach,
    relations::{Infeasible, PerfectGas, driver_pressure_ratio},
    solve_mach,
    states::{ExpandedDriver, IncidentShock, solve_states},
    tailoring::TAILORED_LIMIT,
};

/// One feasible driver composition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompositionSample {
    /// Mole fraction `X` of the mix species.
    pub fraction: f64,
    pub tau: f64,
    pub driver_pressure: Pressure,
    /// Driver heat capacity ratio.
    pub gamma: f64,
    /// Driver molecular weight, kg/kmol.
    pub molecular_weight: f64,
    /// Incident Mach number, when the scan derives it from a fixed driver pressure.
    pub mach: Option<f64>,
}

/// The best sample of a composition scan, with its resolved mixture.
#[derive(Debug, Clone, PartialEq)]
pub struct OptimalComposition {
    pub sample: CompositionSample,
    pub mixture: Mixture,
    pub properties: GasProperties,
    /// Percent composition, e.g. `"AIR/HE = 60.0/40.0"`.
    pub composition: String,
    /// `|τ| < 0.05`.
    pub is_tailored: bool,
}

impl OptimalComposition {
    fn new(sample: CompositionSample, base: Gas, mix: Gas) -> Result<Self, GasError> {
        let mixture = Mixture::new(base, mix, sample.fraction)?;
        Ok(Self {
            sample,
            mixture,
            properties: mixture.properties(),
            composition: mixture.composition(),
            is_tailored: sample.tau.abs() < TAILORED_LIMIT,
        })
    }
}

/// Outcome of a composition scan.
#[derive(Debug, Clone, PartialEq)]
pub struct CompositionSearch {
    /// Closest-to-tailored sample, or `None` when no composition is feasible.
    pub best: Option<OptimalComposition>,
    /// Feasible samples in ascending mole fraction.
    pub samples: Vec<CompositionSample>,
    /// State 2 impedance every sample is matched against, when fixed by the
    /// Mach number.
    pub target_impedance: Option<AcousticImpedance>,
    pub base: Gas,
    pub mix: Gas,
}

impl CompositionSearch {
    fn finish(
        samples: Vec<CompositionSample>,
        target_impedance: Option<AcousticImpedance>,
        config: &CompositionSearchConfig,
    ) -> Result<Self, CompositionSearchError> {
        let best = min_abs_tau(&samples, |sample| sample.tau)
            .map(|sample| OptimalComposition::new(*sample, config.base, config.mix))
            .transpose()?;

        match &best {
            Some(best) => debug!(
                fraction = best.sample.fraction,
                tau = best.sample.tau,
                feasible = samples.len(),
                "composition scan complete"
            ),
            None => debug!("composition scan found no feasible driver"),
        }

        Ok(Self {
            best,
            samples,
            target_impedance,
            base: config.base,
            mix: config.mix,
        })
    }
}

/// Scans driver compositions at a fixed incident Mach number.
///
/// State 2 depends only on the driven gas, so its impedance is the common
/// target. Each mole fraction yields the driver pressure needed for the shock
/// and the expanded driver impedance `Z3`.
///
/// # Errors
///
/// Returns [`CompositionSearchError::Input`] if `mach` does not exceed one or
/// a known pressure or temperature is not strictly positive, and
/// [`CompositionSearchError::Gas`] if a mixture cannot be formed at a grid
/// point.
///
/// # Example
///
/// ```
/// use shock_tailor::models::shock_tube::{
///     CompositionSearchConfig, Known, Section, search_composition,
/// };
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
/// let search = search_composition(4.5, &known, &CompositionSearchConfig::default()).unwrap();
/// let best = search.best.unwrap();
/// assert!((0.0..=1.0).contains(&best.sample.fraction));
/// ```
pub fn search_composition(
    mach: f64,
    known: &Known,
    config: &CompositionSearchConfig,
) -> Result<CompositionSearch, CompositionSearchError> {
    validate_mach(mach)?;
    known.validate()?;

    let driven_gas = PerfectGas::of(&known.driven_gas);
    let shock = IncidentShock::new(mach, known.driven, driven_gas);
    let z2 = shock.impedance();
    let t4 = known.driver_temperature.get::<kelvin>();

    let mut samples = Vec::with_capacity(config.samples);
    for fraction in linspace(0.0, 1.0, config.samples) {
        let mixture = Mixture::new(config.base, config.mix, fraction)?;
        let properties = mixture.properties();

        match sample_at_mach(&shock, driven_gas, t4, z2, &properties) {
            Ok((driver_pressure, tau)) => samples.push(CompositionSample {
                fraction,
                tau,
                driver_pressure: Pressure::new::<pascal>(driver_pressure),
                gamma: properties.gamma,
                molecular_weight: properties.molecular_weight,
                mach: None,
            }),
            Err(reason) => trace!(fraction, %reason, "composition sample excluded"),
        }
    }

    let target: AcousticImpedance = MassDensity::new::<kilogram_per_cubic_meter>(shock.rho2)
        * Velocity::new::<meter_per_second>(shock.a2);

    CompositionSearch::finish(samples, Some(target), config)
}

/// Returns `(p4 [Pa], τ)` for one driver gas at a fixed incident shock.
fn sample_at_mach(
    shock: &IncidentShock,
    driven_gas: PerfectGas,
    t4: f64,
    z2: f64,
    driver: &GasProperties,
) -> Result<(f64, f64), Infeasible> {
    let driver_gas = PerfectGas::of(driver);
    let a4 = driver_gas.sound_speed(t4);

    let p41 = driver_pressure_ratio(driven_gas, driver_gas, shock.a1, a4, shock.p21)?;
    let p4 = p41 * shock.p1;

    let ratio = shock.p2 / p4;
    if ratio.is_nan() || ratio > 1.0 {
        return Err(Infeasible::Compression { ratio });
    }

    let expanded = ExpandedDriver::new(shock.p2, p4, t4, driver_gas);
    Ok((p4, expanded.impedance() / z2 - 1.0))
}

/// Scans driver compositions at a fixed driver pressure.
///
/// Each mole fraction produces its own incident Mach number, recovered with
/// [`solve_mach`], so there is no common target impedance. Compositions whose
/// Mach solve fails are excluded.
///
/// # Errors
///
/// Returns [`CompositionSearchError::Input`] if a known pressure or
/// temperature is not strictly positive, and [`CompositionSearchError::Gas`]
/// if a mixture cannot be formed at a grid point.
pub fn search_composition_at_pressure(
    driver_pressure: Pressure,
    known: &Known,
    config: &CompositionSearchConfig,
    mach_config: &MachSolveConfig,
) -> Result<CompositionSearch, CompositionSearchError> {
    known.validate()?;

    let driver = known.driver_at(driver_pressure);

    let mut samples = Vec::with_capacity(config.samples);
    for fraction in linspace(0.0, 1.0, config.samples) {
        let mixture = Mixture::new(config.base, config.mix, fraction)?;
        let properties = mixture.properties();

        let mach = match solve_mach(driver_pressure, known, &properties, mach_config) {
            Ok(solution) => solution.mach,
            Err(error) => {
                trace!(fraction, %error, "composition sample excluded");
                continue;
            }
        };

        let states = solve_states(mach, known.driven, driver, &known.driven_gas, &properties);
        samples.push(CompositionSample {
            fraction,
            tau: evaluate(&states).tau,
            driver_pressure,
            gamma: properties.gamma,
            molecular_weight: properties.molecular_weight,
            mach: Some(mach),
        });
    }

    CompositionSearch::finish(samples, None, config)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::models::shock_tube::core::{
        InputError, ShockTubeInput, solve,
        test_support::{SCENARIO_DRIVER_PRESSURE, known_air, section},
    };

    fn air_helium(mach: f64) -> CompositionSearch {
        search_composition(mach, &known_air(), &CompositionSearchConfig::default())
            .expect("air/helium mixtures are valid")
    }

    #[test]
    fn best_is_no_worse_than_either_pure_gas() {
        let search = air_helium(4.5);

        assert_eq!(search.samples.len(), 101);
        assert_eq!(search.base, Gas::Air);
        assert_eq!(search.mix, Gas::Helium);

        let best = search.best.expect("scenario has feasible compositions");
        assert!((0.0..=1.0).contains(&best.sample.fraction));

        let first = search.samples.first().expect("pure air is feasible");
        let last = search.samples.last().expect("pure helium is feasible");
        assert_eq!(first.fraction, 0.0);
        assert_eq!(last.fraction, 1.0);
        assert!(best.sample.tau.abs() <= first.tau.abs());
        assert!(best.sample.tau.abs() <= last.tau.abs());
        assert_eq!(best.is_tailored, best.sample.tau.abs() < TAILORED_LIMIT);
    }

    #[test]
    fn best_sample_is_reported_with_its_mixture() {
        let best = air_helium(4.5).best.expect("scenario has feasible compositions");

        assert_eq!(best.mixture.fraction(), best.sample.fraction);
        assert_eq!(best.properties.gamma, best.sample.gamma);
        assert_eq!(best.composition, best.mixture.composition());
        assert!(best.composition.starts_with("AIR/HE = "));
    }

    #[test]
    fn scan_is_deterministic() {
        assert_eq!(air_helium(4.5), air_helium(4.5));
    }

    #[test]
    fn samples_match_the_full_state_solve() {
        let known = known_air();
        let search = air_helium(4.5);
        let sample = search.samples[40];

        let properties = Mixture::new(Gas::Air, Gas::Helium, sample.fraction)
            .expect("valid fraction")
            .properties();
        let states = solve(&ShockTubeInput {
            mach: 4.5,
            driven: known.driven,
            driver: known.driver_at(sample.driver_pressure),
            driven_gas: known.driven_gas.clone(),
            driver_gas: properties,
        });

        let target = search.target_impedance.expect("fixed Mach scans report Z2");
        assert_relative_eq!(
            target.value,
            states.state2.acoustic_impedance().value,
            max_relative = 1e-12
        );
        assert_relative_eq!(sample.tau, evaluate(&states).tau, epsilon = 1e-9);
    }

    #[test]
    fn infeasible_everywhere_yields_no_best() {
        let search = air_helium(30.0);

        assert!(search.samples.is_empty());
        assert!(search.best.is_none());
        assert!(search.target_impedance.is_some());
    }

    #[test]
    fn fixed_pressure_scan_reports_mach_numbers() {
        let search = search_composition_at_pressure(
            Pressure::new::<pascal>(SCENARIO_DRIVER_PRESSURE),
            &known_air(),
            &CompositionSearchConfig {
                samples: 11,
                ..CompositionSearchConfig::default()
            },
            &MachSolveConfig::default(),
        )
        .expect("air/helium mixtures are valid");

        assert_eq!(search.samples.len(), 11);
        assert!(search.target_impedance.is_none());
        assert!(search.samples.iter().all(|sample| sample.mach.is_some()));

        // Lighter drivers launch stronger shocks at the same pressure.
        let machs: Vec<f64> = search.samples.iter().filter_map(|s| s.mach).collect();
        assert!(machs.windows(2).all(|w| w[0] < w[1]));

        let best = search.best.expect("every composition is feasible");
        assert!(best.sample.mach.is_some());
    }

    #[test]
    fn scenario_b_reference_values() {
        let best = air_helium(4.5).best.expect("scenario has feasible compositions");

        assert_eq!(best.sample.fraction, 1.0);
        assert_eq!(best.composition, "AIR/HE = 0.0/100.0");
        assert_relative_eq!(
            best.sample.tau,
            0.506_856_328_878_560_6,
            max_relative = 1e-12
        );
        assert_relative_eq!(
            best.sample.driver_pressure.get::<pascal>(),
            31_854_061.862_033_445,
            max_relative = 1e-12
        );
        assert!(!best.is_tailored);
    }

    #[test]
    fn rejects_nan_mach() {
        let config = CompositionSearchConfig::default();
        let result = search_composition(f64::NAN, &known_air(), &config);

        assert!(matches!(
            result,
            Err(CompositionSearchError::Input(InputError::SubsonicShock { .. }))
        ));
    }

    #[test]
    fn rejects_non_positive_driven_pressure() {
        let known = Known {
            driven: section(-5.0, 300.0),
            ..known_air()
        };

        let at_mach = search_composition(4.5, &known, &CompositionSearchConfig::default());
        assert!(matches!(
            at_mach,
            Err(CompositionSearchError::Input(InputError::NonPositive { .. }))
        ));

        let at_pressure = search_composition_at_pressure(
            Pressure::new::<pascal>(SCENARIO_DRIVER_PRESSURE),
            &known,
            &CompositionSearchConfig::default(),
            &MachSolveConfig::default(),
        );
        assert!(matches!(
            at_pressure,
            Err(CompositionSearchError::Input(InputError::NonPositive { .. }))
        ));
    }
}
