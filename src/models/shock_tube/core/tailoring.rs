//! Tailored-condition evaluation from the acoustic impedance mismatch at the
//! contact surface.

use std::fmt;

use uom::si::ratio::ratio;

use crate::support::units::AcousticImpedance;

use super::ShockTubeStates;

/// Largest `|τ|` considered tailored.
pub const TAILORED_LIMIT: f64 = 0.05;

/// Largest `|τ|` considered near-tailored.
pub const NEAR_TAILORED_LIMIT: f64 = 0.15;

/// Tailoring quality bucket for a tailoring parameter `τ`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Classification {
    /// `|τ| < 0.05`
    Tailored,
    /// `0.05 ≤ |τ| < 0.15`
    NearTailored,
    /// `τ ≥ 0.15`
    OverTailored,
    /// `τ ≤ −0.15`
    UnderTailored,
}

impl Classification {
    /// Buckets a tailoring parameter.
    ///
    /// A NaN `τ` fails every comparison and lands in [`Self::UnderTailored`].
    #[must_use]
    pub fn from_tau(tau: f64) -> Self {
        let magnitude = tau.abs();
        if magnitude < TAILORED_LIMIT {
            Self::Tailored
        } else if magnitude < NEAR_TAILORED_LIMIT {
            Self::NearTailored
        } else if tau > 0.0 {
            Self::OverTailored
        } else {
            Self::UnderTailored
        }
    }

    /// Short description of the wave system this bucket produces.
    #[must_use]
    pub fn detail(self) -> &'static str {
        match self {
            Self::Tailored => "no additional waves",
            Self::NearTailored => "weak waves generated",
            Self::OverTailored => "driver-side impedance dominates",
            Self::UnderTailored => "driven-side impedance dominates",
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Tailored => "tailored",
            Self::NearTailored => "near-tailored",
            Self::OverTailored => "over-tailored",
            Self::UnderTailored => "under-tailored",
        })
    }
}

/// Impedance match between the shocked driven gas and the expanded driver gas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TailoredResult {
    /// Tailoring parameter `τ = Z3/Z2 − 1`.
    pub tau: f64,
    /// `Z3/Z2`.
    pub impedance_ratio: f64,
    pub z2: AcousticImpedance,
    pub z3: AcousticImpedance,
    pub z5: AcousticImpedance,
    pub classification: Classification,
    /// `|τ| < 0.15`, which admits near-tailored operation.
    pub is_tailored: bool,
}

/// Evaluates how closely a solved tube approaches tailored operation.
///
/// # Example
///
/// ```
/// use shock_tailor::models::shock_tube::{
///     Classification, Section, ShockTubeInput, evaluate, solve,
/// };
/// use shock_tailor::support::gas::Gas;
/// use uom::si::{f64::*, pressure::pascal, thermodynamic_temperature::kelvin};
///
/// let t = ThermodynamicTemperature::new::<kelvin>(300.0);
/// let states = solve(&ShockTubeInput {
///     mach: 4.58,
///     driven: Section::new(Pressure::new::<pascal>(101_325.0), t),
///     driver: Section::new(Pressure::new::<pascal>(1.1e7), t),
///     driven_gas: Gas::Air.properties(),
///     driver_gas: Gas::Hydrogen.properties(),
/// });
///
/// let result = evaluate(&states);
/// assert_eq!(result.classification, Classification::from_tau(result.tau));
/// ```
#[must_use]
pub fn evaluate(states: &ShockTubeStates) -> TailoredResult {
    let z2 = states.state2.acoustic_impedance();
    let z3 = states.state3.acoustic_impedance();
    let z5 = states.state5.acoustic_impedance();

    let impedance_ratio = (z3 / z2).get::<ratio>();
    let tau = impedance_ratio - 1.0;

    TailoredResult {
        tau,
        impedance_ratio,
        z2,
        z3,
        z5,
        classification: Classification::from_tau(tau),
        is_tailored: tau.abs() < NEAR_TAILORED_LIMIT,
    }
}
