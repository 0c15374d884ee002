//! Shock tube and reflected-shock tunnel models.
//!
//! This module provides [`twine_core::Model`] implementations for an ideal
//! shock tube. The computational core is in the internal `core` module; its
//! entry points are re-exported here for callers that need the parameter
//! searches rather than a single solve.

mod core;

pub use self::core::{
    Classification, CompositionSample, CompositionSearch, CompositionSearchConfig,
    CompositionSearchError, GasRole, InputError, Known, MachError, MachSolution, MachSolveConfig,
    NEAR_TAILORED_LIMIT, NozzleState, OptimalComposition, PressureRatios, PressureSample,
    PressureSearch, PressureSearchConfig, PressureSearchError, Section, ShockTubeInput,
    ShockTubeStates, ShockWaveInfo, TAILORED_LIMIT, TailoredResult, ThermodynamicState,
    driver_pressure_for_mach, evaluate, nozzle_state, search_composition,
    search_composition_at_pressure, search_pressure, solve, solve_mach,
};

use twine_core::Model;

use crate::support::{
    constraint::{Constrained, ConstraintError, StrictlyPositive},
    gas::Sutherland,
};

/// States and tailoring evaluation of one shock tube configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShockTubeOutput {
    pub states: ShockTubeStates,
    pub tailored: TailoredResult,
}

/// Ideal shock tube model.
///
/// Validates the input, solves states 1–5 and evaluates tailoring.
///
/// # Example
///
/// ```
/// use shock_tailor::models::shock_tube::{Section, ShockTube, ShockTubeInput};
/// use shock_tailor::support::gas::Gas;
/// use twine_core::Model;
/// use uom::si::{f64::*, pressure::pascal, thermodynamic_temperature::kelvin};
///
/// let t = ThermodynamicTemperature::new::<kelvin>(300.0);
/// let input = ShockTubeInput {
///     mach: 4.58,
///     driven: Section::new(Pressure::new::<pascal>(101_325.0), t),
///     driver: Section::new(Pressure::new::<pascal>(1.1e7), t),
///     driven_gas: Gas::Air.properties(),
///     driver_gas: Gas::Hydrogen.properties(),
/// };
///
/// let output = ShockTube.call(&input).unwrap();
/// assert!(output.tailored.z3.value > 0.0);
///
/// let subsonic = ShockTubeInput { mach: 0.8, ..input };
/// assert!(ShockTube.call(&subsonic).is_err());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ShockTube;

impl Model for ShockTube {
    type Input = ShockTubeInput;
    type Output = ShockTubeOutput;
    type Error = InputError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        input.validate()?;
        let states = solve(input);
        let tailored = evaluate(&states);
        Ok(ShockTubeOutput { states, tailored })
    }
}

/// Shock tube solution plus the nozzle test flow it supplies.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShockTunnelOutput {
    pub states: ShockTubeStates,
    pub tailored: TailoredResult,
    pub nozzle: NozzleState,
}

/// Reflected-shock tunnel: a shock tube whose state 5 feeds a nozzle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShockTunnel {
    nozzle_mach: Constrained<f64, StrictlyPositive>,
    viscosity: Sutherland,
}

impl ShockTunnel {
    /// Creates a tunnel with nozzle exit Mach `nozzle_mach`.
    ///
    /// `viscosity` holds the Sutherland constants of the driven (test) gas.
    ///
    /// # Errors
    ///
    /// Returns [`ConstraintError`] if `nozzle_mach` is not strictly positive.
    pub fn new(nozzle_mach: f64, viscosity: Sutherland) -> Result<Self, ConstraintError> {
        Ok(Self {
            nozzle_mach: StrictlyPositive::new(nozzle_mach)?,
            viscosity,
        })
    }

    #[must_use]
    pub fn nozzle_mach(&self) -> f64 {
        *self.nozzle_mach.as_ref()
    }
}

impl Model for ShockTunnel {
    type Input = ShockTubeInput;
    type Output = ShockTunnelOutput;
    type Error = InputError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        let ShockTubeOutput { states, tailored } = ShockTube.call(input)?;
        let nozzle = nozzle_state(
            &states.state5,
            self.nozzle_mach(),
            &input.driven_gas,
            self.viscosity,
        );

        Ok(ShockTunnelOutput {
            states,
            tailored,
            nozzle,
        })
    }
}
