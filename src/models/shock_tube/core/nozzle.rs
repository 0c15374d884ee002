//! Steady nozzle expansion of the reflected-shock reservoir (state 7).
//!
//! State 5 is stagnant gas at the end wall and serves as the reservoir for a
//! reflected-shock tunnel nozzle. The test flow follows from isentropic
//! relations at the nozzle exit Mach number.

use uom::si::{
    f64::{DynamicViscosity, MassDensity, Pressure, ThermodynamicTemperature, Velocity},
    pressure::pascal,
    thermodynamic_temperature::kelvin,
    velocity::meter_per_second,
};

use crate::support::{
    gas::{GasProperties, Sutherland},
    units::{ReciprocalLength, SpecificEnthalpy},
};

use super::ThermodynamicState;

/// Nozzle exit test-flow conditions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NozzleState {
    pub mach: f64,
    pub pressure: Pressure,
    pub temperature: ThermodynamicTemperature,
    pub density: MassDensity,
    pub sound_speed: Velocity,
    pub velocity: Velocity,
    pub viscosity: DynamicViscosity,
    /// Unit Reynolds number `ρ·u/μ`.
    pub unit_reynolds: ReciprocalLength,
    /// Reservoir total enthalpy `cp·T0`.
    pub total_enthalpy: SpecificEnthalpy,
}

/// Expands a stagnant reservoir isentropically to Mach `mach`.
///
/// `viscosity` supplies the Sutherland constants for the test gas; use
/// [`Sutherland::AIR`] for mixtures.
#[must_use]
pub fn nozzle_state(
    reservoir: &ThermodynamicState,
    mach: f64,
    gas: &GasProperties,
    viscosity: Sutherland,
) -> NozzleState {
    let gamma = gas.gamma;
    let p0 = reservoir.pressure.get::<pascal>();
    let t0 = reservoir.temperature.get::<kelvin>();

    let f = 1.0 + 0.5 * (gamma - 1.0) * mach * mach;
    let temperature = ThermodynamicTemperature::new::<kelvin>(t0 / f);
    let pressure = Pressure::new::<pascal>(p0 / f.powf(gamma / (gamma - 1.0)));

    let density = gas.density(pressure, temperature);
    let sound_speed = gas.sound_speed(temperature);
    let velocity = Velocity::new::<meter_per_second>(mach * sound_speed.get::<meter_per_second>());
    let mu = viscosity.viscosity(temperature);

    NozzleState {
        mach,
        pressure,
        temperature,
        density,
        sound_speed,
        velocity,
        viscosity: mu,
        unit_reynolds: density * velocity / mu,
        total_enthalpy: gas.gas_constant() * reservoir.temperature * (gamma / (gamma - 1.0)),
    }
}
