//! Thermodynamic states 1–5 of an ideal shock tube.
//!
//! | State | Gas    | Description                                   |
//! |-------|--------|-----------------------------------------------|
//! | 1     | driven | initial driven gas at rest                    |
//! | 2     | driven | behind the incident shock                     |
//! | 3     | driver | expanded driver gas at the contact surface    |
//! | 4     | driver | initial driver gas at rest                    |
//! | 5     | driven | behind the reflected shock, at rest at the wall |

use uom::si::{
    f64::{MassDensity, Pressure, ThermodynamicTemperature, Velocity},
    mass_density::kilogram_per_cubic_meter,
    pressure::pascal,
    thermodynamic_temperature::kelvin,
    velocity::meter_per_second,
};

use crate::support::{gas::GasProperties, units::AcousticImpedance};

use super::{ShockTubeInput, input::Section, relations::PerfectGas};

/// Which gas occupies a state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GasRole {
    Driver,
    Driven,
}

/// A uniform gas state in the tube.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThermodynamicState {
    pub pressure: Pressure,
    pub temperature: ThermodynamicTemperature,
    pub density: MassDensity,
    pub sound_speed: Velocity,
    /// Gas velocity in the laboratory frame.
    pub velocity: Velocity,
    pub role: GasRole,
}

impl ThermodynamicState {
    fn from_si(p: f64, t: f64, rho: f64, a: f64, u: f64, role: GasRole) -> Self {
        Self {
            pressure: Pressure::new::<pascal>(p),
            temperature: ThermodynamicTemperature::new::<kelvin>(t),
            density: MassDensity::new::<kilogram_per_cubic_meter>(rho),
            sound_speed: Velocity::new::<meter_per_second>(a),
            velocity: Velocity::new::<meter_per_second>(u),
            role,
        }
    }

    /// Returns the acoustic impedance `Z = ρ·a`.
    #[must_use]
    pub fn acoustic_impedance(&self) -> AcousticImpedance {
        self.density * self.sound_speed
    }
}

/// Incident and reflected shock data.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShockWaveInfo {
    pub incident_mach: f64,
    /// Incident shock speed `W = M·a1`.
    pub incident_speed: Velocity,
    /// Reflected shock Mach number relative to the gas in state 2.
    pub reflected_mach: f64,
}

/// Pressure ratios across the tube.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PressureRatios {
    pub p2_p1: f64,
    pub p5_p2: f64,
    pub p4_p1: f64,
}

/// All five states of a solved shock tube.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShockTubeStates {
    pub state1: ThermodynamicState,
    pub state2: ThermodynamicState,
    pub state3: ThermodynamicState,
    pub state4: ThermodynamicState,
    pub state5: ThermodynamicState,
    pub shock: ShockWaveInfo,
    pub ratios: PressureRatios,
}

impl ShockTubeStates {
    /// Returns states 1 through 5 in order.
    #[must_use]
    pub fn states(&self) -> [&ThermodynamicState; 5] {
        [
            &self.state1,
            &self.state2,
            &self.state3,
            &self.state4,
            &self.state5,
        ]
    }
}

/// Driven gas conditions on both sides of the incident shock.
#[derive(Debug, Clone, Copy)]
pub(super) struct IncidentShock {
    pub(super) p1: f64,
    pub(super) rho1: f64,
    pub(super) a1: f64,
    pub(super) p21: f64,
    pub(super) p2: f64,
    pub(super) t2: f64,
    pub(super) rho2: f64,
    pub(super) a2: f64,
    pub(super) u2: f64,
}

impl IncidentShock {
    pub(super) fn new(mach: f64, driven: Section, gas: PerfectGas) -> Self {
        let (p1, t1) = driven.si();
        let a1 = gas.sound_speed(t1);
        let rho1 = gas.density(p1, t1);

        let p21 = gas.shock_pressure_ratio(mach);
        let t2 = gas.shock_temperature_ratio(p21) * t1;

        Self {
            p1,
            rho1,
            a1,
            p21,
            p2: p21 * p1,
            t2,
            rho2: gas.shock_density_ratio(p21) * rho1,
            a2: gas.sound_speed(t2),
            u2: gas.induced_velocity(a1, p21),
        }
    }

    /// Acoustic impedance of state 2, kg/(m²·s).
    pub(super) fn impedance(&self) -> f64 {
        self.rho2 * self.a2
    }
}

/// Driver gas after isentropic expansion from `(p4, t4)` to `p3`.
#[derive(Debug, Clone, Copy)]
pub(super) struct ExpandedDriver {
    pub(super) t3: f64,
    pub(super) rho3: f64,
    pub(super) a3: f64,
}

impl ExpandedDriver {
    pub(super) fn new(p3: f64, p4: f64, t4: f64, gas: PerfectGas) -> Self {
        let p34 = p3 / p4;
        let rho4 = gas.density(p4, t4);
        let t3 = t4 * gas.isentropic_temperature_ratio(p34);

        Self {
            t3,
            rho3: rho4 * gas.isentropic_density_ratio(p34),
            a3: gas.sound_speed(t3),
        }
    }

    /// Acoustic impedance of state 3, kg/(m²·s).
    pub(super) fn impedance(&self) -> f64 {
        self.rho3 * self.a3
    }
}

/// Solves states 1–5 for the given input.
///
/// The solve is total over physically meaningful inputs and does not reject
/// driver conditions that could not actually produce the requested shock;
/// parameter searches apply their own feasibility checks.
///
/// # Example
///
/// ```
/// use shock_tailor::models::shock_tube::{Section, ShockTubeInput, solve};
/// use shock_tailor::support::gas::Gas;
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
/// let states = solve(&input);
/// assert!(states.state5.pressure > states.state2.pressure);
/// assert_eq!(states.state3.pressure, states.state2.pressure);
/// ```
#[must_use]
pub fn solve(input: &ShockTubeInput) -> ShockTubeStates {
    solve_states(
        input.mach,
        input.driven,
        input.driver,
        &input.driven_gas,
        &input.driver_gas,
    )
}

pub(super) fn solve_states(
    mach: f64,
    driven: Section,
    driver: Section,
    driven_gas: &GasProperties,
    driver_gas: &GasProperties,
) -> ShockTubeStates {
    let g1 = PerfectGas::of(driven_gas);
    let g4 = PerfectGas::of(driver_gas);

    let (_, t1) = driven.si();
    let (p4, t4) = driver.si();

    let incident = IncidentShock::new(mach, driven, g1);
    let IncidentShock {
        p1,
        rho1,
        a1,
        p21,
        p2,
        t2,
        rho2,
        a2,
        u2,
    } = incident;

    let a4 = g4.sound_speed(t4);
    let rho4 = g4.density(p4, t4);

    // Pressure and velocity are continuous across the contact surface.
    let p3 = p2;
    let u3 = u2;
    let ExpandedDriver { t3, rho3, a3 } = ExpandedDriver::new(p3, p4, t4, g4);

    let p52 = g1.reflected_pressure_ratio(p21);
    let p5 = p52 * p2;
    let t5 = g1.shock_temperature_ratio(p52) * t2;
    let rho5 = g1.shock_density_ratio(p52) * rho2;
    let a5 = g1.sound_speed(t5);

    ShockTubeStates {
        state1: ThermodynamicState::from_si(p1, t1, rho1, a1, 0.0, GasRole::Driven),
        state2: ThermodynamicState::from_si(p2, t2, rho2, a2, u2, GasRole::Driven),
        state3: ThermodynamicState::from_si(p3, t3, rho3, a3, u3, GasRole::Driver),
        state4: ThermodynamicState::from_si(p4, t4, rho4, a4, 0.0, GasRole::Driver),
        state5: ThermodynamicState::from_si(p5, t5, rho5, a5, 0.0, GasRole::Driven),
        shock: ShockWaveInfo {
            incident_mach: mach,
            incident_speed: Velocity::new::<meter_per_second>(mach * a1),
            reflected_mach: g1.reflected_mach(p52),
        },
        ratios: PressureRatios {
            p2_p1: p21,
            p5_p2: p52,
            p4_p1: p4 / p1,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{mass_density::kilogram_per_cubic_meter, pressure::pascal};

    use crate::models::shock_tube::core::test_support::{SCENARIO_MACH, scenario_a};
    use crate::support::gas::{Gas, R_UNIVERSAL};

    #[test]
    fn scenario_a_pressures_are_ordered() {
        let states = solve(&scenario_a());

        let p1 = states.state1.pressure.get::<pascal>();
        let p2 = states.state2.pressure.get::<pascal>();
        let p5 = states.state5.pressure.get::<pascal>();

        assert_eq!(p1, 101_325.0);
        assert!(p1 < p2 && p2 < p5);
        assert_eq!(states.state4.pressure.get::<pascal>(), 1.1e7);
        assert!(states.state3.pressure < states.state4.pressure);
    }

    #[test]
    fn scenario_a_closed_form_values() {
        let states = solve(&scenario_a());

        let g = 1.402;
        let mach: f64 = SCENARIO_MACH;
        let p21 = 1.0 + 2.0 * g / (g + 1.0) * (mach * mach - 1.0);
        assert_relative_eq!(states.ratios.p2_p1, p21, max_relative = 1e-14);
        assert_relative_eq!(
            states.state2.pressure.get::<pascal>(),
            p21 * 101_325.0,
            max_relative = 1e-14
        );

        let p52 = ((3.0 * g - 1.0) * p21 - (g - 1.0)) / ((g - 1.0) * p21 + g + 1.0);
        assert_relative_eq!(states.ratios.p5_p2, p52, max_relative = 1e-14);
        assert_relative_eq!(states.ratios.p4_p1, 1.1e7 / 101_325.0);

        let r1 = R_UNIVERSAL / Gas::Air.molecular_weight();
        assert_relative_eq!(
            states.state1.density.get::<kilogram_per_cubic_meter>(),
            101_325.0 / (r1 * 300.0),
            max_relative = 1e-14
        );
        assert_relative_eq!(
            states.shock.incident_speed.get::<meter_per_second>(),
            mach * (g * r1 * 300.0).sqrt(),
            max_relative = 1e-14
        );
    }

    #[test]
    fn contact_surface_continuity() {
        let states = solve(&scenario_a());

        assert_eq!(states.state3.pressure, states.state2.pressure);
        assert_eq!(states.state3.velocity, states.state2.velocity);
        assert!(states.state2.velocity.get::<meter_per_second>() > 0.0);
    }

    #[test]
    fn wall_and_initial_states_are_at_rest() {
        let states = solve(&scenario_a());

        for state in [states.state1, states.state4, states.state5] {
            assert_eq!(state.velocity.get::<meter_per_second>(), 0.0);
        }
    }

    #[test]
    fn roles() {
        let states = solve(&scenario_a());
        let roles = states.states().map(|state| state.role);
        assert_eq!(
            roles,
            [
                GasRole::Driven,
                GasRole::Driven,
                GasRole::Driver,
                GasRole::Driver,
                GasRole::Driven,
            ]
        );
    }

    #[test]
    fn every_state_obeys_the_ideal_gas_law() {
        let input = scenario_a();
        let states = solve(&input);

        for state in states.states() {
            let gas = match state.role {
                GasRole::Driven => &input.driven_gas,
                GasRole::Driver => &input.driver_gas,
            };
            let r = R_UNIVERSAL / gas.molecular_weight;
            assert_relative_eq!(
                state.pressure.get::<pascal>(),
                state.density.get::<kilogram_per_cubic_meter>()
                    * r
                    * state.temperature.get::<kelvin>(),
                max_relative = 1e-12
            );
        }
    }

    #[test]
    fn reflected_shock_is_supersonic() {
        let states = solve(&scenario_a());
        assert!(states.shock.reflected_mach > 1.0);
        assert!(states.state5.temperature > states.state2.temperature);
    }

    #[test]
    fn sonic_limit_leaves_driven_gas_unchanged() {
        let input = ShockTubeInput {
            mach: 1.0,
            ..scenario_a()
        };
        let states = solve(&input);

        assert_relative_eq!(
            states.state2.pressure.get::<pascal>(),
            states.state1.pressure.get::<pascal>()
        );
        assert_relative_eq!(
            states.state5.temperature.get::<kelvin>(),
            states.state1.temperature.get::<kelvin>()
        );
        assert_relative_eq!(states.shock.reflected_mach, 1.0);
    }
}
