use uom::si::{
    f64::{Pressure, ThermodynamicTemperature},
    pressure::pascal,
    thermodynamic_temperature::kelvin,
};

use crate::support::gas::Gas;

use super::{Known, Section, ShockTubeInput};

/// Incident Mach number of the air/hydrogen reference case.
pub(super) const SCENARIO_MACH: f64 = 4.58;

/// Driver pressure of the air/hydrogen reference case, Pa.
pub(super) const SCENARIO_DRIVER_PRESSURE: f64 = 1.1e7;

pub(super) fn section(pressure: f64, temperature: f64) -> Section {
    Section::new(
        Pressure::new::<pascal>(pressure),
        ThermodynamicTemperature::new::<kelvin>(temperature),
    )
}

/// Air at one atmosphere and 300 K, driver at 300 K.
pub(super) fn known_air() -> Known {
    Known {
        driven: section(101_325.0, 300.0),
        driver_temperature: ThermodynamicTemperature::new::<kelvin>(300.0),
        driven_gas: Gas::Air.properties(),
    }
}

/// Hydrogen driving air at Mach 4.58.
pub(super) fn scenario_a() -> ShockTubeInput {
    ShockTubeInput {
        mach: SCENARIO_MACH,
        driven: section(101_325.0, 300.0),
        driver: section(SCENARIO_DRIVER_PRESSURE, 300.0),
        driven_gas: Gas::Air.properties(),
        driver_gas: Gas::Hydrogen.properties(),
    }
}
