use uom::si::{
    f64::{Pressure, ThermodynamicTemperature},
    pressure::pascal,
    thermodynamic_temperature::kelvin,
};

use crate::support::{constraint::StrictlyPositive, gas::GasProperties};

use super::InputError;

/// Initial pressure and temperature of a tube section.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Section {
    pub pressure: Pressure,
    pub temperature: ThermodynamicTemperature,
}

impl Section {
    #[must_use]
    pub fn new(pressure: Pressure, temperature: ThermodynamicTemperature) -> Self {
        Self {
            pressure,
            temperature,
        }
    }

    /// Returns `(pressure [Pa], temperature [K])`.
    pub(super) fn si(self) -> (f64, f64) {
        (self.pressure.get::<pascal>(), self.temperature.get::<kelvin>())
    }

    fn validate(self, name: &'static str) -> Result<(), InputError> {
        let (p, t) = self.si();
        StrictlyPositive::new(p).map_err(|source| InputError::NonPositive {
            quantity: name,
            property: "pressure",
            source,
        })?;
        StrictlyPositive::new(t).map_err(|source| InputError::NonPositive {
            quantity: name,
            property: "temperature",
            source,
        })?;
        Ok(())
    }
}

/// Everything needed to solve one shock tube configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct ShockTubeInput {
    /// Incident shock Mach number relative to the driven gas at rest.
    pub mach: f64,

    /// Driven section initial conditions (state 1).
    pub driven: Section,

    /// Driver section initial conditions (state 4).
    pub driver: Section,

    pub driven_gas: GasProperties,
    pub driver_gas: GasProperties,
}

impl ShockTubeInput {
    /// Checks the physical preconditions of the shock relations.
    ///
    /// # Errors
    ///
    /// Returns [`InputError`] if the Mach number does not exceed one or if any
    /// pressure or temperature is not strictly positive.
    pub fn validate(&self) -> Result<(), InputError> {
        validate_mach(self.mach)?;
        self.driven.validate("driven")?;
        self.driver.validate("driver")
    }
}

/// Conditions held fixed while a parameter search varies the driver.
///
/// The driver pressure and gas are deliberately absent: searches either derive
/// them or take them as explicit arguments.
#[derive(Debug, Clone, PartialEq)]
pub struct Known {
    /// Driven section initial conditions (state 1).
    pub driven: Section,

    /// Driver section initial temperature.
    pub driver_temperature: ThermodynamicTemperature,

    pub driven_gas: GasProperties,
}

impl Known {
    /// Returns the driver section at `pressure` and the known driver temperature.
    #[must_use]
    pub fn driver_at(&self, pressure: Pressure) -> Section {
        Section::new(pressure, self.driver_temperature)
    }

    /// Checks that every known pressure and temperature is strictly positive.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::NonPositive`] on the first invalid value.
    pub fn validate(&self) -> Result<(), InputError> {
        self.driven.validate("driven")?;
        StrictlyPositive::new(self.driver_temperature.get::<kelvin>()).map_err(|source| {
            InputError::NonPositive {
                quantity: "driver",
                property: "temperature",
                source,
            }
        })?;
        Ok(())
    }
}

pub(super) fn validate_mach(mach: f64) -> Result<(), InputError> {
    if mach > 1.0 {
        Ok(())
    } else {
        Err(InputError::SubsonicShock { mach })
    }
}
