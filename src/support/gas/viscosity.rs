use uom::si::{
    dynamic_viscosity::pascal_second,
    f64::{DynamicViscosity, ThermodynamicTemperature},
    thermodynamic_temperature::kelvin,
};

/// Sutherland's law constants: `μ = μ_ref·(T/T_ref)^1.5·(T_ref + S)/(T + S)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sutherland {
    /// Reference viscosity `μ_ref`, Pa·s.
    pub reference_viscosity: f64,
    /// Reference temperature `T_ref`, K.
    pub reference_temperature: f64,
    /// Sutherland temperature `S`, K.
    pub constant: f64,
}

impl Sutherland {
    /// Constants for air, also used for gases without their own entry.
    pub const AIR: Self = Self::new(1.716e-5, 273.15, 110.4);

    #[must_use]
    pub const fn new(reference_viscosity: f64, reference_temperature: f64, constant: f64) -> Self {
        Self {
            reference_viscosity,
            reference_temperature,
            constant,
        }
    }

    /// Evaluates the dynamic viscosity at `temperature`.
    #[must_use]
    pub fn viscosity(&self, temperature: ThermodynamicTemperature) -> DynamicViscosity {
        let t = temperature.get::<kelvin>();
        let t_ref = self.reference_temperature;
        let s = self.constant;

        let mu = self.reference_viscosity * (t / t_ref).powf(1.5) * (t_ref + s) / (t + s);
        DynamicViscosity::new::<pascal_second>(mu)
    }
}

impl Default for Sutherland {
    fn default() -> Self {
        Self::AIR
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::support::gas::Gas;

    #[test]
    fn reference_temperature_returns_reference_viscosity() {
        for gas in Gas::ALL {
            let law = gas.sutherland();
            let t_ref = ThermodynamicTemperature::new::<kelvin>(law.reference_temperature);
            assert_relative_eq!(
                law.viscosity(t_ref).get::<pascal_second>(),
                law.reference_viscosity,
                max_relative = 1e-12
            );
        }
    }

    #[test]
    fn gas_viscosity_rises_with_temperature() {
        let law = Sutherland::default();
        let cold = law.viscosity(ThermodynamicTemperature::new::<kelvin>(100.0));
        let hot = law.viscosity(ThermodynamicTemperature::new::<kelvin>(1000.0));
        assert!(hot > cold);
    }

    #[test]
    fn air_at_300_kelvin() {
        let mu = Sutherland::AIR.viscosity(ThermodynamicTemperature::new::<kelvin>(300.0));
        assert_relative_eq!(mu.get::<pascal_second>(), 1.846e-5, max_relative = 1e-3);
    }
}
