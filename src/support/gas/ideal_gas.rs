//! Ideal gas helpers: `p = ρ·R·T` and `a = √(γ·R·T)`.

use uom::si::{
    f64::{MassDensity, Pressure, ThermodynamicTemperature, Velocity},
    specific_heat_capacity::joule_per_kilogram_kelvin,
    thermodynamic_temperature::kelvin,
    velocity::meter_per_second,
};

use crate::support::units::SpecificGasConstant;

/// Computes density using the ideal gas equation of state.
#[must_use]
pub(super) fn density(
    temperature: ThermodynamicTemperature,
    pressure: Pressure,
    gas_constant: SpecificGasConstant,
) -> MassDensity {
    pressure / (gas_constant * temperature)
}

/// Computes the speed of sound of a calorically perfect gas.
#[must_use]
pub(super) fn sound_speed(
    temperature: ThermodynamicTemperature,
    gamma: f64,
    gas_constant: SpecificGasConstant,
) -> Velocity {
    let r = gas_constant.get::<joule_per_kilogram_kelvin>();
    let t = temperature.get::<kelvin>();
    Velocity::new::<meter_per_second>((gamma * r * t).sqrt())
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{mass_density::kilogram_per_cubic_meter, pressure::kilopascal};

    #[test]
    fn density_scales_with_pressure() {
        let t = ThermodynamicTemperature::new::<kelvin>(300.0);
        let r = SpecificGasConstant::new::<joule_per_kilogram_kelvin>(287.04);

        let rho_a = density(t, Pressure::new::<kilopascal>(100.0), r);
        let rho_b = density(t, Pressure::new::<kilopascal>(250.0), r);

        assert_relative_eq!(
            rho_b.get::<kilogram_per_cubic_meter>(),
            2.5 * rho_a.get::<kilogram_per_cubic_meter>(),
            max_relative = 1e-12
        );
    }

    #[test]
    fn sound_speed_scales_with_root_temperature() {
        let r = SpecificGasConstant::new::<joule_per_kilogram_kelvin>(2077.3);

        let a_cold = sound_speed(ThermodynamicTemperature::new::<kelvin>(300.0), 1.667, r);
        let a_hot = sound_speed(ThermodynamicTemperature::new::<kelvin>(1200.0), 1.667, r);

        assert_relative_eq!(
            a_hot.get::<meter_per_second>(),
            2.0 * a_cold.get::<meter_per_second>(),
            max_relative = 1e-12
        );
    }
}
