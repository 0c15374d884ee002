//! Gas property resolution for shock tube driver and driven sections.
//!
//! Every gas is treated as calorically perfect: a molecular weight and a
//! constant ratio of specific heats fully describe it. Pure gases come from a
//! fixed registry (see [`Gas`]); two-species driver mixtures are built with
//! [`Mixture`], which applies mole- and mass-fraction mixing rules.
//!
//! [`resolve`] accepts the textual identifiers used by experiment records
//! (`"air"`, `"he"`, `"h2"`, `"co2"`, `"ar"`, `"n2"` and `"mix"`).

mod error;
mod ideal_gas;
mod mixture;
mod registry;
mod viscosity;

pub use error::GasError;
pub use mixture::{Mixture, MixtureConfig};
pub use registry::Gas;
pub use viscosity::Sutherland;

use uom::si::{
    f64::{MassDensity, Pressure, ThermodynamicTemperature, Velocity},
    specific_heat_capacity::joule_per_kilogram_kelvin,
};

use crate::support::units::SpecificGasConstant;

/// Universal gas constant, J/(kmol·K).
pub const R_UNIVERSAL: f64 = 8314.51;

/// Identifier that selects a two-species mixture in [`resolve`].
pub const MIXTURE_KEY: &str = "mix";

/// Resolved properties of a pure gas or a mixture.
#[derive(Debug, Clone, PartialEq)]
pub struct GasProperties {
    /// Molecular weight, kg/kmol.
    pub molecular_weight: f64,
    /// Ratio of specific heats `γ = cp/cv`.
    pub gamma: f64,
    /// Human-readable label, e.g. `"Helium"` or `"Air/Helium (40.0% Helium)"`.
    pub name: String,
}

impl GasProperties {
    /// Returns the specific gas constant `R = R_universal / MW`.
    #[must_use]
    pub fn gas_constant(&self) -> SpecificGasConstant {
        SpecificGasConstant::new::<joule_per_kilogram_kelvin>(R_UNIVERSAL / self.molecular_weight)
    }

    /// Returns the ideal-gas density at the given pressure and temperature.
    #[must_use]
    pub fn density(
        &self,
        pressure: Pressure,
        temperature: ThermodynamicTemperature,
    ) -> MassDensity {
        ideal_gas::density(temperature, pressure, self.gas_constant())
    }

    /// Returns the speed of sound `a = √(γ·R·T)`.
    #[must_use]
    pub fn sound_speed(&self, temperature: ThermodynamicTemperature) -> Velocity {
        ideal_gas::sound_speed(temperature, self.gamma, self.gas_constant())
    }
}

/// Resolves gas properties from a textual identifier.
///
/// Registry keys resolve to the matching pure gas. [`MIXTURE_KEY`] resolves to
/// the mixture described by `config`; `config` is ignored otherwise.
///
/// # Errors
///
/// Returns [`GasError::Unknown`] if `gas_type` is neither a registry key nor
/// [`MIXTURE_KEY`], and [`GasError::MoleFraction`] if a mixture is requested
/// with a fraction outside `[0, 1]`.
///
/// # Example
///
/// ```
/// use shock_tailor::support::gas::{resolve, Gas, MixtureConfig};
///
/// let helium = resolve("he", &MixtureConfig::default()).unwrap();
/// assert_eq!(helium.gamma, 1.667);
///
/// let config = MixtureConfig { fraction: 0.4, base: Gas::Air, mix: Gas::Helium };
/// let driver = resolve("mix", &config).unwrap();
/// assert_eq!(driver.name, "Air/Helium (40.0% Helium)");
///
/// assert!(resolve("xenon", &config).is_err());
/// ```
pub fn resolve(gas_type: &str, config: &MixtureConfig) -> Result<GasProperties, GasError> {
    if gas_type == MIXTURE_KEY {
        return Ok(config.mixture()?.properties());
    }

    let gas: Gas = gas_type.parse()?;
    Ok(gas.properties())
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        mass_density::kilogram_per_cubic_meter, pressure::pascal,
        thermodynamic_temperature::kelvin, velocity::meter_per_second,
    };

    #[test]
    fn resolves_every_registry_key() {
        for gas in Gas::ALL {
            let props = resolve(gas.key(), &MixtureConfig::default()).unwrap();
            assert_eq!(props, gas.properties());
        }
    }

    #[test]
    fn unknown_identifier_is_rejected() {
        let err = resolve("xe", &MixtureConfig::default()).unwrap_err();
        assert_eq!(
            err,
            GasError::Unknown {
                name: "xe".to_string()
            }
        );
    }

    #[test]
    fn default_mixture_is_half_air_half_helium() {
        let props = resolve(MIXTURE_KEY, &MixtureConfig::default()).unwrap();
        assert_relative_eq!(props.molecular_weight, 0.5 * 28.966 + 0.5 * 4.0026);
        assert_eq!(props.name, "Air/Helium (50.0% Helium)");
    }

    #[test]
    fn mixture_fraction_out_of_range_is_rejected() {
        let config = MixtureConfig {
            fraction: 1.5,
            ..MixtureConfig::default()
        };
        assert!(matches!(
            resolve(MIXTURE_KEY, &config),
            Err(GasError::MoleFraction { .. })
        ));
    }

    #[test]
    fn air_at_room_temperature() {
        let air = Gas::Air.properties();
        let t = ThermodynamicTemperature::new::<kelvin>(300.0);
        let p = Pressure::new::<pascal>(101_325.0);

        let r = R_UNIVERSAL / 28.966;
        assert_relative_eq!(
            air.density(p, t).get::<kilogram_per_cubic_meter>(),
            101_325.0 / (r * 300.0),
            max_relative = 1e-12
        );
        assert_relative_eq!(
            air.sound_speed(t).get::<meter_per_second>(),
            (1.402 * r * 300.0).sqrt(),
            max_relative = 1e-12
        );
    }
}
