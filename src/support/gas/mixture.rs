use crate::support::constraint::{Constrained, UnitInterval};

use super::{Gas, GasError, GasProperties, R_UNIVERSAL};

/// A two-species gas mixture.
///
/// The mixture is defined by the mole fraction `X` of the `mix` species; the
/// `base` species makes up the remaining `1 − X`. Properties are derived on
/// every call to [`Mixture::properties`] and never cached.
///
/// At `X = 0` the mixture is the pure base gas and at `X = 1` the pure mix gas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mixture {
    base: Gas,
    mix: Gas,
    fraction: Constrained<f64, UnitInterval>,
}

impl Mixture {
    /// Creates a mixture with mole fraction `fraction` of `mix`.
    ///
    /// # Errors
    ///
    /// Returns [`GasError::MoleFraction`] if `fraction` is outside `[0, 1]`.
    pub fn new(base: Gas, mix: Gas, fraction: f64) -> Result<Self, GasError> {
        let fraction = UnitInterval::new(fraction)
            .map_err(|source| GasError::MoleFraction { fraction, source })?;

        Ok(Self {
            base,
            mix,
            fraction,
        })
    }

    #[must_use]
    pub fn base(&self) -> Gas {
        self.base
    }

    #[must_use]
    pub fn mix(&self) -> Gas {
        self.mix
    }

    /// Mole fraction of the mix species.
    #[must_use]
    pub fn fraction(&self) -> f64 {
        self.fraction.into_inner()
    }

    /// Mole fractions `(X1, X2)` of the base and mix species.
    #[must_use]
    pub fn mole_fractions(&self) -> (f64, f64) {
        let x2 = self.fraction();
        (1.0 - x2, x2)
    }

    /// Mole-fraction-weighted molecular weight, kg/kmol.
    #[must_use]
    pub fn molecular_weight(&self) -> f64 {
        let (x1, x2) = self.mole_fractions();
        x1 * self.base.molecular_weight() + x2 * self.mix.molecular_weight()
    }

    /// Mass fractions `(Y1, Y2)` of the base and mix species.
    #[must_use]
    pub fn mass_fractions(&self) -> (f64, f64) {
        let (x1, _) = self.mole_fractions();
        let y1 = x1 * self.base.molecular_weight() / self.molecular_weight();
        (y1, 1.0 - y1)
    }

    /// Resolves the mixture's molecular weight and ratio of specific heats.
    ///
    /// Specific heats of the constituents are mass-weighted:
    /// `cp = Y1·cp1 + Y2·cp2`, `cv = Y1·cv1 + Y2·cv2`, and `γ = cp/cv`.
    ///
    /// At `X = 0` or `X = 1` the molecular weight equals the pure species
    /// value exactly, but `γ` is recomputed as `cp/cv` and may differ from the
    /// registry value in the last bit (argon gives `1.6669999999999998`).
    #[must_use]
    pub fn properties(&self) -> GasProperties {
        let (y1, y2) = self.mass_fractions();
        let (cp1, cv1) = specific_heats(self.base);
        let (cp2, cv2) = specific_heats(self.mix);

        let cp = y1 * cp1 + y2 * cp2;
        let cv = y1 * cv1 + y2 * cv2;

        GasProperties {
            molecular_weight: self.molecular_weight(),
            gamma: cp / cv,
            name: self.label(),
        }
    }

    /// Descriptive label, e.g. `"Air/Helium (40.0% Helium)"`.
    #[must_use]
    pub fn label(&self) -> String {
        format!(
            "{}/{} ({:.1}% {})",
            self.base.name(),
            self.mix.name(),
            self.fraction() * 100.0,
            self.mix.name()
        )
    }

    /// Short composition string by percent, e.g. `"AIR/HE = 60.0/40.0"`.
    #[must_use]
    pub fn composition(&self) -> String {
        let (x1, x2) = self.mole_fractions();
        format!(
            "{}/{} = {:.1}/{:.1}",
            self.base.key().to_uppercase(),
            self.mix.key().to_uppercase(),
            x1 * 100.0,
            x2 * 100.0
        )
    }
}

/// Returns `(cp, cv)` in J/(kg·K) for a pure registry gas.
fn specific_heats(gas: Gas) -> (f64, f64) {
    let gamma = gas.gamma();
    let r = R_UNIVERSAL / gas.molecular_weight();
    (gamma / (gamma - 1.0) * r, r / (gamma - 1.0))
}

/// Default mixture used when a `"mix"` identifier carries no explicit composition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MixtureConfig {
    /// Mole fraction of `mix`.
    pub fraction: f64,
    pub base: Gas,
    pub mix: Gas,
}

impl Default for MixtureConfig {
    /// Equimolar air/helium.
    fn default() -> Self {
        Self {
            fraction: 0.5,
            base: Gas::Air,
            mix: Gas::Helium,
        }
    }
}

impl MixtureConfig {
    /// Builds the configured [`Mixture`].
    ///
    /// # Errors
    ///
    /// Returns [`GasError::MoleFraction`] if `fraction` is outside `[0, 1]`.
    pub fn mixture(&self) -> Result<Mixture, GasError> {
        Mixture::new(self.base, self.mix, self.fraction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn zero_fraction_is_the_base_gas() {
        for base in Gas::ALL {
            let props = Mixture::new(base, Gas::Helium, 0.0).unwrap().properties();
            assert_eq!(props.molecular_weight, base.molecular_weight());
            assert_relative_eq!(props.gamma, base.gamma(), max_relative = 1e-14);
        }
    }

    #[test]
    fn unit_fraction_is_the_mix_gas() {
        for mix in Gas::ALL {
            let props = Mixture::new(Gas::Air, mix, 1.0).unwrap().properties();
            assert_eq!(props.molecular_weight, mix.molecular_weight());
            assert_relative_eq!(props.gamma, mix.gamma(), max_relative = 1e-14);
        }
    }

    #[test]
    fn fractions_sum_to_one() {
        let mixture = Mixture::new(Gas::Air, Gas::Helium, 0.37).unwrap();

        let (x1, x2) = mixture.mole_fractions();
        assert_relative_eq!(x1 + x2, 1.0);

        let (y1, y2) = mixture.mass_fractions();
        assert_relative_eq!(y1 + y2, 1.0);
        assert!(y1 > x1, "air is heavier than helium");
    }

    #[test]
    fn gamma_lies_between_constituents() {
        for i in 1..10 {
            let fraction = f64::from(i) / 10.0;
            let gamma = Mixture::new(Gas::Air, Gas::Helium, fraction)
                .unwrap()
                .properties()
                .gamma;
            assert!(gamma > Gas::Air.gamma() && gamma < Gas::Helium.gamma());
        }
    }

    #[test]
    fn equimolar_air_helium() {
        let props = Mixture::new(Gas::Air, Gas::Helium, 0.5)
            .unwrap()
            .properties();

        let mw = 0.5 * 28.966 + 0.5 * 4.0026;
        let y_air = 0.5 * 28.966 / mw;
        let r_air = R_UNIVERSAL / 28.966;
        let r_he = R_UNIVERSAL / 4.0026;
        let cp = y_air * 1.402 / 0.402 * r_air + (1.0 - y_air) * 1.667 / 0.667 * r_he;
        let cv = y_air * r_air / 0.402 + (1.0 - y_air) * r_he / 0.667;

        assert_relative_eq!(props.molecular_weight, mw, max_relative = 1e-14);
        assert_relative_eq!(props.gamma, cp / cv, max_relative = 1e-12);
    }

    #[test]
    fn labels() {
        let mixture = Mixture::new(Gas::Air, Gas::Helium, 0.4).unwrap();
        assert_eq!(mixture.label(), "Air/Helium (40.0% Helium)");
        assert_eq!(mixture.composition(), "AIR/HE = 60.0/40.0");
    }

    #[test]
    fn invalid_fraction() {
        assert!(Mixture::new(Gas::Air, Gas::Argon, -0.1).is_err());
        assert!(MixtureConfig {
            fraction: f64::NAN,
            ..MixtureConfig::default()
        }
        .mixture()
        .is_err());
    }
}
