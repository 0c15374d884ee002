use std::{fmt, str::FromStr};

use super::{GasError, GasProperties, Sutherland};

/// A gas from the fixed property registry.
///
/// Registry entries are compile-time constants and are never mutated.
///
/// ```
/// use shock_tailor::support::gas::Gas;
///
/// let gas: Gas = "h2".parse().unwrap();
/// assert_eq!(gas, Gas::Hydrogen);
/// assert_eq!(gas.molecular_weight(), 2.016);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gas {
    Air,
    Helium,
    Hydrogen,
    CarbonDioxide,
    Argon,
    Nitrogen,
}

struct Species {
    key: &'static str,
    name: &'static str,
    molecular_weight: f64,
    gamma: f64,
    sutherland: Sutherland,
}

const AIR: Species = Species {
    key: "air",
    name: "Air",
    molecular_weight: 28.9660,
    gamma: 1.4020,
    sutherland: Sutherland::AIR,
};

const HELIUM: Species = Species {
    key: "he",
    name: "Helium",
    molecular_weight: 4.0026,
    gamma: 1.6670,
    sutherland: Sutherland::new(1.865e-5, 273.15, 79.4),
};

const HYDROGEN: Species = Species {
    key: "h2",
    name: "Hydrogen",
    molecular_weight: 2.0160,
    gamma: 1.4050,
    sutherland: Sutherland::new(8.411e-6, 273.15, 72.0),
};

const CARBON_DIOXIDE: Species = Species {
    key: "co2",
    name: "CO₂",
    molecular_weight: 44.0100,
    gamma: 1.2970,
    sutherland: Sutherland::new(1.370e-5, 273.15, 222.0),
};

const ARGON: Species = Species {
    key: "ar",
    name: "Argon",
    molecular_weight: 39.9480,
    gamma: 1.6670,
    sutherland: Sutherland::new(2.125e-5, 273.15, 144.4),
};

const NITROGEN: Species = Species {
    key: "n2",
    name: "Nitrogen",
    molecular_weight: 28.0134,
    gamma: 1.4000,
    sutherland: Sutherland::new(1.663e-5, 273.15, 107.0),
};

impl Gas {
    /// Every registered gas, in registry order.
    pub const ALL: [Gas; 6] = [
        Gas::Air,
        Gas::Helium,
        Gas::Hydrogen,
        Gas::CarbonDioxide,
        Gas::Argon,
        Gas::Nitrogen,
    ];

    fn species(self) -> &'static Species {
        match self {
            Gas::Air => &AIR,
            Gas::Helium => &HELIUM,
            Gas::Hydrogen => &HYDROGEN,
            Gas::CarbonDioxide => &CARBON_DIOXIDE,
            Gas::Argon => &ARGON,
            Gas::Nitrogen => &NITROGEN,
        }
    }

    /// Registry key used by textual identifiers, e.g. `"he"`.
    #[must_use]
    pub fn key(self) -> &'static str {
        self.species().key
    }

    /// Display name, e.g. `"Helium"`.
    #[must_use]
    pub fn name(self) -> &'static str {
        self.species().name
    }

    /// Molecular weight, kg/kmol.
    #[must_use]
    pub fn molecular_weight(self) -> f64 {
        self.species().molecular_weight
    }

    /// Ratio of specific heats.
    #[must_use]
    pub fn gamma(self) -> f64 {
        self.species().gamma
    }

    /// Sutherland viscosity constants for this gas.
    #[must_use]
    pub fn sutherland(self) -> Sutherland {
        self.species().sutherland
    }

    /// Returns the resolved properties of the pure gas.
    #[must_use]
    pub fn properties(self) -> GasProperties {
        let species = self.species();
        GasProperties {
            molecular_weight: species.molecular_weight,
            gamma: species.gamma,
            name: species.name.to_string(),
        }
    }
}

impl fmt::Display for Gas {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Gas {
    type Err = GasError;

    fn from_str(key: &str) -> Result<Self, Self::Err> {
        Gas::ALL
            .into_iter()
            .find(|gas| gas.key() == key)
            .ok_or_else(|| GasError::Unknown {
                name: key.to_string(),
            })
    }
}
