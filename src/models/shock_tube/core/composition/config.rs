use crate::support::gas::Gas;

/// Grid and gas pair for a driver composition scan.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompositionSearchConfig {
    /// Species making up the remainder `1 − X` of the driver.
    pub base: Gas,

    /// Species whose mole fraction `X` is scanned over `[0, 1]`.
    pub mix: Gas,

    /// Number of evenly spaced mole fractions, endpoints included.
    pub samples: usize,
}

impl Default for CompositionSearchConfig {
    fn default() -> Self {
        Self {
            base: Gas::Air,
            mix: Gas::Helium,
            samples: 101,
        }
    }
}
