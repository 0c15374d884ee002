use thiserror::Error;

use crate::models::shock_tube::core::InputError;

/// Errors that can occur while scanning driver pressures.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PressureSearchError {
    /// The Mach number or the known conditions are not physical.
    #[error("invalid search input")]
    Input(#[from] InputError),

    /// No finite driver pressure produces the incident shock, so the scan
    /// has no baseline to span.
    #[error("driver gas cannot produce an incident shock of Mach {mach}")]
    NoBaseline { mach: f64 },
}
