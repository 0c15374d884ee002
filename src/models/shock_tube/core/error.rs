use thiserror::Error;

use crate::support::constraint::ConstraintError;

/// Errors raised when shock tube inputs violate a physical precondition.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InputError {
    /// A shock must travel faster than sound in the gas it enters.
    #[error("incident shock Mach number must exceed 1, got {mach}")]
    SubsonicShock { mach: f64 },

    /// An absolute pressure or temperature is not strictly positive.
    #[error("{quantity} {property} must be strictly positive")]
    NonPositive {
        quantity: &'static str,
        property: &'static str,
        #[source]
        source: ConstraintError,
    },
}
