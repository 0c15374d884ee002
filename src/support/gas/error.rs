use thiserror::Error;

use crate::support::constraint::ConstraintError;

/// Errors that may occur when resolving gas properties.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GasError {
    /// The identifier is not a registered gas or the mixture key.
    #[error("unknown gas type: {name}")]
    Unknown { name: String },

    /// A mixture was requested with a mole fraction outside `[0, 1]`.
    #[error("invalid mole fraction {fraction}")]
    MoleFraction {
        fraction: f64,
        #[source]
        source: ConstraintError,
    },
}
