use thiserror::Error;

use crate::{models::shock_tube::core::InputError, support::gas::GasError};

/// Errors that can occur while scanning driver compositions.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CompositionSearchError {
    /// The Mach number or the known conditions are not physical.
    #[error("invalid search input")]
    Input(#[from] InputError),

    /// A mixture could not be formed at a grid point.
    #[error("mixture could not be formed")]
    Gas(#[from] GasError),
}
