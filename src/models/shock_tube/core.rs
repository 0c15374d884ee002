//! Ideal shock tube computation.
//!
//! Given an incident shock Mach number and the initial conditions of both
//! sections, [`solve`] produces the five uniform gas states of the tube and
//! [`evaluate`] measures how well the expanded driver gas matches the shocked
//! driven gas at the contact surface. The searches repeat that pipeline over
//! an even grid of driver compositions or pressures.

mod composition;
mod error;
mod grid;
mod input;
mod mach;
mod nozzle;
mod pressure;
mod relations;
mod states;
mod tailoring;

#[cfg(test)]
mod test_support;

pub use composition::{
    CompositionSample, CompositionSearch, CompositionSearchConfig, CompositionSearchError,
    OptimalComposition, search_composition, search_composition_at_pressure,
};
pub use error::InputError;
pub use input::{Known, Section, ShockTubeInput};
pub use mach::{MachError, MachSolution, MachSolveConfig, driver_pressure_for_mach, solve_mach};
pub use nozzle::{NozzleState, nozzle_state};
pub use pressure::{
    PressureSample, PressureSearch, PressureSearchConfig, PressureSearchError, search_pressure,
};
pub use states::{
    GasRole, PressureRatios, ShockTubeStates, ShockWaveInfo, ThermodynamicState, solve,
};
pub use tailoring::{
    Classification, NEAR_TAILORED_LIMIT, TAILORED_LIMIT, TailoredResult, evaluate,
};
