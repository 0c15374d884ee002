//! Supporting utilities shared by the shock tube models.
//!
//! These modules are public because callers need them to build model inputs
//! (gas properties, constrained values, unit aliases), but their APIs are not
//! stable and may change as the models evolve.

pub mod constraint;
pub mod gas;
pub mod units;
