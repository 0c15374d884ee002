//! Public Twine models.
//!
//! Models are the primary public interface of this crate.
//!
//! # Model structure
//!
//! Each model lives in its own module and contains an internal `core` submodule
//! where the gas dynamics live. The `core` module is an implementation detail;
//! the entry points callers need are re-exported from the model module.
//!
//! The [`twine_core::Model`] implementations are thin adapters that validate
//! their input and delegate to the core API.

pub mod shock_tube;
