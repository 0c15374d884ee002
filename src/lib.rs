//! # Shock Tailor
//!
//! Ideal shock tube models and tailored-condition searches built on
//! [Twine](https://github.com/isentropic-dev/twine).
//!
//! A shock tube is *tailored* when the shock reflected from the end wall
//! passes through the contact surface without generating a secondary wave.
//! That happens when the acoustic impedance of the expanded driver gas
//! matches that of the shocked driven gas. This crate solves the ideal tube,
//! measures the mismatch, and scans driver compositions or pressures for the
//! configuration closest to tailoring.
//!
//! ## Crate layout
//!
//! - [`models`]: [`twine_core::Model`] implementations and the solver and
//!   search entry points behind them.
//! - [`support`]: Gas properties, value constraints and unit aliases used to
//!   build model inputs.
//!
//! Modules in [`support`] are part of the public API because callers need
//! them, but their APIs are not stable. Breaking changes may occur as needed.

pub mod models;
pub mod support;
