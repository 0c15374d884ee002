//! Extensions to [`uom`].
//!
//! This crate uses [`uom`] for every physical quantity that crosses a public
//! boundary (pressure, temperature, density, velocity). The aliases here cover
//! quantities the shock relations need that [`uom`] does not name.
//!
//! Values of these aliases are produced by multiplying or dividing standard
//! [`uom`] quantities, so the dimensions are checked by the compiler:
//!
//! ```
//! use shock_tailor::support::units::AcousticImpedance;
//! use uom::si::{
//!     f64::{MassDensity, Velocity},
//!     mass_density::kilogram_per_cubic_meter,
//!     velocity::meter_per_second,
//! };
//!
//! let rho = MassDensity::new::<kilogram_per_cubic_meter>(1.2);
//! let a = Velocity::new::<meter_per_second>(340.0);
//! let z: AcousticImpedance = rho * a;
//! assert!((z.value - 408.0).abs() < 1e-12);
//! ```

mod quantities;

pub use quantities::{AcousticImpedance, ReciprocalLength, SpecificEnthalpy, SpecificGasConstant};
