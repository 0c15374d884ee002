//! Closed-form shock tube relations for a calorically perfect gas.
//!
//! Every function works on plain SI `f64` values. Pressure, temperature and
//! density ratios are dimensionless; speeds are in m/s.

use thiserror::Error;

use crate::support::gas::{GasProperties, R_UNIVERSAL};

/// Per-gas constants used throughout the shock relations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct PerfectGas {
    pub(super) gamma: f64,
    pub(super) r: f64,
}

impl PerfectGas {
    pub(super) fn of(props: &GasProperties) -> Self {
        Self {
            gamma: props.gamma,
            r: R_UNIVERSAL / props.molecular_weight,
        }
    }

    /// `γ + 1`
    pub(super) fn gp(self) -> f64 {
        self.gamma + 1.0
    }

    /// `γ − 1`
    pub(super) fn gm(self) -> f64 {
        self.gamma - 1.0
    }

    pub(super) fn sound_speed(self, t: f64) -> f64 {
        (self.gamma * self.r * t).sqrt()
    }

    pub(super) fn density(self, p: f64, t: f64) -> f64 {
        p / (self.r * t)
    }

    /// Pressure jump `p2/p1` across a normal shock of Mach `mach`.
    pub(super) fn shock_pressure_ratio(self, mach: f64) -> f64 {
        1.0 + (2.0 * self.gamma / self.gp()) * (mach * mach - 1.0)
    }

    /// Rankine–Hugoniot temperature ratio for a shock of pressure ratio `pr`.
    pub(super) fn shock_temperature_ratio(self, pr: f64) -> f64 {
        let k = self.gp() / self.gm();
        pr * ((k + pr) / (1.0 + k * pr))
    }

    /// Rankine–Hugoniot density ratio for a shock of pressure ratio `pr`.
    pub(super) fn shock_density_ratio(self, pr: f64) -> f64 {
        let k = self.gp() / self.gm();
        (1.0 + k * pr) / (k + pr)
    }

    /// Gas velocity behind an incident shock moving into gas at rest.
    pub(super) fn induced_velocity(self, a1: f64, p21: f64) -> f64 {
        let g = self.gamma;
        (a1 / g) * (p21 - 1.0) * ((2.0 * g / self.gp()) / (p21 + self.gm() / self.gp())).sqrt()
    }

    /// Reflected-shock pressure ratio `p5/p2` at a closed end wall.
    pub(super) fn reflected_pressure_ratio(self, p21: f64) -> f64 {
        let g = self.gamma;
        ((3.0 * g - 1.0) * p21 - self.gm()) / (self.gm() * p21 + self.gp())
    }

    /// Reflected-shock Mach number relative to the gas in state 2.
    pub(super) fn reflected_mach(self, p52: f64) -> f64 {
        (1.0 + (self.gp() / (2.0 * self.gamma)) * (p52 - 1.0)).sqrt()
    }

    /// Isentropic temperature ratio `T/T0` for a pressure ratio `p/p0`.
    pub(super) fn isentropic_temperature_ratio(self, pr: f64) -> f64 {
        pr.powf(self.gm() / self.gamma)
    }

    /// Isentropic density ratio `ρ/ρ0` for a pressure ratio `p/p0`.
    pub(super) fn isentropic_density_ratio(self, pr: f64) -> f64 {
        pr.powf(1.0 / self.gamma)
    }
}

/// Reason a candidate driver configuration cannot produce the requested shock.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub(super) enum Infeasible {
    /// The unsteady expansion cannot accelerate the driver gas to `u2`.
    #[error("expansion fan has no real solution (term = {term})")]
    ExpansionFan { term: f64 },

    /// The driver would have to be compressed, not expanded, to reach `p3`.
    #[error("driver gas cannot expand to the contact surface pressure (p3/p4 = {ratio})")]
    Compression { ratio: f64 },
}

/// Solves the shock tube equation for the driver-to-driven pressure ratio `p4/p1`.
///
/// `term = 1 − (γ4−1)·(a1/a4)·(p2/p1 − 1) / √(2γ1·(2γ1 + (γ1+1)·(p2/p1 − 1)))`
/// must be positive for a real expansion-fan solution; otherwise (NaN
/// included) the configuration is rejected before any fractional power is
/// taken.
pub(super) fn driver_pressure_ratio(
    driven: PerfectGas,
    driver: PerfectGas,
    a1: f64,
    a4: f64,
    p21: f64,
) -> Result<f64, Infeasible> {
    let g1 = driven.gamma;
    let g4 = driver.gamma;

    let term = 1.0
        - (driver.gm() * (a1 / a4) * (p21 - 1.0))
            / (2.0 * g1 * (2.0 * g1 + driven.gp() * (p21 - 1.0))).sqrt();

    if term.is_nan() || term <= 0.0 {
        return Err(Infeasible::ExpansionFan { term });
    }

    Ok(p21 * term.powf(-2.0 * g4 / driver.gm()))
}
