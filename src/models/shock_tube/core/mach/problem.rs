//! Problem formulation for inverting the shock tube equation.

use std::convert::Infallible;

use twine_core::{EquationProblem, Model};

use crate::models::shock_tube::core::{
    mach::{DriverPressure, RequiredPressure},
    relations::Infeasible,
};

/// Model adapter exposing the incident Mach number as the sole input.
pub(super) struct RequiredPressureModel<'a> {
    required: &'a RequiredPressure,
}

impl<'a> RequiredPressureModel<'a> {
    pub(super) fn new(required: &'a RequiredPressure) -> Self {
        Self { required }
    }
}

impl Model for RequiredPressureModel<'_> {
    type Input = f64;
    type Output = DriverPressure;
    type Error = Infeasible;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        let mach = *input;
        self.required
            .at(mach)
            .map(|pressure| DriverPressure { mach, pressure })
    }
}

/// Equation problem for matching a target driver pressure.
///
/// Computes the residual as `required_pressure - target_pressure`, in Pa.
pub(super) struct RequiredPressureProblem {
    target: f64,
}

impl RequiredPressureProblem {
    pub(super) fn new(target: f64) -> Self {
        Self { target }
    }
}

impl EquationProblem<1> for RequiredPressureProblem {
    type Input = f64;
    type Output = DriverPressure;
    type Error = Infallible;

    fn input(&self, x: &[f64; 1]) -> Result<Self::Input, Self::Error> {
        Ok(x[0])
    }

    fn residuals(
        &self,
        _input: &Self::Input,
        output: &Self::Output,
    ) -> Result<[f64; 1], Self::Error> {
        Ok([output.pressure - self.target])
    }
}
