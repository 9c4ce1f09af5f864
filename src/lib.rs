pub mod array_solution;
pub mod config;
pub mod error;
pub mod evaluator;
pub mod measures;
pub mod optimizers;
pub mod problem;
mod rng_util;
#[cfg(test)]
mod tests;

use std::fmt::Debug;

pub use crate::array_solution::ArraySolution;
pub use crate::config::{DmopsoConfig, FunctionType};
pub use crate::error::{Error, Result};
pub use crate::optimizers::dmopso::{DmopsoOptimizer, EngineState};
pub use crate::optimizers::Optimizer;
pub use crate::problem::{DoubleProblem, SolutionFactory};

/// Solution represents a real-coded candidate solution.
///
/// The optimizers only touch a solution through this narrow interface:
/// decision variables, objective values and a deep copy (`Clone`).
pub trait Solution: Debug + Clone {
    /// Build a solution from decision variables, with `number_of_objectives`
    /// objective slots that are not evaluated yet.
    fn from_variables(variables: Vec<f64>, number_of_objectives: usize) -> Self;

    fn variables(&self) -> &[f64];

    fn variables_mut(&mut self) -> &mut [f64];

    fn objectives(&self) -> &[f64];

    fn objectives_mut(&mut self) -> &mut [f64];

    /// Borrow variables and objectives at the same time, which is what an
    /// objective function needs to write its results in place.
    fn split_mut(&mut self) -> (&[f64], &mut [f64]);
}
