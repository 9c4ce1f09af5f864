pub mod dtlz;
pub mod zdt;

use dyn_clone::DynClone;
use rand::Rng;
use crate::error::{Error, EvaluationError, Result};
use crate::rng_util::f64_range;
use crate::Solution;

/// A continuous, box-constrained multi-objective problem.
///
/// All objectives are minimized. The trait is object safe, so optimizers hold
/// problems as `Box<dyn DoubleProblem>`; boxes can be cloned with `dyn-clone`.
pub trait DoubleProblem: DynClone {
    fn name(&self) -> &str;

    fn number_of_variables(&self) -> usize;

    fn number_of_objectives(&self) -> usize;

    fn lower_bound(&self, index: usize) -> f64;

    fn upper_bound(&self, index: usize) -> f64;

    /// The objective function.
    ///
    /// `f` always has `number_of_objectives()` slots and must be fully written.
    /// A returned error aborts the optimization run.
    fn calculate_objectives(&self, x: &[f64], f: &mut [f64]) -> core::result::Result<(), EvaluationError>;
}

dyn_clone::clone_trait_object!(DoubleProblem);

/// Creation and evaluation of solutions for any [`DoubleProblem`].
///
/// Blanket-implemented, so it works on concrete problems and on trait objects.
pub trait SolutionFactory {
    /// Sample a solution uniformly inside the variable bounds. Objectives are
    /// left unevaluated.
    fn create_solution<S: Solution, R: Rng + ?Sized>(&self, rng: &mut R) -> S;

    /// Evaluate `solution` in place.
    fn evaluate<S: Solution>(&self, solution: &mut S) -> Result<()>;

    /// Half of the variable range for every variable, the velocity limit used by
    /// particle swarm optimizers.
    fn delta_max(&self) -> Vec<f64>;
}

impl<P: DoubleProblem + ?Sized> SolutionFactory for P {
    fn create_solution<S: Solution, R: Rng + ?Sized>(&self, rng: &mut R) -> S {
        let variables = (0..self.number_of_variables())
            .map(|i| f64_range(rng, self.lower_bound(i), self.upper_bound(i)))
            .collect();

        S::from_variables(variables, self.number_of_objectives())
    }

    fn evaluate<S: Solution>(&self, solution: &mut S) -> Result<()> {
        let (x, f) = solution.split_mut();

        self.calculate_objectives(x, f).map_err(Error::Evaluation)
    }

    fn delta_max(&self) -> Vec<f64> {
        (0..self.number_of_variables())
            .map(|i| (self.upper_bound(i) - self.lower_bound(i)) / 2.0)
            .collect()
    }
}
