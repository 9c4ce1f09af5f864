use crate::error::Result;
use crate::problem::{DoubleProblem, SolutionFactory};
use crate::Solution;

/// Evaluates a whole list of solutions against a problem.
///
/// Used for the initial swarm. The per-particle evaluations of the main loop
/// stay sequential because each one feeds the ideal point read by the next.
pub trait SolutionListEvaluator<S: Solution> {
    /// Evaluate every solution in place, stopping at the first failure.
    fn evaluate(&self, solutions: &mut [S], problem: &dyn DoubleProblem) -> Result<()>;
}

/// Evaluates the solutions one after another on the calling thread.
#[derive(Debug, Default, Clone, Copy)]
pub struct SequentialSolutionListEvaluator;

impl<S: Solution> SolutionListEvaluator<S> for SequentialSolutionListEvaluator {
    fn evaluate(&self, solutions: &mut [S], problem: &dyn DoubleProblem) -> Result<()> {
        for solution in solutions.iter_mut()
        {
            problem.evaluate(solution)?;
        }

        Ok(())
    }
}
