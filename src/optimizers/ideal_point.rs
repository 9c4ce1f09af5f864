#[cfg(test)]
mod tests;

use crate::Solution;

/// Best value seen so far for every objective, together with a copy of the
/// solution that last improved it.
#[derive(Debug, Clone)]
pub struct IdealPoint<S: Solution> {
    z: Vec<f64>,
    ind_array: Vec<S>,
}

impl<S: Solution> IdealPoint<S> {
    /// Every component starts at `+inf`. `references` seeds the per-objective
    /// solution snapshots and must hold one solution per objective.
    pub fn new(references: Vec<S>) -> Self {
        IdealPoint {
            z: vec![f64::INFINITY; references.len()],
            ind_array: references,
        }
    }

    /// Lower every component that `solution` improves. Components never increase.
    /// Returns true if at least one component changed.
    pub fn update(&mut self, solution: &S) -> bool {
        let mut improved = false;

        for (n, value) in solution.objectives().iter().enumerate()
        {
            if *value < self.z[n]
            {
                self.z[n] = *value;
                self.ind_array[n] = solution.clone();
                improved = true;
            }
        }

        improved
    }

    pub fn values(&self) -> &[f64] {
        &self.z
    }

    /// Solutions that set each component, in objective order.
    pub fn references(&self) -> &[S] {
        &self.ind_array
    }
}
