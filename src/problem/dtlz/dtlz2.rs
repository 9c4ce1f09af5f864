use crate::error::EvaluationError;
use crate::problem::dtlz::{g2, spherical_objectives};
use crate::problem::DoubleProblem;

/// DTLZ2: spherical Pareto front `sum(f^2) = 1`, variables in `[0, 1]`.
#[derive(Clone, Debug)]
pub struct Dtlz2
{
    name: String,
    n_var: usize,
    n_obj: usize
}

impl Dtlz2 {
    pub fn new(n_var: usize, n_obj: usize) -> Self
    {
        assert!(n_obj >= 2 && n_var >= n_obj, "DTLZ2 needs n_obj >= 2 and n_var >= n_obj");

        Dtlz2 {
            name: format!("DTLZ2 ({} {})", n_var, n_obj),
            n_var,
            n_obj
        }
    }

    pub fn convergence_metric(&self, in_x: &[f64]) -> f64 {
        g2(&in_x[self.n_obj - 1..])
    }
}

impl DoubleProblem for Dtlz2
{
    fn name(&self) -> &str {
        self.name.as_str()
    }

    fn number_of_variables(&self) -> usize {
        self.n_var
    }

    fn number_of_objectives(&self) -> usize {
        self.n_obj
    }

    fn lower_bound(&self, _index: usize) -> f64 {
        0.0
    }

    fn upper_bound(&self, _index: usize) -> f64 {
        1.0
    }

    fn calculate_objectives(&self, in_x: &[f64], f: &mut [f64]) -> Result<(), EvaluationError> {
        let x = &in_x[..self.n_obj - 1];
        let x_m = &in_x[self.n_obj - 1..];

        spherical_objectives(x, g2(x_m), f);

        Ok(())
    }
}
