use crate::error::EvaluationError;
use crate::problem::DoubleProblem;

/// ZDT1: bi-objective, convex Pareto front `f2 = 1 - sqrt(f1)`, reached when
/// `x[1..] == 0`. All variables lie in `[0, 1]`.
#[derive(Clone, Debug)]
pub struct Zdt1
{
    name: String,
    n_var: usize,
}

impl Zdt1 {
    pub fn new(n_var: usize) -> Self
    {
        assert!(n_var >= 2, "ZDT1 needs at least two variables");

        Zdt1 {
            name: format!("ZDT1 ({})", n_var),
            n_var,
        }
    }

    /// Vertical distance of an objective vector above the true front.
    pub fn front_gap(f: &[f64]) -> f64 {
        f[1] - (1.0 - f[0].sqrt())
    }
}

impl Default for Zdt1 {
    fn default() -> Self {
        Zdt1::new(30)
    }
}

impl DoubleProblem for Zdt1
{
    fn name(&self) -> &str {
        self.name.as_str()
    }

    fn number_of_variables(&self) -> usize {
        self.n_var
    }

    fn number_of_objectives(&self) -> usize {
        2
    }

    fn lower_bound(&self, _index: usize) -> f64 {
        0.0
    }

    fn upper_bound(&self, _index: usize) -> f64 {
        1.0
    }

    fn calculate_objectives(&self, x: &[f64], f: &mut [f64]) -> Result<(), EvaluationError> {
        let f1 = x[0];
        let g = 1.0 + 9.0 * x[1..].iter().sum::<f64>() / (self.n_var - 1) as f64;

        f[0] = f1;
        f[1] = g * (1.0 - (f1 / g).sqrt());

        Ok(())
    }
}
