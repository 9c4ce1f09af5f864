use std::fmt::{Debug, Display, Formatter};
use itertools::Itertools;
use crate::Solution;

/// A real-coded solution stored as two flat arrays.
///
/// `x` holds the decision variables and `f` the objective values.
#[derive(Clone, PartialEq)]
pub struct ArraySolution
{
    pub x: Vec<f64>,
    pub f: Vec<f64>,
}

impl ArraySolution
{
    pub fn new(x: Vec<f64>, f: Vec<f64>) -> Self
    {
        ArraySolution {
            x,
            f
        }
    }
}

impl Debug for ArraySolution {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ArraySolution")
            .field("x", &self.x)
            .field("f", &self.f)
            .finish()
    }
}

/// Prints objectives first and variables second, separated by `|`,
/// matching the column order of FUN/VAR result files.
impl Display for ArraySolution {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} | {}", self.f.iter().join(" "), self.x.iter().join(" "))
    }
}

impl Solution for ArraySolution
{
    fn from_variables(variables: Vec<f64>, number_of_objectives: usize) -> Self {
        ArraySolution {
            x: variables,
            f: vec![0.0; number_of_objectives],
        }
    }

    fn variables(&self) -> &[f64] {
        &self.x
    }

    fn variables_mut(&mut self) -> &mut [f64] {
        &mut self.x
    }

    fn objectives(&self) -> &[f64] {
        &self.f
    }

    fn objectives_mut(&mut self) -> &mut [f64] {
        &mut self.f
    }

    fn split_mut(&mut self) -> (&[f64], &mut [f64]) {
        (&self.x, &mut self.f)
    }
}
