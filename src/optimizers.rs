use rand::RngCore;
use crate::error::Result;
use crate::Solution;

pub mod dmopso;
pub mod ideal_point;
pub mod reference_directions;
pub mod scalarizing;
pub mod swarm;
pub mod velocity;

pub trait Optimizer<S: Solution>
{
    fn name(&self) -> &str;
    fn description(&self) -> &str;
    /// Run until the stopping condition is reached. All randomness comes from `rng`.
    fn optimize(&mut self, rng: &mut dyn RngCore) -> Result<()>;
    /// Copies of the final solutions.
    fn result(&self) -> Vec<S>;
    fn best_solutions(&self) -> Vec<(Vec<f64>, S)>;
}
