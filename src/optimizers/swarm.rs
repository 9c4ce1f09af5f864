#[cfg(test)]
mod tests;

use ndarray::{Array2, ArrayView2, ArrayViewMut1};
use rand::Rng;
use crate::Solution;

/// Per-particle arrays of a swarm, all indexed by particle.
///
/// Weight vector `i` belongs to particle `i`, and `global_best[j]` is the best
/// solution of the whole swarm for weight vector `j`.
#[derive(Debug, Clone)]
pub struct SwarmState<S: Solution> {
    pub(crate) particles: Vec<S>,
    pub(crate) velocity: Array2<f64>,
    pub(crate) age: Vec<usize>,
    pub(crate) local_best: Vec<S>,
    pub(crate) global_best: Vec<S>,
    pub(crate) leader: Vec<usize>,
}

impl<S: Solution> SwarmState<S> {
    /// Zero velocities and ages. Local and global bests stay empty until
    /// [`initialize_leaders`](Self::initialize_leaders) and
    /// [`initialize_particles_memory`](Self::initialize_particles_memory).
    pub fn new(particles: Vec<S>, number_of_variables: usize) -> Self {
        let swarm_size = particles.len();

        SwarmState {
            velocity: Array2::zeros((swarm_size, number_of_variables)),
            age: vec![0; swarm_size],
            local_best: Vec::with_capacity(swarm_size),
            global_best: Vec::with_capacity(swarm_size),
            leader: (0..swarm_size).collect(),
            particles,
        }
    }

    /// Seed every global best with a copy of the particle of the same index.
    pub fn initialize_leaders(&mut self) {
        self.global_best = self.particles.clone();
    }

    /// Seed every local best with a copy of its particle.
    pub fn initialize_particles_memory(&mut self) {
        self.local_best = self.particles.clone();
    }

    /// Draw a new particle → global best permutation.
    ///
    /// Partial Fisher–Yates: `leader[i]` is picked uniformly from the indices
    /// not taken by `leader[0..i]`.
    pub fn shuffle_leaders<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let swarm_size = self.leader.len();
        let mut aux: Vec<usize> = (0..swarm_size).collect();

        for i in 0..swarm_size
        {
            let rnd = rng.gen_range(i..swarm_size);
            aux.swap(i, rnd);
            self.leader[i] = aux[i];
        }
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn particles(&self) -> &[S] {
        &self.particles
    }

    pub fn local_best(&self) -> &[S] {
        &self.local_best
    }

    pub fn global_best(&self) -> &[S] {
        &self.global_best
    }

    pub fn age(&self) -> &[usize] {
        &self.age
    }

    pub fn leaders(&self) -> &[usize] {
        &self.leader
    }

    pub fn velocity(&self) -> ArrayView2<'_, f64> {
        self.velocity.view()
    }
}

/// Clamp every coordinate into `[lower, upper]`.
///
/// A coordinate clamped to the lower bound has its velocity multiplied by
/// `change_velocity1`, one clamped to the upper bound by `change_velocity2`.
/// Positions already inside the bounds are left untouched, so repairing twice
/// gives the same position as repairing once.
pub fn repair_bounds(
    position: &mut [f64],
    mut velocity: ArrayViewMut1<'_, f64>,
    lower: &[f64],
    upper: &[f64],
    change_velocity1: f64,
    change_velocity2: f64,
) {
    for var in 0..position.len()
    {
        if position[var] < lower[var]
        {
            position[var] = lower[var];
            velocity[var] *= change_velocity1;
        }
        if position[var] > upper[var]
        {
            position[var] = upper[var];
            velocity[var] *= change_velocity2;
        }
    }
}
