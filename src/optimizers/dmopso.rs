
use std::fmt::{Display, Formatter};
use log::{debug, info, trace};
use rand::{Rng, RngCore};
use rand_distr::{Distribution, StandardNormal};
use crate::array_solution::ArraySolution;
use crate::config::{DmopsoConfig, FunctionType};
use crate::error::{Error, Result};
use crate::evaluator::{SequentialSolutionListEvaluator, SolutionListEvaluator};
use crate::measures::IterationObserver;
use crate::optimizers::ideal_point::IdealPoint;
use crate::optimizers::reference_directions::ReferenceDirections;
use crate::optimizers::swarm::{repair_bounds, SwarmState};
use crate::optimizers::velocity::{constriction_coefficient, velocity_constriction, ConstantInertia, InertiaWeight};
use crate::optimizers::Optimizer;
use crate::problem::{DoubleProblem, SolutionFactory};
use crate::rng_util::f64_range;
use crate::Solution;

/// Lifecycle of a [`DmopsoOptimizer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineState {
    /// Constructed, no swarm yet.
    Created,
    /// Swarm, weights, ideal point and bests are in place; no iteration ran.
    Initialized,
    /// At least one iteration ran and the budget is not exhausted.
    Running,
    /// The iteration budget is exhausted; the result is final.
    Done,
    /// An iteration returned an error; the swarm is left as it was at the failure.
    Failed,
}

impl EngineState {
    pub fn name(&self) -> &'static str {
        match self
        {
            EngineState::Created => "created",
            EngineState::Initialized => "initialized",
            EngineState::Running => "running",
            EngineState::Done => "done",
            EngineState::Failed => "failed",
        }
    }
}

impl Display for EngineState {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Everything that lives for exactly one run.
#[derive(Debug, Clone)]
struct RunState<S: Solution> {
    swarm: SwarmState<S>,
    weights: ReferenceDirections,
    ideal_point: IdealPoint<S>,
}

/// dMOPSO: multi-objective particle swarm optimization with decomposition.
///
/// Every particle owns one weight vector. Particles are pulled towards their
/// own best solution and towards the global best of a randomly assigned weight
/// vector; particles that stop improving for `max_age` iterations are resampled
/// between the two. The result is the global best of every weight vector.
///
/// ```
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
/// use sss_dmopso::problem::zdt::Zdt1;
/// use sss_dmopso::{DmopsoConfig, DmopsoOptimizer, Optimizer};
///
/// let config = DmopsoConfig { swarm_size: 20, max_iterations: 10, ..DmopsoConfig::default() };
/// let mut optimizer: DmopsoOptimizer = DmopsoOptimizer::new(Zdt1::new(10), config).unwrap();
///
/// optimizer.optimize(&mut StdRng::seed_from_u64(1)).unwrap();
/// assert_eq!(optimizer.result().len(), 20);
/// ```
pub struct DmopsoOptimizer<'a, S: Solution = ArraySolution> {
    name: String,
    problem: Box<dyn DoubleProblem + 'a>,
    config: DmopsoConfig,
    evaluator: Box<dyn SolutionListEvaluator<S> + 'a>,
    inertia: Box<dyn InertiaWeight + 'a>,
    observers: Vec<Box<dyn IterationObserver<S> + 'a>>,
    lower_bounds: Vec<f64>,
    upper_bounds: Vec<f64>,
    delta_max: Vec<f64>,
    delta_min: Vec<f64>,
    state: EngineState,
    iteration: usize,
    run_state: Option<RunState<S>>,
}

impl<'a, S: Solution> DmopsoOptimizer<'a, S> {
    /// Validates `config` against itself and against the problem's shape.
    pub fn new(problem: impl DoubleProblem + 'a, config: DmopsoConfig) -> Result<Self> {
        Self::from_boxed(Box::new(problem), config)
    }

    pub fn from_boxed(problem: Box<dyn DoubleProblem + 'a>, config: DmopsoConfig) -> Result<Self> {
        config.validate()?;

        if problem.number_of_objectives() == 0 || problem.number_of_variables() == 0
        {
            return Err(Error::InvalidConfig(format!(
                "problem '{}' must have at least one variable and one objective",
                problem.name()
            )));
        }

        let lower_bounds: Vec<f64> = (0..problem.number_of_variables()).map(|i| problem.lower_bound(i)).collect();
        let upper_bounds: Vec<f64> = (0..problem.number_of_variables()).map(|i| problem.upper_bound(i)).collect();

        if let Some(var) = (0..lower_bounds.len()).find(|&i| !(lower_bounds[i] <= upper_bounds[i]))
        {
            return Err(Error::InvalidConfig(format!(
                "variable {} of '{}' has bounds [{}, {}]",
                var,
                problem.name(),
                lower_bounds[var],
                upper_bounds[var]
            )));
        }

        let delta_max = problem.delta_max();
        let delta_min = delta_max.iter().map(|d| -d).collect();

        Ok(DmopsoOptimizer {
            name: "dMOPSO".to_string(),
            problem,
            config,
            evaluator: Box::new(SequentialSolutionListEvaluator),
            inertia: Box::new(ConstantInertia),
            observers: vec![],
            lower_bounds,
            upper_bounds,
            delta_max,
            delta_min,
            state: EngineState::Created,
            iteration: 0,
            run_state: None,
        })
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Replace the evaluator used for the initial swarm.
    pub fn with_evaluator(mut self, evaluator: impl SolutionListEvaluator<S> + 'a) -> Self {
        self.evaluator = Box::new(evaluator);
        self
    }

    /// Replace the inertia schedule. The default is [`ConstantInertia`].
    pub fn with_inertia(mut self, inertia: impl InertiaWeight + 'a) -> Self {
        self.inertia = Box::new(inertia);
        self
    }

    /// Register an observer. Observers are notified in registration order.
    pub fn with_observer(mut self, observer: impl IterationObserver<S> + 'a) -> Self {
        self.observers.push(Box::new(observer));
        self
    }

    pub fn config(&self) -> &DmopsoConfig {
        &self.config
    }

    pub fn problem(&self) -> &dyn DoubleProblem {
        self.problem.as_ref()
    }

    pub fn state(&self) -> EngineState {
        self.state
    }

    /// The iteration counter: 1 right after initialization, incremented after
    /// every sweep.
    pub fn iteration(&self) -> usize {
        self.iteration
    }

    pub fn is_stopping_condition_reached(&self) -> bool {
        self.iteration >= self.config.max_iterations
    }

    pub fn ideal_point(&self) -> Option<&IdealPoint<S>> {
        self.run_state.as_ref().map(|run| &run.ideal_point)
    }

    pub fn weights(&self) -> Option<&ReferenceDirections> {
        self.run_state.as_ref().map(|run| &run.weights)
    }

    pub fn swarm(&self) -> Option<&SwarmState<S>> {
        self.run_state.as_ref().map(|run| &run.swarm)
    }

    /// Copies of the global best of every weight vector, in weight order.
    /// Empty before initialization.
    pub fn result(&self) -> Vec<S> {
        self.run_state
            .as_ref()
            .map(|run| run.swarm.global_best.clone())
            .unwrap_or_default()
    }

    /// Build the initial swarm, weights, ideal point and bests.
    pub fn initialize<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<()> {
        self.require_state("initialize", &[EngineState::Created])?;

        let swarm_size = self.config.swarm_size;
        let number_of_objectives = self.problem.number_of_objectives();
        let problem = self.problem.as_ref();

        info!(
            "Initializing {} on {} with {} particles, {} iterations, {} scalarization",
            self.name,
            problem.name(),
            swarm_size,
            self.config.max_iterations,
            self.config.function_type
        );

        let mut particles: Vec<S> = (0..swarm_size).map(|_| problem.create_solution(rng)).collect();
        self.evaluator.evaluate(&mut particles, problem)?;

        let mut swarm = SwarmState::new(particles, problem.number_of_variables());

        let weights = ReferenceDirections::for_swarm(number_of_objectives, swarm_size, &self.config.data_directory)?;
        check_weights(&weights, self.config.function_type)?;

        let mut references = Vec::with_capacity(number_of_objectives);
        for _ in 0..number_of_objectives
        {
            let mut reference: S = problem.create_solution(rng);
            problem.evaluate(&mut reference)?;
            references.push(reference);
        }
        let mut ideal_point = IdealPoint::new(references);
        for particle in swarm.particles.iter()
        {
            ideal_point.update(particle);
        }

        swarm.initialize_leaders();
        update_global_best(self.config.function_type, &mut swarm, &weights, ideal_point.values());

        swarm.initialize_particles_memory();
        update_global_best(self.config.function_type, &mut swarm, &weights, ideal_point.values());

        debug!("Initial ideal point {:?}", ideal_point.values());

        self.run_state = Some(RunState {
            swarm,
            weights,
            ideal_point,
        });
        self.iteration = 1;
        self.state = EngineState::Initialized;

        Ok(())
    }

    /// Check the stopping condition and, unless it is reached, run one
    /// iteration. Returns `false` once the budget is exhausted, leaving the
    /// optimizer in [`EngineState::Done`].
    pub fn step<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<bool> {
        self.require_state("step", &[EngineState::Initialized, EngineState::Running])?;

        let stop = self.is_stopping_condition_reached();
        for observer in self.observers.iter_mut()
        {
            observer.on_termination_check(self.iteration, stop);
        }

        if stop
        {
            self.state = EngineState::Done;
            info!("{} finished after {} iterations", self.name, self.iteration);
            return Ok(false);
        }

        self.state = EngineState::Running;

        for observer in self.observers.iter_mut()
        {
            observer.on_iteration_start(self.iteration);
        }

        if let Err(error) = self.sweep(rng)
        {
            self.state = EngineState::Failed;
            return Err(error);
        }
        self.iteration += 1;

        if let Some(run) = self.run_state.as_ref()
        {
            for observer in self.observers.iter_mut()
            {
                observer.on_iteration_end(self.iteration, &run.swarm.global_best);
            }
        }

        Ok(true)
    }

    /// Initialize if needed, then iterate until the budget is exhausted.
    pub fn run<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<()> {
        if self.state == EngineState::Created
        {
            self.initialize(rng)?;
        }

        while self.step(rng)? {}

        Ok(())
    }

    /// One sweep over every particle followed by the global best update.
    fn sweep<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<()> {
        let DmopsoOptimizer {
            problem,
            config,
            inertia,
            lower_bounds,
            upper_bounds,
            delta_max,
            delta_min,
            iteration,
            run_state,
            ..
        } = self;

        let RunState {
            swarm,
            weights,
            ideal_point,
        } = run_state.as_mut().ok_or(Error::InvalidState {
            operation: "step",
            state: EngineState::Created.name(),
        })?;

        let inertia_weight = inertia.weight(*iteration, config.max_iterations, config.weight_max, config.weight_min);
        let mut restarts = 0;

        swarm.shuffle_leaders(rng);

        for i in 0..swarm.len()
        {
            if swarm.age[i] < config.max_age
            {
                update_velocity(rng, swarm, i, config, inertia_weight, delta_min, delta_max)?;
                compute_new_position(swarm, i);
            }
            else
            {
                reset_particle(rng, swarm, i);
                restarts += 1;
            }

            repair_bounds(
                swarm.particles[i].variables_mut(),
                swarm.velocity.row_mut(i),
                lower_bounds,
                upper_bounds,
                config.change_velocity1,
                config.change_velocity2,
            );

            problem.evaluate(&mut swarm.particles[i])?;
            ideal_point.update(&swarm.particles[i]);

            update_local_best(swarm, i, weights.get(i), ideal_point.values(), config);
        }

        update_global_best(config.function_type, swarm, weights, ideal_point.values());

        debug!(
            "Iteration {}: {} restarts, ideal point {:?}",
            iteration,
            restarts,
            ideal_point.values()
        );

        Ok(())
    }

    fn require_state(&self, operation: &'static str, allowed: &[EngineState]) -> Result<()> {
        if allowed.contains(&self.state)
        {
            Ok(())
        }
        else
        {
            Err(Error::InvalidState {
                operation,
                state: self.state.name(),
            })
        }
    }
}

impl<'a, S: Solution> Optimizer<S> for DmopsoOptimizer<'a, S> {
    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        "MOPSO with decomposition"
    }

    fn optimize(&mut self, rng: &mut dyn RngCore) -> Result<()> {
        self.run(rng)
    }

    fn result(&self) -> Vec<S> {
        DmopsoOptimizer::result(self)
    }

    fn best_solutions(&self) -> Vec<(Vec<f64>, S)> {
        self.result()
            .into_iter()
            .map(|solution| (solution.objectives().to_vec(), solution))
            .collect()
    }
}

/// PBI divides by the weight norm, so an all-zero weight vector cannot be used.
fn check_weights(weights: &ReferenceDirections, function_type: FunctionType) -> Result<()> {
    if function_type == FunctionType::Pbi
    {
        if let Some(index) = weights.iter().position(|w| w.iter().all(|c| *c == 0.0))
        {
            return Err(Error::DegenerateWeightVector { index });
        }
    }

    Ok(())
}

fn update_velocity<S: Solution, R: Rng + ?Sized>(
    rng: &mut R,
    swarm: &mut SwarmState<S>,
    i: usize,
    config: &DmopsoConfig,
    inertia_weight: f64,
    delta_min: &[f64],
    delta_max: &[f64],
) -> Result<()> {
    let r1 = f64_range(rng, config.r1_min, config.r1_max);
    let r2 = f64_range(rng, config.r2_min, config.r2_max);
    let c1 = f64_range(rng, config.c1_min, config.c1_max);
    let c2 = f64_range(rng, config.c2_min, config.c2_max);

    let constriction = constriction_coefficient(c1, c2)?;

    let particle = swarm.particles[i].variables();
    let best_particle = swarm.local_best[i].variables();
    let best_global = swarm.global_best[swarm.leader[i]].variables();
    let mut speed = swarm.velocity.row_mut(i);

    for var in 0..particle.len()
    {
        speed[var] = velocity_constriction(
            constriction
                * (inertia_weight * speed[var]
                    + c1 * r1 * (best_particle[var] - particle[var])
                    + c2 * r2 * (best_global[var] - particle[var])),
            delta_min[var],
            delta_max[var],
        );
    }

    Ok(())
}

fn compute_new_position<S: Solution>(swarm: &mut SwarmState<S>, i: usize) {
    let speed = swarm.velocity.row(i);

    for (x, v) in swarm.particles[i].variables_mut().iter_mut().zip(speed.iter())
    {
        *x += v;
    }
}

/// Resample a stagnated particle from a normal distribution built on its local
/// best and its leader, and stop it.
fn reset_particle<S: Solution, R: Rng + ?Sized>(rng: &mut R, swarm: &mut SwarmState<S>, i: usize) {
    let best_global = swarm.global_best[swarm.leader[i]].variables();
    let best_particle = swarm.local_best[i].variables();
    let position = swarm.particles[i].variables_mut();

    for var in 0..position.len()
    {
        let mean = (best_global[var] - best_particle[var]) / 2.0;
        let sigma = (best_global[var] - best_particle[var]).abs();
        let n: f64 = StandardNormal.sample(rng);

        position[var] = n * sigma + mean;
        swarm.velocity[[i, var]] = 0.0;
    }

    trace!("Particle {} restarted after reaching age {}", i, swarm.age[i]);
}

/// Replace the local best when the particle is at least as fit, or
/// unconditionally once it has reached `max_age`.
fn update_local_best<S: Solution>(
    swarm: &mut SwarmState<S>,
    part: usize,
    lambda: &[f64],
    ideal_point: &[f64],
    config: &DmopsoConfig,
) {
    let f1 = config.function_type.fitness(swarm.local_best[part].objectives(), lambda, ideal_point);
    let f2 = config.function_type.fitness(swarm.particles[part].objectives(), lambda, ideal_point);

    if swarm.age[part] >= config.max_age || f2 <= f1
    {
        swarm.local_best[part] = swarm.particles[part].clone();
        swarm.age[part] = 0;
    }
    else
    {
        swarm.age[part] += 1;
    }
}

/// For every weight vector, scan the whole swarm for a strictly better solution.
fn update_global_best<S: Solution>(
    function_type: FunctionType,
    swarm: &mut SwarmState<S>,
    weights: &ReferenceDirections,
    ideal_point: &[f64],
) {
    for (j, lambda) in weights.iter().enumerate()
    {
        let mut g_best_fitness = function_type.fitness(swarm.global_best[j].objectives(), lambda, ideal_point);

        for i in 0..swarm.particles.len()
        {
            let v1 = function_type.fitness(swarm.particles[i].objectives(), lambda, ideal_point);

            if v1 < g_best_fitness
            {
                swarm.global_best[j] = swarm.particles[i].clone();
                g_best_fitness = v1;
            }
        }
    }
}
