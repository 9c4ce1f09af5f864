use rand::rngs::StdRng;
use rand::SeedableRng;
use crate::array_solution::ArraySolution;
use crate::config::{DmopsoConfig, FunctionType};
use crate::measures::{LogObserver, MeasuresObserver};
use crate::optimizers::dmopso::{DmopsoOptimizer, EngineState};
use crate::optimizers::Optimizer;
use crate::problem::dtlz::{Dtlz1, Dtlz2};
use crate::problem::zdt::Zdt1;
use crate::Solution;

fn init_logger()
{
    let _ = env_logger::builder().is_test(true).try_init();
}

fn optimize_and_get_best_solutions(optimizer: &mut Box<dyn Optimizer<ArraySolution> + '_>, seed: u64) -> Vec<(Vec<f64>, ArraySolution)>
{
    optimizer.optimize(&mut StdRng::seed_from_u64(seed)).unwrap();

    optimizer.best_solutions()
}

fn mean_convergence_metric_for_solutions(metric: impl Fn(&[f64]) -> f64, solutions: &[ArraySolution]) -> f64
{
    if solutions.is_empty()
    {
        return f64::MAX
    }

    let sum = solutions
        .iter()
        .map(|solution| metric(solution.variables()))
        .sum::<f64>();

    sum / solutions.len() as f64
}

fn zdt1_reference_config() -> DmopsoConfig
{
    DmopsoConfig {
        swarm_size: 100,
        max_iterations: 250,
        r1_min: 0.0,
        r1_max: 0.1,
        r2_min: 0.0,
        r2_max: 1.0,
        c1_min: 1.5,
        c1_max: 2.5,
        c2_min: 1.5,
        c2_max: 2.5,
        weight_min: 0.1,
        weight_max: 0.1,
        change_velocity1: -1.0,
        change_velocity2: -1.0,
        function_type: FunctionType::Tche,
        max_age: 2,
        ..DmopsoConfig::default()
    }
}

#[test]
fn zdt1_reference_run()
{
    init_logger();

    let problem = Zdt1::default();
    let mut measures = MeasuresObserver::<ArraySolution>::new()
        .with_indicator("mean front gap", |front: &[ArraySolution]| {
            front.iter().map(|s| Zdt1::front_gap(&s.f)).sum::<f64>() / front.len() as f64
        });
    let snapshots = measures.subscribe(300);
    let handle = measures.handle();

    let mut rng = StdRng::seed_from_u64(2024);
    let mut optimizer: DmopsoOptimizer = DmopsoOptimizer::new(problem, zdt1_reference_config())
        .unwrap()
        .with_observer(measures)
        .with_observer(LogObserver::new(50));

    optimizer.initialize(&mut rng).unwrap();
    let mut previous = optimizer.ideal_point().unwrap().values().to_vec();

    while optimizer.step(&mut rng).unwrap()
    {
        let z = optimizer.ideal_point().unwrap().values();
        assert!(z[0] <= previous[0] && z[1] <= previous[1]);
        previous = z.to_vec();
    }

    assert_eq!(optimizer.state(), EngineState::Done);

    let result = optimizer.result();
    assert_eq!(result.len(), 100);
    for solution in result.iter()
    {
        assert_eq!(solution.x.len(), 30);
        assert!(solution.x.iter().all(|x| (0.0..=1.0).contains(x)));
    }

    assert_eq!(handle.current_iteration(), 250);
    assert!(handle.is_finished());

    let published: Vec<_> = snapshots.try_iter().collect();
    assert_eq!(published.len(), 249);
    assert_eq!(published.last().unwrap().iteration, 250);

    let first_gap = published[0].indicators[0].1;
    let last_gap = published.last().unwrap().indicators[0].1;
    assert!(last_gap < first_gap);
    assert!(last_gap < 1.0, "mean front gap {}", last_gap);
}

#[test]
fn seeded_runs_are_reproducible()
{
    init_logger();

    let config = DmopsoConfig { swarm_size: 30, max_iterations: 40, ..zdt1_reference_config() };

    let mut first: Box<dyn Optimizer<ArraySolution>> = Box::new(DmopsoOptimizer::new(Zdt1::new(10), config.clone()).unwrap());
    let mut second: Box<dyn Optimizer<ArraySolution>> = Box::new(DmopsoOptimizer::new(Zdt1::new(10), config).unwrap());

    assert_eq!(
        optimize_and_get_best_solutions(&mut first, 99),
        optimize_and_get_best_solutions(&mut second, 99)
    );
}

#[test]
fn dtlz2_three_objectives_with_bundled_weights()
{
    init_logger();

    let problem = Dtlz2::new(12, 3);
    let config = DmopsoConfig { swarm_size: 91, max_iterations: 100, ..DmopsoConfig::default() };

    let mut initial: DmopsoOptimizer = DmopsoOptimizer::new(problem.clone(), DmopsoConfig { max_iterations: 1, ..config.clone() }).unwrap();
    initial.optimize(&mut StdRng::seed_from_u64(5)).unwrap();

    let mut optimizer: DmopsoOptimizer = DmopsoOptimizer::new(problem.clone(), config).unwrap();
    optimizer.optimize(&mut StdRng::seed_from_u64(5)).unwrap();

    assert_eq!(optimizer.weights().unwrap().len(), 91);
    assert_eq!(optimizer.result().len(), 91);
    assert!(optimizer.result().iter().all(|s| s.f.len() == 3));

    let before = mean_convergence_metric_for_solutions(|x| problem.convergence_metric(x), &initial.result());
    let after = mean_convergence_metric_for_solutions(|x| problem.convergence_metric(x), &optimizer.result());
    assert!(after < before, "convergence metric went from {} to {}", before, after);
}

#[test]
fn every_scalarization_completes_a_run()
{
    init_logger();

    for function_type in [FunctionType::Tche, FunctionType::Pbi, FunctionType::Agg]
    {
        let problem = Dtlz1::new(6, 2);
        let config = DmopsoConfig {
            swarm_size: 40,
            max_iterations: 30,
            function_type,
            ..DmopsoConfig::default()
        };

        let mut optimizer: Box<dyn Optimizer<ArraySolution>> =
            Box::new(DmopsoOptimizer::new(problem, config).unwrap().with_name(format!("dMOPSO {}", function_type)));
        let best = optimize_and_get_best_solutions(&mut optimizer, 11);

        assert_eq!(best.len(), 40, "{}", optimizer.name());
        for (objectives, solution) in best
        {
            assert_eq!(objectives, solution.f);
            assert!(objectives.iter().all(|f| f.is_finite()));
            assert!(solution.x.iter().all(|x| (0.0..=1.0).contains(x)));
        }
    }
}
