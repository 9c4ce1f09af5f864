use ndarray::{array, Array1};
use rand::rngs::StdRng;
use rand::SeedableRng;
use crate::array_solution::ArraySolution;
use crate::optimizers::swarm::{repair_bounds, SwarmState};

fn swarm(size: usize) -> SwarmState<ArraySolution>
{
    let particles = (0..size)
        .map(|i| ArraySolution::new(vec![i as f64, 0.5], vec![0.0, 0.0]))
        .collect();

    SwarmState::new(particles, 2)
}

#[test]
fn new_swarm_is_at_rest()
{
    let state = swarm(4);

    assert_eq!(state.len(), 4);
    assert_eq!(state.velocity().dim(), (4, 2));
    assert!(state.velocity().iter().all(|v| *v == 0.0));
    assert_eq!(state.age(), &[0, 0, 0, 0]);
    assert!(state.local_best().is_empty());
    assert!(state.global_best().is_empty());
}

#[test]
fn leaders_and_memory_start_as_copies()
{
    let mut state = swarm(3);

    state.initialize_leaders();
    state.initialize_particles_memory();
    state.particles[0].x[0] = 42.0;

    assert_eq!(state.global_best()[0].x[0], 0.0);
    assert_eq!(state.local_best()[0].x[0], 0.0);
}

#[test]
fn shuffled_leaders_are_a_permutation()
{
    let mut rng = StdRng::seed_from_u64(3);
    let mut state = swarm(50);
    let mut moved = false;

    for _ in 0..20
    {
        state.shuffle_leaders(&mut rng);

        let mut seen = state.leaders().to_vec();
        seen.sort_unstable();
        assert_eq!(seen, (0..50).collect::<Vec<_>>());

        moved |= state.leaders().iter().enumerate().any(|(i, l)| i != *l);
    }

    assert!(moved);
}

#[test]
fn out_of_bounds_coordinates_bounce()
{
    let mut position = [-0.5, 0.3, 1.7];
    let mut velocity: Array1<f64> = array![-0.2, 0.1, 0.4];

    repair_bounds(&mut position, velocity.view_mut(), &[0.0; 3], &[1.0; 3], -1.0, -0.5);

    assert_eq!(position, [0.0, 0.3, 1.0]);
    assert_eq!(velocity, array![0.2, 0.1, -0.2]);
}

#[test]
fn repair_is_idempotent()
{
    let lower = [-1.0, 0.0, 2.0];
    let upper = [1.0, 5.0, 3.0];
    let mut position = [-4.0, 2.5, 9.0];
    let mut velocity: Array1<f64> = array![1.0, 1.0, 1.0];

    repair_bounds(&mut position, velocity.view_mut(), &lower, &upper, -1.0, -1.0);
    let once = position;

    repair_bounds(&mut position, velocity.view_mut(), &lower, &upper, -1.0, -1.0);

    assert_eq!(position, once);
    assert_eq!(position, [-1.0, 2.5, 3.0]);
}
