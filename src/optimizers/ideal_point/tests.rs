use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use crate::array_solution::ArraySolution;
use crate::optimizers::ideal_point::IdealPoint;

fn solution(f: &[f64]) -> ArraySolution
{
    ArraySolution::new(vec![], f.to_vec())
}

#[test]
fn starts_at_infinity_with_the_seed_references()
{
    let seeds = vec![solution(&[9.0, 9.0]), solution(&[8.0, 8.0])];
    let ideal = IdealPoint::new(seeds.clone());

    assert_eq!(ideal.values(), &[f64::INFINITY, f64::INFINITY]);
    assert_eq!(ideal.references(), seeds.as_slice());
}

#[test]
fn keeps_a_copy_of_the_improving_solution_per_objective()
{
    let mut ideal = IdealPoint::new(vec![solution(&[0.0, 0.0]); 2]);

    assert!(ideal.update(&solution(&[3.0, 1.0])));
    assert!(ideal.update(&solution(&[2.0, 5.0])));
    assert!(!ideal.update(&solution(&[2.5, 1.5])));

    assert_eq!(ideal.values(), &[2.0, 1.0]);
    assert_eq!(ideal.references()[0].f, vec![2.0, 5.0]);
    assert_eq!(ideal.references()[1].f, vec![3.0, 1.0]);
}

#[test]
fn ties_do_not_replace_the_reference()
{
    let mut ideal = IdealPoint::new(vec![solution(&[0.0]); 1]);
    let first = ArraySolution::new(vec![1.0], vec![1.0]);
    let tie = ArraySolution::new(vec![2.0], vec![1.0]);

    ideal.update(&first);
    assert!(!ideal.update(&tie));
    assert_eq!(ideal.references()[0], first);
}

#[test]
fn components_never_increase()
{
    let mut rng = StdRng::seed_from_u64(7);
    let mut ideal = IdealPoint::new(vec![solution(&[0.0; 3]); 3]);
    let mut previous = ideal.values().to_vec();

    for _ in 0..1000
    {
        let f: Vec<f64> = (0..3).map(|_| rng.gen_range(-10.0..10.0)).collect();
        ideal.update(&solution(&f));

        for (now, before) in ideal.values().iter().zip(&previous)
        {
            assert!(now <= before);
        }
        previous = ideal.values().to_vec();
    }
}
