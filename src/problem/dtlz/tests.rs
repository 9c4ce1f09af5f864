use approx::assert_abs_diff_eq;
use crate::problem::dtlz::{Dtlz1, Dtlz2};
use crate::problem::DoubleProblem;

#[test]
fn dtlz1_front_is_the_half_simplex()
{
    let problem = Dtlz1::new(7, 3);
    let mut f = [0.0; 3];

    for position in [[0.0, 0.0], [0.3, 0.8], [1.0, 0.5]]
    {
        let x: Vec<f64> = position.iter().copied().chain(std::iter::repeat(0.5).take(5)).collect();
        problem.calculate_objectives(&x, &mut f).unwrap();

        assert_abs_diff_eq!(problem.convergence_metric(&x), 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(f.iter().sum::<f64>(), 0.5, epsilon = 1e-12);
    }

    let x = [0.3, 0.8, 0.5, 0.5, 0.5, 0.5, 0.5];
    problem.calculate_objectives(&x, &mut f).unwrap();
    assert_abs_diff_eq!(f[0], 0.5 * 0.3 * 0.8, epsilon = 1e-12);
    assert_abs_diff_eq!(f[1], 0.5 * 0.3 * 0.2, epsilon = 1e-12);
    assert_abs_diff_eq!(f[2], 0.5 * 0.7, epsilon = 1e-12);
}

#[test]
fn dtlz2_front_is_the_unit_sphere()
{
    let problem = Dtlz2::new(12, 3);
    let mut f = [0.0; 3];

    for position in [[0.0, 0.0], [0.25, 0.6], [1.0, 1.0]]
    {
        let x: Vec<f64> = position.iter().copied().chain(std::iter::repeat(0.5).take(10)).collect();
        problem.calculate_objectives(&x, &mut f).unwrap();

        assert_abs_diff_eq!(f.iter().map(|v| v * v).sum::<f64>(), 1.0, epsilon = 1e-12);
    }

    let x = vec![0.0; 12];
    problem.calculate_objectives(&x, &mut f).unwrap();
    assert_abs_diff_eq!(f[0], 1.0 + 10.0 * 0.25, epsilon = 1e-12);
    assert_abs_diff_eq!(f[1], 0.0, epsilon = 1e-12);
    assert_abs_diff_eq!(f[2], 0.0, epsilon = 1e-12);
}
