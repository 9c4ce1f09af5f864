use approx::assert_abs_diff_eq;
use crate::error::Error;
use crate::optimizers::velocity::*;

#[test]
fn constriction_is_neutral_up_to_four()
{
    assert_eq!(constriction_coefficient(1.5, 1.5).unwrap(), 1.0);
    assert_eq!(constriction_coefficient(2.0, 2.0).unwrap(), 1.0);
    assert_eq!(constriction_coefficient(-3.0, 0.5).unwrap(), 1.0);
}

#[test]
fn constriction_follows_the_closed_form_above_four()
{
    let rho: f64 = 5.0;
    let expected = 2.0 / (2.0 - rho - (rho * rho - 4.0 * rho).sqrt());

    let chi = constriction_coefficient(2.5, 2.5).unwrap();

    assert_abs_diff_eq!(chi, expected, epsilon = 1e-15);
    assert!(chi < 0.0 && chi > -1.0);
}

#[test]
fn constriction_is_defined_for_every_finite_sum_above_four()
{
    for step in 1..=200
    {
        let c = 2.0 + step as f64 * 0.05;
        let chi = constriction_coefficient(c, c).unwrap();

        assert!(chi.is_finite() && chi < 0.0 && chi > -1.0, "c1 = c2 = {} gave {}", c, chi);
    }
}

#[test]
fn constriction_without_a_real_value_is_an_error()
{
    let error = constriction_coefficient(f64::NAN, 2.0).unwrap_err();

    assert!(matches!(error, Error::Constriction { .. }));
    assert!(error.is_domain_error());
    assert!(constriction_coefficient(f64::INFINITY, 1.0).is_err());
}

#[test]
fn velocity_is_clamped_to_the_delta_range()
{
    assert_eq!(velocity_constriction(0.7, -0.5, 0.5), 0.5);
    assert_eq!(velocity_constriction(-0.7, -0.5, 0.5), -0.5);
    assert_eq!(velocity_constriction(0.25, -0.5, 0.5), 0.25);
}

#[test]
fn constant_inertia_ignores_the_schedule()
{
    for iteration in [1, 50, 250]
    {
        assert_eq!(ConstantInertia.weight(iteration, 250, 0.4, 0.1), 0.4);
    }
}

#[test]
fn linear_inertia_moves_from_max_to_min()
{
    assert_abs_diff_eq!(LinearDecreasingInertia.weight(1, 11, 0.4, 0.1), 0.4);
    assert_abs_diff_eq!(LinearDecreasingInertia.weight(6, 11, 0.4, 0.1), 0.25, epsilon = 1e-12);
    assert_abs_diff_eq!(LinearDecreasingInertia.weight(11, 11, 0.4, 0.1), 0.1, epsilon = 1e-12);
    assert_abs_diff_eq!(LinearDecreasingInertia.weight(40, 11, 0.4, 0.1), 0.1, epsilon = 1e-12);
}
