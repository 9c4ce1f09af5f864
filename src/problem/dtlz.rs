#[cfg(test)]
mod tests;

pub mod dtlz1;
pub mod dtlz2;

pub use dtlz1::Dtlz1;
pub use dtlz2::Dtlz2;

use std::f64::consts::{FRAC_PI_2, PI};

/// Distance function of DTLZ1 (multi-modal, 11^k - 1 local fronts).
fn g1(x_m: &[f64]) -> f64
{
    let rastrigin: f64 = x_m
        .iter()
        .map(|x| (x - 0.5).powi(2) - (20.0 * PI * (x - 0.5)).cos())
        .sum();

    100.0 * (x_m.len() as f64 + rastrigin)
}

/// Distance function of DTLZ2.
fn g2(x_m: &[f64]) -> f64
{
    x_m.iter().map(|x| (x - 0.5).powi(2)).sum()
}

/// Objective `i` scales the product of the first `M - 1 - i` position terms
/// and, for `i > 0`, the complement of the next one. DTLZ1 uses `x` and
/// `1 - x`, DTLZ2 `cos` and `sin` of `x * pi / 2`.
fn position_objectives(position: &[f64], scale: f64, f: &mut [f64], term: impl Fn(f64) -> f64, complement: impl Fn(f64) -> f64)
{
    for (i, f_i) in f.iter_mut().enumerate()
    {
        let kept = position.len() - i;
        let product: f64 = position[..kept].iter().map(|x| term(*x)).product();

        *f_i = if i == 0 { scale * product } else { scale * product * complement(position[kept]) };
    }
}

fn linear_objectives(position: &[f64], g: f64, f: &mut [f64])
{
    position_objectives(position, 0.5 * (1.0 + g), f, |x| x, |x| 1.0 - x);
}

fn spherical_objectives(position: &[f64], g: f64, f: &mut [f64])
{
    position_objectives(position, 1.0 + g, f, |x| (x * FRAC_PI_2).cos(), |x| (x * FRAC_PI_2).sin());
}
