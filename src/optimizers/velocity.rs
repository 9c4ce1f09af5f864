#[cfg(test)]
mod tests;

use std::fmt::Debug;
use crate::error::{Error, Result};

/// Clerc's constriction coefficient for the acceleration constants `c1` and `c2`.
///
/// `1.0` while `c1 + c2 <= 4`. Above that the closed form is used as is, sign
/// included.
///
/// For finite `rho = c1 + c2 > 4` the radicand `rho^2 - 4 rho` is positive and
/// the result finite, so with a validated configuration this never fails. The
/// error is only returned for non-finite constants, which would otherwise
/// spread a NaN into every velocity.
pub fn constriction_coefficient(c1: f64, c2: f64) -> Result<f64> {
    let rho = c1 + c2;

    if rho <= 4.0
    {
        return Ok(1.0);
    }

    let radicand = rho.powi(2) - 4.0 * rho;
    if !(radicand >= 0.0)
    {
        return Err(Error::Constriction { c1, c2 });
    }

    let chi = 2.0 / (2.0 - rho - radicand.sqrt());
    if !chi.is_finite()
    {
        return Err(Error::Constriction { c1, c2 });
    }

    Ok(chi)
}

/// Clamp a velocity component into `[delta_min, delta_max]`.
#[inline]
pub fn velocity_constriction(v: f64, delta_min: f64, delta_max: f64) -> f64 {
    if v > delta_max
    {
        delta_max
    }
    else if v < delta_min
    {
        delta_min
    }
    else
    {
        v
    }
}

/// Inertia applied to the previous velocity.
pub trait InertiaWeight: Debug {
    fn weight(&self, iteration: usize, max_iterations: usize, weight_max: f64, weight_min: f64) -> f64;
}

/// Always `weight_max`. The schedule arguments are ignored.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConstantInertia;

impl InertiaWeight for ConstantInertia {
    fn weight(&self, _iteration: usize, _max_iterations: usize, weight_max: f64, _weight_min: f64) -> f64 {
        weight_max
    }
}

/// Decreases linearly from `weight_max` at the first iteration to `weight_min`
/// at the last one.
#[derive(Debug, Default, Clone, Copy)]
pub struct LinearDecreasingInertia;

impl InertiaWeight for LinearDecreasingInertia {
    fn weight(&self, iteration: usize, max_iterations: usize, weight_max: f64, weight_min: f64) -> f64 {
        if max_iterations <= 1
        {
            return weight_max;
        }

        let progress = (iteration.saturating_sub(1) as f64 / (max_iterations - 1) as f64).min(1.0);

        weight_max - (weight_max - weight_min) * progress
    }
}
