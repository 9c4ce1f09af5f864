
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use serde::{Deserialize, Serialize};
use crate::error::Error;

/// Weight substituted for a zero Tchebycheff weight so that the objective
/// still takes part in the maximum.
pub const TCHE_ZERO_WEIGHT: f64 = 0.0001;

/// Penalty applied to the perpendicular distance in PBI.
pub const PBI_THETA: f64 = 5.0;

/// Scalarizing function turning an objective vector into a single fitness
/// value for one weight vector. Smaller is better for all of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum FunctionType {
    /// Weighted Tchebycheff distance to the ideal point.
    Tche,
    /// Penalty-based boundary intersection.
    Pbi,
    /// Plain weighted sum of the raw objectives.
    Agg,
}

impl FunctionType {
    /// Fitness of `objectives` for `weight`, relative to `ideal_point`.
    ///
    /// `Agg` ignores the ideal point.
    pub fn fitness(&self, objectives: &[f64], weight: &[f64], ideal_point: &[f64]) -> f64 {
        match self
        {
            FunctionType::Tche => tchebycheff(objectives, weight, ideal_point),
            FunctionType::Agg => weighted_sum(objectives, weight),
            FunctionType::Pbi => {
                let (d1, d2) = pbi_distances(objectives, weight, ideal_point);

                d1 + PBI_THETA * d2
            }
        }
    }

    pub fn name(&self) -> &'static str {
        match self
        {
            FunctionType::Tche => "TCHE",
            FunctionType::Pbi => "PBI",
            FunctionType::Agg => "AGG",
        }
    }
}

impl Default for FunctionType {
    fn default() -> Self {
        FunctionType::Tche
    }
}

impl Display for FunctionType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Accepts `TCHE`, `PBI` and `AGG` in any case, with or without the leading
/// underscore of the older `_TCHE` spelling.
impl FromStr for FunctionType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().trim_start_matches('_').to_ascii_uppercase().as_str()
        {
            "TCHE" => Ok(FunctionType::Tche),
            "PBI" => Ok(FunctionType::Pbi),
            "AGG" => Ok(FunctionType::Agg),
            _ => Err(Error::UnknownFunctionType(s.to_string())),
        }
    }
}

pub fn tchebycheff(objectives: &[f64], weight: &[f64], ideal_point: &[f64]) -> f64 {
    let mut max_fun = f64::NEG_INFINITY;

    for ((f, w), z) in objectives.iter().zip(weight).zip(ideal_point)
    {
        let diff = (f - z).abs();

        let feval = if *w == 0.0 {
            TCHE_ZERO_WEIGHT * diff
        } else {
            diff * w
        };

        if feval > max_fun
        {
            max_fun = feval;
        }
    }

    max_fun
}

pub fn weighted_sum(objectives: &[f64], weight: &[f64]) -> f64 {
    objectives.iter().zip(weight).map(|(f, w)| w * f).sum()
}

/// Returns `(d1, d2)`: the distance along the weight direction and the
/// perpendicular distance to it, both measured from the ideal point.
///
/// The weight vector must have a non-zero norm.
pub fn pbi_distances(objectives: &[f64], weight: &[f64], ideal_point: &[f64]) -> (f64, f64) {
    let norm = weight.iter().map(|w| w * w).sum::<f64>().sqrt();

    let d1 = objectives
        .iter()
        .zip(weight)
        .zip(ideal_point)
        .map(|((f, w), z)| (f - z) * w)
        .sum::<f64>()
        .abs()
        / norm;

    let d2 = objectives
        .iter()
        .zip(weight)
        .zip(ideal_point)
        .map(|((f, w), z)| ((f - z) - d1 * (w / norm)).powi(2))
        .sum::<f64>()
        .sqrt();

    (d1, d2)
}
