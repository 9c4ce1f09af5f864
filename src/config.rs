
use std::path::{Path, PathBuf};
use serde::{Deserialize, Serialize};
use crate::error::{Error, Result};

pub use crate::optimizers::scalarizing::FunctionType;

/// Parameters of a dMOPSO run.
///
/// Every field has a default taken from the reference dMOPSO setup, so a JSON
/// document only needs the fields it changes:
///
/// ```
/// use sss_dmopso::{DmopsoConfig, FunctionType};
///
/// let config = DmopsoConfig::from_json_str(r#"{ "swarm_size": 50, "function_type": "PBI" }"#).unwrap();
/// assert_eq!(config.swarm_size, 50);
/// assert_eq!(config.function_type, FunctionType::Pbi);
/// assert_eq!(config.max_iterations, 250);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DmopsoConfig {
    /// Number of particles, which is also the number of weight vectors.
    pub swarm_size: usize,
    /// The run stops once the iteration counter (starting at 1) reaches this value.
    pub max_iterations: usize,
    pub r1_min: f64,
    pub r1_max: f64,
    pub r2_min: f64,
    pub r2_max: f64,
    pub c1_min: f64,
    pub c1_max: f64,
    pub c2_min: f64,
    pub c2_max: f64,
    /// Lower end of the inertia schedule. Unused by the default constant schedule.
    pub weight_min: f64,
    pub weight_max: f64,
    /// Velocity factor applied when a variable is clamped to its lower bound.
    pub change_velocity1: f64,
    /// Velocity factor applied when a variable is clamped to its upper bound.
    pub change_velocity2: f64,
    pub function_type: FunctionType,
    /// Directory holding `W<M>D_<N>.dat` weight tables.
    pub data_directory: PathBuf,
    /// Number of non-improving iterations after which a particle is restarted.
    pub max_age: usize,
}

impl Default for DmopsoConfig {
    fn default() -> Self {
        DmopsoConfig {
            swarm_size: 100,
            max_iterations: 250,
            r1_min: 0.0,
            r1_max: 1.0,
            r2_min: 0.0,
            r2_max: 1.0,
            c1_min: 1.5,
            c1_max: 2.5,
            c2_min: 1.5,
            c2_max: 2.5,
            weight_min: 0.1,
            weight_max: 0.4,
            change_velocity1: -1.0,
            change_velocity2: -1.0,
            function_type: FunctionType::Tche,
            data_directory: PathBuf::from("weights"),
            max_age: 2,
        }
    }
}

impl DmopsoConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: DmopsoConfig = serde_json::from_str(json)?;
        config.validate()?;

        Ok(config)
    }

    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| Error::ConfigIo {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_json_str(&json)
    }

    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject configurations that would otherwise fail deep inside the run,
    /// e.g. through a division by `swarm_size - 1` or an inverted sampling range.
    pub fn validate(&self) -> Result<()> {
        if self.swarm_size < 2
        {
            return Err(Error::InvalidConfig(format!(
                "swarm_size must be at least 2, got {}",
                self.swarm_size
            )));
        }

        let ranges = [
            ("r1", self.r1_min, self.r1_max),
            ("r2", self.r2_min, self.r2_max),
            ("c1", self.c1_min, self.c1_max),
            ("c2", self.c2_min, self.c2_max),
            ("weight", self.weight_min, self.weight_max),
        ];

        for (name, min, max) in ranges
        {
            if !min.is_finite() || !max.is_finite()
            {
                return Err(Error::InvalidConfig(format!(
                    "{name}_min and {name}_max must be finite, got [{min}, {max}]"
                )));
            }

            if min > max
            {
                return Err(Error::InvalidConfig(format!(
                    "{name}_min ({min}) must not exceed {name}_max ({max})"
                )));
            }
        }

        if !self.change_velocity1.is_finite() || !self.change_velocity2.is_finite()
        {
            return Err(Error::InvalidConfig(
                "change_velocity1 and change_velocity2 must be finite".to_string(),
            ));
        }

        Ok(())
    }
}
