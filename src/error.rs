use std::path::PathBuf;

/// Boxed error returned by a problem's objective function.
pub type EvaluationError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Returned when no weight vector table exists in the bundled resources
    /// nor on the filesystem.
    #[error("weight vector file '{file_name}' not found (searched: {searched:?})")]
    WeightFileNotFound {
        /// The expected `W<M>D_<N>.dat` file name.
        file_name: String,
        /// Every location that was tried, in order.
        searched: Vec<PathBuf>,
    },

    /// Returned when a weight vector table exists but cannot be read or written.
    #[error("failed to access weight vector file '{path}': {source}")]
    WeightFileIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Returned when a line of a weight vector table cannot be used.
    #[error("malformed weight vector file '{path}' at line {line}: {reason}")]
    MalformedWeightFile {
        path: PathBuf,
        /// One-based line number.
        line: usize,
        reason: String,
    },

    /// Returned when a weight vector table does not hold one vector per particle.
    #[error("weight vector file '{path}' holds {got} vectors, expected {expected}")]
    WeightCountMismatch {
        path: PathBuf,
        expected: usize,
        got: usize,
    },

    /// Returned when the optimizer configuration is rejected by validation.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Returned when a configuration file cannot be read.
    #[error("failed to read configuration '{path}': {source}")]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Returned when a configuration document cannot be deserialized.
    #[error("failed to parse configuration: {0}")]
    ConfigParse(#[from] serde_json::Error),

    /// Returned when a scalarizing function name is not one of TCHE, PBI or AGG.
    #[error("unknown scalarizing function type '{0}'")]
    UnknownFunctionType(String),

    /// Returned when the constriction coefficient has no real value.
    #[error("constriction coefficient is undefined for c1 = {c1}, c2 = {c2}")]
    Constriction { c1: f64, c2: f64 },

    /// Returned when PBI is asked to project onto a zero-norm weight vector.
    #[error("weight vector {index} has zero norm and cannot be used with PBI")]
    DegenerateWeightVector { index: usize },

    /// Returned when the problem fails to evaluate a solution.
    #[error("problem evaluation failed: {0}")]
    Evaluation(#[source] EvaluationError),

    /// Returned when an engine operation is called in the wrong lifecycle state.
    #[error("operation '{operation}' is not allowed while the optimizer is {state}")]
    InvalidState {
        operation: &'static str,
        state: &'static str,
    },
}

impl Error {
    /// True for errors caused by a missing or unusable weight vector table.
    pub fn is_configuration_error(&self) -> bool {
        matches!(
            self,
            Error::WeightFileNotFound { .. }
                | Error::WeightFileIo { .. }
                | Error::MalformedWeightFile { .. }
                | Error::WeightCountMismatch { .. }
                | Error::InvalidConfig(_)
                | Error::ConfigIo { .. }
                | Error::ConfigParse(_)
        )
    }

    /// True for numeric failures that must stop the run.
    pub fn is_domain_error(&self) -> bool {
        matches!(
            self,
            Error::UnknownFunctionType(_)
                | Error::Constriction { .. }
                | Error::DegenerateWeightVector { .. }
        )
    }
}

pub type Result<T> = core::result::Result<T, Error>;
