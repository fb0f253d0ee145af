//! Error types for scheduler operations.

use thiserror::Error;

use crate::core::SimulationPhase;

/// Errors produced by scheduler components.
#[derive(Debug, Error)]
pub enum SchedulerError {
    /// Task parameters are out of range; the task never enters a simulation.
    #[error("invalid task parameter: {0}")]
    InvalidTaskParameter(String),
    /// Dispatch was attempted on a datacenter with nothing pending.
    #[error("dispatch from empty queue: {0}")]
    EmptyQueueDispatch(String),
    /// Datacenter or simulation configuration is unusable.
    #[error("configuration error: {0}")]
    Configuration(String),
    /// An operation was invoked in the wrong simulation phase.
    #[error("invalid phase: expected {expected}, found {actual}")]
    InvalidPhase {
        /// Phase the operation requires.
        expected: SimulationPhase,
        /// Phase the driver was in.
        actual: SimulationPhase,
    },
    /// External input (task file, prompt answer) could not be parsed.
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// Application-facing result using anyhow for higher-level contexts.
pub type AppResult<T> = Result<T, anyhow::Error>;
