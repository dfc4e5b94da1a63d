use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimulationError {
    #[error("simulation already started")]
    AlreadyStarted,
    #[error("failed to spawn simulation thread: {0}")]
    Spawn(#[from] io::Error),
    #[error("simulation thread panicked")]
    Panicked,
}

/// An entity that owns a background activity started by `simulate`.
///
/// Implementors start at most one activity per instance; later calls return
/// `SimulationError::AlreadyStarted`.
pub trait Simulate {
    fn simulate(&self) -> Result<(), SimulationError>;
}
