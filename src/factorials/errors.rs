use std::time::Duration;

use thiserror::Error;

use crate::utils::DomainError;

/// Errors from an evaluation offloaded to a worker
#[derive(Error, Debug, Clone, PartialEq)]
pub enum WorkerError {
    #[error(transparent)]
    Domain(#[from] DomainError),
    #[error("Computation did not finish within {0:?}")]
    TimedOut(Duration),
    #[error("Worker exited without producing a result")]
    Disconnected,
}
