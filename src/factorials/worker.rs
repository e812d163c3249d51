//! Run a single evaluation off the calling thread.
//!
//! The computation never polls for cancellation. Abandoning a [`Pending`]
//! drops the receiver; the job still runs to completion on the pool and its
//! result is discarded.

use std::panic::{self, AssertUnwindSafe};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::time::Duration;

use log::{debug, warn};

use crate::factorials::errors::WorkerError;
use crate::factorials::function::{Function, Precision, Value, evaluate};
use crate::utils::DomainError;

/// Handle to an evaluation running on the rayon pool
pub struct Pending {
    function: Function,
    receiver: Receiver<Result<Value, DomainError>>,
}

/// Start evaluating `function` over `args` on the rayon pool.
pub fn spawn(function: Function, args: Vec<i64>, precision: Precision) -> Pending {
    let (sender, receiver) = mpsc::channel();
    debug!("Spawning {}{:?} on worker", function, args);

    rayon::spawn(move || {
        // A panic must not reach the pool's handler, which aborts the process.
        // Dropping the sender instead shows up as a disconnect on the receiver.
        match panic::catch_unwind(AssertUnwindSafe(|| evaluate(function, &args, precision))) {
            Ok(result) => {
                if sender.send(result).is_err() {
                    debug!("{} finished after its caller stopped waiting", function);
                }
            }
            Err(_) => warn!("{} panicked on worker", function),
        }
    });

    Pending { function, receiver }
}

impl Pending {
    pub fn function(&self) -> Function {
        self.function
    }

    /// Block until the evaluation finishes.
    ///
    /// # Errors
    ///
    /// Returns the evaluation's domain error, or [`WorkerError::Disconnected`]
    /// if the worker died without reporting.
    pub fn wait(self) -> Result<Value, WorkerError> {
        match self.receiver.recv() {
            Ok(result) => Ok(result?),
            Err(_) => {
                warn!("Worker for {} exited without a result", self.function);
                Err(WorkerError::Disconnected)
            }
        }
    }

    /// Block for at most `timeout`, abandoning the evaluation if it is still running.
    ///
    /// # Errors
    ///
    /// Returns [`WorkerError::TimedOut`] when the deadline passes first, plus
    /// every error [`Pending::wait`] can return.
    pub fn wait_timeout(self, timeout: Duration) -> Result<Value, WorkerError> {
        match self.receiver.recv_timeout(timeout) {
            Ok(result) => Ok(result?),
            Err(RecvTimeoutError::Timeout) => {
                warn!("Abandoning {} after {:?}", self.function, timeout);
                Err(WorkerError::TimedOut(timeout))
            }
            Err(RecvTimeoutError::Disconnected) => {
                warn!("Worker for {} exited without a result", self.function);
                Err(WorkerError::Disconnected)
            }
        }
    }
}
