//! Simulation errors.
//!
//! Every failure of the scheduler or the metrics calculator is reported
//! as a typed [`SimulationError`]. The computation is deterministic, so
//! none of these are retryable.

use std::fmt;

use crate::models::Pid;

/// Result alias for simulation operations.
pub type Result<T> = std::result::Result<T, SimulationError>;

/// A failed scheduling or metrics computation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimulationError {
    /// Round Robin quantum is zero or negative.
    InvalidQuantum(i64),
    /// No processes to schedule or average over.
    EmptyProcessSet,
    /// The produced schedule breaks a scheduler guarantee
    /// (a process never ran, or a loop exceeded its iteration bound).
    SchedulerInvariantViolation(String),
    /// The simulated timeline would exceed `i64::MAX`.
    TimeOverflow(String),
    /// A process has a non-positive burst or a negative arrival.
    InvalidProcess {
        /// Offending process.
        pid: Pid,
        /// What is wrong with it.
        reason: String,
    },
}

impl SimulationError {
    pub(crate) fn invariant(message: impl Into<String>) -> Self {
        Self::SchedulerInvariantViolation(message.into())
    }

    pub(crate) fn invalid_process(pid: Pid, reason: impl Into<String>) -> Self {
        Self::InvalidProcess {
            pid,
            reason: reason.into(),
        }
    }
}

impl fmt::Display for SimulationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidQuantum(q) => {
                write!(f, "invalid time quantum {q}: must be a positive integer")
            }
            Self::EmptyProcessSet => write!(f, "process set is empty"),
            Self::SchedulerInvariantViolation(msg) => {
                write!(f, "scheduler invariant violated: {msg}")
            }
            Self::TimeOverflow(what) => write!(f, "time overflow: {what} exceeds i64::MAX"),
            Self::InvalidProcess { pid, reason } => write!(f, "invalid process P{pid}: {reason}"),
        }
    }
}

impl std::error::Error for SimulationError {}
