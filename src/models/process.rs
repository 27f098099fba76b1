//! Process model.
//!
//! A process is a unit of CPU work: it becomes eligible at its arrival
//! time and needs its burst time of CPU to complete.

use serde::{Deserialize, Serialize};

/// Process identifier supplied by the caller.
pub type Pid = u32;

/// A process to be scheduled on a single CPU.
///
/// # Time Representation
/// All times are integer time units relative to the simulation epoch (t=0).
/// The caller decides what one unit means (ms, ticks, ...).
///
/// Remaining-time tracking is not part of this record. Every scheduling
/// run keeps its own working copy, so a `Process` slice passed to the
/// scheduler is never modified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Process {
    /// Process identifier.
    pub pid: Pid,
    /// Time at which the process becomes eligible to run.
    pub arrival_time: i64,
    /// Total CPU time required.
    pub burst_time: i64,
}

impl Process {
    /// Creates a new process.
    pub fn new(pid: Pid, arrival_time: i64, burst_time: i64) -> Self {
        Self {
            pid,
            arrival_time,
            burst_time,
        }
    }

    /// Sets the arrival time.
    pub fn with_arrival(mut self, arrival_time: i64) -> Self {
        self.arrival_time = arrival_time;
        self
    }

    /// Sets the burst time.
    pub fn with_burst(mut self, burst_time: i64) -> Self {
        self.burst_time = burst_time;
        self
    }

    /// Whether the process has arrived by `time`.
    #[inline]
    pub fn has_arrived(&self, time: i64) -> bool {
        self.arrival_time <= time
    }
}

/// Total CPU work across a process set.
pub fn total_burst(processes: &[Process]) -> i64 {
    processes.iter().map(|p| p.burst_time).sum()
}
