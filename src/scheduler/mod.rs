//! Single-CPU scheduling policies.
//!
//! Maps a process set to a [`Schedule`] under one of four classical
//! policies:
//!
//! | Policy | Preemptive | Selection |
//! |--------|-----------|-----------|
//! | FCFS | no | earliest arrival |
//! | SJF | no | shortest burst among arrived |
//! | SRTF | yes, every time unit | shortest remaining among arrived |
//! | Round Robin | yes, every quantum | FIFO ready queue |
//!
//! Every run works on a private copy of the processes, so the caller's
//! slice is never modified and nothing leaks between runs.
//!
//! # Reference
//! Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5

mod fcfs;
mod round_robin;
mod selection;
mod sjf;
mod srtf;

use std::fmt;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{Result, SimulationError};
use crate::models::{Process, Schedule};

/// Scheduling policy selector.
///
/// Serialized with an `algorithm` tag, e.g.
/// `{"algorithm": "round_robin", "quantum": 2}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "algorithm", rename_all = "snake_case")]
pub enum Policy {
    /// First-Come-First-Served.
    Fcfs,
    /// Shortest Job First, non-preemptive.
    Sjf,
    /// Shortest Remaining Time First, preemptive.
    Srtf,
    /// Round Robin with a fixed time quantum (must be positive).
    RoundRobin {
        /// Time slice granted per turn.
        quantum: i64,
    },
}

impl Policy {
    /// Short policy name ("FCFS", "SJF", "SRTF", "RR").
    pub fn name(&self) -> &'static str {
        match self {
            Policy::Fcfs => "FCFS",
            Policy::Sjf => "SJF",
            Policy::Srtf => "SRTF",
            Policy::RoundRobin { .. } => "RR",
        }
    }

    /// Whether the policy can interrupt a running process.
    pub fn is_preemptive(&self) -> bool {
        matches!(self, Policy::Srtf | Policy::RoundRobin { .. })
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Policy::RoundRobin { quantum } => write!(f, "RR(q={quantum})"),
            other => f.write_str(other.name()),
        }
    }
}

/// How SJF and SRTF choose between candidates with equal burst or
/// remaining time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TieBreak {
    /// Earlier arrival first, then lower pid, then input position.
    #[default]
    ArrivalThenPid,
    /// Input position only (stable-sort behaviour).
    InputOrder,
}

/// How Round Robin fills its ready queue.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Admission {
    /// Every process is queued at t=0 in input order; arrival times are
    /// ignored. Non-zero arrivals can therefore yield negative waiting times.
    #[default]
    Batch,
    /// Processes join the tail of the queue once they have arrived.
    /// Arrivals during a slice are queued ahead of the preempted process.
    ArrivalAware,
}

/// Per-run working copy of a process.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Job {
    pub process: Process,
    /// Position in the caller's input.
    pub index: usize,
    pub remaining: i64,
}

impl Job {
    #[inline]
    pub fn is_done(&self) -> bool {
        self.remaining == 0
    }

    #[inline]
    pub fn is_ready(&self, clock: i64) -> bool {
        !self.is_done() && self.process.has_arrived(clock)
    }
}

/// Configurable scheduler.
///
/// # Example
///
/// ```
/// use cpu_schedule::models::Process;
/// use cpu_schedule::scheduler::{Policy, Scheduler, TieBreak};
///
/// let processes = vec![
///     Process::new(1, 0, 5),
///     Process::new(2, 1, 3),
///     Process::new(3, 2, 8),
/// ];
/// let schedule = Scheduler::new(Policy::Sjf)
///     .with_tie_break(TieBreak::InputOrder)
///     .schedule(&processes)
///     .unwrap();
/// assert_eq!(schedule.makespan(), 16);
/// ```
#[derive(Debug, Clone)]
pub struct Scheduler {
    policy: Policy,
    tie_break: TieBreak,
    admission: Admission,
}

impl Scheduler {
    /// Creates a scheduler for the given policy with default tie-breaking
    /// and batch Round Robin admission.
    pub fn new(policy: Policy) -> Self {
        Self {
            policy,
            tie_break: TieBreak::default(),
            admission: Admission::default(),
        }
    }

    /// Sets the SJF/SRTF tie-breaking rule.
    pub fn with_tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }

    /// Sets the Round Robin admission model.
    pub fn with_admission(mut self, admission: Admission) -> Self {
        self.admission = admission;
        self
    }

    /// The configured policy.
    pub fn policy(&self) -> Policy {
        self.policy
    }

    /// Runs the configured policy over `processes`.
    ///
    /// An empty input yields an empty schedule.
    ///
    /// # Errors
    /// - [`SimulationError::InvalidQuantum`] for a Round Robin quantum <= 0
    /// - [`SimulationError::InvalidProcess`] for burst <= 0 or arrival < 0
    /// - [`SimulationError::TimeOverflow`] if the timeline would not fit in `i64`
    /// - [`SimulationError::SchedulerInvariantViolation`] if a loop exceeds
    ///   its iteration bound
    pub fn schedule(&self, processes: &[Process]) -> Result<Schedule> {
        if let Policy::RoundRobin { quantum } = self.policy {
            if quantum <= 0 {
                return Err(SimulationError::InvalidQuantum(quantum));
            }
        }

        let jobs = prepare(processes)?;
        let work = check_horizon(&jobs)?;
        let bound = iteration_bound(work, jobs.len());

        let schedule = match self.policy {
            Policy::Fcfs => fcfs::run(jobs),
            Policy::Sjf => sjf::run(jobs, self.tie_break, bound)?,
            Policy::Srtf => srtf::run(jobs, self.tie_break, bound)?,
            Policy::RoundRobin { quantum } => {
                round_robin::run(jobs, quantum, self.admission, bound)?
            }
        };

        debug!(
            "{}: {} processes -> {} entries, makespan {}",
            self.policy,
            processes.len(),
            schedule.len(),
            schedule.makespan()
        );
        Ok(schedule)
    }
}

/// Runs `policy` over `processes` with default options.
pub fn schedule(processes: &[Process], policy: Policy) -> Result<Schedule> {
    Scheduler::new(policy).schedule(processes)
}

/// Checks every process and builds the per-run working copies.
fn prepare(processes: &[Process]) -> Result<Vec<Job>> {
    processes
        .iter()
        .enumerate()
        .map(|(index, &process)| {
            if process.burst_time <= 0 {
                return Err(SimulationError::invalid_process(
                    process.pid,
                    format!("burst time must be positive, got {}", process.burst_time),
                ));
            }
            if process.arrival_time < 0 {
                return Err(SimulationError::invalid_process(
                    process.pid,
                    format!(
                        "arrival time must not be negative, got {}",
                        process.arrival_time
                    ),
                ));
            }
            Ok(Job {
                process,
                index,
                remaining: process.burst_time,
            })
        })
        .collect()
}

/// Returns the total work of `jobs`.
///
/// No clock value can exceed `max(arrival) + total work`, so once that sum
/// fits in an `i64` every clock addition in the policies is safe.
fn check_horizon(jobs: &[Job]) -> Result<i64> {
    let work = jobs
        .iter()
        .try_fold(0i64, |acc, j| acc.checked_add(j.remaining))
        .ok_or_else(|| SimulationError::TimeOverflow("total burst time".to_string()))?;
    let last_arrival = jobs.iter().map(|j| j.process.arrival_time).max().unwrap_or(0);
    last_arrival.checked_add(work).ok_or_else(|| {
        SimulationError::TimeOverflow("latest arrival plus total burst time".to_string())
    })?;
    Ok(work)
}

/// Upper bound on loop iterations for any policy.
///
/// Each iteration either runs at least one unit of work or jumps an idle
/// CPU to the next arrival, and there are at most `n` such jumps.
fn iteration_bound(work: i64, jobs: usize) -> usize {
    usize::try_from(work).unwrap_or(usize::MAX).saturating_add(jobs + 1)
}

/// Earliest arrival after `clock` among unfinished jobs.
pub(crate) fn next_arrival(jobs: &[Job], clock: i64) -> Option<i64> {
    jobs.iter()
        .filter(|j| !j.is_done() && j.process.arrival_time > clock)
        .map(|j| j.process.arrival_time)
        .min()
}

pub(crate) fn bound_exceeded(policy: &str, bound: usize) -> SimulationError {
    SimulationError::invariant(format!("{policy} exceeded {bound} iterations"))
}
