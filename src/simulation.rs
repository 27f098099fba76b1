//! One-call simulation: schedule, then metrics.

use serde::Serialize;

use crate::config::SimulationConfig;
use crate::error::{Result, SimulationError};
use crate::metrics::{compute_metrics, Metrics};
use crate::models::{Process, Schedule};
use crate::scheduler::Policy;

/// Output of a simulation run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimulationResult {
    /// Policy that produced the schedule.
    pub policy: Policy,
    /// Execution slices as emitted by the policy.
    pub schedule: Schedule,
    /// Timing metrics.
    pub metrics: Metrics,
}

/// Schedules `processes` under `config` and computes the metrics.
///
/// # Errors
/// [`SimulationError::EmptyProcessSet`] for an empty input, plus any
/// scheduler or metrics error.
pub fn simulate(processes: &[Process], config: &SimulationConfig) -> Result<SimulationResult> {
    if processes.is_empty() {
        return Err(SimulationError::EmptyProcessSet);
    }
    let schedule = config.scheduler().schedule(processes)?;
    let metrics = compute_metrics(&schedule, processes)?;
    Ok(SimulationResult {
        policy: config.policy,
        schedule,
        metrics,
    })
}
