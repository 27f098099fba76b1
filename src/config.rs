//! Simulation configuration.
//!
//! A [`SimulationConfig`] selects the policy and its options. It can be
//! built in code or loaded from JSON:
//!
//! ```
//! use cpu_schedule::config::SimulationConfig;
//! use cpu_schedule::scheduler::{Admission, Policy};
//!
//! let config = SimulationConfig::from_json(
//!     r#"{"policy": {"algorithm": "round_robin", "quantum": 2}, "admission": "arrival_aware"}"#,
//! )
//! .unwrap();
//! assert_eq!(config.policy, Policy::RoundRobin { quantum: 2 });
//! assert_eq!(config.admission, Admission::ArrivalAware);
//! ```

use serde::{Deserialize, Serialize};

use crate::scheduler::{Admission, Policy, Scheduler, TieBreak};

/// Policy and options for one simulation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Scheduling policy.
    pub policy: Policy,
    /// SJF/SRTF tie-breaking rule.
    #[serde(default)]
    pub tie_break: TieBreak,
    /// Round Robin admission model.
    #[serde(default)]
    pub admission: Admission,
}

impl SimulationConfig {
    /// Creates a config for `policy` with default options.
    pub fn new(policy: Policy) -> Self {
        Self {
            policy,
            tie_break: TieBreak::default(),
            admission: Admission::default(),
        }
    }

    /// Sets the tie-breaking rule.
    pub fn with_tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }

    /// Sets the Round Robin admission model.
    pub fn with_admission(mut self, admission: Admission) -> Self {
        self.admission = admission;
        self
    }

    /// Parses a config from JSON.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Builds the scheduler this config describes.
    pub fn scheduler(&self) -> Scheduler {
        Scheduler::new(self.policy)
            .with_tie_break(self.tie_break)
            .with_admission(self.admission)
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self::new(Policy::Fcfs)
    }
}
