//! Random process-set generation.
//!
//! Produces reproducible workloads from a caller-supplied RNG, for
//! experiments and randomized checks.
//!
//! ```
//! use cpu_schedule::workload::WorkloadGenerator;
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let mut rng = StdRng::seed_from_u64(7);
//! let processes = WorkloadGenerator::new(5).with_max_burst(4).generate(&mut rng);
//! assert_eq!(processes.len(), 5);
//! assert!(processes.iter().all(|p| (1..=4).contains(&p.burst_time)));
//! ```

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::models::{Pid, Process};

/// Parameters of a random workload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkloadGenerator {
    /// Number of processes.
    pub count: usize,
    /// Largest arrival time (inclusive).
    pub max_arrival: i64,
    /// Largest burst time (inclusive, at least 1).
    pub max_burst: i64,
}

impl WorkloadGenerator {
    /// Creates a generator for `count` processes with arrivals in `0..=10`
    /// and bursts in `1..=10`.
    pub fn new(count: usize) -> Self {
        Self {
            count,
            max_arrival: 10,
            max_burst: 10,
        }
    }

    /// Sets the largest arrival time.
    pub fn with_max_arrival(mut self, max_arrival: i64) -> Self {
        self.max_arrival = max_arrival.max(0);
        self
    }

    /// Sets the largest burst time.
    pub fn with_max_burst(mut self, max_burst: i64) -> Self {
        self.max_burst = max_burst.max(1);
        self
    }

    /// Draws a process set with pids `1..=count`.
    pub fn generate<R: Rng>(&self, rng: &mut R) -> Vec<Process> {
        (1..=self.count)
            .map(|pid| {
                Process::new(
                    pid as Pid,
                    rng.random_range(0..=self.max_arrival),
                    rng.random_range(1..=self.max_burst),
                )
            })
            .collect()
    }
}
