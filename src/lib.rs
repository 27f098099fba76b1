//! Single-CPU process scheduling simulator.
//!
//! Computes the execution order of a process set under a classical
//! scheduling policy, plus the waiting and turnaround times that follow
//! from it.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Process`, `ScheduleEntry`, `Schedule`
//! - **`scheduler`**: FCFS, SJF, SRTF and Round Robin
//! - **`metrics`**: Completion, turnaround, waiting and response times
//! - **`simulation`**: Schedule + metrics in one call
//! - **`config`**: Serde-loadable policy selection
//! - **`validation`**: Input integrity checks (duplicate pids, bad times)
//! - **`parse`**: `PID,Arrival,Burst` line input
//! - **`report`**: Text Gantt chart and metrics table
//! - **`workload`**: Random process sets
//!
//! # Example
//!
//! ```
//! use cpu_schedule::config::SimulationConfig;
//! use cpu_schedule::models::Process;
//! use cpu_schedule::scheduler::Policy;
//! use cpu_schedule::simulate;
//!
//! let processes = vec![
//!     Process::new(1, 0, 5),
//!     Process::new(2, 1, 3),
//!     Process::new(3, 2, 8),
//! ];
//! let result = simulate(&processes, &SimulationConfig::new(Policy::Fcfs)).unwrap();
//! assert_eq!(result.metrics.average_waiting_display(), "3.33");
//! ```
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems"

pub mod config;
pub mod error;
pub mod metrics;
pub mod models;
pub mod parse;
pub mod report;
pub mod scheduler;
pub mod simulation;
pub mod validation;
pub mod workload;

pub use error::{Result, SimulationError};
pub use metrics::compute_metrics;
pub use scheduler::schedule;
pub use simulation::{simulate, SimulationResult};
