//! Per-process timing metrics.
//!
//! Computes completion, turnaround, waiting and response times from a
//! finished schedule and its input processes.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Completion | End of the process's last slice |
//! | Turnaround | completion - arrival |
//! | Waiting | turnaround - burst |
//! | Response | first slice start - arrival |
//! | Makespan | Latest completion |
//! | CPU Utilization | busy time / makespan |

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::error::{Result, SimulationError};
use crate::models::{Pid, Process, Schedule};

/// Timing record for one process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessMetrics {
    /// Process identifier.
    pub pid: Pid,
    /// Arrival time from the input.
    pub arrival_time: i64,
    /// Burst time from the input.
    pub burst_time: i64,
    /// End of the last slice.
    pub completion_time: i64,
    /// completion - arrival.
    pub turnaround_time: i64,
    /// turnaround - burst.
    pub waiting_time: i64,
    /// First start - arrival.
    pub response_time: i64,
}

/// Metrics for a whole run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metrics {
    /// One record per input process, in input order.
    pub processes: Vec<ProcessMetrics>,
    /// Mean waiting time.
    pub average_waiting_time: f64,
    /// Mean turnaround time.
    pub average_turnaround_time: f64,
    /// Mean response time.
    pub average_response_time: f64,
    /// Latest completion time.
    pub makespan: i64,
    /// Fraction of [0, makespan) the CPU was busy (0.0..1.0).
    pub cpu_utilization: f64,
}

impl Metrics {
    /// Formats a time value to two decimals, e.g. `3.33`.
    pub fn format_average(value: f64) -> String {
        format!("{value:.2}")
    }

    /// Average waiting time rounded for display.
    pub fn average_waiting_display(&self) -> String {
        Self::format_average(self.average_waiting_time)
    }

    /// Average turnaround time rounded for display.
    pub fn average_turnaround_display(&self) -> String {
        Self::format_average(self.average_turnaround_time)
    }

    /// Looks up the record of a process.
    pub fn for_process(&self, pid: Pid) -> Option<&ProcessMetrics> {
        self.processes.iter().find(|m| m.pid == pid)
    }
}

/// Computes metrics from a schedule and the processes it was built from.
///
/// # Errors
/// - [`SimulationError::EmptyProcessSet`] when `processes` is empty
/// - [`SimulationError::SchedulerInvariantViolation`] when a process has
///   no entries in `schedule`
pub fn compute_metrics(schedule: &Schedule, processes: &[Process]) -> Result<Metrics> {
    if processes.is_empty() {
        return Err(SimulationError::EmptyProcessSet);
    }

    let mut records = Vec::with_capacity(processes.len());
    for p in processes {
        let (Some(completion), Some(first_start)) =
            (schedule.completion_time(p.pid), schedule.first_start(p.pid))
        else {
            return Err(SimulationError::invariant(format!(
                "P{} never ran",
                p.pid
            )));
        };

        let turnaround = completion - p.arrival_time;
        let waiting = turnaround - p.burst_time;
        if waiting < 0 {
            warn!(
                "P{} has negative waiting time {waiting}: it ran before its arrival at {}",
                p.pid, p.arrival_time
            );
        }

        records.push(ProcessMetrics {
            pid: p.pid,
            arrival_time: p.arrival_time,
            burst_time: p.burst_time,
            completion_time: completion,
            turnaround_time: turnaround,
            waiting_time: waiting,
            response_time: first_start - p.arrival_time,
        });
    }

    let n = records.len() as f64;
    // Summed as f64: per-process times fit in i64, their total may not.
    let mean = |f: fn(&ProcessMetrics) -> i64| records.iter().map(|m| f(m) as f64).sum::<f64>() / n;

    let makespan = schedule.makespan();
    let cpu_utilization = if makespan > 0 {
        schedule.busy_time() as f64 / makespan as f64
    } else {
        0.0
    };

    let metrics = Metrics {
        average_waiting_time: mean(|m| m.waiting_time),
        average_turnaround_time: mean(|m| m.turnaround_time),
        average_response_time: mean(|m| m.response_time),
        processes: records,
        makespan,
        cpu_utilization,
    };
    debug!(
        "avg waiting {}, avg turnaround {}, utilization {:.2}",
        metrics.average_waiting_display(),
        metrics.average_turnaround_display(),
        metrics.cpu_utilization
    );
    Ok(metrics)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ScheduleEntry;

    fn sample() -> Vec<Process> {
        vec![
            Process::new(1, 0, 5),
            Process::new(2, 1, 3),
            Process::new(3, 2, 8),
        ]
    }

    fn fcfs_schedule() -> Schedule {
        [
            ScheduleEntry::new(1, 0, 5),
            ScheduleEntry::new(2, 5, 8),
            ScheduleEntry::new(3, 8, 16),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_metrics_basic() {
        let m = compute_metrics(&fcfs_schedule(), &sample()).unwrap();
        let waits: Vec<_> = m.processes.iter().map(|p| p.waiting_time).collect();
        let turnarounds: Vec<_> = m.processes.iter().map(|p| p.turnaround_time).collect();
        assert_eq!(waits, vec![0, 4, 6]);
        assert_eq!(turnarounds, vec![5, 7, 14]);
        assert!((m.average_waiting_time - 10.0 / 3.0).abs() < 1e-10);
        assert_eq!(m.average_waiting_display(), "3.33");
        assert_eq!(m.average_turnaround_display(), "8.67");
        assert_eq!(m.makespan, 16);
        assert!((m.cpu_utilization - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_completion_uses_latest_entry() {
        let ps = vec![Process::new(1, 0, 4), Process::new(2, 0, 2)];
        let s: Schedule = [
            ScheduleEntry::new(1, 0, 2),
            ScheduleEntry::new(2, 2, 4),
            ScheduleEntry::new(1, 4, 6),
        ]
        .into_iter()
        .collect();

        let m = compute_metrics(&s, &ps).unwrap();
        let p1 = m.for_process(1).unwrap();
        assert_eq!(p1.completion_time, 6);
        assert_eq!(p1.turnaround_time, 6);
        assert_eq!(p1.waiting_time, 2);
        assert_eq!(p1.response_time, 0);
        assert_eq!(m.for_process(2).unwrap().response_time, 2);
    }

    #[test]
    fn test_single_process_round_robin() {
        let ps = vec![Process::new(1, 0, 4)];
        let s: Schedule = [ScheduleEntry::new(1, 0, 2), ScheduleEntry::new(1, 2, 4)]
            .into_iter()
            .collect();
        let m = compute_metrics(&s, &ps).unwrap();
        assert_eq!(m.processes[0].waiting_time, 0);
        assert_eq!(m.processes[0].turnaround_time, 4);
    }

    #[test]
    fn test_empty_process_set() {
        let err = compute_metrics(&Schedule::new(), &[]).unwrap_err();
        assert_eq!(err, SimulationError::EmptyProcessSet);
    }

    #[test]
    fn test_missing_process_is_invariant_violation() {
        let s: Schedule = [ScheduleEntry::new(1, 0, 5)].into_iter().collect();
        let err = compute_metrics(&s, &sample()).unwrap_err();
        assert!(matches!(err, SimulationError::SchedulerInvariantViolation(ref m) if m.contains("P2")));
    }

    #[test]
    fn test_utilization_with_idle_gap() {
        let ps = vec![Process::new(1, 0, 2), Process::new(2, 6, 2)];
        let s: Schedule = [ScheduleEntry::new(1, 0, 2), ScheduleEntry::new(2, 6, 8)]
            .into_iter()
            .collect();
        let m = compute_metrics(&s, &ps).unwrap();
        assert!((m.cpu_utilization - 0.5).abs() < 1e-10);
        assert!((m.average_waiting_time - 0.0).abs() < 1e-10);
    }

    #[test]
    fn test_averages_of_huge_times() {
        let big = i64::MAX / 2;
        let ps = vec![Process::new(1, 0, big), Process::new(2, 0, big)];
        let s: Schedule = [
            ScheduleEntry::new(1, 0, big),
            ScheduleEntry::new(2, big, 2 * big),
        ]
        .into_iter()
        .collect();
        let m = compute_metrics(&s, &ps).unwrap();
        let expected = (big as f64 + (2 * big) as f64) / 2.0;
        assert!((m.average_turnaround_time - expected).abs() / expected < 1e-12);
    }

    #[test]
    fn test_format_average_rounding() {
        assert_eq!(Metrics::format_average(2.0), "2.00");
        assert_eq!(Metrics::format_average(8.666_666), "8.67");
    }
}
