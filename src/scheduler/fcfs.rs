//! First-Come-First-Served.

use log::trace;

use super::Job;
use crate::models::{Schedule, ScheduleEntry};

/// Runs each process to completion in arrival order.
///
/// The sort is stable, so equal arrivals keep their input order. Idle
/// gaps are left implicit between entries.
pub(crate) fn run(mut jobs: Vec<Job>) -> Schedule {
    jobs.sort_by_key(|j| j.process.arrival_time);

    let mut clock = 0;
    let mut schedule = Schedule::new();
    for job in &jobs {
        let start = clock.max(job.process.arrival_time);
        let end = start + job.process.burst_time;
        trace!("FCFS t={start}: P{} runs until {end}", job.process.pid);
        schedule.push(ScheduleEntry::new(job.process.pid, start, end));
        clock = end;
    }
    schedule
}
