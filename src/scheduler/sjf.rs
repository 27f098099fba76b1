//! Shortest Job First (non-preemptive).

use log::trace;

use super::selection::pick_shortest;
use super::{bound_exceeded, next_arrival, Job, TieBreak};
use crate::error::{Result, SimulationError};
use crate::models::{Schedule, ScheduleEntry};

/// Repeatedly runs the shortest-burst arrived job to completion.
///
/// An idle CPU jumps straight to the next arrival.
pub(crate) fn run(mut jobs: Vec<Job>, tie_break: TieBreak, bound: usize) -> Result<Schedule> {
    let mut clock = 0;
    let mut completed = 0;
    let mut schedule = Schedule::new();

    for _ in 0..bound {
        if completed == jobs.len() {
            return Ok(schedule);
        }

        let Some(idx) = pick_shortest(&jobs, clock, tie_break, |j| j.process.burst_time) else {
            clock = next_arrival(&jobs, clock)
                .ok_or_else(|| SimulationError::invariant("SJF: no pending arrival while idle"))?;
            trace!("SJF idle until t={clock}");
            continue;
        };

        let job = &mut jobs[idx];
        let end = clock + job.process.burst_time;
        trace!("SJF t={clock}: P{} runs until {end}", job.process.pid);
        schedule.push(ScheduleEntry::new(job.process.pid, clock, end));
        job.remaining = 0;
        completed += 1;
        clock = end;
    }

    if completed == jobs.len() {
        Ok(schedule)
    } else {
        Err(bound_exceeded("SJF", bound))
    }
}
