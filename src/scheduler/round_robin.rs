//! Round Robin with a fixed quantum.
//!
//! # Admission
//!
//! Under [`Admission::Batch`] the ready queue is filled once, at t=0, in
//! the caller's order; arrival times play no part. A process listed
//! ahead of an earlier-arriving one is served first, and a process may
//! run before its own arrival time.
//!
//! Under [`Admission::ArrivalAware`] processes join the queue in arrival
//! order (stable on input) once `arrival <= clock`. Processes arriving
//! during a slice are queued before the preempted process is re-queued.

use std::collections::VecDeque;

use log::trace;

use super::{bound_exceeded, Admission, Job};
use crate::error::Result;
use crate::models::{Schedule, ScheduleEntry};

pub(crate) fn run(
    jobs: Vec<Job>,
    quantum: i64,
    admission: Admission,
    bound: usize,
) -> Result<Schedule> {
    match admission {
        Admission::Batch => batch(jobs, quantum, bound),
        Admission::ArrivalAware => arrival_aware(jobs, quantum, bound),
    }
}

fn batch(mut jobs: Vec<Job>, quantum: i64, bound: usize) -> Result<Schedule> {
    let mut queue: VecDeque<usize> = (0..jobs.len()).collect();
    let mut clock = 0;
    let mut schedule = Schedule::new();

    for _ in 0..bound {
        let Some(idx) = queue.pop_front() else {
            return Ok(schedule);
        };
        clock = run_slice(&mut jobs[idx], clock, quantum, &mut schedule);
        if !jobs[idx].is_done() {
            queue.push_back(idx);
        }
    }

    if queue.is_empty() {
        Ok(schedule)
    } else {
        Err(bound_exceeded("RR", bound))
    }
}

fn arrival_aware(mut jobs: Vec<Job>, quantum: i64, bound: usize) -> Result<Schedule> {
    let mut order: Vec<usize> = (0..jobs.len()).collect();
    order.sort_by_key(|&i| jobs[i].process.arrival_time);

    let mut admitted = 0;
    let mut queue: VecDeque<usize> = VecDeque::with_capacity(jobs.len());
    let mut clock = 0;
    let mut schedule = Schedule::new();

    admit(&order, &jobs, clock, &mut admitted, &mut queue);
    for _ in 0..bound {
        let Some(idx) = queue.pop_front() else {
            let Some(&next) = order.get(admitted) else {
                return Ok(schedule);
            };
            clock = jobs[next].process.arrival_time;
            trace!("RR idle until t={clock}");
            admit(&order, &jobs, clock, &mut admitted, &mut queue);
            continue;
        };
        clock = run_slice(&mut jobs[idx], clock, quantum, &mut schedule);
        admit(&order, &jobs, clock, &mut admitted, &mut queue);
        if !jobs[idx].is_done() {
            queue.push_back(idx);
        }
    }

    if queue.is_empty() && admitted == jobs.len() {
        Ok(schedule)
    } else {
        Err(bound_exceeded("RR", bound))
    }
}

/// Queues every not-yet-admitted job that has arrived by `clock`.
fn admit(
    order: &[usize],
    jobs: &[Job],
    clock: i64,
    admitted: &mut usize,
    queue: &mut VecDeque<usize>,
) {
    while let Some(&i) = order.get(*admitted) {
        if !jobs[i].process.has_arrived(clock) {
            break;
        }
        queue.push_back(i);
        *admitted += 1;
    }
}

/// Runs `job` for one turn and returns the new clock.
fn run_slice(job: &mut Job, clock: i64, quantum: i64, schedule: &mut Schedule) -> i64 {
    let slice = job.remaining.min(quantum);
    let end = clock + slice;
    trace!("RR t={clock}: P{} runs until {end}", job.process.pid);
    schedule.push(ScheduleEntry::new(job.process.pid, clock, end));
    job.remaining -= slice;
    end
}
