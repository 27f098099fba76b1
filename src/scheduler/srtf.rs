//! Shortest Remaining Time First (preemptive).

use log::trace;

use super::selection::pick_shortest;
use super::{bound_exceeded, next_arrival, Job, TieBreak};
use crate::error::{Result, SimulationError};
use crate::models::{Pid, Schedule, ScheduleEntry};

/// Advances one time unit per step, always running the arrived job with
/// the least remaining work.
///
/// Emits one 1-unit entry per step. Consecutive entries of the same
/// process are left unmerged; see [`Schedule::coalesced`].
pub(crate) fn run(mut jobs: Vec<Job>, tie_break: TieBreak, bound: usize) -> Result<Schedule> {
    let mut clock = 0;
    let mut completed = 0;
    let mut schedule = Schedule::new();
    let mut last: Option<Pid> = None;

    for _ in 0..bound {
        if completed == jobs.len() {
            return Ok(schedule);
        }

        let Some(idx) = pick_shortest(&jobs, clock, tie_break, |j| j.remaining) else {
            clock = next_arrival(&jobs, clock)
                .ok_or_else(|| SimulationError::invariant("SRTF: no pending arrival while idle"))?;
            trace!("SRTF idle until t={clock}");
            last = None;
            continue;
        };

        let job = &mut jobs[idx];
        let pid = job.process.pid;
        if last.is_some_and(|prev| prev != pid) {
            trace!("SRTF t={clock}: P{pid} preempts");
        }
        schedule.push(ScheduleEntry::new(pid, clock, clock + 1));
        job.remaining -= 1;
        clock += 1;
        last = Some(pid);

        if job.is_done() {
            trace!("SRTF t={clock}: P{pid} completes");
            completed += 1;
        }
    }

    if completed == jobs.len() {
        Ok(schedule)
    } else {
        Err(bound_exceeded("SRTF", bound))
    }
}

#[cfg(test)]
mod tests {
    use crate::models::{Process, ScheduleEntry};
    use crate::scheduler::{schedule, Policy};

    #[test]
    fn test_srtf_emits_unit_slices() {
        let ps = vec![Process::new(1, 0, 3)];
        let s = schedule(&ps, Policy::Srtf).unwrap();
        assert_eq!(
            s.entries,
            vec![
                ScheduleEntry::new(1, 0, 1),
                ScheduleEntry::new(1, 1, 2),
                ScheduleEntry::new(1, 2, 3),
            ]
        );
        assert_eq!(s.coalesced().entries, vec![ScheduleEntry::new(1, 0, 3)]);
    }

    #[test]
    fn test_srtf_preempts_longer_job() {
        let ps = vec![
            Process::new(1, 0, 8),
            Process::new(2, 1, 4),
            Process::new(3, 2, 9),
            Process::new(4, 3, 5),
        ];
        let s = schedule(&ps, Policy::Srtf).unwrap().coalesced();
        assert_eq!(
            s.entries,
            vec![
                ScheduleEntry::new(1, 0, 1),
                ScheduleEntry::new(2, 1, 5),
                ScheduleEntry::new(4, 5, 10),
                ScheduleEntry::new(1, 10, 17),
                ScheduleEntry::new(3, 17, 26),
            ]
        );
    }

    #[test]
    fn test_srtf_idle_gap() {
        let ps = vec![Process::new(1, 0, 1), Process::new(2, 5, 2)];
        let s = schedule(&ps, Policy::Srtf).unwrap().coalesced();
        assert_eq!(
            s.entries,
            vec![ScheduleEntry::new(1, 0, 1), ScheduleEntry::new(2, 5, 7)]
        );
    }

    #[test]
    fn test_srtf_sample_set() {
        // P2 (3) arrives while P1 has 4 left and takes over.
        let ps = vec![
            Process::new(1, 0, 5),
            Process::new(2, 1, 3),
            Process::new(3, 2, 8),
        ];
        let s = schedule(&ps, Policy::Srtf).unwrap().coalesced();
        assert_eq!(
            s.entries,
            vec![
                ScheduleEntry::new(1, 0, 1),
                ScheduleEntry::new(2, 1, 4),
                ScheduleEntry::new(1, 4, 8),
                ScheduleEntry::new(3, 8, 16),
            ]
        );
    }
}
