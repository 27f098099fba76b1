//! Shortest-candidate selection shared by SJF and SRTF.

use super::{Job, TieBreak};

/// Picks the ready job with the smallest `key`, breaking ties with
/// `tie_break`. Returns its index in `jobs`.
pub(crate) fn pick_shortest<F>(
    jobs: &[Job],
    clock: i64,
    tie_break: TieBreak,
    key: F,
) -> Option<usize>
where
    F: Fn(&Job) -> i64,
{
    jobs.iter()
        .enumerate()
        .filter(|(_, j)| j.is_ready(clock))
        .min_by_key(|(_, j)| match tie_break {
            TieBreak::ArrivalThenPid => (key(j), j.process.arrival_time, j.process.pid, j.index),
            TieBreak::InputOrder => (key(j), 0, 0, j.index),
        })
        .map(|(i, _)| i)
}
