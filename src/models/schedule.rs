//! Schedule (Gantt) model.
//!
//! A schedule is the ordered list of execution slices produced by a
//! scheduling policy. Each slice records which process held the CPU
//! during a half-open interval `[start, end)`.

use serde::{Deserialize, Serialize};

use super::Pid;

/// A complete single-CPU schedule.
///
/// Entries are stored in the order the scheduler emitted them, which is
/// non-decreasing in `start`. Gaps between consecutive entries are idle CPU.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    /// Execution slices in emission order.
    pub entries: Vec<ScheduleEntry>,
}

/// One contiguous execution slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    /// Process that ran.
    pub pid: Pid,
    /// Slice start (inclusive).
    pub start: i64,
    /// Slice end (exclusive). Always greater than `start`.
    pub end: i64,
}

impl ScheduleEntry {
    /// Creates a new entry.
    pub fn new(pid: Pid, start: i64, end: i64) -> Self {
        Self { pid, start, end }
    }

    /// Slice length (end - start).
    #[inline]
    pub fn duration(&self) -> i64 {
        self.end - self.start
    }

    /// Whether two slices share any instant.
    #[inline]
    pub fn overlaps(&self, other: &ScheduleEntry) -> bool {
        self.start < other.end && other.start < self.end
    }
}

impl Schedule {
    /// Creates an empty schedule.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an entry.
    pub fn push(&mut self, entry: ScheduleEntry) {
        self.entries.push(entry);
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the schedule has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over entries in emission order.
    pub fn iter(&self) -> std::slice::Iter<'_, ScheduleEntry> {
        self.entries.iter()
    }

    /// Makespan: latest end time across all entries.
    pub fn makespan(&self) -> i64 {
        self.entries.iter().map(|e| e.end).max().unwrap_or(0)
    }

    /// Total time the CPU was busy.
    pub fn busy_time(&self) -> i64 {
        self.entries.iter().map(|e| e.duration()).sum()
    }

    /// Idle time between t=0 and the makespan.
    pub fn idle_time(&self) -> i64 {
        self.makespan() - self.busy_time()
    }

    /// Returns all entries for a given process.
    pub fn entries_for_process(&self, pid: Pid) -> Vec<&ScheduleEntry> {
        self.entries.iter().filter(|e| e.pid == pid).collect()
    }

    /// Completion time for a process (latest end of its entries).
    pub fn completion_time(&self, pid: Pid) -> Option<i64> {
        self.entries
            .iter()
            .filter(|e| e.pid == pid)
            .map(|e| e.end)
            .max()
    }

    /// First time a process got the CPU.
    pub fn first_start(&self, pid: Pid) -> Option<i64> {
        self.entries
            .iter()
            .filter(|e| e.pid == pid)
            .map(|e| e.start)
            .min()
    }

    /// Total CPU time granted to a process.
    pub fn run_time(&self, pid: Pid) -> i64 {
        self.entries
            .iter()
            .filter(|e| e.pid == pid)
            .map(|e| e.duration())
            .sum()
    }

    /// Merges back-to-back entries of the same process.
    ///
    /// Two entries merge only when the first ends exactly where the next
    /// one starts. Metrics are identical before and after merging.
    pub fn coalesced(&self) -> Schedule {
        let mut merged: Vec<ScheduleEntry> = Vec::with_capacity(self.entries.len());
        for entry in &self.entries {
            match merged.last_mut() {
                Some(last) if last.pid == entry.pid && last.end == entry.start => {
                    last.end = entry.end;
                }
                _ => merged.push(*entry),
            }
        }
        Schedule { entries: merged }
    }
}

impl FromIterator<ScheduleEntry> for Schedule {
    fn from_iter<I: IntoIterator<Item = ScheduleEntry>>(iter: I) -> Self {
        Schedule {
            entries: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Schedule {
    type Item = &'a ScheduleEntry;
    type IntoIter = std::slice::Iter<'a, ScheduleEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
