//! Scheduling domain models.
//!
//! Provides the data types shared by the scheduler and the metrics
//! calculator: the input `Process` and the output `Schedule`.

mod process;
mod schedule;

pub use process::{total_burst, Pid, Process};
pub use schedule::{Schedule, ScheduleEntry};
