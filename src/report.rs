//! Plain-text rendering of schedules and metrics.

use crate::metrics::Metrics;
use crate::models::Schedule;

/// Renders a one-line Gantt chart with a time axis underneath.
///
/// Idle gaps get an explicit `idle` block. Returns an empty string for
/// an empty schedule.
///
/// ```text
/// | P1 | P2 | P3 |
/// 0    5    8    16
/// ```
pub fn gantt_chart(schedule: &Schedule) -> String {
    if schedule.is_empty() {
        return String::new();
    }

    let mut segments: Vec<(String, i64)> = Vec::with_capacity(schedule.len());
    let mut clock = 0;
    for entry in schedule {
        if entry.start > clock {
            segments.push(("idle".to_string(), entry.start));
        }
        segments.push((format!("P{}", entry.pid), entry.end));
        clock = entry.end;
    }

    let mut bar = String::new();
    let mut axis = String::from("0");
    for (label, end) in segments {
        let end = end.to_string();
        let width = label.len().max(end.len());
        bar.push_str(&format!("| {label:<width$} "));
        let boundary = bar.len();
        if axis.len() < boundary {
            axis.push_str(&" ".repeat(boundary - axis.len()));
        }
        axis.push_str(&end);
    }
    bar.push('|');

    format!("{bar}\n{axis}")
}

fn table_row(cells: [&dyn std::fmt::Display; 7]) -> String {
    let [pid, arrival, burst, completion, turnaround, waiting, response] = cells;
    format!("{pid:<6}{arrival:>8}{burst:>7}{completion:>12}{turnaround:>12}{waiting:>9}{response:>10}")
}

/// Renders per-process metrics and the two averages.
pub fn metrics_table(metrics: &Metrics) -> String {
    let mut lines = vec![table_row([
        &"PID",
        &"Arrival",
        &"Burst",
        &"Completion",
        &"Turnaround",
        &"Waiting",
        &"Response",
    ])];
    for m in &metrics.processes {
        lines.push(table_row([
            &format!("P{}", m.pid),
            &m.arrival_time,
            &m.burst_time,
            &m.completion_time,
            &m.turnaround_time,
            &m.waiting_time,
            &m.response_time,
        ]));
    }
    lines.push(format!(
        "Average Waiting Time: {}",
        metrics.average_waiting_display()
    ));
    lines.push(format!(
        "Average Turnaround Time: {}",
        metrics.average_turnaround_display()
    ));
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::compute_metrics;
    use crate::models::{Process, ScheduleEntry};

    #[test]
    fn test_gantt_simple() {
        let s: Schedule = [
            ScheduleEntry::new(1, 0, 5),
            ScheduleEntry::new(2, 5, 8),
            ScheduleEntry::new(3, 8, 16),
        ]
        .into_iter()
        .collect();
        assert_eq!(gantt_chart(&s), "| P1 | P2 | P3 |\n0    5    8    16");
    }

    #[test]
    fn test_gantt_marks_idle() {
        let s: Schedule = [ScheduleEntry::new(1, 0, 2), ScheduleEntry::new(2, 5, 6)]
            .into_iter()
            .collect();
        let chart = gantt_chart(&s);
        let (bar, axis) = chart.split_once('\n').unwrap();
        assert_eq!(bar, "| P1 | idle | P2 |");
        assert!(axis.starts_with("0    2"));
        assert!(axis.ends_with('6'));
    }

    #[test]
    fn test_gantt_leading_idle() {
        let s: Schedule = [ScheduleEntry::new(1, 3, 4)].into_iter().collect();
        assert!(gantt_chart(&s).starts_with("| idle | P1 |"));
    }

    #[test]
    fn test_gantt_empty() {
        assert_eq!(gantt_chart(&Schedule::new()), "");
    }

    #[test]
    fn test_metrics_table_averages() {
        let ps = vec![
            Process::new(1, 0, 5),
            Process::new(2, 1, 3),
            Process::new(3, 2, 8),
        ];
        let s: Schedule = [
            ScheduleEntry::new(1, 0, 5),
            ScheduleEntry::new(2, 5, 8),
            ScheduleEntry::new(3, 8, 16),
        ]
        .into_iter()
        .collect();
        let table = metrics_table(&compute_metrics(&s, &ps).unwrap());
        assert_eq!(table.lines().count(), 6);
        assert!(table.contains("Average Waiting Time: 3.33"));
        assert!(table.ends_with("Average Turnaround Time: 8.67"));
        assert!(table.lines().nth(2).unwrap().starts_with("P2"));
        assert_eq!(
            table.lines().next().unwrap(),
            "PID    Arrival  Burst  Completion  Turnaround  Waiting  Response"
        );
        assert_eq!(
            table.lines().nth(1).unwrap(),
            "P1           0      5           5           5        0         0"
        );
    }
}
