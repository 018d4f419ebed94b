//! Per-process and batch metrics.
//!
//! Derives turnaround times from any engine's output and aggregates them.
//! No policy computes turnaround itself; this module is the only place it
//! is defined.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Turnaround | waiting + burst |
//! | Average waiting | Σ waiting / n |
//! | Average turnaround | Σ turnaround / n |
//! | Max waiting | Largest single waiting time |
//! | Makespan | Latest dispatch end |
//!
//! An empty schedule has no averages: they are reported as `None` instead
//! of a misleading `0.0`.

use serde::{Deserialize, Serialize};

use crate::models::Schedule;
use crate::scheduler::Algorithm;

/// Timing results for one process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessMetrics {
    /// Process identifier.
    pub pid: u32,
    /// Arrival time copied from the input record.
    pub arrival_time: i64,
    /// CPU time the process needs.
    pub burst_time: i64,
    /// Static priority (lower = more urgent).
    pub priority: i32,
    /// Time spent ready but not running, as assigned by the engine.
    pub waiting_time: i64,
    /// `waiting_time + burst_time`.
    pub turnaround_time: i64,
}

/// Aggregated results for one engine run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleMetrics {
    /// Policy that produced the schedule.
    pub algorithm: Algorithm,
    /// One row per process, in schedule report order.
    pub rows: Vec<ProcessMetrics>,
    /// Σ waiting time.
    pub total_waiting_time: i64,
    /// Σ turnaround time.
    pub total_turnaround_time: i64,
    /// Mean waiting time, `None` when there are no rows.
    pub average_waiting_time: Option<f64>,
    /// Mean turnaround time, `None` when there are no rows.
    pub average_turnaround_time: Option<f64>,
    /// Largest waiting time, `None` when there are no rows.
    pub max_waiting_time: Option<i64>,
    /// Latest dispatch end.
    pub makespan: i64,
}

impl ScheduleMetrics {
    /// Computes metrics from a completed schedule.
    pub fn calculate(schedule: &Schedule) -> Self {
        let rows: Vec<ProcessMetrics> = schedule
            .entries
            .iter()
            .map(|e| ProcessMetrics {
                pid: e.process.pid,
                arrival_time: e.process.arrival_time,
                burst_time: e.process.burst_time,
                priority: e.process.priority,
                waiting_time: e.waiting_time,
                turnaround_time: e.waiting_time + e.process.burst_time,
            })
            .collect();

        let total_waiting_time: i64 = rows.iter().map(|r| r.waiting_time).sum();
        let total_turnaround_time: i64 = rows.iter().map(|r| r.turnaround_time).sum();

        Self {
            algorithm: schedule.algorithm,
            average_waiting_time: mean(total_waiting_time, rows.len()),
            average_turnaround_time: mean(total_turnaround_time, rows.len()),
            max_waiting_time: rows.iter().map(|r| r.waiting_time).max(),
            makespan: schedule.makespan(),
            total_waiting_time,
            total_turnaround_time,
            rows,
        }
    }

    /// Whether there is anything to report.
    pub fn has_data(&self) -> bool {
        !self.rows.is_empty()
    }

    /// Finds the row for a pid.
    pub fn row(&self, pid: u32) -> Option<&ProcessMetrics> {
        self.rows.iter().find(|r| r.pid == pid)
    }
}

fn mean(total: i64, count: usize) -> Option<f64> {
    if count == 0 {
        None
    } else {
        Some(total as f64 / count as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Process, Slice};
    use crate::scheduler::{Fcfs, SchedulingPolicy};

    #[test]
    fn test_metrics_basic() {
        let processes = vec![Process::new(1, 5), Process::new(2, 3), Process::new(3, 8)];
        let metrics = ScheduleMetrics::calculate(&Fcfs.schedule(&processes));

        let turnaround: Vec<i64> = metrics.rows.iter().map(|r| r.turnaround_time).collect();
        assert_eq!(turnaround, vec![5, 8, 16]);
        assert_eq!(metrics.total_waiting_time, 13);
        assert_eq!(metrics.total_turnaround_time, 29);
        assert!((metrics.average_waiting_time.unwrap() - 13.0 / 3.0).abs() < 1e-10);
        assert!((metrics.average_turnaround_time.unwrap() - 29.0 / 3.0).abs() < 1e-10);
        assert_eq!(metrics.max_waiting_time, Some(8));
        assert_eq!(metrics.makespan, 16);
        assert_eq!(metrics.algorithm, Algorithm::Fcfs);
    }

    #[test]
    fn test_turnaround_is_derived() {
        let mut schedule = Schedule::new(Algorithm::RoundRobin);
        schedule.add_entry(Process::new(4, 6), 11);
        schedule.add_slice(Slice::new(4, 11, 17));

        let metrics = ScheduleMetrics::calculate(&schedule);
        let row = metrics.row(4).unwrap();
        assert_eq!(row.turnaround_time, 17);
        assert_eq!(row.burst_time, 6);
    }

    #[test]
    fn test_empty_schedule_has_no_averages() {
        let metrics = ScheduleMetrics::calculate(&Schedule::new(Algorithm::Sjf));
        assert!(!metrics.has_data());
        assert_eq!(metrics.average_waiting_time, None);
        assert_eq!(metrics.average_turnaround_time, None);
        assert_eq!(metrics.max_waiting_time, None);
        assert_eq!(metrics.total_waiting_time, 0);
        assert_eq!(metrics.makespan, 0);
    }

    #[test]
    fn test_rows_follow_report_order() {
        let mut schedule = Schedule::new(Algorithm::Priority);
        schedule.add_entry(Process::new(9, 1), 0);
        schedule.add_entry(Process::new(2, 1), 1);

        let metrics = ScheduleMetrics::calculate(&schedule);
        let pids: Vec<u32> = metrics.rows.iter().map(|r| r.pid).collect();
        assert_eq!(pids, vec![9, 2]);
    }
}
