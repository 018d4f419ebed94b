//! Schedule (engine output) model.
//!
//! A schedule is the result of replaying a batch through one scheduling
//! policy: every process annotated with its waiting time, plus the dispatch
//! timeline that produced it.

use serde::{Deserialize, Serialize};

use super::Process;
use crate::scheduler::Algorithm;

/// The output of one engine run.
///
/// `entries` is in report order. For FCFS, SJF and round-robin that is the
/// input order; for priority scheduling it is the priority order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Schedule {
    /// Policy that produced this schedule.
    pub algorithm: Algorithm,
    /// Processes annotated with their waiting time.
    pub entries: Vec<ScheduledProcess>,
    /// Dispatch intervals in the order they were granted.
    pub slices: Vec<Slice>,
}

/// A process annotated by a single engine run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledProcess {
    /// The input record, unchanged.
    pub process: Process,
    /// Time spent ready but not running before completion.
    pub waiting_time: i64,
}

/// One dispatch: the CPU ran `pid` over `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slice {
    /// Dispatched process.
    pub pid: u32,
    /// Dispatch start (inclusive).
    pub start: i64,
    /// Dispatch end (exclusive).
    pub end: i64,
}

impl Slice {
    /// Creates a new slice.
    pub fn new(pid: u32, start: i64, end: i64) -> Self {
        Self { pid, start, end }
    }

    /// Length of the slice.
    #[inline]
    pub fn duration(&self) -> i64 {
        self.end - self.start
    }
}

impl Schedule {
    /// Creates an empty schedule for the given policy.
    pub fn new(algorithm: Algorithm) -> Self {
        Self {
            algorithm,
            entries: Vec::new(),
            slices: Vec::new(),
        }
    }

    /// Appends an annotated process.
    pub fn add_entry(&mut self, process: Process, waiting_time: i64) {
        self.entries.push(ScheduledProcess {
            process,
            waiting_time,
        });
    }

    /// Appends a dispatch interval.
    pub fn add_slice(&mut self, slice: Slice) {
        self.slices.push(slice);
    }

    /// Number of scheduled processes.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing was scheduled.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Latest slice end (0 for an empty schedule).
    pub fn makespan(&self) -> i64 {
        self.slices.iter().map(|s| s.end).max().unwrap_or(0)
    }

    /// Finds the entry for a pid.
    pub fn entry(&self, pid: u32) -> Option<&ScheduledProcess> {
        self.entries.iter().find(|e| e.process.pid == pid)
    }

    /// Waiting time recorded for a pid.
    pub fn waiting_time(&self, pid: u32) -> Option<i64> {
        self.entry(pid).map(|e| e.waiting_time)
    }

    /// Waiting times in report order.
    pub fn waiting_times(&self) -> Vec<i64> {
        self.entries.iter().map(|e| e.waiting_time).collect()
    }

    /// All dispatch intervals granted to a pid.
    pub fn slices_for(&self, pid: u32) -> Vec<&Slice> {
        self.slices.iter().filter(|s| s.pid == pid).collect()
    }

    /// Time at which a pid's last slice ended.
    pub fn completion_time(&self, pid: u32) -> Option<i64> {
        self.slices
            .iter()
            .filter(|s| s.pid == pid)
            .map(|s| s.end)
            .max()
    }

    /// Pids in the order they completed.
    pub fn finish_order(&self) -> Vec<u32> {
        let mut finished: Vec<(i64, u32)> = self
            .entries
            .iter()
            .filter_map(|e| {
                self.completion_time(e.process.pid)
                    .map(|t| (t, e.process.pid))
            })
            .collect();
        finished.sort_by_key(|&(t, _)| t);
        finished.into_iter().map(|(_, pid)| pid).collect()
    }
}
