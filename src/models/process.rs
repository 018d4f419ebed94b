//! Process (job) model.
//!
//! A process is the unit of work every scheduling policy operates on.
//! Records are created by the workload loader and are read-only to the
//! engines: a run produces timing annotations next to the record, it never
//! edits the record itself.

use serde::{Deserialize, Serialize};

/// A process in a batch workload.
///
/// # Time Representation
/// All times are abstract ticks relative to the start of the batch (t=0).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Process {
    /// Identifier, unique within a batch.
    pub pid: u32,
    /// Time the process becomes known to the system.
    ///
    /// Only FCFS reads it, and only for the first dispatched entry.
    #[serde(default)]
    pub arrival_time: i64,
    /// Total CPU time required. Must be positive.
    pub burst_time: i64,
    /// Static priority (lower = more important).
    #[serde(default)]
    pub priority: i32,
}

impl Process {
    /// Creates a process arriving at t=0 with priority 0.
    pub fn new(pid: u32, burst_time: i64) -> Self {
        Self {
            pid,
            arrival_time: 0,
            burst_time,
            priority: 0,
        }
    }

    /// Sets the arrival time.
    pub fn with_arrival_time(mut self, arrival_time: i64) -> Self {
        self.arrival_time = arrival_time;
        self
    }

    /// Sets the static priority.
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_process_builder() {
        let p = Process::new(7, 12).with_arrival_time(3).with_priority(-1);
        assert_eq!(p.pid, 7);
        assert_eq!(p.arrival_time, 3);
        assert_eq!(p.burst_time, 12);
        assert_eq!(p.priority, -1);
    }

    #[test]
    fn test_process_defaults() {
        let p = Process::new(1, 5);
        assert_eq!(p.arrival_time, 0);
        assert_eq!(p.priority, 0);
    }

    #[test]
    fn test_deserialize_optional_fields() {
        let p: Process = serde_json::from_str(r#"{"pid": 4, "burst_time": 9}"#).unwrap();
        assert_eq!(p, Process::new(4, 9));
    }
}
