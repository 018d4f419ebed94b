//! Scheduling engines and metrics.
//!
//! Four classical single-CPU disciplines replayed over a static batch:
//!
//! | Policy | Preemptive | Reads |
//! |--------|-----------|-------|
//! | `Fcfs` | no | burst, first arrival |
//! | `Sjf` | no | burst |
//! | `PriorityScheduler` | no | priority, burst, first arrival |
//! | `RoundRobin` | yes (quantum) | burst |
//!
//! Every policy borrows the batch and returns a fresh [`Schedule`], so one
//! workload can be replayed through all of them without copying it first.
//! Turnaround times and averages are derived afterwards by
//! [`ScheduleMetrics`], independent of which policy ran.
//!
//! # Usage
//!
//! ```
//! use schedsim::models::Process;
//! use schedsim::scheduler::{Algorithm, Quantum, ScheduleMetrics, SchedulingPolicy};
//!
//! let batch = vec![Process::new(1, 5), Process::new(2, 3), Process::new(3, 8)];
//! let policy = Algorithm::RoundRobin.policy(Quantum::default());
//! let schedule = policy.schedule(&batch);
//! let metrics = ScheduleMetrics::calculate(&schedule);
//! assert_eq!(schedule.waiting_times(), vec![7, 6, 8]);
//! assert_eq!(metrics.average_waiting_time, Some(7.0));
//! ```
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne, "Operating System Concepts", Ch. 5
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 3

mod fcfs;
mod metrics;
mod priority;
mod round_robin;
mod sjf;

pub use fcfs::{fcfs_waiting_times, Fcfs};
pub use metrics::{ProcessMetrics, ScheduleMetrics};
pub use priority::PriorityScheduler;
pub use round_robin::{Quantum, RoundRobin, DEFAULT_QUANTUM};
pub use sjf::Sjf;

use std::fmt::{self, Debug};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::models::{Process, Schedule};

/// A scheduling discipline that assigns waiting times to a batch.
///
/// Implementations read the batch and never modify it. Each call owns its
/// working state, so a policy value can be reused across runs.
pub trait SchedulingPolicy: Send + Sync + Debug {
    /// Which discipline this is.
    fn algorithm(&self) -> Algorithm;

    /// Short name (e.g., "FCFS", "RR").
    fn name(&self) -> &'static str {
        self.algorithm().name()
    }

    /// Report heading. Defaults to the name.
    fn description(&self) -> String {
        self.name().to_string()
    }

    /// Replays the batch and returns the annotated schedule.
    fn schedule(&self, processes: &[Process]) -> Schedule;
}

/// Selector for the built-in policies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Algorithm {
    /// First-Come-First-Served.
    Fcfs,
    /// Shortest-Job-First, non-preemptive.
    Sjf,
    /// Static priority, then FCFS.
    Priority,
    /// Preemptive round-robin.
    RoundRobin,
}

impl Algorithm {
    /// All policies in canonical run order.
    pub const ALL: [Algorithm; 4] = [
        Algorithm::Fcfs,
        Algorithm::Sjf,
        Algorithm::Priority,
        Algorithm::RoundRobin,
    ];

    /// Short display name.
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Fcfs => "FCFS",
            Algorithm::Sjf => "SJF",
            Algorithm::Priority => "Priority",
            Algorithm::RoundRobin => "RR",
        }
    }

    /// Builds the policy. `quantum` only matters for round-robin.
    pub fn policy(self, quantum: Quantum) -> Box<dyn SchedulingPolicy> {
        match self {
            Algorithm::Fcfs => Box::new(Fcfs),
            Algorithm::Sjf => Box::new(Sjf),
            Algorithm::Priority => Box::new(PriorityScheduler),
            Algorithm::RoundRobin => Box::new(RoundRobin::new(quantum)),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Unrecognized algorithm name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown algorithm '{0}' (expected fcfs, sjf, priority or rr)")]
pub struct ParseAlgorithmError(pub String);

impl FromStr for Algorithm {
    type Err = ParseAlgorithmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fcfs" | "fifo" => Ok(Algorithm::Fcfs),
            "sjf" => Ok(Algorithm::Sjf),
            "priority" | "pri" => Ok(Algorithm::Priority),
            "rr" | "round-robin" | "round_robin" => Ok(Algorithm::RoundRobin),
            _ => Err(ParseAlgorithmError(s.to_string())),
        }
    }
}
