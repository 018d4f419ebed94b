//! Classical CPU-scheduling simulator.
//!
//! Replays a static batch of processes through four textbook disciplines
//! (FCFS, SJF, static priority, round-robin) and reports each process's
//! waiting and turnaround time along with batch averages. Nothing is
//! executed: this is a timing model for teaching and comparison.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Process`, `Schedule`, `ScheduledProcess`, `Slice`
//! - **`scheduler`**: The four engines, the `SchedulingPolicy` trait and
//!   `ScheduleMetrics`
//! - **`validation`**: Workload checks run before any engine (empty batch,
//!   burst times, duplicate pids)
//! - **`simulation`**: Runs one workload through a configured list of policies
//! - **`workload`**: Text/JSON loaders and a seeded random generator
//! - **`report`**: Text tables, dispatch timelines and JSON output
//!
//! # Architecture
//!
//! The engines and metrics are the core and depend only on `models`.
//! Loading, rendering and the command-line front end sit around them and
//! can be replaced without touching scheduling logic.
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne, "Operating System Concepts", Ch. 5
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems"

pub mod error;
pub mod models;
pub mod report;
pub mod scheduler;
pub mod simulation;
pub mod validation;
pub mod workload;

pub use error::{Error, Result};
