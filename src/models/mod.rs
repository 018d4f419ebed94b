//! Simulation domain models.
//!
//! Provides the input record shared by every scheduling policy and the
//! annotated output each policy produces.
//!
//! # Lifecycle
//!
//! | Stage | Type |
//! |-------|------|
//! | Loaded workload | `Process` |
//! | Engine output | `Schedule` of `ScheduledProcess` + `Slice` |
//! | Reported metrics | `scheduler::ProcessMetrics` |

mod process;
mod schedule;

pub use process::Process;
pub use schedule::{Schedule, ScheduledProcess, Slice};
