//! Shortest-Job-First (non-preemptive).
//!
//! # Algorithm
//!
//! 1. Clock starts at 0; every process is treated as available at t=0.
//! 2. Scan the undispatched processes left to right and pick the smallest
//!    burst time. A strict `<` comparison means ties go to the lowest index.
//! 3. Run it to completion: `clock += burst`, `wt = clock - burst`.
//! 4. Stop once every process has been dispatched.
//!
//! Arrival times are not consulted, which makes this a static dispatch
//! order rather than an arrival-aware policy.
//!
//! # Complexity
//! O(n²): one linear minimum search per dispatch.
//!
//! # Reference
//! Smith (1956): SPT order minimizes mean flow time on a single machine.

use super::{Algorithm, SchedulingPolicy};
use crate::models::{Process, Schedule, Slice};

/// Shortest-Job-First policy.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sjf;

impl SchedulingPolicy for Sjf {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Sjf
    }

    fn schedule(&self, processes: &[Process]) -> Schedule {
        let n = processes.len();
        let mut dispatched = vec![false; n];
        let mut waiting = vec![0i64; n];
        let mut slices = Vec::with_capacity(n);
        let mut clock: i64 = 0;

        while let Some(idx) = shortest_pending(processes, &dispatched) {
            let p = &processes[idx];
            let start = clock;
            clock += p.burst_time;
            waiting[idx] = clock - p.burst_time;
            dispatched[idx] = true;

            tracing::trace!(pid = p.pid, start, end = clock, "dispatch");
            slices.push(Slice::new(p.pid, start, clock));
        }

        let mut schedule = Schedule::new(Algorithm::Sjf);
        for (p, wt) in processes.iter().zip(waiting) {
            schedule.add_entry(p.clone(), wt);
        }
        for slice in slices {
            schedule.add_slice(slice);
        }

        tracing::debug!(processes = n, makespan = clock, "SJF schedule complete");
        schedule
    }
}

/// Index of the undispatched process with the smallest burst time.
///
/// Returns `None` once every process has been dispatched.
fn shortest_pending(processes: &[Process], dispatched: &[bool]) -> Option<usize> {
    let mut best: Option<usize> = None;
    for (i, p) in processes.iter().enumerate() {
        if dispatched[i] {
            continue;
        }
        if best.map_or(true, |b| p.burst_time < processes[b].burst_time) {
            best = Some(i);
        }
    }
    best
}
