//! Preemptive round-robin.
//!
//! # Algorithm
//!
//! Each process starts `Pending` with `remaining = burst`. A shared clock
//! starts at 0. Full passes run over the batch in input order until every
//! process is `Done`:
//!
//! - `remaining > Q`: run for `Q`, stay `Pending`.
//! - otherwise: run for `remaining`, record `wt = clock - burst`, go `Done`.
//!
//! `Done` processes are visited but cost nothing. Because the clock only
//! moves while something runs, `finish - burst` counts every tick the
//! process spent behind other slices.
//!
//! Arrival times are not consulted: every process is present at t=0.
//!
//! # Complexity
//! O(n · ⌈max_burst / Q⌉).

use serde::{Deserialize, Serialize};

use super::{Algorithm, SchedulingPolicy};
use crate::error::{Error, Result};
use crate::models::{Process, Schedule, Slice};

/// Quantum used when none is configured.
pub const DEFAULT_QUANTUM: i64 = 2;

/// A validated, strictly positive time slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct Quantum(i64);

impl Quantum {
    /// Creates a quantum, rejecting values `<= 0`.
    pub fn new(ticks: i64) -> Result<Self> {
        if ticks <= 0 {
            return Err(Error::InvalidQuantum(ticks));
        }
        Ok(Self(ticks))
    }

    /// Slice length in ticks.
    #[inline]
    pub fn get(self) -> i64 {
        self.0
    }
}

impl Default for Quantum {
    fn default() -> Self {
        Self(DEFAULT_QUANTUM)
    }
}

impl TryFrom<i64> for Quantum {
    type Error = Error;

    fn try_from(ticks: i64) -> Result<Self> {
        Self::new(ticks)
    }
}

impl From<Quantum> for i64 {
    fn from(q: Quantum) -> Self {
        q.0
    }
}

/// Per-run dispatch state of one process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RunState {
    Pending { remaining: i64 },
    Done,
}

impl RunState {
    fn is_done(&self) -> bool {
        matches!(self, RunState::Done)
    }
}

/// Round-robin policy.
#[derive(Debug, Clone, Copy, Default)]
pub struct RoundRobin {
    quantum: Quantum,
}

impl RoundRobin {
    /// Creates a round-robin policy with the given quantum.
    pub fn new(quantum: Quantum) -> Self {
        Self { quantum }
    }

    /// Configured quantum.
    pub fn quantum(&self) -> Quantum {
        self.quantum
    }
}

impl SchedulingPolicy for RoundRobin {
    fn algorithm(&self) -> Algorithm {
        Algorithm::RoundRobin
    }

    fn description(&self) -> String {
        format!("RR Quantum = {}", self.quantum.get())
    }

    fn schedule(&self, processes: &[Process]) -> Schedule {
        let q = self.quantum.get();
        let mut states: Vec<RunState> = processes
            .iter()
            .map(|p| RunState::Pending {
                remaining: p.burst_time,
            })
            .collect();
        let mut waiting = vec![0i64; processes.len()];
        let mut slices = Vec::new();
        let mut clock: i64 = 0;
        let mut passes = 0usize;

        while !states.iter().all(RunState::is_done) {
            passes += 1;
            for (i, p) in processes.iter().enumerate() {
                let RunState::Pending { remaining } = states[i] else {
                    continue;
                };
                let start = clock;
                if remaining > q {
                    clock += q;
                    states[i] = RunState::Pending {
                        remaining: remaining - q,
                    };
                } else {
                    clock += remaining;
                    waiting[i] = clock - p.burst_time;
                    states[i] = RunState::Done;
                }
                tracing::trace!(pid = p.pid, start, end = clock, "dispatch");
                slices.push(Slice::new(p.pid, start, clock));
            }
        }

        let mut schedule = Schedule::new(Algorithm::RoundRobin);
        for (p, wt) in processes.iter().zip(waiting) {
            schedule.add_entry(p.clone(), wt);
        }
        for slice in slices {
            schedule.add_slice(slice);
        }

        tracing::debug!(
            quantum = q,
            processes = processes.len(),
            passes,
            slices = schedule.slices.len(),
            makespan = clock,
            "RR schedule complete"
        );
        schedule
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn batch(bursts: &[i64]) -> Vec<Process> {
        bursts
            .iter()
            .enumerate()
            .map(|(i, &b)| Process::new(i as u32, b))
            .collect()
    }

    fn rr(q: i64) -> RoundRobin {
        RoundRobin::new(Quantum::new(q).unwrap())
    }

    #[test]
    fn test_quantum_rejects_non_positive() {
        assert!(matches!(Quantum::new(0), Err(Error::InvalidQuantum(0))));
        assert!(matches!(Quantum::new(-3), Err(Error::InvalidQuantum(-3))));
        assert_eq!(Quantum::new(1).unwrap().get(), 1);
        assert_eq!(Quantum::default().get(), DEFAULT_QUANTUM);
    }

    #[test]
    fn test_quantum_serde() {
        let q: Quantum = serde_json::from_str("5").unwrap();
        assert_eq!(q.get(), 5);
        assert!(serde_json::from_str::<Quantum>("0").is_err());
        assert_eq!(serde_json::to_string(&q).unwrap(), "5");
    }

    #[test]
    fn test_hand_trace_q2() {
        // t: P0 0-2, P1 2-4, P2 4-6, P0 6-8, P1 8-9 (done), P2 9-11,
        //    P0 11-12 (done), P2 12-14, P2 14-16 (done)
        let schedule = rr(2).schedule(&batch(&[5, 3, 8]));
        assert_eq!(schedule.waiting_times(), vec![7, 6, 8]);
        assert_eq!(schedule.completion_time(0), Some(12));
        assert_eq!(schedule.completion_time(1), Some(9));
        assert_eq!(schedule.completion_time(2), Some(16));
        assert_eq!(schedule.finish_order(), vec![1, 0, 2]);
        assert_eq!(schedule.slices.len(), 9);
        assert_eq!(schedule.slices[4], Slice::new(1, 8, 9));
    }

    #[test]
    fn test_textbook_example_q4() {
        // Silberschatz: 24, 3, 3 with q=4 → 6, 4, 7
        let schedule = rr(4).schedule(&batch(&[24, 3, 3]));
        assert_eq!(schedule.waiting_times(), vec![6, 4, 7]);
        assert_eq!(schedule.makespan(), 30);
    }

    #[test]
    fn test_exact_quantum_completes() {
        let schedule = rr(3).schedule(&batch(&[3, 3]));
        assert_eq!(schedule.waiting_times(), vec![0, 3]);
        assert_eq!(schedule.slices.len(), 2);
    }

    #[test]
    fn test_large_quantum_is_fcfs() {
        let schedule = rr(100).schedule(&batch(&[5, 3, 8]));
        assert_eq!(schedule.waiting_times(), vec![0, 5, 8]);
    }

    #[test]
    fn test_slices_cover_bursts() {
        let processes = batch(&[7, 1, 4]);
        let schedule = rr(2).schedule(&processes);
        for p in &processes {
            let total: i64 = schedule.slices_for(p.pid).iter().map(|s| s.duration()).sum();
            assert_eq!(total, p.burst_time);
        }
        assert!(schedule
            .slices
            .windows(2)
            .all(|w| w[0].end == w[1].start));
    }

    #[test]
    fn test_empty_batch() {
        let schedule = rr(2).schedule(&[]);
        assert!(schedule.is_empty());
        assert!(schedule.slices.is_empty());
    }

    #[test]
    fn test_description() {
        assert_eq!(rr(3).description(), "RR Quantum = 3");
        assert_eq!(RoundRobin::default().quantum(), Quantum::default());
    }
}
