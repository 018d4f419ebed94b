//! Static priority scheduling.
//!
//! Orders the batch by priority ascending (lower value first), then applies
//! the FCFS formula over that order. The sort is stable, so processes with
//! equal priority keep their input order.
//!
//! The input slice is left untouched: the reordering lives in the returned
//! schedule, whose entries carry their own pids. Arrival time is read only
//! for the first process after sorting, the same as FCFS.

use super::fcfs::schedule_in_order;
use super::{Algorithm, SchedulingPolicy};
use crate::models::{Process, Schedule};

/// Static priority policy.
#[derive(Debug, Clone, Copy, Default)]
pub struct PriorityScheduler;

impl PriorityScheduler {
    /// Returns indices into `processes`, sorted by priority ascending.
    pub fn sort_indices(processes: &[Process]) -> Vec<usize> {
        let mut indices: Vec<usize> = (0..processes.len()).collect();
        indices.sort_by_key(|&i| processes[i].priority);
        indices
    }
}

impl SchedulingPolicy for PriorityScheduler {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Priority
    }

    fn schedule(&self, processes: &[Process]) -> Schedule {
        let order = Self::sort_indices(processes);
        schedule_in_order(Algorithm::Priority, processes, &order)
    }
}
