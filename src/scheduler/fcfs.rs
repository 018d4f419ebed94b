//! First-Come-First-Served.
//!
//! # Algorithm
//!
//! Processes run to completion one after another in dispatch order:
//!
//! ```text
//! wt[0] = arrival[0]
//! wt[i] = wt[i-1] + burst[i-1]
//! ```
//!
//! Only the first entry's arrival time is read. Later arrivals never delay
//! or advance dispatch; this is the classical textbook formulation and is
//! kept as-is.
//!
//! # Complexity
//! O(n) time, O(1) extra space beyond the output.

use super::{Algorithm, SchedulingPolicy};
use crate::models::{Process, Schedule, Slice};

/// First-Come-First-Served policy.
#[derive(Debug, Clone, Copy, Default)]
pub struct Fcfs;

impl SchedulingPolicy for Fcfs {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Fcfs
    }

    fn schedule(&self, processes: &[Process]) -> Schedule {
        let order: Vec<usize> = (0..processes.len()).collect();
        schedule_in_order(Algorithm::Fcfs, processes, &order)
    }
}

/// FCFS waiting times for `processes` dispatched in `order`.
///
/// `order` holds indices into `processes`; the result is aligned with
/// `order`, not with `processes`.
pub fn fcfs_waiting_times(processes: &[Process], order: &[usize]) -> Vec<i64> {
    let mut waiting = Vec::with_capacity(order.len());
    let mut iter = order.iter().map(|&i| &processes[i]);

    let Some(first) = iter.next() else {
        return waiting;
    };
    let mut wt = first.arrival_time;
    let mut prev_burst = first.burst_time;
    waiting.push(wt);

    for p in iter {
        wt += prev_burst;
        prev_burst = p.burst_time;
        waiting.push(wt);
    }

    waiting
}

/// Builds a non-preemptive FCFS schedule over an explicit dispatch order.
pub(crate) fn schedule_in_order(
    algorithm: Algorithm,
    processes: &[Process],
    order: &[usize],
) -> Schedule {
    let mut schedule = Schedule::new(algorithm);
    let waiting = fcfs_waiting_times(processes, order);

    for (&idx, &wt) in order.iter().zip(&waiting) {
        let p = &processes[idx];
        let slice = Slice::new(p.pid, wt, wt + p.burst_time);
        tracing::trace!(pid = p.pid, start = slice.start, end = slice.end, "dispatch");
        schedule.add_slice(slice);
        schedule.add_entry(p.clone(), wt);
    }

    tracing::debug!(
        algorithm = %algorithm,
        processes = processes.len(),
        makespan = schedule.makespan(),
        "schedule complete"
    );
    schedule
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

    #[test]
    fn test_cumulative_waiting() {
        let schedule = Fcfs.schedule(&batch(&[5, 3, 8]));
        assert_eq!(schedule.waiting_times(), vec![0, 5, 8]);
        assert_eq!(schedule.makespan(), 16);
    }

    #[test]
    fn test_textbook_example() {
        // Silberschatz: P1=24, P2=3, P3=3 → 0, 24, 27 (avg 17)
        let schedule = Fcfs.schedule(&batch(&[24, 3, 3]));
        assert_eq!(schedule.waiting_times(), vec![0, 24, 27]);
    }

    #[test]
    fn test_first_arrival_offsets_everything() {
        let processes = vec![
            Process::new(1, 4).with_arrival_time(3),
            Process::new(2, 2).with_arrival_time(100),
        ];
        let schedule = Fcfs.schedule(&processes);
        // Second arrival is never consulted.
        assert_eq!(schedule.waiting_times(), vec![3, 7]);
        assert_eq!(schedule.slices[0], Slice::new(1, 3, 7));
        assert_eq!(schedule.slices[1], Slice::new(2, 7, 9));
    }

    #[test]
    fn test_preserves_input_order() {
        let processes = vec![
            Process::new(9, 1).with_priority(5),
            Process::new(4, 1).with_priority(0),
        ];
        let schedule = Fcfs.schedule(&processes);
        let pids: Vec<u32> = schedule.entries.iter().map(|e| e.process.pid).collect();
        assert_eq!(pids, vec![9, 4]);
    }

    #[test]
    fn test_empty_batch() {
        let schedule = Fcfs.schedule(&[]);
        assert!(schedule.is_empty());
        assert!(schedule.slices.is_empty());
    }

    #[test]
    fn test_waiting_times_follow_order() {
        let processes = batch(&[5, 3, 8]);
        assert_eq!(fcfs_waiting_times(&processes, &[2, 0, 1]), vec![0, 8, 13]);
        assert!(fcfs_waiting_times(&processes, &[]).is_empty());
    }
}
