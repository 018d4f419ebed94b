//! Input validation for batch workloads.
//!
//! Checks the structural integrity of a process batch before any
//! scheduling policy sees it. Detects:
//! - Empty batches
//! - Non-positive burst times
//! - Negative arrival times
//! - Duplicate pids
//! - Batches whose timeline would not fit in an `i64` clock
//!
//! Engines assume validated input and carry no recovery branches of their
//! own, so every check a policy relies on lives here.

use std::collections::HashSet;
use std::fmt;

use crate::models::Process;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// The batch holds no processes.
    EmptyWorkload,
    /// A process has `burst_time <= 0`.
    NonPositiveBurst,
    /// A process has `arrival_time < 0`.
    NegativeArrival,
    /// Two processes share a pid.
    DuplicatePid,
    /// Arrival plus total burst time, or the turnaround total, exceeds `i64`.
    TimeOverflow,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Validates a process batch.
///
/// Checks:
/// 1. The batch is not empty
/// 2. Every burst time is positive
/// 3. Every arrival time is non-negative
/// 4. Pids are unique
/// 5. The whole timeline, and the turnaround total, fit in an `i64`
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_workload(processes: &[Process]) -> ValidationResult {
    let mut errors = Vec::new();

    if processes.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyWorkload,
            "Workload contains no processes",
        ));
    }

    let mut pids = HashSet::new();
    for p in processes {
        if !pids.insert(p.pid) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicatePid,
                format!("Duplicate pid: {}", p.pid),
            ));
        }

        if p.burst_time <= 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveBurst,
                format!(
                    "Process {} has non-positive burst time {}",
                    p.pid, p.burst_time
                ),
            ));
        }

        if p.arrival_time < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeArrival,
                format!(
                    "Process {} has negative arrival time {}",
                    p.pid, p.arrival_time
                ),
            ));
        }
    }

    if let Some(err) = check_time_horizon(processes) {
        errors.push(err);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        for e in &errors {
            tracing::warn!(kind = ?e.kind, "{}", e.message);
        }
        Err(errors)
    }
}

/// Rejects batches whose clock could overflow in any policy.
///
/// No policy advances past `latest arrival + Σ burst` (priority may move any
/// process to the front, so the latest arrival bounds the offset), and every
/// turnaround is at most that horizon, so the totals stay below `n × horizon`.
fn check_time_horizon(processes: &[Process]) -> Option<ValidationError> {
    let total_burst = processes
        .iter()
        .try_fold(0i64, |acc, p| acc.checked_add(p.burst_time.max(0)));
    let latest_arrival = processes
        .iter()
        .map(|p| p.arrival_time.max(0))
        .max()
        .unwrap_or(0);

    let totals = total_burst
        .and_then(|burst| burst.checked_add(latest_arrival))
        .and_then(|horizon| horizon.checked_mul(processes.len() as i64));

    match totals {
        Some(_) => None,
        None => Some(ValidationError::new(
            ValidationErrorKind::TimeOverflow,
            "Arrival and burst times are too large to simulate without overflow",
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_processes() -> Vec<Process> {
        vec![
            Process::new(1, 10).with_priority(3),
            Process::new(2, 1).with_arrival_time(1).with_priority(1),
            Process::new(3, 2).with_arrival_time(2).with_priority(4),
        ]
    }

    #[test]
    fn test_valid_input() {
        assert!(validate_workload(&sample_processes()).is_ok());
    }

    #[test]
    fn test_empty_workload() {
        let errors = validate_workload(&[]).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::EmptyWorkload);
    }

    #[test]
    fn test_zero_burst() {
        let errors = validate_workload(&[Process::new(1, 0)]).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::NonPositiveBurst));
    }

    #[test]
    fn test_negative_burst() {
        let errors = validate_workload(&[Process::new(1, -4)]).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::NonPositiveBurst && e.message.contains("-4")));
    }

    #[test]
    fn test_negative_arrival() {
        let errors = validate_workload(&[Process::new(1, 5).with_arrival_time(-1)]).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::NegativeArrival));
    }

    #[test]
    fn test_duplicate_pid() {
        let processes = vec![Process::new(1, 5), Process::new(1, 6)];
        let errors = validate_workload(&processes).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicatePid));
    }

    #[test]
    fn test_burst_sum_overflow() {
        let processes = vec![Process::new(1, i64::MAX), Process::new(2, 1)];
        let errors = validate_workload(&processes).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::TimeOverflow);
    }

    #[test]
    fn test_arrival_offset_overflow() {
        // Priority can move the late arrival to the front.
        let processes = vec![
            Process::new(1, 10).with_priority(5),
            Process::new(2, 10).with_arrival_time(i64::MAX - 15).with_priority(0),
        ];
        let errors = validate_workload(&processes).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::TimeOverflow));
    }

    #[test]
    fn test_turnaround_total_overflow() {
        // Each clock value fits, the summed turnaround does not.
        let third = i64::MAX / 3;
        let processes = vec![Process::new(1, third), Process::new(2, third)];
        let errors = validate_workload(&processes).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::TimeOverflow));
    }

    #[test]
    fn test_large_but_safe_batch() {
        let quarter = i64::MAX / 4;
        let processes = vec![Process::new(1, quarter / 2), Process::new(2, quarter / 2)];
        assert!(validate_workload(&processes).is_ok());
    }

    #[test]
    fn test_multiple_errors() {
        let processes = vec![
            Process::new(1, 0),
            Process::new(1, 5).with_arrival_time(-2),
        ];
        let errors = validate_workload(&processes).unwrap_err();
        assert_eq!(errors.len(), 3);
    }
}
