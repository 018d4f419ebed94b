//! Batch simulation runner.
//!
//! Replays one workload through a list of policies and collects the
//! schedule and metrics of each run.
//!
//! # Algorithm
//!
//! 1. Validate the configuration (quantum, policy list) when building.
//! 2. Validate the workload once, before any policy runs.
//! 3. Run each policy against the same borrowed batch. Policies never
//!    modify their input, so every run sees the workload as loaded.
//! 4. Derive metrics for each schedule.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::models::{Process, Schedule};
use crate::scheduler::{Algorithm, Quantum, ScheduleMetrics, SchedulingPolicy, DEFAULT_QUANTUM};
use crate::validation::validate_workload;

/// Simulation settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Round-robin time slice.
    #[serde(default = "default_quantum")]
    pub quantum: i64,
    /// Policies to run, in order.
    #[serde(default = "default_algorithms")]
    pub algorithms: Vec<Algorithm>,
}

fn default_quantum() -> i64 {
    DEFAULT_QUANTUM
}

fn default_algorithms() -> Vec<Algorithm> {
    Algorithm::ALL.to_vec()
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            quantum: default_quantum(),
            algorithms: default_algorithms(),
        }
    }
}

impl SimulationConfig {
    /// Sets the round-robin quantum.
    pub fn with_quantum(mut self, quantum: i64) -> Self {
        self.quantum = quantum;
        self
    }

    /// Replaces the policy list.
    pub fn with_algorithms(mut self, algorithms: Vec<Algorithm>) -> Self {
        self.algorithms = algorithms;
        self
    }

    /// Checks the settings and returns the validated quantum.
    pub fn validate(&self) -> Result<Quantum> {
        let quantum = Quantum::new(self.quantum)?;
        if self.algorithms.is_empty() {
            return Err(Error::InvalidConfig("no algorithms selected".into()));
        }
        Ok(quantum)
    }
}

/// Results of one policy run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationRun {
    /// Policy that ran.
    pub algorithm: Algorithm,
    /// Report heading (e.g., "RR Quantum = 2").
    pub heading: String,
    /// Engine output.
    pub schedule: Schedule,
    /// Derived metrics.
    pub metrics: ScheduleMetrics,
}

/// Runs a workload through a configured list of policies.
///
/// # Example
///
/// ```
/// use schedsim::models::Process;
/// use schedsim::simulation::{Simulation, SimulationConfig};
///
/// let sim = Simulation::new(SimulationConfig::default()).unwrap();
/// let batch = vec![Process::new(1, 5), Process::new(2, 3), Process::new(3, 8)];
/// let runs = sim.run(&batch).unwrap();
///
/// let headings: Vec<_> = runs.iter().map(|r| r.heading.as_str()).collect();
/// assert_eq!(headings, vec!["FCFS", "SJF", "Priority", "RR Quantum = 2"]);
/// ```
#[derive(Debug)]
pub struct Simulation {
    policies: Vec<Box<dyn SchedulingPolicy>>,
}

impl Simulation {
    /// Builds the policies named by `config`.
    pub fn new(config: SimulationConfig) -> Result<Self> {
        let quantum = config.validate()?;
        let policies = config
            .algorithms
            .iter()
            .map(|alg| alg.policy(quantum))
            .collect();
        Ok(Self { policies })
    }

    /// Builds a simulation from explicit policies.
    pub fn with_policies(policies: Vec<Box<dyn SchedulingPolicy>>) -> Self {
        Self { policies }
    }

    /// Configured policies, in run order.
    pub fn policies(&self) -> &[Box<dyn SchedulingPolicy>] {
        &self.policies
    }

    /// Validates the workload and runs every policy over it.
    pub fn run(&self, processes: &[Process]) -> Result<Vec<SimulationRun>> {
        validate_workload(processes).map_err(Error::InvalidWorkload)?;

        tracing::debug!(
            processes = processes.len(),
            policies = self.policies.len(),
            "starting simulation"
        );

        let runs = self
            .policies
            .iter()
            .map(|policy| {
                let schedule = policy.schedule(processes);
                let metrics = ScheduleMetrics::calculate(&schedule);
                tracing::debug!(
                    algorithm = policy.name(),
                    avg_waiting = ?metrics.average_waiting_time,
                    avg_turnaround = ?metrics.average_turnaround_time,
                    "run complete"
                );
                SimulationRun {
                    algorithm: policy.algorithm(),
                    heading: policy.description(),
                    schedule,
                    metrics,
                }
            })
            .collect();

        Ok(runs)
    }
}
