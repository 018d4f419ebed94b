//! Workload sources.
//!
//! Turns an external description into a `Vec<Process>`. Nothing here is
//! validated beyond syntax: semantic checks (burst > 0, unique pids) are
//! the job of [`crate::validation`].
//!
//! # Text format
//!
//! One process per line, whitespace separated:
//!
//! ```text
//! # pid arrival burst [priority]
//! 1 0 10 3
//! 2 1 1  1
//! ```
//!
//! Blank lines and `#` comments are skipped. A missing priority is 0.
//!
//! # JSON format
//!
//! Either an array of processes or `{ "processes": [...] }`.

use std::path::Path;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Deserialize;

use crate::error::{Error, Result};
use crate::models::Process;

/// Reads a workload file. `.json` files are decoded as JSON, anything else
/// as the text format.
pub fn load_workload(path: impl AsRef<Path>) -> Result<Vec<Process>> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path).map_err(|source| Error::WorkloadUnavailable {
        path: path.to_path_buf(),
        source,
    })?;

    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    let processes = if is_json {
        parse_json(&contents)?
    } else {
        parse_text(&contents)?
    };

    tracing::debug!(path = %path.display(), processes = processes.len(), "workload loaded");
    Ok(processes)
}

/// Parses the line-oriented text format.
pub fn parse_text(input: &str) -> Result<Vec<Process>> {
    let mut processes = Vec::new();

    for (idx, raw) in input.lines().enumerate() {
        let line_no = idx + 1;
        let line = raw.split('#').next().unwrap_or("").trim();
        if line.is_empty() {
            continue;
        }

        let fields: Vec<&str> = line.split_whitespace().collect();
        if !(3..=4).contains(&fields.len()) {
            return Err(Error::Parse {
                line: line_no,
                message: format!(
                    "expected 'pid arrival burst [priority]', found {} fields",
                    fields.len()
                ),
            });
        }

        let pid: u32 = parse_field(fields[0], "pid", line_no)?;
        let arrival: i64 = parse_field(fields[1], "arrival time", line_no)?;
        let burst: i64 = parse_field(fields[2], "burst time", line_no)?;
        let priority: i32 = match fields.get(3) {
            Some(f) => parse_field(f, "priority", line_no)?,
            None => 0,
        };

        processes.push(
            Process::new(pid, burst)
                .with_arrival_time(arrival)
                .with_priority(priority),
        );
    }

    Ok(processes)
}

fn parse_field<T: std::str::FromStr>(field: &str, name: &str, line: usize) -> Result<T> {
    field.parse().map_err(|_| Error::Parse {
        line,
        message: format!("invalid {name} '{field}'"),
    })
}

#[derive(Deserialize)]
#[serde(untagged)]
enum WorkloadDocument {
    List(Vec<Process>),
    Wrapped { processes: Vec<Process> },
}

/// Parses the JSON format.
pub fn parse_json(input: &str) -> Result<Vec<Process>> {
    let doc: WorkloadDocument = serde_json::from_str(input)?;
    Ok(match doc {
        WorkloadDocument::List(processes) => processes,
        WorkloadDocument::Wrapped { processes } => processes,
    })
}

/// Bounds for randomly generated workloads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Number of processes.
    pub count: usize,
    /// Largest burst time (bursts are drawn from `1..=max_burst`).
    pub max_burst: i64,
    /// Latest arrival time.
    pub max_arrival: i64,
    /// Largest priority value.
    pub max_priority: i32,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            count: 5,
            max_burst: 10,
            max_arrival: 0,
            max_priority: 5,
        }
    }
}

impl GeneratorConfig {
    /// Creates a config for `count` processes with default bounds.
    pub fn new(count: usize) -> Self {
        Self {
            count,
            ..Default::default()
        }
    }

    /// Sets the largest burst time.
    pub fn with_max_burst(mut self, max_burst: i64) -> Self {
        self.max_burst = max_burst;
        self
    }

    /// Sets the latest arrival time.
    pub fn with_max_arrival(mut self, max_arrival: i64) -> Self {
        self.max_arrival = max_arrival;
        self
    }

    /// Sets the largest priority value.
    pub fn with_max_priority(mut self, max_priority: i32) -> Self {
        self.max_priority = max_priority;
        self
    }
}

/// Generates a reproducible random workload.
///
/// Pids run from 1 to `count`; the same seed always yields the same batch.
pub fn generate(config: &GeneratorConfig, seed: u64) -> Vec<Process> {
    let mut rng = StdRng::seed_from_u64(seed);
    let max_burst = config.max_burst.max(1);
    let max_arrival = config.max_arrival.max(0);
    let max_priority = config.max_priority.max(0);

    (1..=config.count)
        .map(|pid| {
            Process::new(pid as u32, rng.random_range(1..=max_burst))
                .with_arrival_time(rng.random_range(0..=max_arrival))
                .with_priority(rng.random_range(0..=max_priority))
        })
        .collect()
}
