//! Crate error type.

use std::path::PathBuf;

use crate::validation::ValidationError;

/// Errors surfaced at the boundary of the simulator.
///
/// Engines never return errors: everything here is detected before a
/// scheduling policy runs.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The workload failed one or more validation checks.
    #[error("invalid workload: {}", join_messages(.0))]
    InvalidWorkload(Vec<ValidationError>),

    /// Round-robin quantum must be strictly positive.
    #[error("invalid quantum {0}: must be greater than zero")]
    InvalidQuantum(i64),

    /// Simulation settings are unusable.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// The workload source could not be opened or read.
    #[error("workload unavailable: {}", .path.display())]
    WorkloadUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A line of a text workload could not be parsed.
    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },

    /// A JSON workload could not be decoded.
    #[error("malformed JSON workload: {0}")]
    Json(#[from] serde_json::Error),

    /// Simulation results could not be encoded as JSON.
    #[error("failed to render JSON report: {0}")]
    Render(#[source] serde_json::Error),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

fn join_messages(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}
