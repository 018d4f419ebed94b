//! Result rendering.
//!
//! Plain-text tables in the classic simulator layout, an optional dispatch
//! timeline, and JSON for machine consumption.

use crate::error::{Error, Result};
use crate::models::Schedule;
use crate::scheduler::ScheduleMetrics;
use crate::simulation::SimulationRun;

const BANNER: &str = "*********";

/// Renders one run's metrics as a table followed by the averages.
pub fn render_text(metrics: &ScheduleMetrics, heading: &str) -> String {
    let mut out = String::new();
    out.push_str(&format!("\n{BANNER}\n{heading}\n"));
    out.push_str("\tProcesses\tBurst time\tWaiting time\tTurn around time\n");

    for row in &metrics.rows {
        out.push_str(&format!(
            "\t{}\t\t{}\t\t{}\t\t{}\n",
            row.pid, row.burst_time, row.waiting_time, row.turnaround_time
        ));
    }

    match (metrics.average_waiting_time, metrics.average_turnaround_time) {
        (Some(awt), Some(att)) => {
            out.push_str(&format!("\nAverage waiting time = {awt:.2}"));
            out.push_str(&format!("\nAverage turn around time = {att:.2}\n"));
        }
        _ => out.push_str("\nno data\n"),
    }

    out
}

/// Renders the dispatch slices, one `[start-end] P<pid>` per line.
pub fn render_timeline(schedule: &Schedule) -> String {
    schedule
        .slices
        .iter()
        .map(|s| format!("\t[{}-{}] P{}\n", s.start, s.end, s.pid))
        .collect()
}

/// Renders every run as text, with timelines when requested.
pub fn render_runs(runs: &[SimulationRun], timeline: bool) -> String {
    let mut out = String::new();
    for run in runs {
        out.push_str(&render_text(&run.metrics, &run.heading));
        if timeline {
            out.push_str("\nTimeline:\n");
            out.push_str(&render_timeline(&run.schedule));
        }
    }
    out
}

/// Serializes every run as pretty-printed JSON.
pub fn render_json(runs: &[SimulationRun]) -> Result<String> {
    serde_json::to_string_pretty(runs).map_err(Error::Render)
}
