use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{ArgAction, Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use schedsim::report::{render_json, render_runs};
use schedsim::scheduler::{Algorithm, DEFAULT_QUANTUM};
use schedsim::simulation::{Simulation, SimulationConfig};
use schedsim::workload::{generate, load_workload, GeneratorConfig};

/// Output format.
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
enum OutputFormat {
    /// Tables with averages
    Text,
    /// Pretty-printed JSON
    Json,
}

/// Replay a batch workload through FCFS, SJF, priority and round-robin
#[derive(Parser, Debug)]
#[command(name = "schedsim", version)]
#[command(about = "Compare classical CPU scheduling algorithms on a batch workload", long_about = None)]
struct Args {
    /// Workload file (`pid arrival burst [priority]` per line, or .json)
    #[arg(required_unless_present = "random", conflicts_with = "random")]
    workload: Option<PathBuf>,

    /// Round-robin time quantum
    #[arg(short, long, default_value_t = DEFAULT_QUANTUM, allow_negative_numbers = true)]
    quantum: i64,

    /// Algorithms to run, in order (fcfs, sjf, priority, rr)
    #[arg(short, long = "algorithm", value_delimiter = ',')]
    algorithms: Vec<Algorithm>,

    /// Generate this many random processes instead of reading a file
    #[arg(long)]
    random: Option<usize>,

    /// Seed for --random
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Largest burst time for --random
    #[arg(long, default_value_t = 10)]
    max_burst: i64,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Print the dispatch timeline under each table
    #[arg(long)]
    timeline: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn init_tracing(verbose: u8) {
    let fallback = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(args: Args) -> anyhow::Result<()> {
    let algorithms = if args.algorithms.is_empty() {
        Algorithm::ALL.to_vec()
    } else {
        args.algorithms
    };
    let config = SimulationConfig::default()
        .with_quantum(args.quantum)
        .with_algorithms(algorithms);
    let simulation = Simulation::new(config).context("invalid simulation settings")?;

    let processes = match (&args.workload, args.random) {
        (_, Some(count)) => {
            let generator = GeneratorConfig::new(count).with_max_burst(args.max_burst);
            tracing::info!(count, seed = args.seed, "generating random workload");
            generate(&generator, args.seed)
        }
        (Some(path), None) => load_workload(path)
            .with_context(|| format!("failed to load workload from {}", path.display()))?,
        (None, None) => anyhow::bail!("a workload file or --random is required"),
    };

    let runs = simulation.run(&processes)?;
    tracing::info!(runs = runs.len(), processes = processes.len(), "simulation finished");

    match args.format {
        OutputFormat::Text => print!("{}", render_runs(&runs, args.timeline)),
        OutputFormat::Json => println!("{}", render_json(&runs)?),
    }
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.verbose);

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
