//! Simulate a gshare branch predictor over a text branch trace.
//!
//! ```text
//! sim gshare <M> <N> <trace file>
//! ```
//!
//! Prints `<M> <N> <misprediction rate>` on success.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use gshare_sim::*;

#[derive(Parser, Debug)]
#[command(
    name = "sim",
    version,
    about = "Simulate a gshare branch predictor over a branch trace",
    long_about = "Simulate a gshare branch predictor over a branch trace.\n\nEach trace line holds a hexadecimal branch address and an outcome ('t' or 'n').\n\nExample:\n  sim gshare 4 2 mcf_trace.txt",
    allow_negative_numbers = true
)]
struct Cli {
    /// Predictor kind (only 'gshare' is available).
    kind: String,

    /// Width of a PHT index in bits (M).
    m: String,

    /// Length of global history in bits (N).
    n: String,

    /// Path to the trace file.
    trace: PathBuf,

    /// After the run, list the K most frequently mispredicted branches on
    /// stderr.
    #[arg(long, value_name = "K")]
    report: Option<usize>,
}

fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(sim) => {
            if let Some(k) = cli.report {
                print_report(&sim, k);
            }
            ExitCode::SUCCESS
        },
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        },
    }
}

fn run(cli: &Cli) -> Result<Simulation, SimError> {
    let PredictorKind::Gshare = cli.kind.parse::<PredictorKind>()?;
    let cfg = PredictorConfig::parse(&cli.m, &cli.n)?;
    let mut trace = TraceReader::open(&cli.trace)?;

    let mut sim = Simulation::new(cfg);
    if cli.report.is_some() {
        sim = sim.with_branch_stats();
    }
    let summary = sim.run(&mut trace)?;
    println!("{}", summary);
    Ok(sim)
}

fn print_report(sim: &Simulation, k: usize) {
    let Some(stats) = sim.stats() else {
        return;
    };
    eprintln!("[*] {} unique branches, {} most mispredicted:",
        stats.num_unique_branches(), k);
    for (pc, s) in stats.worst_branches(k) {
        eprintln!("    {:016x}: {:6}/{:6} ({:.4}) taken={:6} {}",
            pc, s.misses(), s.occ, s.hit_rate(), s.times_taken(),
            s.recent_pattern(32));
    }
}
