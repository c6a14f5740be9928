//! Library-level simulation tests over trace files on disk.

use std::io::Write;
use gshare_sim::*;
use pretty_assertions::assert_eq;
use rand::{rngs::StdRng, Rng, SeedableRng};
use tempfile::NamedTempFile;

fn write_trace(lines: &[String]) -> NamedTempFile {
    let mut f = NamedTempFile::new().unwrap();
    for line in lines {
        writeln!(f, "{}", line).unwrap();
    }
    f.flush().unwrap();
    f
}

fn random_trace(seed: u64, len: usize) -> Vec<String> {
    let mut rng = StdRng::seed_from_u64(seed);
    let pcs: Vec<u64> = (0..32).map(|_| rng.gen_range(0x400000..0x500000)).collect();
    (0..len).map(|_| {
        let pc = pcs[rng.gen_range(0..pcs.len())];
        let outcome = if rng.gen_bool(0.7) { "t" } else { "n" };
        format!("{:08x} {}", pc, outcome)
    }).collect()
}

fn simulate_file(m: i64, n: i64, f: &NamedTempFile) -> Summary {
    let cfg = PredictorConfig::new(m, n).unwrap();
    let mut trace = TraceReader::open(f.path()).unwrap();
    Simulation::new(cfg).run(&mut trace).unwrap()
}

#[test]
fn replay_gives_identical_rate() {
    let f = write_trace(&random_trace(7, 10_000));
    for (m, n) in [(1, 0), (4, 2), (10, 10), (12, 8)] {
        let a = simulate_file(m, n, &f);
        let b = simulate_file(m, n, &f);
        assert_eq!(a, b);
        assert_eq!(a.predictions, 10_000);
        assert!(a.rate >= 0.0 && a.rate <= 100.0);
    }
}

#[test]
fn file_matches_direct_engine() {
    let lines = random_trace(42, 2_000);
    let f = write_trace(&lines);
    let summary = simulate_file(8, 4, &f);

    let mut p = GsharePredictor::new(PredictorConfig::new(8, 4).unwrap());
    for line in lines.iter() {
        let record: TraceRecord = line.parse().unwrap();
        p.process_branch(record.pc, record.outcome);
    }
    assert_eq!(summary.mispredictions, p.mispredictions());
    assert_eq!(summary.to_string(), format!("8 4 {:.2}", p.misprediction_rate()));
}

#[test]
fn history_helps_correlated_branches() {
    // The second branch always repeats the outcome of the first, which
    // alternates. Global history lets the predictor learn both.
    let mut lines = Vec::new();
    for i in 0..500 {
        let o = if i % 2 == 0 { "t" } else { "n" };
        lines.push(format!("00001000 {}", o));
        lines.push(format!("00001040 {}", o));
    }
    let f = write_trace(&lines);
    let without = simulate_file(8, 0, &f);
    let with = simulate_file(8, 4, &f);
    assert!(with.rate < without.rate,
        "with history {} vs without {}", with, without);
    assert!(with.mispredictions < 10);
}

#[test]
fn skipped_lines_reported() {
    let lines: Vec<String> = ["00000000 t", "garbage", "", "1234 maybe", "00000000 T"]
        .iter().map(|s| s.to_string()).collect();
    let f = write_trace(&lines);
    let s = simulate_file(1, 0, &f);
    assert_eq!(s.predictions, 2);
    assert_eq!(s.skipped, 2);
    assert_eq!(s.to_string(), "1 0 0.00");
}

#[test]
fn missing_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = TraceReader::open(dir.path().join("nope.txt")).err().unwrap();
    let err: SimError = err.into();
    assert!(err.to_string().contains("not found"));
}
