//! Driving a [GsharePredictor] over a whole trace.

use std::fmt;
use std::io::BufRead;

use crate::config::PredictorConfig;
use crate::error::SimError;
use crate::predictor::GsharePredictor;
use crate::stats::BranchStats;
use crate::trace::TraceReader;

/// The result of a completed simulation run.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Summary {
    pub index_bits: u32,
    pub history_bits: u32,
    pub predictions: usize,
    pub mispredictions: usize,

    /// Number of malformed trace lines that were skipped
    pub skipped: usize,

    /// Misprediction rate as a percentage
    pub rate: f64,
}

/// Formats as `<M> <N> <rate>`, with the rate to two decimal places.
impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {} {:.2}", self.index_bits, self.history_bits, self.rate)
    }
}

/// A single simulation run.
pub struct Simulation {
    predictor: GsharePredictor,

    /// Per-branch statistics, only collected when requested
    stats: Option<BranchStats>,
}
impl Simulation {
    pub fn new(cfg: PredictorConfig) -> Self {
        Self {
            predictor: GsharePredictor::new(cfg),
            stats: None,
        }
    }

    /// Also collect per-branch statistics during the run.
    pub fn with_branch_stats(mut self) -> Self {
        self.stats = Some(BranchStats::new());
        self
    }

    pub fn predictor(&self) -> &GsharePredictor { &self.predictor }
    pub fn stats(&self) -> Option<&BranchStats> { self.stats.as_ref() }

    /// Feed every valid record from `trace` to the predictor in order.
    ///
    /// Returns early on the first I/O error; nothing is summarized in that
    /// case.
    pub fn run<R: BufRead>(&mut self, trace: &mut TraceReader<R>)
        -> Result<Summary, SimError>
    {
        let cfg = *self.predictor.config();
        tracing::debug!(
            trace = %trace.path().display(),
            m = cfg.index_bits(),
            n = cfg.history_bits(),
            "starting simulation"
        );

        for record in trace.by_ref() {
            let record = record?;
            let p = self.predictor.process_branch(record.pc, record.outcome);
            if let Some(stats) = self.stats.as_mut() {
                stats.update(record.pc, record.outcome,
                    p.outcome == record.outcome);
            }
        }

        let summary = Summary {
            index_bits: cfg.index_bits(),
            history_bits: cfg.history_bits(),
            predictions: self.predictor.predictions(),
            mispredictions: self.predictor.mispredictions(),
            skipped: trace.skipped(),
            rate: self.predictor.misprediction_rate(),
        };
        tracing::debug!(
            lines = trace.lines(),
            predictions = summary.predictions,
            mispredictions = summary.mispredictions,
            skipped = summary.skipped,
            branches = self.stats.as_ref().map(|s| s.num_unique_branches()),
            "finished simulation"
        );
        Ok(summary)
    }
}
