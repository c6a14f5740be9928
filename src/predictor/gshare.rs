//! Implementation of a gshare predictor.
//!
//! A gshare predictor keeps a single [PatternHistoryTable] of two-bit
//! counters. The index into the table is formed by XOR'ing bits from the
//! program counter with the global history register, so that the same
//! branch can use different counters depending on the path taken to reach
//! it.

use crate::Outcome;
use crate::config::PredictorConfig;
use crate::history::HistoryRegister;
use crate::predictor::*;

/// A prediction made by a [GsharePredictor].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GsharePrediction {
    /// The index of the PHT entry used to make this prediction
    pub idx: usize,

    /// The predicted direction
    pub outcome: Outcome,
}

/// A gshare predictor with running statistics.
#[derive(Clone, Debug)]
pub struct GsharePredictor {
    cfg: PredictorConfig,

    /// Table of two-bit counters
    pht: PatternHistoryTable,

    /// Global history register
    ghr: HistoryRegister,

    /// Number of branches processed
    predictions: usize,

    /// Number of branches whose direction was predicted incorrectly
    mispredictions: usize,
}

impl GsharePredictor {
    pub fn new(cfg: PredictorConfig) -> Self {
        Self {
            cfg,
            pht: PatternHistoryTable::new(cfg.pht_size(),
                SaturatingCounterConfig::TWO_BIT),
            ghr: HistoryRegister::new(cfg.history_bits() as usize),
            predictions: 0,
            mispredictions: 0,
        }
    }

    pub fn config(&self) -> &PredictorConfig { &self.cfg }
    pub fn pht(&self) -> &PatternHistoryTable { &self.pht }
    pub fn history(&self) -> &HistoryRegister { &self.ghr }

    /// Compute the PHT index for a branch at `pc`.
    ///
    /// The two low bits of the program counter are discarded. History is
    /// aligned with the top of the index, so only the top `history_bits`
    /// of the PC bits are hashed with it.
    pub fn get_index(&self, pc: u64) -> usize {
        let pc_bits = ((pc >> 2) & self.cfg.index_mask() as u64) as usize;
        let history = if self.ghr.is_empty() {
            0
        } else {
            self.ghr.value() << self.cfg.history_shift()
        };
        self.pht.get_index(pc_bits ^ history)
    }

    /// Predict the direction of the branch at `pc`.
    pub fn predict(&self, pc: u64) -> GsharePrediction {
        let idx = self.get_index(pc);
        let outcome = self.pht.get_entry(idx).predict();
        GsharePrediction { idx, outcome }
    }

    /// Train the entry at `idx` and record `outcome` in global history.
    ///
    /// `idx` must come from the [GsharePrediction] for the same branch;
    /// history has not changed between the two calls.
    pub fn update(&mut self, idx: usize, outcome: Outcome) {
        self.pht.get_entry_mut(idx).update(outcome);
        self.ghr.push(outcome);
    }

    /// Predict, score and train on a single branch from the trace.
    ///
    /// The prediction is scored before the predictor is updated with the
    /// resolved outcome.
    pub fn process_branch(&mut self, pc: u64, outcome: Outcome)
        -> GsharePrediction
    {
        self.predictions += 1;
        let p = self.predict(pc);
        let hit = p.outcome == outcome;
        if !hit {
            self.mispredictions += 1;
        }
        tracing::trace!(
            pc = %format!("{:#010x}", pc),
            idx = p.idx,
            ghr = %self.ghr,
            predicted = %p.outcome,
            actual = %outcome,
            hit,
        );
        self.update(p.idx, outcome);
        p
    }

    /// Number of branches processed so far.
    pub fn predictions(&self) -> usize { self.predictions }

    /// Number of mispredicted branches so far.
    pub fn mispredictions(&self) -> usize { self.mispredictions }

    /// Percentage of processed branches which were mispredicted.
    /// This is zero when no branches have been processed.
    pub fn misprediction_rate(&self) -> f64 {
        if self.predictions == 0 {
            return 0.0;
        }
        self.mispredictions as f64 / self.predictions as f64 * 100.0
    }
}
