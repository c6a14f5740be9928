//! Helpers for collecting per-branch statistics.

use std::collections::*;
use bitvec::prelude::*;
use itertools::*;

use crate::Outcome;

/// Container for per-branch statistics, indexed by program counter value.
#[derive(Default)]
pub struct BranchStats {
    pub data: BTreeMap<u64, BranchData>,
}
impl BranchStats {
    pub fn new() -> Self {
        Self { data: BTreeMap::new() }
    }

    /// Record the resolved `outcome` of the branch at `pc` and whether it
    /// was predicted correctly.
    pub fn update(&mut self, pc: u64, outcome: Outcome, hit: bool) {
        let data = self.get_mut(pc);
        data.occ += 1;
        if outcome == Outcome::T { data.taken += 1; }
        data.recent.shift_right(1);
        data.recent.set(0, outcome.into());
        if hit { data.hits += 1; }
    }

    /// Returns a reference to data collected for a particular branch.
    pub fn get(&self, pc: u64) -> Option<&BranchData> {
        self.data.get(&pc)
    }

    /// Returns a mutable reference to data collected for a particular branch.
    /// Creates a new entry if one doesn't already exist.
    pub fn get_mut(&mut self, pc: u64) -> &mut BranchData {
        self.data.entry(pc).or_default()
    }

    /// Returns the number of unique observed branch instructions.
    pub fn num_unique_branches(&self) -> usize {
        self.data.len()
    }

    /// Returns up to `n` branches with the most mispredictions, worst first.
    /// Branches that were never mispredicted are left out.
    pub fn worst_branches(&self, n: usize) -> Vec<(u64, &BranchData)> {
        self.data.iter()
            .filter(|(_, s)| s.misses() > 0)
            .sorted_by(|x, y| {
                y.1.misses().cmp(&x.1.misses()).then(x.0.cmp(&y.0))
            })
            .take(n)
            .map(|(pc, s)| (*pc, s))
            .collect()
    }
}

/// Number of outcomes remembered for each branch.
pub const RECENT_OUTCOMES: usize = 64;

/// Container for statistics about a single branch.
pub struct BranchData {
    /// Number of times this branch was encountered.
    pub occ: usize,

    /// Number of correct predictions for this branch.
    pub hits: usize,

    /// Number of times this branch was taken.
    pub taken: usize,

    /// The last [RECENT_OUTCOMES] outcomes, newest at index 0.
    recent: BitArray<[u64; 1], Lsb0>,
}
impl Default for BranchData {
    fn default() -> Self {
        Self {
            occ: 0,
            hits: 0,
            taken: 0,
            recent: BitArray::new([0; 1]),
        }
    }
}
impl BranchData {
    /// Return the number of mispredictions for this branch.
    pub fn misses(&self) -> usize { self.occ - self.hits }

    /// Return the hit rate for this branch.
    pub fn hit_rate(&self) -> f64 {
        if self.occ == 0 { return 0.0; }
        self.hits as f64 / self.occ as f64
    }

    pub fn times_taken(&self) -> usize { self.taken }

    /// Return the most recent outcomes (up to `n`) as a string, oldest first.
    pub fn recent_pattern(&self, n: usize) -> String {
        let k = n.min(self.occ).min(RECENT_OUTCOMES);
        (0..k).rev()
            .map(|i| if self.recent[i] { 'T' } else { 'N' })
            .collect()
    }
}
