//! Implementation of a pattern history table (PHT).

use crate::predictor::*;

/// A table of [SaturatingCounter] indexed by some precomputed index.
///
/// The table only masks its input; hashing the program counter with any
/// other state is left to the predictor which owns the table.
#[derive(Clone, Debug)]
pub struct PatternHistoryTable {
    /// Table of counters
    data: Vec<SaturatingCounter>,

    /// Number of entries
    size: usize,
}
impl PatternHistoryTable {
    pub fn new(size: usize, cfg: SaturatingCounterConfig) -> Self {
        assert!(size.is_power_of_two());
        let data = vec![cfg.build(); size];
        Self {
            data,
            size,
        }
    }

    /// Iterate over all counters in index order.
    pub fn iter(&self) -> impl Iterator<Item = &SaturatingCounter> {
        self.data.iter()
    }
}

impl PredictorTable for PatternHistoryTable {
    type Input = usize;
    type Entry = SaturatingCounter;

    fn size(&self) -> usize { self.size }

    fn get_index(&self, input: usize) -> usize {
        input & self.index_mask()
    }

    fn get_entry(&self, idx: usize) -> &SaturatingCounter {
        let index = idx & self.index_mask();
        &self.data[index]
    }

    fn get_entry_mut(&mut self, idx: usize) -> &mut SaturatingCounter {
        let index = idx & self.index_mask();
        &mut self.data[index]
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::Outcome;

    #[test]
    fn entries_are_independent() {
        let mut pht = PatternHistoryTable::new(4, SaturatingCounterConfig::TWO_BIT);
        assert_eq!(pht.size(), 4);
        assert_eq!(pht.index_mask(), 0b11);
        assert!(pht.iter().all(|c| c.value() == 2));

        pht.get_entry_mut(1).update(Outcome::N);
        assert_eq!(pht.get_entry(1).value(), 1);
        assert_eq!(pht.get_entry(0).value(), 2);
        assert_eq!(pht.get_index(0b1101), 0b01);
    }
}
