//! Implementation of a saturating counter.

use crate::Outcome;
use crate::predictor::StatefulPredictor;

/// Configuration for building a [`SaturatingCounter`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SaturatingCounterConfig {
    /// Largest value the counter can hold.
    pub max: u8,

    /// Value of the counter after it is built.
    pub init: u8,

    /// Smallest value which predicts 'taken'.
    pub threshold: u8,
}
impl SaturatingCounterConfig {
    /// The classic two-bit counter, starting in the weakly-taken state.
    pub const TWO_BIT: Self = Self { max: 3, init: 2, threshold: 2 };

    pub fn build(self) -> SaturatingCounter {
        debug_assert!(self.init <= self.max && self.threshold <= self.max);
        SaturatingCounter {
            cfg: self,
            ctr: self.init,
        }
    }
}

/// An N-bit saturating counter used to follow the behavior of a branch.
///
/// The counter moves toward `max` on a taken outcome and toward zero on a
/// not-taken outcome, and never wraps at either end.
#[derive(Clone, Copy, Debug)]
pub struct SaturatingCounter {
    cfg: SaturatingCounterConfig,
    ctr: u8,
}
impl SaturatingCounter {
    pub fn increment(&mut self) {
        self.ctr = self.ctr.saturating_add(1).min(self.cfg.max);
    }

    pub fn decrement(&mut self) {
        self.ctr = self.ctr.saturating_sub(1);
    }

    /// Return the raw counter value.
    pub fn value(&self) -> u8 { self.ctr }
}

impl StatefulPredictor for SaturatingCounter {
    fn predict(&self) -> Outcome {
        Outcome::from(self.ctr >= self.cfg.threshold)
    }
    fn update(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::T => self.increment(),
            Outcome::N => self.decrement(),
        }
    }
}
