//! Implementation of a gshare branch predictor and its building blocks.

pub mod table;
pub mod counter;
pub mod pht;
pub mod gshare;

pub use table::*;
pub use counter::*;
pub use pht::*;
pub use gshare::*;

use crate::Outcome;

/// Interface to a predictor with some internal state which is only subject to
/// change by the correct branch outcome.
pub trait StatefulPredictor {
    /// Return the current predicted outcome.
    fn predict(&self) -> Outcome;

    /// Update the internal state of the predictor with the correct outcome.
    fn update(&mut self, outcome: Outcome);
}
