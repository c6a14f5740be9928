//! Predictor configuration and validation of user-supplied parameters.

use std::str::FromStr;
use crate::error::ConfigError;

/// Largest supported PHT address width. A table of 2^28 counters is already
/// a gigabyte of state.
pub const MAX_INDEX_BITS: u32 = 28;

/// The kind of predictor to simulate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PredictorKind {
    Gshare,
}
impl FromStr for PredictorKind {
    type Err = ConfigError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "gshare" => Ok(Self::Gshare),
            _ => Err(ConfigError::UnsupportedKind(s.to_string())),
        }
    }
}

/// Parameters for a [crate::GsharePredictor].
///
/// Only constructible through [PredictorConfig::new], so holding one means
/// `1 <= index_bits <= MAX_INDEX_BITS` and `history_bits <= index_bits`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PredictorConfig {
    /// Width of a PHT index in bits (M).
    index_bits: u32,

    /// Length of global history in bits (N).
    history_bits: u32,
}
impl PredictorConfig {
    pub fn new(index_bits: i64, history_bits: i64) -> Result<Self, ConfigError> {
        if index_bits <= 0 {
            return Err(ConfigError::NonPositiveIndexBits);
        }
        if history_bits < 0 {
            return Err(ConfigError::NegativeHistoryBits);
        }
        if history_bits > index_bits {
            return Err(ConfigError::HistoryTooLong { index_bits, history_bits });
        }
        if index_bits > MAX_INDEX_BITS as i64 {
            return Err(ConfigError::IndexBitsTooLarge {
                index_bits, max: MAX_INDEX_BITS
            });
        }
        Ok(Self {
            index_bits: index_bits as u32,
            history_bits: history_bits as u32,
        })
    }

    /// Build a configuration from the textual `M` and `N` arguments.
    pub fn parse(index_bits: &str, history_bits: &str)
        -> Result<Self, ConfigError>
    {
        let m = index_bits.trim().parse::<i64>()
            .map_err(|_| ConfigError::NotAnInteger)?;
        let n = history_bits.trim().parse::<i64>()
            .map_err(|_| ConfigError::NotAnInteger)?;
        Self::new(m, n)
    }

    pub fn index_bits(&self) -> u32 { self.index_bits }
    pub fn history_bits(&self) -> u32 { self.history_bits }

    /// Number of entries in the pattern history table.
    pub fn pht_size(&self) -> usize { 1 << self.index_bits }

    /// Mask selecting the low `index_bits` of a value.
    pub fn index_mask(&self) -> usize { self.pht_size() - 1 }

    /// Distance that global history is shifted before it is folded into an
    /// index, placing it in the top bits of the index.
    pub fn history_shift(&self) -> u32 { self.index_bits - self.history_bits }
}
