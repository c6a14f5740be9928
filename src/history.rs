
use bitvec::prelude::*;
use crate::Outcome;

/// A global branch history register.
///
/// The newest outcome is always written into the most-significant bit
/// (index `len - 1`) and older outcomes drift toward bit 0 before they fall
/// off the end. A zero-length register is allowed and always reads as zero.
#[derive(Clone, Debug)]
pub struct HistoryRegister {
    data: BitVec<usize, Lsb0>,
}

// NOTE: This *reverses* the all of the bits and presents them in a format
// where the leftmost bit is the most-significant (index n) and the rightmost
// bit is the least-significant (index 0).
impl std::fmt::Display for HistoryRegister {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let x: String = self.data.as_bitslice().iter().by_vals()
            .map(|b| if b { '1' } else { '0' })
            .rev()
            .collect();
        write!(f, "{}", x)
    }
}

impl HistoryRegister {
    /// Create a register with the specified length in bits.
    /// All bits in the register are initialized to zero.
    pub fn new(len: usize) -> Self {
        assert!(len <= usize::BITS as usize);
        Self {
            data: bitvec![usize, Lsb0; 0; len],
        }
    }

    pub fn len(&self) -> usize { self.data.len() }
    pub fn is_empty(&self) -> bool { self.data.is_empty() }

    /// Return the register contents as an unsigned integer.
    pub fn value(&self) -> usize {
        if self.data.is_empty() { 0 } else { self.data.load::<usize>() }
    }

    /// Record an outcome.
    ///
    /// Every bit moves one position toward bit 0 (the oldest outcome is
    /// discarded) and the new outcome lands in the top bit.
    pub fn push(&mut self, outcome: Outcome) {
        let Some(top) = self.data.len().checked_sub(1) else {
            return;
        };
        self.data.shift_left(1);
        self.data.set(top, outcome.into());
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn starts_cleared() {
        let ghr = HistoryRegister::new(8);
        assert_eq!(ghr.len(), 8);
        assert_eq!(ghr.value(), 0);
        assert_eq!(ghr.to_string(), "00000000");
    }

    #[test]
    fn push_enters_at_msb() {
        let mut ghr = HistoryRegister::new(3);
        ghr.push(Outcome::T);
        assert_eq!(ghr.value(), 0b100);
        ghr.push(Outcome::N);
        assert_eq!(ghr.value(), 0b010);
        ghr.push(Outcome::T);
        assert_eq!(ghr.value(), 0b101);
        assert_eq!(ghr.to_string(), "101");

        // The oldest outcome falls off the bottom.
        ghr.push(Outcome::T);
        assert_eq!(ghr.value(), 0b110);
        ghr.push(Outcome::N);
        ghr.push(Outcome::N);
        ghr.push(Outcome::N);
        assert_eq!(ghr.value(), 0);
    }

    #[test]
    fn single_bit() {
        let mut ghr = HistoryRegister::new(1);
        ghr.push(Outcome::T);
        assert_eq!(ghr.value(), 1);
        ghr.push(Outcome::T);
        assert_eq!(ghr.value(), 1);
        ghr.push(Outcome::N);
        assert_eq!(ghr.value(), 0);
    }

    #[test]
    fn empty_register_stays_zero() {
        let mut ghr = HistoryRegister::new(0);
        assert!(ghr.is_empty());
        for _ in 0..4 {
            ghr.push(Outcome::T);
        }
        assert_eq!(ghr.value(), 0);
        assert_eq!(ghr.to_string(), "");
    }

    #[test]
    fn matches_integer_model() {
        // Shift right, then OR the outcome into bit (len - 1).
        let len = 5;
        let mut ghr = HistoryRegister::new(len);
        let mut model = 0usize;
        let pattern = [true, true, false, true, false, false, true, true, true];
        for &taken in pattern.iter().cycle().take(40) {
            ghr.push(taken.into());
            model >>= 1;
            if taken { model |= 1 << (len - 1); }
            assert_eq!(ghr.value(), model);
        }
    }
}
