
pub mod config;
pub mod error;
pub mod history;
pub mod predictor;
pub mod sim;
pub mod stats;
pub mod trace;

pub use config::*;
pub use error::*;
pub use history::*;
pub use predictor::*;
pub use sim::*;
pub use trace::*;

/// A branch outcome.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// Not taken
    N,
    /// Taken
    T,
}
impl std::ops::Not for Outcome {
    type Output = Self;
    fn not(self) -> Self {
        match self {
            Self::N => Self::T,
            Self::T => Self::N,
        }
    }
}
impl From<bool> for Outcome {
    fn from(x: bool) -> Self {
        match x {
            true => Self::T,
            false => Self::N
        }
    }
}
impl From<Outcome> for bool {
    fn from(x: Outcome) -> Self {
        match x {
            Outcome::T => true,
            Outcome::N => false,
        }
    }
}
impl Outcome {
    /// Parse a trace token (`t` or `n`, in either case).
    pub fn from_token(s: &str) -> Option<Self> {
        if s.eq_ignore_ascii_case("t") {
            Some(Self::T)
        } else if s.eq_ignore_ascii_case("n") {
            Some(Self::N)
        } else {
            None
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::T => write!(f, "t"),
            Self::N => write!(f, "n"),
        }
    }
}
