//! Reading branch traces from text files.
//!
//! Each line of a trace holds a hexadecimal branch address and an outcome
//! (`t` or `n`), separated by whitespace. Any further fields are ignored:
//!
//! ```text
//! 3c4a8 t
//! 0x3c4b0 N
//! ```

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use itertools::Itertools;

use crate::Outcome;
use crate::error::{LineError, TraceError};

/// A single branch from a trace.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct TraceRecord {
    /// The program counter value for this branch
    pub pc: u64,

    /// The outcome evaluated for this branch
    pub outcome: Outcome,
}

impl FromStr for TraceRecord {
    type Err = LineError;
    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let (addr, outcome) = line.split_whitespace().next_tuple()
            .ok_or(LineError::TooFewFields)?;
        let pc = parse_address(addr)?;
        let outcome = Outcome::from_token(outcome)
            .ok_or_else(|| LineError::BadOutcome(outcome.to_string()))?;
        Ok(Self { pc, outcome })
    }
}

/// Parse a hexadecimal branch address.
///
/// Accepts an optional sign, then an optional `0x` prefix, then hex digits
/// which may be grouped with single underscores (`+0x3c_4a8`). Any width is
/// accepted; only the low 64 bits are kept, and negative values wrap to
/// their two's complement. Only the low bits ever reach a predictor index.
pub fn parse_address(s: &str) -> Result<u64, LineError> {
    let bad = || LineError::BadAddress(s.to_string());

    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let digits = match rest.strip_prefix("0x").or_else(|| rest.strip_prefix("0X")) {
        Some(d) => d.strip_prefix('_').unwrap_or(d),
        None => rest,
    };

    let mut hex = String::with_capacity(digits.len());
    for group in digits.split('_') {
        if group.is_empty() || !group.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(bad());
        }
        hex.push_str(group);
    }

    let low = &hex[hex.len().saturating_sub(16)..];
    let value = u64::from_str_radix(low, 16).map_err(|_| bad())?;
    Ok(if negative { value.wrapping_neg() } else { value })
}

/// An iterator over the valid records in a text trace.
///
/// Malformed lines are logged and skipped. Blank lines are skipped
/// silently. An I/O error is yielded once and ends iteration.
pub struct TraceReader<R: BufRead> {
    inner: R,
    path: PathBuf,
    buf: String,

    /// Number of lines read so far
    lines: usize,

    /// Number of non-blank lines which were skipped
    skipped: usize,

    done: bool,
}

impl TraceReader<BufReader<File>> {
    /// Open a trace file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, TraceError> {
        let path = path.as_ref();
        let f = File::open(path)
            .map_err(|e| TraceError::from_io(path, e))?;
        Ok(Self::new(BufReader::new(f), path))
    }
}

impl<R: BufRead> TraceReader<R> {
    /// Read a trace from some reader. `path` is only used in messages.
    pub fn new(inner: R, path: impl Into<PathBuf>) -> Self {
        Self {
            inner,
            path: path.into(),
            buf: String::new(),
            lines: 0,
            skipped: 0,
            done: false,
        }
    }

    pub fn path(&self) -> &Path { &self.path }

    /// Return the number of lines read so far.
    pub fn lines(&self) -> usize { self.lines }

    /// Return the number of invalid lines skipped so far.
    pub fn skipped(&self) -> usize { self.skipped }
}

impl<R: BufRead> Iterator for TraceReader<R> {
    type Item = Result<TraceRecord, TraceError>;
    fn next(&mut self) -> Option<Self::Item> {
        while !self.done {
            self.buf.clear();
            match self.inner.read_line(&mut self.buf) {
                Ok(0) => self.done = true,
                Ok(_) => {
                    self.lines += 1;
                    let line = self.buf.trim();
                    if line.is_empty() {
                        continue;
                    }
                    match line.parse::<TraceRecord>() {
                        Ok(record) => return Some(Ok(record)),
                        Err(e) => {
                            self.skipped += 1;
                            tracing::warn!("Skipping invalid line {}: {} ({})",
                                self.lines, line, e);
                        },
                    }
                },
                Err(e) => {
                    self.done = true;
                    return Some(Err(TraceError::from_io(&self.path, e)));
                },
            }
        }
        None
    }
}
