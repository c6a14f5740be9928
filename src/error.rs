//! Error types for configuration, trace reading and simulation.
//!
//! Configuration and file-level errors end a run. A [LineError] only
//! causes the offending trace line to be skipped.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failure to build a predictor configuration from user input.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Unsupported mode '{0}'. Only 'gshare' is available.")]
    UnsupportedKind(String),

    #[error("M and N must be integers")]
    NotAnInteger,

    #[error("M must be positive")]
    NonPositiveIndexBits,

    #[error("N cannot be negative")]
    NegativeHistoryBits,

    #[error("N ({history_bits}) cannot be greater than M ({index_bits})")]
    HistoryTooLong { index_bits: i64, history_bits: i64 },

    #[error("M ({index_bits}) cannot be greater than {max}")]
    IndexBitsTooLarge { index_bits: i64, max: u32 },
}

/// A malformed trace line.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LineError {
    #[error("expected an address and an outcome")]
    TooFewFields,

    #[error("invalid hexadecimal address '{0}'")]
    BadAddress(String),

    #[error("invalid outcome '{0}'")]
    BadOutcome(String),
}

/// Failure to open or read a trace file.
#[derive(Debug, Error)]
pub enum TraceError {
    #[error("Trace file '{}' not found", .path.display())]
    NotFound { path: PathBuf },

    #[error("No permission to read '{}'", .path.display())]
    PermissionDenied { path: PathBuf },

    #[error("Error reading trace file '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
impl TraceError {
    /// Classify an I/O error raised while accessing `path`.
    pub fn from_io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        let path = path.into();
        match source.kind() {
            io::ErrorKind::NotFound => Self::NotFound { path },
            io::ErrorKind::PermissionDenied => Self::PermissionDenied { path },
            _ => Self::Io { path, source },
        }
    }
}

/// Any error that ends a simulation run.
#[derive(Debug, Error)]
pub enum SimError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Trace(#[from] TraceError),
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn io_errors_are_classified() {
        let e = TraceError::from_io("a.txt", io::Error::from(io::ErrorKind::NotFound));
        assert!(matches!(e, TraceError::NotFound { .. }));
        assert_eq!(e.to_string(), "Trace file 'a.txt' not found");

        let e = TraceError::from_io("a.txt",
            io::Error::from(io::ErrorKind::PermissionDenied));
        assert_eq!(e.to_string(), "No permission to read 'a.txt'");

        let e = TraceError::from_io("a.txt",
            io::Error::new(io::ErrorKind::InvalidData, "bad utf-8"));
        assert!(matches!(e, TraceError::Io { .. }));
    }

    #[test]
    fn config_messages() {
        let e = ConfigError::HistoryTooLong { index_bits: 2, history_bits: 3 };
        assert_eq!(e.to_string(), "N (3) cannot be greater than M (2)");
        let e: SimError = ConfigError::NonPositiveIndexBits.into();
        assert_eq!(e.to_string(), "M must be positive");
    }
}
