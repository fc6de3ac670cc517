// error.rs - Error types for the automaton core

use thiserror::Error;

/// Errors raised while building or advancing a field.
#[derive(Debug, Error)]
pub enum Error {
    /// Width or height of zero, or more cells than fit in memory.
    #[error("invalid grid dimensions {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },

    /// Explicit rows do not all have the same length.
    #[error("row {row} has {len} cells, expected {expected}")]
    RaggedRows {
        row: usize,
        len: usize,
        expected: usize,
    },

    /// A row task of the concurrent engine did not complete.
    #[error("row task failed: {0}")]
    RowTask(#[from] tokio::task::JoinError),
}

/// Failure to parse a hexadecimal rule string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuleParseError {
    #[error("rule string is empty")]
    Empty,

    #[error("invalid hex digit {0:?} in rule")]
    InvalidDigit(char),

    #[error("rule {0:?} does not fit in 32 bits")]
    Overflow(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
