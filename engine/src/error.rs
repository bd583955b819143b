//! Error types for the series engine

use thiserror::Error;

/// Errors raised while enumerating or inspecting a series tree
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    #[error("invalid parameter: wins needed must be positive, got {wins_needed}")]
    InvalidParameter { wins_needed: i64 },

    #[error("wins needed {wins_needed} exceeds the supported maximum of {max}")]
    TooLarge { wins_needed: i64, max: u32 },

    #[error("invalid symbol '{symbol}' at position {position} (expected 'A' or 'B')")]
    InvalidSymbol { symbol: char, position: usize },

    #[error("series of {length} games: expected {expected} outcomes, enumerated {actual}")]
    CountMismatch {
        length: u32,
        expected: u64,
        actual: u64,
    },
}

/// Result alias for engine operations
pub type Result<T> = std::result::Result<T, Error>;
