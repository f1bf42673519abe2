//! Error types for roster extraction.

use thiserror::Error;

/// Primary error type for roster extraction operations.
///
/// Every variant is fatal for the screenshot being processed: a partially
/// wrong roster entry is worse than a visible failure, so no stage falls
/// back to a default or empty value.
#[derive(Error, Debug)]
pub enum RosterError {
    #[error("no anchor fragment matching {0:?} found")]
    NoAnchorFound(String),

    #[error("row {row}: fragments cluster into {found} subrows, expected at least 3")]
    InsufficientSubrows { row: usize, found: usize },

    #[error("row {row}: rank line has {found} tokens, expected 2")]
    MalformedRankLine { row: usize, found: usize },

    #[error("row {row}: power group holds {found} fragments after merging, expected 1")]
    MalformedPowerLine { row: usize, found: usize },

    #[error("row {row}: no fragments for the {field} field")]
    EmptyGroup { row: usize, field: &'static str },

    #[error("malformed annotation: {0}")]
    Annotation(String),
}

/// Convenience Result type alias for RosterError.
pub type Result<T> = std::result::Result<T, RosterError>;
