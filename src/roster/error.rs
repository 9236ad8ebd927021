//! Roster decoding error types.

use thiserror::Error;

/// Errors that can occur while decoding a roster
#[derive(Debug, Error, PartialEq)]
pub enum RosterError {
    /// Input is not valid JSON
    #[error("Roster parse failed: {0}")]
    Parse(String),

    /// Top-level value is not a JSON array
    #[error("Roster must be a JSON array of player entries")]
    NotAnArray,

    /// An entry is missing a field or holds a value of the wrong shape
    #[error("Invalid roster entry at index {index}: {reason}")]
    InvalidEntry { index: usize, reason: String },
}
