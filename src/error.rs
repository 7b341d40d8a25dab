//! Error types for the noughts crate

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Why `place_mark` refused a position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveRejection {
    /// The position is outside 1..=9
    OutOfRange,
    /// The cell already holds a mark
    Occupied,
}

impl fmt::Display for MoveRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveRejection::OutOfRange => write!(f, "must be between 1 and 9"),
            MoveRejection::Occupied => write!(f, "is already occupied"),
        }
    }
}

/// Main error type for the noughts crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("invalid move: position {position} {reason}")]
    InvalidMove {
        position: usize,
        reason: MoveRejection,
    },

    #[error("game already over")]
    GameOver,

    #[error("input closed before a move was entered")]
    InputClosed,

    #[error("board string has {got} cells, expected {expected} in '{context}'")]
    InvalidBoardLength {
        expected: usize,
        got: usize,
        context: String,
    },

    #[error("invalid character '{character}' at cell {position} in '{context}'")]
    InvalidCellCharacter {
        character: char,
        position: usize,
        context: String,
    },

    #[error("invalid piece counts: X={x_count}, O={o_count} (must differ by at most 1)")]
    InvalidPieceCounts { x_count: usize, o_count: usize },

    #[error("invalid game mode '{input}'. Expected one of: 2player, computer")]
    ParseGameMode { input: String },

    #[error("invalid first mover '{input}'. Expected one of: human, computer, random")]
    ParseFirstMove { input: String },

    #[error("invalid scoring '{input}'. Expected one of: flat, depth-adjusted")]
    ParseScoring { input: String },

    #[error("invalid player '{input}' (expected 'X' or 'O')")]
    ParsePlayer { input: String },

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    /// True for errors the session recovers from by asking for another move
    pub fn is_invalid_move(&self) -> bool {
        matches!(self, Error::InvalidMove { .. })
    }

    pub(crate) fn io(operation: &str, source: std::io::Error) -> Self {
        Error::Io {
            operation: operation.to_string(),
            source,
        }
    }
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;
