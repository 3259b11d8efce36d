//! Error types for the matchbox crate

use thiserror::Error;

/// Main error type for the matchbox crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("invalid move: position {position} is not an empty cell in 0-8")]
    InvalidMoveInput { position: usize },

    #[error("no legal move: total weight {total} is not positive")]
    NoLegalMove { total: i32 },

    #[error("board string has {got} cells, expected 9")]
    InvalidBoardLength { got: usize },

    #[error("invalid character '{character}' at position {position} in board string")]
    InvalidCellCharacter { character: char, position: usize },

    #[error("square {square} is out of bounds (must be 0-63)")]
    InvalidSquare { square: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;
