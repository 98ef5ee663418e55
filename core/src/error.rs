//! Error types for the core.
//!
//! Only malformed input from the caller is an error. Running out of moves
//! and off-board squares during generation are ordinary outcomes.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChessError {
    /// Square notation that is not `[a-h][1-8]`
    #[error("invalid square: {0:?}")]
    InvalidSquare(String),

    /// Move token that is not `[a-h][1-8][a-h][1-8]`
    #[error("invalid move: {0:?}")]
    InvalidMove(String),

    /// Unknown letter in a board layout
    #[error("invalid piece character: {0:?}")]
    InvalidPiece(char),

    /// Board layout with the wrong number of rows or columns
    #[error("invalid board layout: {0}")]
    InvalidLayout(String),
}

pub type Result<T> = std::result::Result<T, ChessError>;
