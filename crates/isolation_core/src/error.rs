//! Error types shared by the board and the search engines.

use thiserror::Error;

/// Raised when the clock drops below the search threshold.
///
/// Recursive search helpers propagate this with `?`; only the top-level
/// move selection converts it into "best move known so far".
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("search timed out")]
pub struct SearchTimeout;

/// Errors produced while building a board from a text diagram.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum BoardError {
    #[error("board diagram is empty")]
    Empty,

    #[error("row {row} has {got} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        got: usize,
    },

    #[error("invalid character '{character}' at row {row}, column {col}")]
    InvalidCell { character: char, row: usize, col: usize },

    #[error("{player} appears more than once in the diagram")]
    DuplicatePlayer { player: crate::Player },

    #[error("board dimensions {width}x{height} are not supported")]
    InvalidDimensions { width: i32, height: i32 },
}
