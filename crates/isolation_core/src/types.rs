use std::fmt;

use serde::{Deserialize, Serialize};

/// Evaluated desirability of a state for a fixed player.
///
/// Terminal losses are `f64::NEG_INFINITY`, terminal wins `f64::INFINITY`.
pub type Score = f64;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    One,
    Two,
}
impl Player {
    pub fn other(self) -> Player {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }
    pub fn idx(self) -> usize {
        match self {
            Player::One => 0,
            Player::Two => 1,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::One => write!(f, "player 1"),
            Player::Two => write!(f, "player 2"),
        }
    }
}

/// A board cell, used both as a move destination and as a location.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Move {
    pub row: i32,
    pub col: i32,
}

impl Move {
    /// Sentinel meaning "no legal move available".
    pub const NONE: Move = Move { row: -1, col: -1 };

    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    pub fn is_none(self) -> bool {
        self == Move::NONE
    }

    /// The cell reached by adding a (row, col) offset.
    #[inline]
    pub fn offset(self, (dr, dc): (i32, i32)) -> Move {
        Move::new(self.row + dr, self.col + dc)
    }
}

impl Default for Move {
    fn default() -> Self {
        Move::NONE
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Knight offsets in legal-move enumeration order.
///
/// Search tie-breaking depends on this order; do not reorder.
pub const KNIGHT_OFFSETS: [(i32, i32); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];
