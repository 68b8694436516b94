use std::fmt;

use crate::error::BoardError;
use crate::game_state::GameState;
use crate::types::*;

pub const DEFAULT_WIDTH: i32 = 7;
pub const DEFAULT_HEIGHT: i32 = 7;
const MAX_DIMENSION: i32 = 64;

/// Isolation board snapshot.
///
/// Every cell a player has moved to stays blocked for the rest of the game.
/// Cloning is cheap enough for search: one `Vec<bool>` of `width * height`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    width: i32,
    height: i32,
    blocked: Vec<bool>,
    locations: [Option<Move>; 2],
    active: Player,
    ply: u32,
}

impl Board {
    /// Creates an empty board with player one to move.
    pub fn new(width: i32, height: i32) -> Result<Self, BoardError> {
        if !(1..=MAX_DIMENSION).contains(&width) || !(1..=MAX_DIMENSION).contains(&height) {
            return Err(BoardError::InvalidDimensions { width, height });
        }
        Ok(Board {
            width,
            height,
            blocked: vec![false; (width * height) as usize],
            locations: [None, None],
            active: Player::One,
            ply: 0,
        })
    }

    /// Parses a text diagram, one board row per line.
    ///
    /// `.` is a blank cell, `#` a blocked cell, `1` and `2` the player
    /// locations. Whitespace inside a row is ignored so diagrams can be
    /// spaced out for readability. The ply counter is set to the number of
    /// occupied cells.
    pub fn from_diagram(diagram: &str, active: Player) -> Result<Self, BoardError> {
        let rows: Vec<Vec<char>> = diagram
            .lines()
            .map(|line| line.chars().filter(|c| !c.is_whitespace()).collect::<Vec<_>>())
            .filter(|row| !row.is_empty())
            .collect();
        let width = rows.first().map(Vec::len).ok_or(BoardError::Empty)?;

        let mut board = Board::new(width as i32, rows.len() as i32)?;
        board.active = active;

        for (r, row) in rows.iter().enumerate() {
            if row.len() != width {
                return Err(BoardError::RaggedRow {
                    row: r,
                    expected: width,
                    got: row.len(),
                });
            }
            for (c, &ch) in row.iter().enumerate() {
                let cell = Move::new(r as i32, c as i32);
                let player = match ch {
                    '.' => continue,
                    '#' => None,
                    '1' => Some(Player::One),
                    '2' => Some(Player::Two),
                    _ => {
                        return Err(BoardError::InvalidCell {
                            character: ch,
                            row: r,
                            col: c,
                        });
                    }
                };
                if let Some(p) = player {
                    if board.locations[p.idx()].is_some() {
                        return Err(BoardError::DuplicatePlayer { player: p });
                    }
                    board.locations[p.idx()] = Some(cell);
                }
                let idx = board.index(cell);
                board.blocked[idx] = true;
                board.ply += 1;
            }
        }
        Ok(board)
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    /// Number of moves applied so far.
    pub fn ply(&self) -> u32 {
        self.ply
    }

    pub fn inactive_player(&self) -> Player {
        self.active.other()
    }

    /// Current cell of `player`, or `None` before its first move.
    pub fn location(&self, player: Player) -> Option<Move> {
        self.locations[player.idx()]
    }

    #[inline]
    pub fn in_bounds(&self, cell: Move) -> bool {
        (0..self.height).contains(&cell.row) && (0..self.width).contains(&cell.col)
    }

    #[inline]
    fn index(&self, cell: Move) -> usize {
        (cell.row * self.width + cell.col) as usize
    }

    pub fn is_blocked(&self, cell: Move) -> bool {
        self.in_bounds(cell) && self.blocked[self.index(cell)]
    }

    /// Every blank cell, column by column.
    pub fn blank_cells(&self) -> Vec<Move> {
        let mut out = Vec::with_capacity(self.blocked.len());
        for col in 0..self.width {
            for row in 0..self.height {
                let cell = Move::new(row, col);
                if !self.blocked[self.index(cell)] {
                    out.push(cell);
                }
            }
        }
        out
    }

    /// Legal knight destinations from `from`.
    pub fn knight_moves_from(&self, from: Move) -> Vec<Move> {
        KNIGHT_OFFSETS
            .iter()
            .map(|&d| from.offset(d))
            .filter(|&to| self.move_is_legal(to))
            .collect()
    }

    /// Applies `mv` for the active player in place.
    ///
    /// Callers are expected to pass a legal move; search uses
    /// [`GameState::forecast_move`] instead.
    ///
    /// # Panics
    ///
    /// Panics if `mv` is off the board (including `Move::NONE`).
    pub fn apply_move(&mut self, mv: Move) {
        assert!(self.in_bounds(mv), "move {mv} is off the board");
        let idx = self.index(mv);
        self.blocked[idx] = true;
        self.locations[self.active.idx()] = Some(mv);
        self.active = self.active.other();
        self.ply += 1;
    }

    /// +inf for the winner, -inf for the loser, 0 while the game continues.
    pub fn utility(&self, player: Player) -> Score {
        if self.is_winner(player) {
            f64::INFINITY
        } else if self.is_loser(player) {
            f64::NEG_INFINITY
        } else {
            0.0
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Board {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            blocked: vec![false; (DEFAULT_WIDTH * DEFAULT_HEIGHT) as usize],
            locations: [None, None],
            active: Player::One,
            ply: 0,
        }
    }
}

impl GameState for Board {
    fn active_player(&self) -> Player {
        self.active
    }

    fn legal_moves_for(&self, player: Player) -> Vec<Move> {
        match self.location(player) {
            None => self.blank_cells(),
            Some(from) => self.knight_moves_from(from),
        }
    }

    fn forecast_move(&self, mv: Move) -> Self {
        let mut next = self.clone();
        next.apply_move(mv);
        next
    }

    fn is_loser(&self, player: Player) -> bool {
        player == self.active && self.legal_moves_for(player).is_empty()
    }

    fn is_winner(&self, player: Player) -> bool {
        player == self.inactive_player() && self.legal_moves_for(self.active).is_empty()
    }

    #[inline]
    fn move_is_legal(&self, cell: Move) -> bool {
        self.in_bounds(cell) && !self.blocked[self.index(cell)]
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.height {
            for col in 0..self.width {
                let cell = Move::new(row, col);
                let ch = if self.location(Player::One) == Some(cell) {
                    '1'
                } else if self.location(Player::Two) == Some(cell) {
                    '2'
                } else if self.blocked[self.index(cell)] {
                    '#'
                } else {
                    '.'
                };
                write!(f, "{ch}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
