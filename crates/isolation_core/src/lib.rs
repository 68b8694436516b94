pub mod board;
pub mod error;
pub mod game_state;
pub mod perft;
pub mod time_control;
pub mod types;

// Re-export core game logic (not engine-specific)
pub use board::*;
pub use error::*;
pub use game_state::GameState;
pub use perft::perft;
pub use time_control::*;
pub use types::*;

// =============================================================================
// Engine trait, implemented by every isolation agent
// =============================================================================

/// Result of a move search
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchResult {
    /// The move to play (`Move::NONE` if none is available or found in time)
    pub best_move: Move,
    /// Deepest search depth that completed
    pub depth: u32,
    /// Number of nodes visited
    pub nodes: u64,
    /// Whether the clock cut the search short
    pub stopped: bool,
}

impl SearchResult {
    /// A result carrying only the sentinel move.
    pub fn none() -> Self {
        Self {
            best_move: Move::NONE,
            depth: 0,
            nodes: 0,
            stopped: false,
        }
    }
}

/// Trait that all isolation agents must implement.
///
/// The tournament only sees agents through this trait, so fixed-depth,
/// iterative-deepening and baseline players are interchangeable.
pub trait Engine: Send {
    /// Choose a move for the side to act on `board`.
    ///
    /// # Arguments
    /// * `board` - The current game state
    /// * `clock` - Remaining time for this move, polled during search
    ///
    /// # Returns
    /// SearchResult whose `best_move` is the chosen move, or `Move::NONE`
    fn choose_move(&mut self, board: &Board, clock: &dyn Clock) -> SearchResult;

    /// Returns the agent's display name
    fn name(&self) -> &str;

    /// Reset internal state for a new game
    fn new_game(&mut self) {}
}
