//! Random Move Isolation Agent
//!
//! Selects moves uniformly at random from all legal moves.
//! Useful for:
//! - Baseline comparisons (any searching agent should easily beat this)
//! - Exercising the tournament runner without search costs

use isolation_core::{Board, Clock, Engine, GameState, Move, SearchResult};
use rand::seq::SliceRandom;
use rand::thread_rng;

#[cfg(test)]
mod lib_tests;

/// An isolation agent that plays random legal moves.
///
/// It ignores the clock and never evaluates a position.
#[derive(Debug, Clone)]
pub struct RandomPlayer {
    name: String,
}

impl RandomPlayer {
    pub fn new() -> Self {
        Self {
            name: "Random".to_string(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }
}

impl Default for RandomPlayer {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for RandomPlayer {
    fn choose_move(&mut self, board: &Board, _clock: &dyn Clock) -> SearchResult {
        let moves = board.legal_moves();
        let best_move = moves.choose(&mut thread_rng()).copied().unwrap_or(Move::NONE);

        SearchResult {
            best_move,
            depth: 1,
            nodes: 1,
            stopped: false,
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}
