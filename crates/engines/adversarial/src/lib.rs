//! Adversarial Search Agents
//!
//! Minimax and alpha-beta players for isolation, scored by pluggable
//! static evaluation functions and bounded by a wall-clock budget.

mod alphabeta;
mod config;
mod context;
pub mod eval;
mod iterative;
mod minimax;

#[cfg(test)]
mod test_tree;

use std::time::Duration;

use isolation_core::{Board, Clock, Engine, Move, SearchResult, SearchTimeout};
use tracing::debug;

pub use alphabeta::alphabeta;
pub use config::{Heuristic, SearchConfig, UnknownHeuristic, DEFAULT_DEPTH, DEFAULT_TIMEOUT_MS};
pub use context::{ScoreFn, SearchContext};
pub use iterative::{iterative_deepening, Deepening};
pub use minimax::minimax;

/// Fixed-depth minimax player.
///
/// If the clock runs out before the search completes the player returns
/// `Move::NONE`; there is no partial result to fall back on.
#[derive(Debug, Clone)]
pub struct MinimaxPlayer {
    name: String,
    search_depth: u32,
    score: ScoreFn<Board>,
    threshold: Duration,
}

impl MinimaxPlayer {
    pub fn new(search_depth: u32, score: ScoreFn<Board>, threshold: Duration) -> Self {
        Self {
            name: "Minimax".to_string(),
            search_depth,
            score,
            threshold,
        }
    }

    pub fn from_config(config: &SearchConfig) -> Self {
        Self::new(config.depth, config.heuristic.score_fn(), config.threshold())
            .with_name(format!("MM_{}", config.heuristic))
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }
}

impl Default for MinimaxPlayer {
    fn default() -> Self {
        Self::from_config(&SearchConfig::default())
    }
}

impl Engine for MinimaxPlayer {
    fn choose_move(&mut self, board: &Board, clock: &dyn Clock) -> SearchResult {
        let mut ctx = SearchContext::new(board, self.score, clock, self.threshold);

        match minimax(&mut ctx, board, self.search_depth) {
            Ok(best_move) => SearchResult {
                best_move,
                depth: self.search_depth,
                nodes: ctx.nodes(),
                stopped: false,
            },
            Err(SearchTimeout) => {
                debug!(player = %self.name, nodes = ctx.nodes(), "minimax timed out");
                SearchResult {
                    best_move: Move::NONE,
                    depth: 0,
                    nodes: ctx.nodes(),
                    stopped: true,
                }
            }
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Iterative-deepening alpha-beta player.
///
/// Deepens until the clock drops below the threshold (or `max_depth`
/// completes) and plays the move from the deepest finished search.
#[derive(Debug, Clone)]
pub struct AlphaBetaPlayer {
    name: String,
    score: ScoreFn<Board>,
    threshold: Duration,
    max_depth: Option<u32>,
}

impl AlphaBetaPlayer {
    pub fn new(score: ScoreFn<Board>, threshold: Duration) -> Self {
        Self {
            name: "AlphaBeta".to_string(),
            score,
            threshold,
            max_depth: None,
        }
    }

    pub fn from_config(config: &SearchConfig) -> Self {
        Self::new(config.heuristic.score_fn(), config.threshold())
            .with_max_depth(config.max_depth)
            .with_name(format!("AB_{}", config.heuristic))
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_max_depth(mut self, max_depth: Option<u32>) -> Self {
        self.max_depth = max_depth;
        self
    }
}

impl Default for AlphaBetaPlayer {
    fn default() -> Self {
        Self::from_config(&SearchConfig::default())
    }
}

impl Engine for AlphaBetaPlayer {
    fn choose_move(&mut self, board: &Board, clock: &dyn Clock) -> SearchResult {
        let mut ctx = SearchContext::new(board, self.score, clock, self.threshold);
        let outcome = iterative_deepening(&mut ctx, board, self.max_depth);

        SearchResult {
            best_move: outcome.best_move,
            depth: outcome.depth,
            nodes: ctx.nodes(),
            stopped: outcome.stopped,
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}
