use std::time::Duration;

use isolation_core::{Clock, GameState, Player, Score, SearchTimeout};

/// Static evaluation: scores a state from a fixed player's perspective.
pub type ScoreFn<G> = fn(&G, Player) -> Score;

/// Per-search bookkeeping shared by minimax, alpha-beta and the
/// iterative-deepening driver.
///
/// Evaluation is always from the perspective of the player who was to act
/// at the root, which is why the engines alternate min and max layers
/// instead of negating scores.
pub struct SearchContext<'a, G, C: ?Sized> {
    root_player: Player,
    score: ScoreFn<G>,
    clock: &'a C,
    threshold: Duration,
    nodes: u64,
    /// Set when some node was scored at depth zero while it still had moves
    hit_horizon: bool,
}

impl<'a, G: GameState, C: Clock + ?Sized> SearchContext<'a, G, C> {
    pub fn new(root: &G, score: ScoreFn<G>, clock: &'a C, threshold: Duration) -> Self {
        Self {
            root_player: root.active_player(),
            score,
            clock,
            threshold,
            nodes: 0,
            hit_horizon: false,
        }
    }

    pub fn root_player(&self) -> Player {
        self.root_player
    }

    /// Nodes expanded or evaluated so far.
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Fails once the clock drops below the threshold.
    #[inline]
    pub fn check_time(&self) -> Result<(), SearchTimeout> {
        if self.clock.time_left() < self.threshold {
            Err(SearchTimeout)
        } else {
            Ok(())
        }
    }

    /// Entry bookkeeping for every min/max node: clock first, then count.
    #[inline]
    pub(crate) fn enter(&mut self) -> Result<(), SearchTimeout> {
        self.check_time()?;
        self.nodes += 1;
        Ok(())
    }

    /// Scores a leaf from the root player's perspective.
    #[inline]
    pub(crate) fn evaluate(&mut self, state: &G, has_moves: bool) -> Score {
        if has_moves {
            self.hit_horizon = true;
        }
        (self.score)(state, self.root_player)
    }

    pub(crate) fn reset_horizon(&mut self) {
        self.hit_horizon = false;
    }

    /// Whether the last search was cut off by its depth limit anywhere.
    /// If not, every explored line ended in a terminal state.
    pub(crate) fn hit_horizon(&self) -> bool {
        self.hit_horizon
    }
}
