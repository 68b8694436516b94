//! Iterative deepening around alpha-beta.
//!
//! Searches depth 1, 2, 3, ... until the clock runs out and returns the
//! move from the deepest search that finished. A depth interrupted by the
//! timeout is discarded; its partial result is never used.

use isolation_core::{Clock, GameState, Move, SearchTimeout};
use tracing::{debug, trace};

use crate::alphabeta::alphabeta;
use crate::context::SearchContext;

/// Outcome of an iterative-deepening run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deepening {
    /// Move from the deepest completed depth (`Move::NONE` if none completed)
    pub best_move: Move,
    /// Deepest depth that completed (0 if none)
    pub depth: u32,
    /// True if the clock stopped the search
    pub stopped: bool,
}

/// Runs alpha-beta at increasing depth until the timeout fires.
///
/// `max_depth` optionally ends the loop once that depth completes. The loop
/// also ends early once a depth completes without any line being cut off
/// by the depth limit, since deeper searches would revisit the same fully
/// resolved tree.
pub fn iterative_deepening<G, C>(
    ctx: &mut SearchContext<'_, G, C>,
    game: &G,
    max_depth: Option<u32>,
) -> Deepening
where
    G: GameState,
    C: Clock + ?Sized,
{
    let mut result = Deepening {
        best_move: Move::NONE,
        depth: 0,
        stopped: false,
    };

    if game.legal_moves().is_empty() {
        return result;
    }

    let mut depth = 1;
    loop {
        ctx.reset_horizon();
        match alphabeta(ctx, game, depth, f64::NEG_INFINITY, f64::INFINITY) {
            Ok(mv) => {
                if !mv.is_none() {
                    result.best_move = mv;
                }
                result.depth = depth;
                debug!(depth, best_move = %mv, nodes = ctx.nodes(), "depth complete");

                if max_depth.is_some_and(|max| depth >= max) {
                    break;
                }
                if !ctx.hit_horizon() {
                    trace!(depth, "game tree exhausted");
                    break;
                }
                depth += 1;
            }
            Err(SearchTimeout) => {
                debug!(
                    depth,
                    completed = result.depth,
                    nodes = ctx.nodes(),
                    "search timed out"
                );
                result.stopped = true;
                break;
            }
        }
    }

    result
}

#[cfg(test)]
#[path = "iterative_tests.rs"]
mod iterative_tests;
