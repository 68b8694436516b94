//! Depth-limited minimax with alpha-beta pruning.
//!
//! Picks the same move as [`crate::minimax::minimax`] for the same state,
//! depth and evaluation function, while visiting no more nodes. The root
//! examines every move and keeps the first strictly better one, matching
//! minimax's tie-break; only interior nodes cut off.

use isolation_core::{Clock, GameState, Move, Score, SearchTimeout};

use crate::context::SearchContext;

/// Searches `game` to `depth` plies inside the window `(alpha, beta)`.
///
/// Call with `alpha = -inf, beta = +inf` for a full-window search. Alpha is
/// raised to the best root score after each move so later siblings prune
/// against it. Returns `Move::NONE` when there are no legal moves.
pub fn alphabeta<G, C>(
    ctx: &mut SearchContext<'_, G, C>,
    game: &G,
    depth: u32,
    mut alpha: Score,
    beta: Score,
) -> Result<Move, SearchTimeout>
where
    G: GameState,
    C: Clock + ?Sized,
{
    ctx.check_time()?;

    let legal_moves = game.legal_moves();
    let Some(&first) = legal_moves.first() else {
        return Ok(Move::NONE);
    };

    let mut best_move = first;
    let mut best_score = f64::NEG_INFINITY;
    for mv in legal_moves {
        let v = min_value(
            ctx,
            &game.forecast_move(mv),
            depth.saturating_sub(1),
            alpha,
            beta,
        )?;
        if v > best_score {
            best_score = v;
            best_move = mv;
        }
        alpha = alpha.max(best_score);
    }
    Ok(best_move)
}

fn min_value<G, C>(
    ctx: &mut SearchContext<'_, G, C>,
    game: &G,
    depth: u32,
    alpha: Score,
    mut beta: Score,
) -> Result<Score, SearchTimeout>
where
    G: GameState,
    C: Clock + ?Sized,
{
    ctx.enter()?;

    let moves = game.legal_moves();
    if depth == 0 || moves.is_empty() {
        return Ok(ctx.evaluate(game, !moves.is_empty()));
    }

    let mut v = f64::INFINITY;
    for mv in moves {
        v = v.min(max_value(ctx, &game.forecast_move(mv), depth - 1, alpha, beta)?);
        if v <= alpha {
            return Ok(v); // Fail low
        }
        beta = beta.min(v);
    }
    Ok(v)
}

fn max_value<G, C>(
    ctx: &mut SearchContext<'_, G, C>,
    game: &G,
    depth: u32,
    mut alpha: Score,
    beta: Score,
) -> Result<Score, SearchTimeout>
where
    G: GameState,
    C: Clock + ?Sized,
{
    ctx.enter()?;

    let moves = game.legal_moves();
    if depth == 0 || moves.is_empty() {
        return Ok(ctx.evaluate(game, !moves.is_empty()));
    }

    let mut v = f64::NEG_INFINITY;
    for mv in moves {
        v = v.max(min_value(ctx, &game.forecast_move(mv), depth - 1, alpha, beta)?);
        if v >= beta {
            return Ok(v); // Fail high
        }
        alpha = alpha.max(v);
    }
    Ok(v)
}

#[cfg(test)]
#[path = "alphabeta_tests.rs"]
mod alphabeta_tests;
