//! Depth-limited minimax without pruning.

use isolation_core::{Clock, GameState, Move, Score, SearchTimeout};

use crate::context::SearchContext;

/// Searches `game` to `depth` plies and returns the best move for the side
/// to act.
///
/// Ties go to the first move in enumeration order. If every move scores
/// -inf the first legal move is returned, so a legal move always comes
/// back when one exists. Returns `Move::NONE` when there are no legal
/// moves. A depth of 0 is treated as 1.
pub fn minimax<G, C>(
    ctx: &mut SearchContext<'_, G, C>,
    game: &G,
    depth: u32,
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
        let score = min_value(ctx, &game.forecast_move(mv), depth.saturating_sub(1))?;
        if score > best_score {
            best_score = score;
            best_move = mv;
        }
    }
    Ok(best_move)
}

fn min_value<G, C>(
    ctx: &mut SearchContext<'_, G, C>,
    game: &G,
    depth: u32,
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
        v = v.min(max_value(ctx, &game.forecast_move(mv), depth - 1)?);
    }
    Ok(v)
}

fn max_value<G, C>(
    ctx: &mut SearchContext<'_, G, C>,
    game: &G,
    depth: u32,
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
        v = v.max(min_value(ctx, &game.forecast_move(mv), depth - 1)?);
    }
    Ok(v)
}

#[cfg(test)]
#[path = "minimax_tests.rs"]
mod minimax_tests;
