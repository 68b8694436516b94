//! Static evaluation functions.
//!
//! Every function scores `game` from `player`'s point of view and returns
//! -inf when `player` has lost and +inf when it has won, before doing any
//! counting. They hold no state and can be called from any depth or thread.
//!
//! The mobility heuristics share one primitive: the number of blank cells a
//! knight step away from a given cell.

use std::collections::HashSet;

use isolation_core::{Board, GameState, Move, Player, Score, KNIGHT_OFFSETS};

/// Terminal value for `player`, if the game is over.
#[inline]
fn terminal_score<G: GameState>(game: &G, player: Player) -> Option<Score> {
    if game.is_loser(player) {
        Some(f64::NEG_INFINITY)
    } else if game.is_winner(player) {
        Some(f64::INFINITY)
    } else {
        None
    }
}

/// Blank cells one knight step from `from`.
#[inline]
pub fn open_neighbours<G: GameState>(game: &G, from: Move) -> usize {
    KNIGHT_OFFSETS
        .iter()
        .filter(|&&d| game.move_is_legal(from.offset(d)))
        .count()
}

/// Sum of [`open_neighbours`] over every legal move of `player`.
fn one_ply_mobility<G: GameState>(game: &G, player: Player) -> Score {
    game.legal_moves_for(player)
        .into_iter()
        .map(|mv| open_neighbours(game, mv))
        .sum::<usize>() as Score
}

/// Mobility difference one ply ahead: own follow-up mobility minus the
/// opponent's.
pub fn custom_score<G: GameState>(game: &G, player: Player) -> Score {
    if let Some(score) = terminal_score(game, player) {
        return score;
    }

    one_ply_mobility(game, player) - one_ply_mobility(game, game.opponent(player))
}

/// Size of the set of cells reachable within two knight steps of any of
/// `player`'s legal moves.
///
/// Second-step cells are only expanded from first-step cells that were not
/// already in the set.
pub fn custom_score_2<G: GameState>(game: &G, player: Player) -> Score {
    if let Some(score) = terminal_score(game, player) {
        return score;
    }

    let mut reachable: HashSet<Move> = HashSet::new();
    for mv in game.legal_moves_for(player) {
        for &d1 in &KNIGHT_OFFSETS {
            let first = mv.offset(d1);
            if game.move_is_legal(first) && reachable.insert(first) {
                for &d2 in &KNIGHT_OFFSETS {
                    let second = first.offset(d2);
                    if game.move_is_legal(second) {
                        reachable.insert(second);
                    }
                }
            }
        }
    }
    reachable.len() as Score
}

/// Own mobility one ply ahead, ignoring the opponent.
pub fn custom_score_3<G: GameState>(game: &G, player: Player) -> Score {
    if let Some(score) = terminal_score(game, player) {
        return score;
    }

    one_ply_mobility(game, player)
}

/// Only distinguishes wins and losses.
pub fn null_score<G: GameState>(game: &G, player: Player) -> Score {
    terminal_score(game, player).unwrap_or(0.0)
}

/// Number of legal moves available to `player`.
pub fn open_move_score<G: GameState>(game: &G, player: Player) -> Score {
    if let Some(score) = terminal_score(game, player) {
        return score;
    }

    game.legal_moves_for(player).len() as Score
}

/// Own legal-move count minus the opponent's.
pub fn improved_score<G: GameState>(game: &G, player: Player) -> Score {
    if let Some(score) = terminal_score(game, player) {
        return score;
    }

    let own = game.legal_moves_for(player).len() as Score;
    let opp = game.legal_moves_for(game.opponent(player)).len() as Score;
    own - opp
}

/// Squared distance of `player` from the centre of the board.
pub fn center_score(game: &Board, player: Player) -> Score {
    if let Some(score) = terminal_score(game, player) {
        return score;
    }

    let Some(loc) = game.location(player) else {
        return 0.0;
    };
    let w = game.width() as Score / 2.0;
    let h = game.height() as Score / 2.0;
    (h - loc.row as Score).powi(2) + (w - loc.col as Score).powi(2)
}

#[cfg(test)]
#[path = "eval_tests.rs"]
mod eval_tests;
