use std::cell::Cell;
use std::time::Duration;

use isolation_core::{Board, Player};

use super::*;
use crate::eval::custom_score;
use crate::test_tree::{node_score, TreeGame, DECEPTIVE};

const THRESHOLD: Duration = Duration::from_millis(10);

fn never_expires() -> Duration {
    Duration::MAX
}

#[test]
fn test_deepens_until_tree_is_resolved() {
    let game = TreeGame::new(&DECEPTIVE);
    let clock = never_expires;
    let mut ctx = SearchContext::new(&game, node_score, &clock, THRESHOLD);

    let outcome = iterative_deepening(&mut ctx, &game, None);

    // Depth 3 reaches every leaf, so the loop stops there.
    assert_eq!(
        outcome,
        Deepening {
            best_move: Move::new(0, 1),
            depth: 3,
            stopped: false,
        }
    );
}

#[test]
fn test_max_depth_caps_the_loop() {
    let game = TreeGame::new(&DECEPTIVE);
    let clock = never_expires;
    let mut ctx = SearchContext::new(&game, node_score, &clock, THRESHOLD);

    let outcome = iterative_deepening(&mut ctx, &game, Some(1));
    assert_eq!(outcome.best_move, Move::new(0, 0));
    assert_eq!(outcome.depth, 1);
    assert!(!outcome.stopped);
}

#[test]
fn test_timeout_keeps_last_completed_depth() {
    // Depth 1 takes 3 clock checks (root + two children); depth 2 takes 7.
    // Expire during depth 2, whose partial result would pick move 1.
    let calls = Cell::new(0u32);
    let clock = || {
        calls.set(calls.get() + 1);
        if calls.get() > 6 {
            Duration::ZERO
        } else {
            Duration::MAX
        }
    };
    let game = TreeGame::new(&DECEPTIVE);
    let mut ctx = SearchContext::new(&game, node_score, &clock, THRESHOLD);

    let outcome = iterative_deepening(&mut ctx, &game, None);
    assert_eq!(
        outcome,
        Deepening {
            best_move: Move::new(0, 0),
            depth: 1,
            stopped: true,
        }
    );
}

#[test]
fn test_timeout_before_first_depth_returns_sentinel() {
    let board = Board::new(5, 5).unwrap();
    let clock = || Duration::from_millis(3);
    let mut ctx = SearchContext::new(&board, custom_score::<Board>, &clock, THRESHOLD);

    let outcome = iterative_deepening(&mut ctx, &board, None);
    assert!(outcome.best_move.is_none());
    assert_eq!(outcome.depth, 0);
    assert!(outcome.stopped);
}

#[test]
fn test_no_legal_moves_returns_immediately() {
    let board = Board::from_diagram(
        "...
         .1.
         ..2",
        Player::One,
    )
    .unwrap();
    let clock = never_expires;
    let mut ctx = SearchContext::new(&board, custom_score::<Board>, &clock, THRESHOLD);

    let outcome = iterative_deepening(&mut ctx, &board, None);
    assert!(outcome.best_move.is_none());
    assert!(!outcome.stopped);
    assert_eq!(ctx.nodes(), 0);
}
