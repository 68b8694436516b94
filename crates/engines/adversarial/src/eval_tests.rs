use super::*;

/// Player one in the corner, a blocked cell beside it, player two on the
/// right edge. Player one to move.
///
/// One's only move is (2,1), from which only (0,2) is open.
/// Two's only move is (2,0), from which nothing is open.
fn layout() -> Board {
    Board::from_diagram(
        "1#.
         ..2
         ...",
        Player::One,
    )
    .unwrap()
}

/// Player one boxed into the corner.
fn lost_for_one() -> Board {
    Board::from_diagram(
        "1#.
         #.#
         .#2",
        Player::One,
    )
    .unwrap()
}

#[test]
fn test_open_neighbours_primitive() {
    let board = layout();
    assert_eq!(open_neighbours(&board, Move::new(2, 1)), 1);
    assert_eq!(open_neighbours(&board, Move::new(2, 0)), 0);
    assert_eq!(open_neighbours(&board, Move::new(1, 1)), 0);
}

#[test]
fn test_custom_score_hand_computed() {
    let board = layout();
    assert_eq!(custom_score(&board, Player::One), 1.0);
    assert_eq!(custom_score(&board, Player::Two), -1.0);
}

#[test]
fn test_custom_score_2_hand_computed() {
    // From (2,1): (0,2) is open; from there (1,0) and (2,1) are open.
    assert_eq!(custom_score_2(&layout(), Player::One), 3.0);
}

#[test]
fn test_custom_score_2_overlapping_moves() {
    // Eight moves from the centre reach only eight distinct first-step
    // cells, each twice; repeats are not expanded again. Every blank cell
    // except the corners (0,0), (0,4) and (4,0) ends up in the set.
    let board = Board::from_diagram(
        ".....
         .....
         ..1..
         .....
         ....2",
        Player::One,
    )
    .unwrap();
    assert_eq!(board.legal_moves().len(), 8);
    assert_eq!(custom_score_2(&board, Player::One), 20.0);
}

#[test]
fn test_custom_score_3_hand_computed() {
    let board = layout();
    assert_eq!(custom_score_3(&board, Player::One), 1.0);
    assert_eq!(custom_score_3(&board, Player::Two), 0.0);
}

#[test]
fn test_baseline_scores_hand_computed() {
    let board = layout();
    assert_eq!(null_score(&board, Player::One), 0.0);
    assert_eq!(open_move_score(&board, Player::One), 1.0);
    assert_eq!(improved_score(&board, Player::One), 0.0);
    // (1.5 - 0)^2 + (1.5 - 0)^2
    assert_eq!(center_score(&board, Player::One), 4.5);
}

#[test]
fn test_center_score_unplaced_player() {
    let board = Board::new(7, 7).unwrap();
    assert_eq!(center_score(&board, Player::One), 0.0);
}

#[test]
fn test_terminal_states_short_circuit() {
    let board = lost_for_one();
    let fns: [fn(&Board, Player) -> Score; 7] = [
        custom_score,
        custom_score_2,
        custom_score_3,
        null_score,
        open_move_score,
        improved_score,
        center_score,
    ];
    for f in fns {
        assert_eq!(f(&board, Player::One), f64::NEG_INFINITY);
        assert_eq!(f(&board, Player::Two), f64::INFINITY);
    }
}
