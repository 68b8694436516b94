use super::*;
use isolation_core::{Player, TimeControl};

#[test]
fn random_player_returns_legal_move() {
    let mut player = RandomPlayer::new();
    let board = Board::from_diagram(
        ".....
         .1...
         .....
         ...2.
         .....",
        Player::One,
    )
    .unwrap();

    for _ in 0..20 {
        let result = player.choose_move(&board, &TimeControl::infinite());
        assert!(board.legal_moves().contains(&result.best_move));
    }
}

#[test]
fn random_player_places_on_empty_board() {
    let mut player = RandomPlayer::new();
    let board = Board::new(7, 7).unwrap();

    let result = player.choose_move(&board, &TimeControl::infinite());

    assert!(board.move_is_legal(result.best_move));
}

#[test]
fn random_player_handles_lost_position() {
    let mut player = RandomPlayer::new().with_name("Rnd");
    let board = Board::from_diagram(
        "...
         .1.
         ..2",
        Player::One,
    )
    .unwrap();

    let result = player.choose_move(&board, &TimeControl::infinite());

    assert!(result.best_move.is_none());
    assert_eq!(player.name(), "Rnd");
}
