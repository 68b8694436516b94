use crate::game_state::GameState;

/// Pure perft node count.
/// Counts all game states reachable from `state` in exactly `depth` plies,
/// plus terminal states reached earlier.
pub fn perft<G: GameState>(state: &G, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }

    let moves = state.legal_moves();
    if moves.is_empty() {
        return 1;
    }

    moves
        .into_iter()
        .map(|mv| perft(&state.forecast_move(mv), depth - 1))
        .sum()
}
