//! The narrow interface the search engines consume.

use crate::types::{Move, Player};

/// An immutable two-player game snapshot.
///
/// Search explores many hypothetical futures from one state, so every
/// successor comes from [`GameState::forecast_move`] and the receiver is
/// never touched.
pub trait GameState: Clone {
    /// The player whose turn it is.
    fn active_player(&self) -> Player;

    /// Legal moves for `player`, in a deterministic order.
    ///
    /// An empty list means `player` is in a terminal (losing) position if it
    /// is to act.
    fn legal_moves_for(&self, player: Player) -> Vec<Move>;

    /// Legal moves for the side to act.
    fn legal_moves(&self) -> Vec<Move> {
        self.legal_moves_for(self.active_player())
    }

    /// The state after the active player makes `mv`.
    fn forecast_move(&self, mv: Move) -> Self;

    fn is_loser(&self, player: Player) -> bool;

    fn is_winner(&self, player: Player) -> bool;

    /// Whether `cell` is on the board and unoccupied, regardless of whose
    /// turn it is.
    fn move_is_legal(&self, cell: Move) -> bool;

    fn opponent(&self, player: Player) -> Player {
        player.other()
    }
}
