//! A hand-built game tree implementing `GameState`, so tests can pin exact
//! values, node counts and pruning.

use isolation_core::{GameState, Move, Player, Score};

#[derive(Debug)]
pub enum Node {
    Leaf(Score),
    /// Heuristic value used if the search is cut off here, and the children
    Branch(Score, &'static [Node]),
}

#[derive(Debug, Clone)]
pub struct TreeGame {
    node: &'static Node,
    active: Player,
}

impl TreeGame {
    pub fn new(root: &'static Node) -> Self {
        Self {
            node: root,
            active: Player::One,
        }
    }
}

/// Scores a node by its stored value; the perspective is always the root
/// player's, which is how the trees below are written.
pub fn node_score(game: &TreeGame, _player: Player) -> Score {
    match game.node {
        Node::Leaf(v) | Node::Branch(v, _) => *v,
    }
}

/// Stored values belong to player one; player two sees them negated.
pub fn signed_score(game: &TreeGame, player: Player) -> Score {
    match player {
        Player::One => node_score(game, player),
        Player::Two => -node_score(game, player),
    }
}

impl GameState for TreeGame {
    fn active_player(&self) -> Player {
        self.active
    }

    fn legal_moves_for(&self, player: Player) -> Vec<Move> {
        match self.node {
            Node::Branch(_, children) if player == self.active => {
                (0..children.len()).map(|i| Move::new(0, i as i32)).collect()
            }
            _ => Vec::new(),
        }
    }

    fn forecast_move(&self, mv: Move) -> Self {
        match self.node {
            Node::Branch(_, children) => TreeGame {
                node: &children[mv.col as usize],
                active: self.active.other(),
            },
            Node::Leaf(_) => self.clone(),
        }
    }

    fn is_loser(&self, player: Player) -> bool {
        player == self.active && self.legal_moves().is_empty()
    }

    fn is_winner(&self, player: Player) -> bool {
        player != self.active && self.legal_moves().is_empty()
    }

    fn move_is_legal(&self, cell: Move) -> bool {
        self.legal_moves().contains(&cell)
    }
}

/// The textbook three-by-three tree: minimax value 3 via the first move.
/// Alpha-beta prunes two leaves of the second subtree.
pub static TEXTBOOK: Node = Node::Branch(
    0.0,
    &[
        Node::Branch(0.0, &[Node::Leaf(3.0), Node::Leaf(12.0), Node::Leaf(8.0)]),
        Node::Branch(0.0, &[Node::Leaf(2.0), Node::Leaf(4.0), Node::Leaf(6.0)]),
        Node::Branch(0.0, &[Node::Leaf(14.0), Node::Leaf(5.0), Node::Leaf(2.0)]),
    ],
);

/// Moves 1 and 2 both back up to 4 (move 0 backs up to 1); the earlier of
/// the tied moves must be chosen.
pub static TIED: Node = Node::Branch(
    0.0,
    &[
        Node::Branch(0.0, &[Node::Leaf(1.0), Node::Leaf(9.0)]),
        Node::Branch(0.0, &[Node::Leaf(7.0), Node::Leaf(4.0)]),
        Node::Branch(0.0, &[Node::Leaf(4.0), Node::Leaf(4.0)]),
    ],
);

/// Every root move loses.
pub static ALL_LOSING: Node = Node::Branch(
    0.0,
    &[
        Node::Branch(0.0, &[Node::Leaf(f64::NEG_INFINITY)]),
        Node::Branch(0.0, &[Node::Leaf(f64::NEG_INFINITY), Node::Leaf(3.0)]),
    ],
);

/// Depth-3 tree whose internal heuristic values disagree with the deeper
/// backed-up values, so the chosen move changes with depth.
///
/// Depth 1 picks move 0 (heuristic 9 vs 1). Depth 2 backs up min(2, 8) = 2
/// against min(5, 6) = 5 and picks move 1.
pub static DECEPTIVE: Node = Node::Branch(
    0.0,
    &[
        Node::Branch(
            9.0,
            &[
                Node::Branch(2.0, &[Node::Leaf(2.0), Node::Leaf(1.0)]),
                Node::Branch(8.0, &[Node::Leaf(8.0)]),
            ],
        ),
        Node::Branch(
            1.0,
            &[
                Node::Branch(5.0, &[Node::Leaf(5.0), Node::Leaf(7.0)]),
                Node::Branch(6.0, &[Node::Leaf(6.0)]),
            ],
        ),
    ],
);
