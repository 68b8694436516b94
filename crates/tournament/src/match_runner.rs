//! Match runner for playing refereed games between agents

use std::time::Duration;

use isolation_core::{Board, Engine, GameState, Move, Player, TimeControl};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::config::TournamentConfig;
use crate::error::Result;
use crate::results::{MatchResult, TournamentResults};

/// Configuration for a match
#[derive(Debug, Clone)]
pub struct MatchConfig {
    /// Games played with each agent moving first
    pub games_per_side: u32,
    pub board_width: i32,
    pub board_height: i32,
    /// Wall-clock limit for a single move
    pub time_per_move: Duration,
    /// Log every game at info level
    pub verbose: bool,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            games_per_side: 5,
            board_width: 7,
            board_height: 7,
            time_per_move: Duration::from_millis(150),
            verbose: true,
        }
    }
}

/// Why a game ended. The player to act is always the loser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameEnd {
    /// The player to act had no legal move.
    NoLegalMoves,
    /// The player returned a move that is not legal (the sentinel included).
    IllegalMove(Move),
    /// The player took longer than the per-move limit.
    Timeout { elapsed_ms: u64 },
}

impl GameEnd {
    /// Whether the loser forfeited rather than being isolated.
    pub fn is_forfeit(&self) -> bool {
        !matches!(self, GameEnd::NoLegalMoves)
    }
}

/// Outcome and move history of one game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    pub winner: Player,
    pub end: GameEnd,
    /// Moves in the order they were played, starting with player one
    pub moves: Vec<Move>,
}

/// Play a single game on an empty board. `first` moves as player one.
pub fn play_game(
    first: &mut dyn Engine,
    second: &mut dyn Engine,
    config: &MatchConfig,
) -> Result<GameRecord> {
    let mut board = Board::new(config.board_width, config.board_height)?;
    let mut moves = Vec::new();
    first.new_game();
    second.new_game();

    loop {
        let active = board.active_player();
        let legal = board.legal_moves();
        if legal.is_empty() {
            return Ok(GameRecord {
                winner: active.other(),
                end: GameEnd::NoLegalMoves,
                moves,
            });
        }

        let engine: &mut dyn Engine = match active {
            Player::One => &mut *first,
            Player::Two => &mut *second,
        };

        // Fresh clock for every move
        let clock = TimeControl::new(Some(config.time_per_move));
        let result = engine.choose_move(&board, &clock);
        let elapsed = clock.elapsed();

        if elapsed > config.time_per_move {
            warn!(
                agent = engine.name(),
                elapsed_ms = elapsed.as_millis() as u64,
                "move exceeded time limit"
            );
            return Ok(GameRecord {
                winner: active.other(),
                end: GameEnd::Timeout {
                    elapsed_ms: elapsed.as_millis() as u64,
                },
                moves,
            });
        }

        if !legal.contains(&result.best_move) {
            debug!(agent = engine.name(), mv = %result.best_move, "illegal move forfeits");
            return Ok(GameRecord {
                winner: active.other(),
                end: GameEnd::IllegalMove(result.best_move),
                moves,
            });
        }

        board.apply_move(result.best_move);
        moves.push(result.best_move);
    }
}

/// Runs matches between two agents
pub struct MatchRunner {
    config: MatchConfig,
}

impl MatchRunner {
    pub fn new(config: MatchConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Run a match between two agents
    ///
    /// Returns the result from engine1's perspective
    pub fn run_match(&self, engine1: &mut dyn Engine, engine2: &mut dyn Engine) -> Result<MatchResult> {
        let mut result = MatchResult::new();
        let num_games = self.config.games_per_side * 2;

        for game_num in 0..num_games {
            let engine1_first = game_num % 2 == 0;

            let record = if engine1_first {
                play_game(engine1, engine2, &self.config)?
            } else {
                play_game(engine2, engine1, &self.config)?
            };

            let engine1_player = if engine1_first { Player::One } else { Player::Two };
            if record.winner == engine1_player {
                result.wins += 1;
            } else {
                result.losses += 1;
                if record.end.is_forfeit() {
                    result.forfeits += 1;
                }
            }

            let order = if engine1_first { "first" } else { "second" };
            if self.config.verbose {
                info!(
                    game = game_num + 1,
                    of = num_games,
                    engine1 = engine1.name(),
                    order,
                    winner = %record.winner,
                    end = ?record.end,
                    plies = record.moves.len(),
                    score = %format!("{}-{}", result.wins, result.losses),
                    "game finished"
                );
            } else {
                debug!(
                    game = game_num + 1,
                    engine1 = engine1.name(),
                    engine2 = engine2.name(),
                    order,
                    winner = %record.winner,
                    end = ?record.end,
                    "game finished"
                );
            }
        }

        Ok(result)
    }
}

/// Quick utility to run a single match on the default board
pub fn quick_match(
    engine1: &mut dyn Engine,
    engine2: &mut dyn Engine,
    games_per_side: u32,
    time_per_move: Duration,
) -> Result<MatchResult> {
    let config = MatchConfig {
        games_per_side,
        time_per_move,
        ..Default::default()
    };
    MatchRunner::new(config).run_match(engine1, engine2)
}

/// Play every test agent against every opponent.
///
/// Agents are rebuilt for each pairing so no state leaks between matches.
pub fn run_tournament(config: &TournamentConfig) -> Result<TournamentResults> {
    let runner = MatchRunner::new(config.match_config());
    let mut results = TournamentResults::new(config);

    for test_agent in &config.test_agents {
        for opponent in &config.opponents {
            let mut engine1 = test_agent.build();
            let mut engine2 = opponent.build();
            let result = runner.run_match(engine1.as_mut(), engine2.as_mut())?;
            info!(
                agent = %test_agent.name,
                opponent = %opponent.name,
                wins = result.wins,
                losses = result.losses,
                "pairing finished"
            );
            results.add_match(&test_agent.name, &opponent.name, result);
        }
    }

    Ok(results)
}

#[cfg(test)]
#[path = "match_runner_tests.rs"]
mod tests;
