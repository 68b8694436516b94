use std::path::PathBuf;

use adversarial_engine::UnknownHeuristic;
use isolation_core::BoardError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TournamentError {
    #[error("failed to {operation} '{path}': {source}")]
    Io {
        operation: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Config(#[from] toml::de::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("unknown agent '{0}' (expected random, minimax[:heuristic[:depth]] or alphabeta[:heuristic])")]
    UnknownAgent(String),

    #[error("invalid search depth '{0}'")]
    InvalidDepth(String),

    #[error(transparent)]
    Heuristic(#[from] UnknownHeuristic),

    #[error(transparent)]
    Board(#[from] BoardError),
}

pub type Result<T> = std::result::Result<T, TournamentError>;
