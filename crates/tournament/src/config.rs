//! Agent lineup and tournament settings, loadable from TOML.

use std::path::Path;
use std::time::Duration;

use adversarial_engine::{
    AlphaBetaPlayer, Heuristic, MinimaxPlayer, SearchConfig, DEFAULT_DEPTH, DEFAULT_TIMEOUT_MS,
};
use isolation_core::Engine;
use random_engine::RandomPlayer;
use serde::{Deserialize, Serialize};

use crate::error::{Result, TournamentError};
use crate::match_runner::MatchConfig;

/// Kind of search an agent runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AgentKind {
    Random,
    Minimax,
    AlphaBeta,
}

/// Everything needed to build one agent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentConfig {
    pub name: String,
    pub kind: AgentKind,
    #[serde(default)]
    pub heuristic: Heuristic,
    #[serde(default = "default_depth")]
    pub depth: u32,
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
    #[serde(default)]
    pub max_depth: Option<u32>,
}

fn default_depth() -> u32 {
    DEFAULT_DEPTH
}

fn default_timeout_ms() -> u64 {
    DEFAULT_TIMEOUT_MS
}

impl AgentConfig {
    pub fn new(name: impl Into<String>, kind: AgentKind, heuristic: Heuristic) -> Self {
        Self {
            name: name.into(),
            kind,
            heuristic,
            depth: DEFAULT_DEPTH,
            timeout_ms: DEFAULT_TIMEOUT_MS,
            max_depth: None,
        }
    }

    /// Parse a command-line agent spec.
    ///
    /// Accepted forms: `random`, `minimax[:heuristic[:depth]]`,
    /// `alphabeta[:heuristic]`. The input string becomes the agent name.
    pub fn parse(spec: &str) -> Result<Self> {
        let parts: Vec<&str> = spec.split(':').collect();
        let kind = match parts[0].to_lowercase().as_str() {
            "random" | "rand" => AgentKind::Random,
            "minimax" | "mm" => AgentKind::Minimax,
            "alphabeta" | "ab" => AgentKind::AlphaBeta,
            _ => return Err(TournamentError::UnknownAgent(spec.to_string())),
        };

        let max_parts = match kind {
            AgentKind::Random => 1,
            AgentKind::Minimax => 3,
            AgentKind::AlphaBeta => 2,
        };
        if parts.len() > max_parts {
            return Err(TournamentError::UnknownAgent(spec.to_string()));
        }

        let heuristic = match parts.get(1) {
            Some(name) => name.parse()?,
            None => Heuristic::default(),
        };
        let mut agent = Self::new(spec, kind, heuristic);
        if let Some(depth) = parts.get(2) {
            agent.depth = depth
                .parse()
                .map_err(|_| TournamentError::InvalidDepth(depth.to_string()))?;
        }
        Ok(agent)
    }

    pub fn search_config(&self) -> SearchConfig {
        SearchConfig {
            heuristic: self.heuristic,
            depth: self.depth,
            timeout_ms: self.timeout_ms,
            max_depth: self.max_depth,
        }
    }

    /// Build a fresh agent instance.
    pub fn build(&self) -> Box<dyn Engine> {
        match self.kind {
            AgentKind::Random => Box::new(RandomPlayer::new().with_name(&self.name)),
            AgentKind::Minimax => {
                Box::new(MinimaxPlayer::from_config(&self.search_config()).with_name(&self.name))
            }
            AgentKind::AlphaBeta => Box::new(
                AlphaBetaPlayer::from_config(&self.search_config()).with_name(&self.name),
            ),
        }
    }
}

/// Tournament configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TournamentConfig {
    pub name: String,
    pub board_width: i32,
    pub board_height: i32,
    /// Wall-clock limit per move in milliseconds
    pub time_limit_ms: u64,
    /// Games per pairing with each agent moving first
    pub games_per_side: u32,
    /// Agents under evaluation
    pub test_agents: Vec<AgentConfig>,
    /// Reference lineup every test agent plays against
    pub opponents: Vec<AgentConfig>,
}

impl Default for TournamentConfig {
    fn default() -> Self {
        use AgentKind::{AlphaBeta, Minimax, Random};

        Self {
            name: "isolation".to_string(),
            board_width: 7,
            board_height: 7,
            time_limit_ms: 150,
            games_per_side: 5,
            test_agents: vec![
                AgentConfig::new("AB_Improved", AlphaBeta, Heuristic::Improved),
                AgentConfig::new("AB_Custom", AlphaBeta, Heuristic::Custom),
                AgentConfig::new("AB_Custom_2", AlphaBeta, Heuristic::Custom2),
                AgentConfig::new("AB_Custom_3", AlphaBeta, Heuristic::Custom3),
            ],
            opponents: vec![
                AgentConfig::new("Random", Random, Heuristic::Null),
                AgentConfig::new("MM_Open", Minimax, Heuristic::Open),
                AgentConfig::new("MM_Center", Minimax, Heuristic::Center),
                AgentConfig::new("MM_Improved", Minimax, Heuristic::Improved),
                AgentConfig::new("AB_Open", AlphaBeta, Heuristic::Open),
                AgentConfig::new("AB_Center", AlphaBeta, Heuristic::Center),
                AgentConfig::new("AB_Improved", AlphaBeta, Heuristic::Improved),
            ],
        }
    }
}

impl TournamentConfig {
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|source| TournamentError::Io {
            operation: "read",
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents)
    }

    pub fn time_limit(&self) -> Duration {
        Duration::from_millis(self.time_limit_ms)
    }

    pub fn match_config(&self) -> MatchConfig {
        MatchConfig {
            games_per_side: self.games_per_side,
            board_width: self.board_width,
            board_height: self.board_height,
            time_per_move: self.time_limit(),
            verbose: false,
        }
    }
}
