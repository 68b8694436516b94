//! Agent construction parameters.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use isolation_core::Board;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::context::ScoreFn;
use crate::eval;

/// Default fixed search depth.
pub const DEFAULT_DEPTH: u32 = 3;

/// Default time (ms) left on the clock at which search gives up.
pub const DEFAULT_TIMEOUT_MS: u64 = 10;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown heuristic '{0}' (expected one of: null, open, center, improved, custom, custom2, custom3)")]
pub struct UnknownHeuristic(pub String);

/// Names every evaluation function an agent can be built with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Heuristic {
    Null,
    Open,
    Center,
    Improved,
    #[default]
    Custom,
    Custom2,
    Custom3,
}

impl Heuristic {
    pub const ALL: [Heuristic; 7] = [
        Heuristic::Null,
        Heuristic::Open,
        Heuristic::Center,
        Heuristic::Improved,
        Heuristic::Custom,
        Heuristic::Custom2,
        Heuristic::Custom3,
    ];

    pub fn score_fn(self) -> ScoreFn<Board> {
        match self {
            Heuristic::Null => eval::null_score::<Board>,
            Heuristic::Open => eval::open_move_score::<Board>,
            Heuristic::Center => eval::center_score,
            Heuristic::Improved => eval::improved_score::<Board>,
            Heuristic::Custom => eval::custom_score::<Board>,
            Heuristic::Custom2 => eval::custom_score_2::<Board>,
            Heuristic::Custom3 => eval::custom_score_3::<Board>,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Heuristic::Null => "null",
            Heuristic::Open => "open",
            Heuristic::Center => "center",
            Heuristic::Improved => "improved",
            Heuristic::Custom => "custom",
            Heuristic::Custom2 => "custom2",
            Heuristic::Custom3 => "custom3",
        }
    }
}

impl fmt::Display for Heuristic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Heuristic {
    type Err = UnknownHeuristic;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_ascii_lowercase();
        Heuristic::ALL
            .into_iter()
            .find(|h| h.as_str() == lower)
            .ok_or(UnknownHeuristic(s.to_string()))
    }
}

/// Parameters shared by the minimax and alpha-beta players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Evaluation function used at the search horizon
    pub heuristic: Heuristic,
    /// Fixed depth in plies (minimax player only)
    pub depth: u32,
    /// Search aborts when fewer than this many milliseconds remain
    pub timeout_ms: u64,
    /// Optional depth cap for iterative deepening (None = until timeout)
    pub max_depth: Option<u32>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            heuristic: Heuristic::default(),
            depth: DEFAULT_DEPTH,
            timeout_ms: DEFAULT_TIMEOUT_MS,
            max_depth: None,
        }
    }
}

impl SearchConfig {
    pub fn with_heuristic(heuristic: Heuristic) -> Self {
        Self {
            heuristic,
            ..Default::default()
        }
    }

    pub fn threshold(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heuristic_parse() {
        assert_eq!("custom2".parse::<Heuristic>(), Ok(Heuristic::Custom2));
        assert_eq!("Improved".parse::<Heuristic>(), Ok(Heuristic::Improved));
        assert!("material".parse::<Heuristic>().is_err());
        for h in Heuristic::ALL {
            assert_eq!(h.to_string().parse::<Heuristic>(), Ok(h));
        }
    }

    #[test]
    fn test_search_config_defaults() {
        let config = SearchConfig::default();
        assert_eq!(config.depth, 3);
        assert_eq!(config.threshold(), Duration::from_millis(10));
        assert_eq!(config.heuristic, Heuristic::Custom);
        assert_eq!(config.max_depth, None);
    }
}
