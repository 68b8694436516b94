//! Tournament results storage and reporting

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::config::TournamentConfig;
use crate::error::{Result, TournamentError};

/// Tally of a match from the first agent's perspective
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    pub wins: u32,
    pub losses: u32,
    /// Losses by timeout or illegal move
    pub forfeits: u32,
}

impl MatchResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn total_games(&self) -> u32 {
        self.wins + self.losses
    }

    /// Fraction of games won; 0.0 for an empty match
    pub fn win_rate(&self) -> f64 {
        match self.total_games() {
            0 => 0.0,
            total => f64::from(self.wins) / f64::from(total),
        }
    }
}

/// A single match entry in the tournament
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchEntry {
    pub agent: String,
    pub opponent: String,
    pub result: MatchResult,
}

/// Complete tournament results
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TournamentResults {
    /// Name/description of the tournament
    pub name: String,
    pub agents: Vec<String>,
    pub opponents: Vec<String>,
    pub board_width: i32,
    pub board_height: i32,
    pub time_limit_ms: u64,
    pub games_per_side: u32,
    pub matches: Vec<MatchEntry>,
}

impl TournamentResults {
    pub fn new(config: &TournamentConfig) -> Self {
        Self {
            name: config.name.clone(),
            agents: config.test_agents.iter().map(|a| a.name.clone()).collect(),
            opponents: config.opponents.iter().map(|a| a.name.clone()).collect(),
            board_width: config.board_width,
            board_height: config.board_height,
            time_limit_ms: config.time_limit_ms,
            games_per_side: config.games_per_side,
            matches: Vec::new(),
        }
    }

    /// Add a match result
    pub fn add_match(&mut self, agent: &str, opponent: &str, result: MatchResult) {
        self.matches.push(MatchEntry {
            agent: agent.to_string(),
            opponent: opponent.to_string(),
            result,
        });
    }

    pub fn result(&self, agent: &str, opponent: &str) -> Option<MatchResult> {
        self.matches
            .iter()
            .find(|m| m.agent == agent && m.opponent == opponent)
            .map(|m| m.result)
    }

    /// Sum of all of an agent's matches
    pub fn totals(&self, agent: &str) -> MatchResult {
        self.matches
            .iter()
            .filter(|m| m.agent == agent)
            .fold(MatchResult::new(), |mut acc, m| {
                acc.wins += m.result.wins;
                acc.losses += m.result.losses;
                acc.forfeits += m.result.forfeits;
                acc
            })
    }

    /// Save results to JSON file
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json).map_err(|source| TournamentError::Io {
            operation: "write",
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load results from JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|source| TournamentError::Io {
            operation: "read",
            path: path.to_path_buf(),
            source,
        })?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Generate a text report: one row per opponent, one W | L column per agent
    pub fn generate_report(&self) -> String {
        let mut report = String::new();
        report.push_str(&format!("=== Tournament: {} ===\n\n", self.name));
        report.push_str(&format!(
            "Config: {}x{} board, {} ms/move, {} games per side\n\n",
            self.board_width, self.board_height, self.time_limit_ms, self.games_per_side
        ));

        report.push_str(&format!("{:<14}", "Opponent"));
        for agent in &self.agents {
            report.push_str(&format!("{:>16}", agent));
        }
        report.push('\n');
        report.push_str(&format!("{:<14}", ""));
        for _ in &self.agents {
            report.push_str(&format!("{:>16}", "W | L"));
        }
        report.push('\n');
        report.push_str(&"-".repeat(14 + 16 * self.agents.len()));
        report.push('\n');

        for opponent in &self.opponents {
            report.push_str(&format!("{:<14}", opponent));
            for agent in &self.agents {
                let cell = match self.result(agent, opponent) {
                    Some(r) => format!("{} | {}", r.wins, r.losses),
                    None => "-".to_string(),
                };
                report.push_str(&format!("{:>16}", cell));
            }
            report.push('\n');
        }

        report.push_str(&"-".repeat(14 + 16 * self.agents.len()));
        report.push('\n');
        report.push_str(&format!("{:<14}", "Win Rate:"));
        for agent in &self.agents {
            let rate = format!("{:.1}%", self.totals(agent).win_rate() * 100.0);
            report.push_str(&format!("{:>16}", rate));
        }
        report.push('\n');

        let forfeits: u32 = self.agents.iter().map(|a| self.totals(a).forfeits).sum();
        if forfeits > 0 {
            report.push_str(&format!(
                "\n{} game(s) were lost by timeout or illegal move.\n",
                forfeits
            ));
        }

        report
    }

    /// Print report to stdout
    pub fn print_report(&self) {
        println!("{}", self.generate_report());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> TournamentResults {
        let mut config = TournamentConfig::default();
        config.test_agents.truncate(2);
        config.opponents.truncate(2);
        let mut results = TournamentResults::new(&config);
        results.add_match(
            "AB_Improved",
            "Random",
            MatchResult { wins: 9, losses: 1, forfeits: 0 },
        );
        results.add_match(
            "AB_Improved",
            "MM_Open",
            MatchResult { wins: 6, losses: 4, forfeits: 1 },
        );
        results.add_match(
            "AB_Custom",
            "Random",
            MatchResult { wins: 10, losses: 0, forfeits: 0 },
        );
        results
    }

    #[test]
    fn test_win_rate() {
        assert_eq!(MatchResult::new().win_rate(), 0.0);
        let result = MatchResult { wins: 3, losses: 1, forfeits: 0 };
        assert_eq!(result.total_games(), 4);
        assert!((result.win_rate() - 0.75).abs() < 1e-9);
    }

    #[test]
    fn test_totals() {
        let results = sample();
        let totals = results.totals("AB_Improved");
        assert_eq!(totals.wins, 15);
        assert_eq!(totals.losses, 5);
        assert_eq!(totals.forfeits, 1);
        assert_eq!(results.totals("nobody"), MatchResult::new());
    }

    #[test]
    fn test_report_lists_every_pairing() {
        let report = sample().generate_report();
        assert!(report.contains("AB_Improved"));
        assert!(report.contains("AB_Custom"));
        assert!(report.contains("9 | 1"));
        assert!(report.contains("6 | 4"));
        assert!(report.contains("75.0%"));
        assert!(report.contains("100.0%"));
        // AB_Custom never played MM_Open
        assert!(report.lines().any(|l| l.starts_with("MM_Open") && l.ends_with('-')));
        assert!(report.contains("1 game(s)"));
    }

    #[test]
    fn test_save_and_load() {
        let results = sample();
        let path = std::env::temp_dir().join(format!(
            "isolation_results_{}.json",
            std::process::id()
        ));

        results.save(&path).unwrap();
        let loaded = TournamentResults::load(&path).unwrap();
        let _ = std::fs::remove_file(&path);

        assert_eq!(loaded, results);
    }

    #[test]
    fn test_load_missing_file() {
        let err = TournamentResults::load(Path::new("/nonexistent/results.json")).unwrap_err();
        assert!(matches!(err, TournamentError::Io { operation: "read", .. }));
    }
}
