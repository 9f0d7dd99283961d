//! Tournament configuration, results storage and reporting

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::elo::MatchResult;
use crate::error::TournamentError;
use crate::match_runner::MatchConfig;

/// Complete tournament results
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TournamentResults {
    pub name: String,
    pub participants: Vec<String>,
    pub matches: Vec<MatchEntry>,
    pub config: TournamentConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchEntry {
    pub engine1: String,
    pub engine2: String,
    pub result: MatchResult,
}

/// Tournament settings, usually read from a TOML file:
///
/// ```toml
/// games_per_match = 20
/// search_depth = 6
/// time_per_move_ms = 100
/// opponents = ["random", "alphabeta:2"]
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TournamentConfig {
    pub games_per_match: u32,
    pub search_depth: u8,
    /// Per-action budget in milliseconds (absent = depth only)
    pub time_per_move_ms: Option<u64>,
    /// Actions per game before it is scored as a draw
    pub max_moves_per_game: u32,
    pub alternate_sides: bool,
    /// Opponents for a gauntlet
    pub opponents: Vec<String>,
    pub elo_file: PathBuf,
}

impl Default for TournamentConfig {
    fn default() -> Self {
        Self {
            games_per_match: 10,
            search_depth: 4,
            time_per_move_ms: None,
            max_moves_per_game: 100,
            alternate_sides: true,
            opponents: vec!["random".to_string()],
            elo_file: PathBuf::from("tournament_elo.json"),
        }
    }
}

impl TournamentConfig {
    pub fn from_toml_str(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    pub fn load(path: &Path) -> Result<Self, TournamentError> {
        let contents = std::fs::read_to_string(path).map_err(|e| TournamentError::io(path, e))?;
        Self::from_toml_str(&contents).map_err(|source| TournamentError::Toml {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Settings for one match between two engines.
    pub fn match_config(&self) -> MatchConfig {
        MatchConfig {
            num_games: self.games_per_match,
            depth: self.search_depth,
            time_per_move: self.time_per_move_ms.map(Duration::from_millis),
            max_moves: self.max_moves_per_game,
            alternate_sides: self.alternate_sides,
        }
    }
}

impl TournamentResults {
    pub fn new(name: &str, participants: Vec<String>, config: TournamentConfig) -> Self {
        Self {
            name: name.to_string(),
            participants,
            matches: Vec::new(),
            config,
        }
    }

    pub fn add_match(&mut self, engine1: &str, engine2: &str, result: MatchResult) {
        self.matches.push(MatchEntry {
            engine1: engine1.to_string(),
            engine2: engine2.to_string(),
            result,
        });
    }

    pub fn save(&self, path: &Path) -> Result<(), TournamentError> {
        let json = serde_json::to_string_pretty(self).map_err(|e| TournamentError::json(path, e))?;
        std::fs::write(path, json).map_err(|e| TournamentError::io(path, e))
    }

    pub fn load(path: &Path) -> Result<Self, TournamentError> {
        let contents = std::fs::read_to_string(path).map_err(|e| TournamentError::io(path, e))?;
        serde_json::from_str(&contents).map_err(|e| TournamentError::json(path, e))
    }

    /// Generate a text report
    pub fn generate_report(&self) -> String {
        let mut report = String::new();
        report.push_str(&format!("=== Tournament: {} ===\n\n", self.name));
        report.push_str(&format!("Participants: {}\n", self.participants.join(", ")));
        report.push_str(&format!(
            "Config: {} games/match, depth {}\n\n",
            self.config.games_per_match, self.config.search_depth
        ));

        report.push_str("Results:\n");
        report.push_str(&format!(
            "{:<20} vs {:<20} {:>5}-{:<5}-{:<5}\n",
            "Engine 1", "Engine 2", "W", "L", "D"
        ));
        report.push_str(&"-".repeat(60));
        report.push('\n');

        for entry in &self.matches {
            report.push_str(&format!(
                "{:<20} vs {:<20} {:>5}-{:<5}-{:<5}\n",
                entry.engine1,
                entry.engine2,
                entry.result.wins,
                entry.result.losses,
                entry.result.draws
            ));
        }

        report
    }
}

#[cfg(test)]
#[path = "results_tests.rs"]
mod results_tests;
