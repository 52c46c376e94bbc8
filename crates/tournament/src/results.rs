//! Match results storage and reporting

use std::fmt::Write as _;
use std::path::Path;

use chess_core::{DrawReason, GameStatus};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result of a single game from one engine's point of view
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum GameResult {
    Win,
    Loss,
    Draw,
}

impl GameResult {
    pub fn flip(self) -> Self {
        match self {
            GameResult::Win => GameResult::Loss,
            GameResult::Loss => GameResult::Win,
            GameResult::Draw => GameResult::Draw,
        }
    }

    /// PGN-style score with White on the left
    pub fn as_score(self) -> &'static str {
        match self {
            GameResult::Win => "1-0",
            GameResult::Loss => "0-1",
            GameResult::Draw => "1/2-1/2",
        }
    }
}

/// How a game ended
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Termination {
    Checkmate,
    Stalemate,
    FiftyMoves,
    ThreefoldRepetition,
    InsufficientMaterial,
    /// The ply cap was reached with the game still going
    MoveLimit,
    /// The side to move produced no move or an illegal one
    Forfeit,
}

impl Termination {
    /// Maps a finished status; `None` while the game is still going.
    pub fn from_status(status: GameStatus) -> Option<Self> {
        match status {
            GameStatus::Ongoing => None,
            GameStatus::Checkmate { .. } => Some(Termination::Checkmate),
            GameStatus::Stalemate => Some(Termination::Stalemate),
            GameStatus::Draw(DrawReason::FiftyMoves) => Some(Termination::FiftyMoves),
            GameStatus::Draw(DrawReason::ThreefoldRepetition) => {
                Some(Termination::ThreefoldRepetition)
            }
            GameStatus::Draw(DrawReason::InsufficientMaterial) => {
                Some(Termination::InsufficientMaterial)
            }
        }
    }
}

/// One finished game, scored for White
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameRecord {
    pub white: String,
    pub black: String,
    pub result: GameResult,
    pub termination: Termination,
    /// Every move since the game was set up, in UCI notation
    pub moves: Vec<String>,
}

/// Result of a match (multiple games), from engine1's perspective
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct MatchResult {
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
    #[serde(default)]
    pub games: Vec<GameRecord>,
}

impl MatchResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn total_games(&self) -> u32 {
        self.wins + self.losses + self.draws
    }

    /// Counts `result` (engine1's view) and keeps the game record.
    pub fn record(&mut self, result: GameResult, game: GameRecord) {
        match result {
            GameResult::Win => self.wins += 1,
            GameResult::Loss => self.losses += 1,
            GameResult::Draw => self.draws += 1,
        }
        self.games.push(game);
    }

    /// Score from engine1's perspective (1 for win, 0.5 for draw, 0 for loss)
    pub fn score(&self) -> f64 {
        let total = self.total_games() as f64;
        if total == 0.0 {
            return 0.5;
        }
        (self.wins as f64 + 0.5 * self.draws as f64) / total
    }
}

/// Errors from saving or loading results
#[derive(Debug, Error)]
pub enum ResultsError {
    #[error("failed to access {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed results JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// A single match entry in the tournament
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MatchEntry {
    pub engine1: String,
    pub engine2: String,
    pub result: MatchResult,
}

/// Tournament configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TournamentConfig {
    pub games_per_match: u32,
    pub max_moves_per_game: u32,
    pub seed: Option<u64>,
}

impl Default for TournamentConfig {
    fn default() -> Self {
        Self {
            games_per_match: 10,
            max_moves_per_game: 200,
            seed: None,
        }
    }
}

/// Complete tournament results
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TournamentResults {
    /// Name/description of the tournament
    pub name: String,
    /// Participating engines
    pub participants: Vec<String>,
    pub matches: Vec<MatchEntry>,
    /// Configuration used
    pub config: TournamentConfig,
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

    /// Add a match result
    pub fn add_match(&mut self, engine1: &str, engine2: &str, result: MatchResult) {
        self.matches.push(MatchEntry {
            engine1: engine1.to_string(),
            engine2: engine2.to_string(),
            result,
        });
    }

    pub fn to_json(&self) -> Result<String, ResultsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self, ResultsError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Save results to JSON file
    pub fn save(&self, path: &Path) -> Result<(), ResultsError> {
        let json = self.to_json()?;
        std::fs::write(path, json).map_err(|source| ResultsError::Io {
            path: path.display().to_string(),
            source,
        })
    }

    /// Load results from JSON file
    pub fn load(path: &Path) -> Result<Self, ResultsError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ResultsError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&contents)
    }

    /// Generate a text report
    pub fn generate_report(&self) -> String {
        let mut report = String::new();
        let _ = writeln!(report, "=== Tournament: {} ===\n", self.name);
        let _ = writeln!(report, "Participants: {}", self.participants.join(", "));
        let _ = writeln!(
            report,
            "Config: {} games/match, {} plies max\n",
            self.config.games_per_match, self.config.max_moves_per_game
        );

        report.push_str("Results:\n");
        let _ = writeln!(
            report,
            "{:<12} vs {:<12} {:>5}-{:<5}-{:<5} {:>6}",
            "Engine 1", "Engine 2", "W", "L", "D", "Score"
        );
        report.push_str(&"-".repeat(56));
        report.push('\n');

        for entry in &self.matches {
            let _ = writeln!(
                report,
                "{:<12} vs {:<12} {:>5}-{:<5}-{:<5} {:>5.1}%",
                entry.engine1,
                entry.engine2,
                entry.result.wins,
                entry.result.losses,
                entry.result.draws,
                entry.result.score() * 100.0
            );
        }

        report
    }
}

#[cfg(test)]
#[path = "results_tests.rs"]
mod results_tests;
