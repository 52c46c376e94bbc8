//! Match runner for playing games between engines

use chess_core::{move_to_uci, Color, Engine, Game, GameStatus};
use tracing::{debug, info, warn};

use crate::results::{GameRecord, GameResult, MatchResult, Termination};

/// Configuration for a match
#[derive(Debug, Clone)]
pub struct MatchConfig {
    /// Number of games to play
    pub num_games: u32,
    /// Maximum plies per game before declaring draw
    pub max_moves: u32,
    /// Whether to alternate colors each game
    pub alternate_colors: bool,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            num_games: 10,
            max_moves: 200,
            alternate_colors: true,
        }
    }
}

/// Runs matches between two engines
pub struct MatchRunner {
    config: MatchConfig,
}

impl MatchRunner {
    pub fn new(config: MatchConfig) -> Self {
        Self { config }
    }

    /// Run a match between two engines
    ///
    /// Returns the result from engine1's perspective
    pub fn run_match(&self, engine1: &mut dyn Engine, engine2: &mut dyn Engine) -> MatchResult {
        let mut result = MatchResult::new();

        for game_num in 0..self.config.num_games {
            let engine1_white = !self.config.alternate_colors || game_num % 2 == 0;

            let record = if engine1_white {
                self.play_game(engine1, engine2)
            } else {
                self.play_game(engine2, engine1)
            };
            let outcome = if engine1_white {
                record.result
            } else {
                record.result.flip()
            };

            info!(
                game = game_num + 1,
                of = self.config.num_games,
                white = %record.white,
                black = %record.black,
                result = record.result.as_score(),
                termination = ?record.termination,
                plies = record.moves.len(),
                "game finished"
            );
            result.record(outcome, record);
        }

        info!(
            wins = result.wins,
            losses = result.losses,
            draws = result.draws,
            "match finished"
        );
        result
    }

    /// Play a single game from the start position, scored for White
    pub fn play_game(&self, white: &mut dyn Engine, black: &mut dyn Engine) -> GameRecord {
        self.play_from(Game::new(), white, black)
    }

    /// Play a single game from `game`, scored for White
    pub fn play_from(
        &self,
        mut game: Game,
        white: &mut dyn Engine,
        black: &mut dyn Engine,
    ) -> GameRecord {
        white.new_game();
        black.new_game();

        let mut plies = 0u32;
        let (result, termination) = loop {
            let status = game.status();
            if let Some(termination) = Termination::from_status(status) {
                let result = match status {
                    GameStatus::Checkmate { winner: Color::White } => GameResult::Win,
                    GameStatus::Checkmate { winner: Color::Black } => GameResult::Loss,
                    _ => GameResult::Draw,
                };
                break (result, termination);
            }
            if plies >= self.config.max_moves {
                break (GameResult::Draw, Termination::MoveLimit);
            }

            let mover = game.position().side_to_move;
            let (reply, forfeit) = match mover {
                Color::White => (white.select_move(&mut game), GameResult::Loss),
                Color::Black => (black.select_move(&mut game), GameResult::Win),
            };

            let Some(mv) = reply else {
                warn!(side = %mover, "no move in a live position");
                break (forfeit, Termination::Forfeit);
            };
            if let Err(err) = game.play(mv) {
                warn!(side = %mover, %err, "rejected engine move");
                break (forfeit, Termination::Forfeit);
            }
            plies += 1;
            debug!(ply = plies, mv = %mv, "played");
        };

        GameRecord {
            white: white.name(),
            black: black.name(),
            result,
            termination,
            moves: game.moves_played().map(move_to_uci).collect(),
        }
    }
}

/// Quick utility to run a single match
pub fn quick_match(
    engine1: &mut dyn Engine,
    engine2: &mut dyn Engine,
    num_games: u32,
    max_moves: u32,
) -> MatchResult {
    let config = MatchConfig {
        num_games,
        max_moves,
        ..Default::default()
    };
    MatchRunner::new(config).run_match(engine1, engine2)
}

#[cfg(test)]
#[path = "match_runner_tests.rs"]
mod match_runner_tests;
