pub mod board;
pub mod error;
pub mod game;
pub mod movegen;
pub mod perft;
pub mod rules;
pub mod types;
pub mod uci;

// Re-export core game logic (not engine-specific)
pub use board::*;
pub use error::*;
pub use game::*;
pub use movegen::*;
pub use perft::perft;
pub use rules::RulesEngine;
pub use types::*;
pub use uci::*;

// =============================================================================
// Engine trait: implemented by move pickers (the leveled AI, test doubles)
// =============================================================================

/// Trait that all chess engines must implement.
///
/// Engines borrow the game mutably so they can walk the move tree in place;
/// the game must be back in its starting state when `select_move` returns.
pub trait Engine {
    /// Picks a move for the side to move, or `None` if there are no legal moves.
    fn select_move(&mut self, game: &mut Game) -> Option<Move>;

    /// Returns the engine's name for UCI identification
    fn name(&self) -> String;

    /// Returns the engine's author for UCI identification
    fn author(&self) -> &str {
        "Vision-chess"
    }

    /// Reset internal state for a new game
    fn new_game(&mut self) {}

    /// Optional: Set a UCI option. Returns true if the option was recognized.
    fn set_option(&mut self, _name: &str, _value: &str) -> bool {
        false
    }
}
