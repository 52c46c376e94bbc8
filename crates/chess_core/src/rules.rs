//! The narrow interface search code uses to drive a chess position.

use crate::error::ChessResult;
use crate::game::{Game, GameStatus};
use crate::types::*;

/// Rules-engine capability consumed by move-search code.
///
/// Implementations own the position. Callers enumerate moves, then walk the
/// tree with `apply`/`undo`; each `apply` must be paired with exactly one
/// `undo` before the caller returns.
pub trait RulesEngine {
    /// Legal moves in a deterministic order. Empty iff checkmate or stalemate.
    fn legal_moves(&self) -> Vec<Move>;

    /// Plays a move taken from `legal_moves`. Other moves may panic.
    fn apply(&mut self, mv: Move);

    /// Reverts the most recent unmatched `apply`.
    fn undo(&mut self) -> ChessResult<Move>;

    fn piece_at(&self, sq: u8) -> Option<Piece>;

    fn side_to_move(&self) -> Color;

    /// 8x8 grid, row 0 = rank 8.
    fn board(&self) -> BoardGrid;

    fn status(&self) -> GameStatus;
}

impl RulesEngine for Game {
    fn legal_moves(&self) -> Vec<Move> {
        Game::legal_moves(self)
    }

    fn apply(&mut self, mv: Move) {
        Game::apply(self, mv);
    }

    fn undo(&mut self) -> ChessResult<Move> {
        Game::undo(self)
    }

    fn piece_at(&self, sq: u8) -> Option<Piece> {
        self.position().piece_at(sq)
    }

    fn side_to_move(&self) -> Color {
        self.position().side_to_move
    }

    fn board(&self) -> BoardGrid {
        self.position().grid()
    }

    fn status(&self) -> GameStatus {
        Game::status(self)
    }
}
