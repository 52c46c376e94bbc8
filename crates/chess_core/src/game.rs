//! A position plus the history needed to take moves back.

use crate::board::{Position, Undo};
use crate::error::{ChessError, ChessResult};
use crate::movegen::{legal_moves, legal_moves_into};
use crate::types::*;
use crate::uci::move_to_uci;

/// Why a game ended without a winner (other than stalemate).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DrawReason {
    FiftyMoves,
    ThreefoldRepetition,
    InsufficientMaterial,
}

/// Terminal state of the side to move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    Ongoing,
    Checkmate { winner: Color },
    Stalemate,
    Draw(DrawReason),
}

/// A game in progress: the current position and a stack of played moves.
///
/// Every `apply` pushes one entry and every `undo` pops one, so the
/// position after `apply(m); undo()` is identical to the one before.
#[derive(Clone, Debug)]
pub struct Game {
    pos: Position,
    played: Vec<(Move, Undo)>,
    keys: Vec<u64>,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    pub fn new() -> Self {
        Self::from_position(Position::startpos())
    }

    pub fn from_position(pos: Position) -> Self {
        let keys = vec![pos.position_key()];
        Self {
            pos,
            played: Vec::new(),
            keys,
        }
    }

    pub fn from_fen(fen: &str) -> ChessResult<Self> {
        Position::from_fen(fen).map(Self::from_position)
    }

    pub fn position(&self) -> &Position {
        &self.pos
    }

    /// Moves played since the game was set up, oldest first.
    pub fn moves_played(&self) -> impl Iterator<Item = Move> + '_ {
        self.played.iter().map(|(mv, _)| *mv)
    }

    /// Number of `apply` calls still waiting for their `undo`.
    pub fn depth(&self) -> usize {
        self.played.len()
    }

    pub fn legal_moves(&self) -> Vec<Move> {
        legal_moves(&self.pos)
    }

    /// Plays a move the caller obtained from `legal_moves`.
    ///
    /// # Panics
    ///
    /// Panics if the move's origin square is empty. Moves from outside the
    /// engine go through [`Game::play`], which checks legality first.
    pub fn apply(&mut self, mv: Move) {
        let undo = self.pos.make_move(mv);
        self.played.push((mv, undo));
        self.keys.push(self.pos.position_key());
    }

    /// Takes back the most recent `apply`.
    pub fn undo(&mut self) -> ChessResult<Move> {
        let (mv, undo) = self.played.pop().ok_or(ChessError::NothingToUndo)?;
        self.keys.pop();
        self.pos.unmake_move(mv, undo);
        Ok(mv)
    }

    /// Plays a move from outside the engine, rejecting it unless it is legal.
    pub fn play(&mut self, mv: Move) -> ChessResult<()> {
        if !self.legal_moves().contains(&mv) {
            return Err(ChessError::IllegalMove {
                uci: move_to_uci(mv),
            });
        }
        self.apply(mv);
        Ok(())
    }

    /// Times the current position occurred, counting the present one.
    pub fn repetitions(&self) -> usize {
        let current = self.pos.position_key();
        self.keys.iter().filter(|&&k| k == current).count()
    }

    pub fn status(&self) -> GameStatus {
        let mut scratch = self.pos.clone();
        let mut moves = Vec::with_capacity(64);
        legal_moves_into(&mut scratch, &mut moves);

        if moves.is_empty() {
            return if self.pos.in_check(self.pos.side_to_move) {
                GameStatus::Checkmate {
                    winner: self.pos.side_to_move.other(),
                }
            } else {
                GameStatus::Stalemate
            };
        }
        if self.pos.is_fifty_move_draw() {
            return GameStatus::Draw(DrawReason::FiftyMoves);
        }
        if self.repetitions() >= 3 {
            return GameStatus::Draw(DrawReason::ThreefoldRepetition);
        }
        if self.pos.is_insufficient_material() {
            return GameStatus::Draw(DrawReason::InsufficientMaterial);
        }
        GameStatus::Ongoing
    }
}

#[cfg(test)]
#[path = "game_tests.rs"]
mod game_tests;
