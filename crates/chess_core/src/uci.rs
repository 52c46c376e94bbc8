use crate::board::Position;
use crate::error::{ChessError, ChessResult};
use crate::game::Game;
use crate::movegen::legal_moves;
use crate::types::*;

pub fn move_to_uci(mv: Move) -> String {
    mv.to_string()
}

/// Resolves long algebraic text (`e2e4`, `e7e8q`) against the legal moves of
/// `pos`, so castle and en-passant flags come out right.
pub fn parse_uci_move(pos: &Position, txt: &str) -> Option<Move> {
    if !txt.is_ascii() || !(4..=5).contains(&txt.len()) {
        return None;
    }
    let from = coord_to_sq(&txt[0..2])?;
    let to = coord_to_sq(&txt[2..4])?;
    let promo = match txt[4..].chars().next() {
        Some(ch) => Some(PieceKind::from_char(ch)?),
        None => None,
    };

    legal_moves(pos)
        .into_iter()
        .find(|m| m.from == from && m.to == to && m.promo == promo)
}

/// Like [`parse_uci_move`], but reports why the text was rejected: a square
/// that is not on the board, or a move that is not legal here.
pub fn resolve_uci_move(pos: &Position, txt: &str) -> ChessResult<Move> {
    for range in [0..2, 2..4] {
        if txt.get(range).and_then(coord_to_sq).is_none() {
            return Err(ChessError::InvalidSquare(txt.to_string()));
        }
    }
    parse_uci_move(pos, txt).ok_or_else(|| ChessError::IllegalMove {
        uci: txt.to_string(),
    })
}

/// Applies the arguments of a UCI `position` command.
///
/// Supports `startpos` and `fen <fields>`, each optionally followed by
/// `moves <m1> <m2> ...`. On error `game` is left untouched.
pub fn set_position_from_uci(game: &mut Game, args: &[&str]) -> ChessResult<()> {
    let moves_at = args.iter().position(|&a| a == "moves");
    let (setup, moves) = match moves_at {
        Some(i) => (&args[..i], &args[i + 1..]),
        None => (args, &[][..]),
    };

    let mut next = match setup.first() {
        None | Some(&"startpos") => Game::new(),
        Some(&"fen") => Game::from_fen(&setup[1..].join(" "))?,
        Some(other) => {
            return Err(ChessError::InvalidFen {
                reason: format!("unknown position keyword '{other}'"),
            })
        }
    };

    for txt in moves {
        let mv = resolve_uci_move(next.position(), txt)?;
        next.apply(mv);
    }

    *game = next;
    Ok(())
}

#[cfg(test)]
#[path = "uci_tests.rs"]
mod uci_tests;
