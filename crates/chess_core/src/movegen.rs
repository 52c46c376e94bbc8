//! Legal move generation.
//!
//! Moves come out in a fixed order: origin squares a1..h8, and per piece the
//! order of its direction table. Search tie-breaks rely on this being stable.

use crate::board::{Position, DIAGONALS, KING_DELTAS, KNIGHT_DELTAS, ORTHOGONALS};
use crate::types::*;

const PROMOTIONS: [PieceKind; 4] = [
    PieceKind::Queen,
    PieceKind::Rook,
    PieceKind::Bishop,
    PieceKind::Knight,
];

/// Generate all legal moves, returning a freshly allocated vector.
pub fn legal_moves(pos: &Position) -> Vec<Move> {
    let mut tmp = pos.clone();
    let mut out = Vec::with_capacity(64);
    legal_moves_into(&mut tmp, &mut out);
    out
}

/// Generate all legal moves into the provided buffer, reusing it across calls.
///
/// `pos` is used as scratch space and is left unchanged.
pub fn legal_moves_into(pos: &mut Position, out: &mut Vec<Move>) {
    out.clear();
    pseudo_moves(pos, out);

    let mover = pos.side_to_move;
    out.retain(|&mv| {
        let undo = pos.make_move(mv);
        let illegal = pos.in_check(mover);
        pos.unmake_move(mv, undo);
        !illegal
    });
}

/// True if the side to move has at least one legal move.
pub fn has_legal_move(pos: &Position) -> bool {
    !legal_moves(pos).is_empty()
}

fn pseudo_moves(pos: &Position, out: &mut Vec<Move>) {
    for from in 0..64u8 {
        let pc = match pos.piece_at(from) {
            Some(p) if p.color == pos.side_to_move => p,
            _ => continue,
        };
        match pc.kind {
            PieceKind::Pawn => gen_pawn(pos, from, pc.color, out),
            PieceKind::Knight => gen_steps(pos, from, pc.color, &KNIGHT_DELTAS, out),
            PieceKind::Bishop => gen_rays(pos, from, pc.color, &DIAGONALS, out),
            PieceKind::Rook => gen_rays(pos, from, pc.color, &ORTHOGONALS, out),
            PieceKind::Queen => {
                gen_rays(pos, from, pc.color, &DIAGONALS, out);
                gen_rays(pos, from, pc.color, &ORTHOGONALS, out);
            }
            PieceKind::King => {
                gen_steps(pos, from, pc.color, &KING_DELTAS, out);
                gen_castles(pos, pc.color, out);
            }
        }
    }
}

fn push_pawn_move(from: u8, to: u8, promo_rank: i8, out: &mut Vec<Move>) {
    if rank_of(to) == promo_rank {
        out.extend(PROMOTIONS.iter().map(|&pk| Move::with_promo(from, to, pk)));
    } else {
        out.push(Move::new(from, to));
    }
}

fn gen_pawn(pos: &Position, from: u8, c: Color, out: &mut Vec<Move>) {
    let f = file_of(from);
    let r = rank_of(from);
    let (dir, start_rank, promo_rank): (i8, i8, i8) = match c {
        Color::White => (1, 1, 7),
        Color::Black => (-1, 6, 0),
    };

    if let Some(to) = sq(f, r + dir) {
        if pos.piece_at(to).is_none() {
            push_pawn_move(from, to, promo_rank, out);
            if r == start_rank {
                if let Some(to2) = sq(f, r + 2 * dir) {
                    if pos.piece_at(to2).is_none() {
                        out.push(Move::new(from, to2));
                    }
                }
            }
        }
    }

    for df in [-1, 1] {
        let Some(to) = sq(f + df, r + dir) else {
            continue;
        };
        match pos.piece_at(to) {
            Some(target) if target.color != c => push_pawn_move(from, to, promo_rank, out),
            None if pos.en_passant == Some(to) => {
                let mut mv = Move::new(from, to);
                mv.is_en_passant = true;
                out.push(mv);
            }
            _ => {}
        }
    }
}

fn gen_steps(pos: &Position, from: u8, c: Color, deltas: &[(i8, i8)], out: &mut Vec<Move>) {
    let f = file_of(from);
    let r = rank_of(from);
    for (df, dr) in deltas {
        if let Some(to) = sq(f + df, r + dr) {
            match pos.piece_at(to) {
                Some(pc) if pc.color == c => {}
                _ => out.push(Move::new(from, to)),
            }
        }
    }
}

fn gen_rays(pos: &Position, from: u8, c: Color, dirs: &[(i8, i8)], out: &mut Vec<Move>) {
    let f0 = file_of(from);
    let r0 = rank_of(from);
    for (df, dr) in dirs {
        let mut f = f0 + df;
        let mut r = r0 + dr;
        while let Some(to) = sq(f, r) {
            match pos.piece_at(to) {
                None => out.push(Move::new(from, to)),
                Some(pc) => {
                    if pc.color != c {
                        out.push(Move::new(from, to));
                    }
                    break;
                }
            }
            f += df;
            r += dr;
        }
    }
}

/// Castle table rows: right flag, king from, king to, squares that must be
/// empty, squares the king crosses that must not be attacked.
type CastleSpec = (bool, u8, u8, &'static [u8], &'static [u8]);

fn gen_castles(pos: &Position, c: Color, out: &mut Vec<Move>) {
    let cr = pos.castling;
    let specs: [CastleSpec; 2] = match c {
        Color::White => [
            (cr.wk, 4, 6, &[5, 6], &[5, 6]),
            (cr.wq, 4, 2, &[3, 2, 1], &[3, 2]),
        ],
        Color::Black => [
            (cr.bk, 60, 62, &[61, 62], &[61, 62]),
            (cr.bq, 60, 58, &[59, 58, 57], &[59, 58]),
        ],
    };

    let king = Some(Piece::new(c, PieceKind::King));
    let enemy = c.other();
    for (allowed, king_from, king_to, empty, safe) in specs {
        if !allowed || pos.piece_at(king_from) != king {
            continue;
        }
        if empty.iter().any(|&s| pos.piece_at(s).is_some()) {
            continue;
        }
        // Can't castle out of or through check.
        if pos.is_square_attacked(king_from, enemy)
            || safe.iter().any(|&s| pos.is_square_attacked(s, enemy))
        {
            continue;
        }
        let mut mv = Move::new(king_from, king_to);
        mv.is_castle = true;
        out.push(mv);
    }
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;
