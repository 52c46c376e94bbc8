//! Material plus pawn-structure evaluation.

use chess_core::{BoardGrid, Color, PieceKind, RulesEngine};

/// Evaluation score. Positive favors White. A pawn is worth 10.
pub type Score = f64;

/// Pawn bonus indexed by [rank-from-own-side row][file].
///
/// White pawns read row `7 - i` and Black pawns row `i`, where `i` is the
/// grid row (row 0 = rank 8), which keeps the table color-symmetric.
const PAWN_TABLE: [[Score; 8]; 8] = [
    [0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0],
    [5.0, 5.0, 5.0, 5.0, 5.0, 5.0, 5.0, 5.0],
    [1.0, 1.0, 2.0, 3.0, 3.0, 2.0, 1.0, 1.0],
    [0.5, 0.5, 1.0, 2.5, 2.5, 1.0, 0.5, 0.5],
    [0.0, 0.0, 0.0, 2.0, 2.0, 0.0, 0.0, 0.0],
    [0.5, -0.5, -1.0, 0.0, 0.0, -1.0, -0.5, 0.5],
    [0.5, 1.0, 1.0, -2.0, -2.0, 1.0, 1.0, 0.5],
    [0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0],
];

/// Returns the material value of a piece.
#[inline]
pub fn piece_value(kind: PieceKind) -> Score {
    match kind {
        PieceKind::Pawn => 10.0,
        PieceKind::Knight => 30.0,
        PieceKind::Bishop => 33.0,
        PieceKind::Rook => 50.0,
        PieceKind::Queen => 90.0,
        PieceKind::King => 900.0,
    }
}

/// Positional bonus for a pawn of `color` standing on grid cell (`row`, `col`).
#[inline]
pub fn pawn_bonus(color: Color, row: usize, col: usize) -> Score {
    let table_row = match color {
        Color::White => 7 - row,
        Color::Black => row,
    };
    PAWN_TABLE[table_row][col]
}

/// Evaluates the position from White's perspective.
///
/// Terminal positions are not special-cased: a mated side is still scored
/// on material.
pub fn evaluate<R: RulesEngine + ?Sized>(rules: &R) -> Score {
    evaluate_grid(&rules.board())
}

/// Evaluates an 8x8 grid (row 0 = rank 8).
pub fn evaluate_grid(grid: &BoardGrid) -> Score {
    let mut score = 0.0;
    for (row, cells) in grid.iter().enumerate() {
        for (col, cell) in cells.iter().enumerate() {
            let Some(pc) = cell else { continue };
            let mut v = piece_value(pc.kind);
            if pc.kind == PieceKind::Pawn {
                v += pawn_bonus(pc.color, row, col);
            }
            score += if pc.color == Color::White { v } else { -v };
        }
    }
    score
}

#[cfg(test)]
#[path = "eval_tests.rs"]
mod eval_tests;
