use crate::error::{ChessError, ChessResult};
use crate::types::*;

pub const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

pub(crate) const KNIGHT_DELTAS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (-1, 2),
    (-2, 1),
    (1, -2),
    (2, -1),
    (-1, -2),
    (-2, -1),
];
pub(crate) const KING_DELTAS: [(i8, i8); 8] = [
    (1, 1),
    (1, 0),
    (1, -1),
    (0, 1),
    (0, -1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
];
pub(crate) const DIAGONALS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
pub(crate) const ORTHOGONALS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct CastlingRights {
    pub wk: bool,
    pub wq: bool,
    pub bk: bool,
    pub bq: bool,
}

impl CastlingRights {
    pub const ALL: CastlingRights = CastlingRights {
        wk: true,
        wq: true,
        bk: true,
        bq: true,
    };

    /// Clears whichever right depends on a piece standing on `sq`.
    fn touch(&mut self, sq: u8) {
        match sq {
            0 => self.wq = false,
            4 => {
                self.wk = false;
                self.wq = false;
            }
            7 => self.wk = false,
            56 => self.bq = false,
            60 => {
                self.bk = false;
                self.bq = false;
            }
            63 => self.bk = false,
            _ => {}
        }
    }

    fn to_fen(self) -> String {
        let mut s = String::new();
        for (flag, ch) in [(self.wk, 'K'), (self.wq, 'Q'), (self.bk, 'k'), (self.bq, 'q')] {
            if flag {
                s.push(ch);
            }
        }
        if s.is_empty() {
            s.push('-');
        }
        s
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Position {
    pub board: [Option<Piece>; 64],
    pub side_to_move: Color,
    pub castling: CastlingRights,
    pub en_passant: Option<u8>, // square behind a pawn that just advanced 2
    pub halfmove_clock: u32,
    pub fullmove_number: u32,
}

/// Everything `make_move` destroys, so `unmake_move` can restore it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Undo {
    pub captured: Option<Piece>,
    pub captured_sq: u8,
    pub castling: CastlingRights,
    pub en_passant: Option<u8>,
    pub halfmove_clock: u32,
    pub fullmove_number: u32,
    pub moved_piece: Piece,
    pub rook_move: Option<(u8, u8)>, // (rook_from, rook_to) for castling
}

impl Default for Position {
    fn default() -> Self {
        Self::startpos()
    }
}

impl Position {
    pub fn empty() -> Self {
        Position {
            board: [None; 64],
            side_to_move: Color::White,
            castling: CastlingRights::default(),
            en_passant: None,
            halfmove_clock: 0,
            fullmove_number: 1,
        }
    }

    pub fn startpos() -> Self {
        let mut p = Position::empty();
        p.castling = CastlingRights::ALL;
        let back = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];
        for (f, &kind) in back.iter().enumerate() {
            p.board[f] = Some(Piece::new(Color::White, kind));
            p.board[8 + f] = Some(Piece::new(Color::White, PieceKind::Pawn));
            p.board[48 + f] = Some(Piece::new(Color::Black, PieceKind::Pawn));
            p.board[56 + f] = Some(Piece::new(Color::Black, kind));
        }
        p
    }

    /// Parses Forsyth-Edwards Notation. The clock fields are optional.
    pub fn from_fen(fen: &str) -> ChessResult<Self> {
        let parts: Vec<&str> = fen.split_whitespace().collect();
        if parts.len() < 4 {
            return Err(ChessError::fen("expected at least 4 fields"));
        }

        let mut pos = Position::empty();
        let ranks: Vec<&str> = parts[0].split('/').collect();
        if ranks.len() != 8 {
            return Err(ChessError::fen("board section must have 8 ranks"));
        }

        for (row, rank_str) in ranks.iter().enumerate() {
            let rank = 7 - row as i8; // FEN lists rank 8 .. 1
            let mut file: i8 = 0;
            for ch in rank_str.chars() {
                if let Some(d) = ch.to_digit(10) {
                    file += d as i8;
                } else {
                    let kind = PieceKind::from_char(ch)
                        .ok_or_else(|| ChessError::fen(format!("unknown piece '{ch}'")))?;
                    let color = if ch.is_ascii_uppercase() {
                        Color::White
                    } else {
                        Color::Black
                    };
                    let s = sq(file, rank)
                        .ok_or_else(|| ChessError::fen(format!("rank {} overflows", rank + 1)))?;
                    pos.board[s as usize] = Some(Piece::new(color, kind));
                    file += 1;
                }
                if file > 8 {
                    return Err(ChessError::fen(format!("rank {} overflows", rank + 1)));
                }
            }
            if file != 8 {
                return Err(ChessError::fen(format!("rank {} is short", rank + 1)));
            }
        }

        pos.side_to_move = match parts[1] {
            "w" => Color::White,
            "b" => Color::Black,
            other => return Err(ChessError::fen(format!("bad side to move '{other}'"))),
        };

        if parts[2] != "-" {
            for c in parts[2].chars() {
                match c {
                    'K' => pos.castling.wk = true,
                    'Q' => pos.castling.wq = true,
                    'k' => pos.castling.bk = true,
                    'q' => pos.castling.bq = true,
                    _ => return Err(ChessError::fen(format!("bad castling flag '{c}'"))),
                }
            }
        }

        pos.en_passant = match parts[3] {
            "-" => None,
            coord => Some(
                coord_to_sq(coord)
                    .ok_or_else(|| ChessError::fen(format!("bad en-passant square '{coord}'")))?,
            ),
        };

        if let Some(hm) = parts.get(4) {
            pos.halfmove_clock = hm
                .parse()
                .map_err(|_| ChessError::fen(format!("bad halfmove clock '{hm}'")))?;
        }
        if let Some(fm) = parts.get(5) {
            pos.fullmove_number = fm
                .parse()
                .map_err(|_| ChessError::fen(format!("bad fullmove number '{fm}'")))?;
        }

        for color in [Color::White, Color::Black] {
            if pos.king_sq(color).is_none() {
                return Err(ChessError::fen(format!("{color} has no king")));
            }
        }

        Ok(pos)
    }

    pub fn to_fen(&self) -> String {
        let mut placement = String::new();
        for (row, cells) in self.grid().iter().enumerate() {
            let mut gap = 0;
            for cell in cells {
                match cell {
                    Some(pc) => {
                        if gap > 0 {
                            placement.push_str(&gap.to_string());
                            gap = 0;
                        }
                        placement.push(pc.to_fen_char());
                    }
                    None => gap += 1,
                }
            }
            if gap > 0 {
                placement.push_str(&gap.to_string());
            }
            if row < 7 {
                placement.push('/');
            }
        }
        let stm = match self.side_to_move {
            Color::White => 'w',
            Color::Black => 'b',
        };
        let ep = self.en_passant.map_or_else(|| "-".to_string(), sq_to_coord);
        format!(
            "{placement} {stm} {} {ep} {} {}",
            self.castling.to_fen(),
            self.halfmove_clock,
            self.fullmove_number
        )
    }

    /// The board as an 8x8 grid, row 0 = rank 8.
    pub fn grid(&self) -> BoardGrid {
        let mut grid: BoardGrid = [[None; 8]; 8];
        for (row, cells) in grid.iter_mut().enumerate() {
            for (col, cell) in cells.iter_mut().enumerate() {
                *cell = self.board[grid_to_sq(row, col) as usize];
            }
        }
        grid
    }

    pub fn king_sq(&self, c: Color) -> Option<u8> {
        let king = Some(Piece::new(c, PieceKind::King));
        self.board.iter().position(|&p| p == king).map(|i| i as u8)
    }

    pub fn piece_at(&self, sq: u8) -> Option<Piece> {
        self.board[sq as usize]
    }
    pub fn set_piece(&mut self, sq: u8, pc: Option<Piece>) {
        self.board[sq as usize] = pc;
    }

    pub fn in_check(&self, c: Color) -> bool {
        match self.king_sq(c) {
            Some(ksq) => self.is_square_attacked(ksq, c.other()),
            None => false,
        }
    }

    fn holds(&self, s: u8, by: Color, kinds: &[PieceKind]) -> bool {
        matches!(self.piece_at(s), Some(pc) if pc.color == by && kinds.contains(&pc.kind))
    }

    pub fn is_square_attacked(&self, target: u8, by: Color) -> bool {
        let tf = file_of(target);
        let tr = rank_of(target);

        // Pawns attack diagonally forward, so look one rank behind the target.
        let behind: i8 = match by {
            Color::White => -1,
            Color::Black => 1,
        };
        for df in [-1, 1] {
            if let Some(s) = sq(tf + df, tr + behind) {
                if self.holds(s, by, &[PieceKind::Pawn]) {
                    return true;
                }
            }
        }

        let leapers = [
            (&KNIGHT_DELTAS, PieceKind::Knight),
            (&KING_DELTAS, PieceKind::King),
        ];
        for (deltas, kind) in leapers {
            for (df, dr) in deltas {
                if let Some(s) = sq(tf + df, tr + dr) {
                    if self.holds(s, by, &[kind]) {
                        return true;
                    }
                }
            }
        }

        let sliders = [
            (&DIAGONALS, PieceKind::Bishop),
            (&ORTHOGONALS, PieceKind::Rook),
        ];
        for (dirs, kind) in sliders {
            for (df, dr) in dirs {
                let mut f = tf + df;
                let mut r = tr + dr;
                while let Some(s) = sq(f, r) {
                    if self.piece_at(s).is_some() {
                        if self.holds(s, by, &[kind, PieceKind::Queen]) {
                            return true;
                        }
                        break;
                    }
                    f += df;
                    r += dr;
                }
            }
        }

        false
    }

    /// Neither side can ever deliver mate: bare kings, or a single minor piece.
    pub fn is_insufficient_material(&self) -> bool {
        let mut minors = 0;
        for pc in self.board.iter().flatten() {
            match pc.kind {
                PieceKind::King => {}
                PieceKind::Knight | PieceKind::Bishop => minors += 1,
                PieceKind::Pawn | PieceKind::Rook | PieceKind::Queen => return false,
            }
        }
        minors <= 1
    }

    pub fn is_fifty_move_draw(&self) -> bool {
        self.halfmove_clock >= 100
    }

    /// The en-passant square, if the side to move can legally capture onto it.
    pub fn capturable_en_passant(&self) -> Option<u8> {
        let ep = self.en_passant?;
        let mover = self.side_to_move;
        let from_rank = match mover {
            Color::White => rank_of(ep) - 1,
            Color::Black => rank_of(ep) + 1,
        };
        let pawn = Some(Piece::new(mover, PieceKind::Pawn));
        for df in [-1, 1] {
            let Some(from) = sq(file_of(ep) + df, from_rank) else {
                continue;
            };
            if self.piece_at(from) != pawn {
                continue;
            }
            let mut mv = Move::new(from, ep);
            mv.is_en_passant = true;
            let mut scratch = self.clone();
            scratch.make_move(mv);
            if !scratch.in_check(mover) {
                return Some(ep);
            }
        }
        None
    }

    /// FNV-1a key over placement, side, castling and en-passant.
    ///
    /// Clocks are excluded so that repeated placements compare equal. The
    /// en-passant square only counts when a capture onto it is legal.
    pub fn position_key(&self) -> u64 {
        fn mix(h: u64, x: u64) -> u64 {
            (h ^ x).wrapping_mul(0x100000001b3)
        }

        let mut h = 0xcbf29ce484222325u64;
        h = mix(h, self.side_to_move.idx() as u64 + 1);
        let c = self.castling;
        h = mix(
            h,
            (c.wk as u64) | (c.wq as u64) << 1 | (c.bk as u64) << 2 | (c.bq as u64) << 3,
        );
        h = mix(h, self.capturable_en_passant().map_or(64, u64::from));
        for (i, cell) in self.board.iter().enumerate() {
            let v = match cell {
                Some(pc) => {
                    (i as u64) | ((pc.color.idx() as u64) << 6) | ((pc.kind as u64 + 1) << 7)
                }
                None => i as u64,
            };
            h = mix(h, v);
        }
        h
    }

    /// Plays a pseudo-legal move. The caller must pass the returned `Undo`
    /// back to `unmake_move` with the same move.
    pub fn make_move(&mut self, mv: Move) -> Undo {
        let from = mv.from;
        let to = mv.to;
        let moved = self.piece_at(from).expect("no piece on from-square");

        let mut captured_sq = to;
        if mv.is_en_passant {
            captured_sq = match moved.color {
                Color::White => to - 8,
                Color::Black => to + 8,
            };
        }
        let captured = self.piece_at(captured_sq);

        let mut undo = Undo {
            captured,
            captured_sq,
            castling: self.castling,
            en_passant: self.en_passant,
            halfmove_clock: self.halfmove_clock,
            fullmove_number: self.fullmove_number,
            moved_piece: moved,
            rook_move: None,
        };

        self.set_piece(captured_sq, None);
        self.set_piece(from, None);
        let landed = match mv.promo {
            Some(kind) if moved.kind == PieceKind::Pawn => Piece::new(moved.color, kind),
            _ => moved,
        };
        self.set_piece(to, Some(landed));

        if mv.is_castle {
            // Rook squares follow from the king's destination.
            let rook_move = match to {
                6 => Some((7, 5)),
                2 => Some((0, 3)),
                62 => Some((63, 61)),
                58 => Some((56, 59)),
                _ => None,
            };
            if let Some((rf, rt)) = rook_move {
                let rook = self.piece_at(rf);
                self.set_piece(rf, None);
                self.set_piece(rt, rook);
                undo.rook_move = Some((rf, rt));
            }
        }

        self.castling.touch(from);
        self.castling.touch(to);

        self.en_passant = None;
        if moved.kind == PieceKind::Pawn && (rank_of(from) - rank_of(to)).abs() == 2 {
            self.en_passant = sq(file_of(from), (rank_of(from) + rank_of(to)) / 2);
        }

        if moved.kind == PieceKind::Pawn || captured.is_some() {
            self.halfmove_clock = 0;
        } else {
            self.halfmove_clock += 1;
        }

        if self.side_to_move == Color::Black {
            self.fullmove_number += 1;
        }
        self.side_to_move = self.side_to_move.other();

        undo
    }

    pub fn unmake_move(&mut self, mv: Move, undo: Undo) {
        self.side_to_move = self.side_to_move.other();
        self.castling = undo.castling;
        self.en_passant = undo.en_passant;
        self.halfmove_clock = undo.halfmove_clock;
        self.fullmove_number = undo.fullmove_number;

        if let Some((rf, rt)) = undo.rook_move {
            let rook = self.piece_at(rt);
            self.set_piece(rt, None);
            self.set_piece(rf, rook);
        }

        // The moved piece goes back as it was, which also reverts promotions.
        self.set_piece(mv.to, None);
        self.set_piece(mv.from, Some(undo.moved_piece));
        self.set_piece(undo.captured_sq, undo.captured);
    }
}
