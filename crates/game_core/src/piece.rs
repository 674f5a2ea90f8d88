use crate::types::{Color, Coord, PieceKind};

/// Sum of all starting piece weights for one side. The King's weight is part
/// of the total and is never deducted, since the King is never captured.
pub const STARTING_SCORE: i32 = 1290;

/// Material weight of a piece kind.
pub fn piece_weight(kind: PieceKind) -> i32 {
    match kind {
        PieceKind::King => 900,
        PieceKind::Queen => 90,
        PieceKind::Rook => 50,
        PieceKind::Bishop => 30,
        PieceKind::Knight => 30,
        PieceKind::Pawn => 10,
    }
}

/// A piece on the board. The stored coordinates always equal the coordinates
/// of the square that owns the piece; `Board` maintains that invariant on
/// every relocation, including hypothetical ones.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
    pub x: i8,
    pub y: i8,
    /// Cleared on the piece's first move; gates the pawn double-step and
    /// castle eligibility.
    pub first_move: bool,
}

impl Piece {
    pub fn new(kind: PieceKind, color: Color, x: i8, y: i8) -> Self {
        Self {
            kind,
            color,
            x,
            y,
            first_move: true,
        }
    }

    pub fn coords(&self) -> Coord {
        (self.x, self.y)
    }

    pub(crate) fn relocate(&mut self, x: i8, y: i8) {
        self.x = x;
        self.y = y;
    }

    pub fn weight(&self) -> i32 {
        piece_weight(self.kind)
    }
}
