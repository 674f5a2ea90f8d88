/// Board coordinates as `(x, y)`: `x` is the file (0..8 left to right) and
/// `y` is the rank (0..8 top to bottom, as the board is presented on screen).
pub type Coord = (i8, i8);

/// A move described as (source, destination) coordinates.
pub type PlannedMove = (Coord, Coord);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub fn other(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PieceKind {
    King,
    Queen,
    Rook,
    Bishop,
    Knight,
    Pawn,
}
