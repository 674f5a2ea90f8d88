//! Per-piece pseudo-legal move generation.
//!
//! Every generator is a pure read of the board: results respect bounds,
//! occupancy, and capture rules but may still leave the mover's own King in
//! check. `Board::in_check_after_move` is the single filter that turns a
//! pseudo-legal destination into a legal one.

use crate::board::Board;
use crate::piece::Piece;
use crate::types::{Coord, PieceKind};

const ORTHOGONAL: [(i8, i8); 4] = [(0, -1), (0, 1), (-1, 0), (1, 0)];
const DIAGONAL: [(i8, i8); 4] = [(-1, -1), (1, -1), (-1, 1), (1, 1)];

/// Pseudo-legal destinations for `piece` on `board`.
pub fn valid_moves(piece: &Piece, board: &Board) -> Vec<Coord> {
    match piece.kind {
        PieceKind::King => king_moves(piece, board),
        PieceKind::Queen => queen_moves(piece, board),
        PieceKind::Rook => ray_moves(piece, board, &ORTHOGONAL),
        PieceKind::Bishop => ray_moves(piece, board, &DIAGONAL),
        PieceKind::Knight => knight_moves(piece, board),
        PieceKind::Pawn => pawn_moves(piece, board),
    }
}

fn king_moves(piece: &Piece, board: &Board) -> Vec<Coord> {
    let mut moves = Vec::new();
    for x in piece.x - 1..=piece.x + 1 {
        for y in piece.y - 1..=piece.y + 1 {
            // The piece's own square is occupied by itself and filtered here.
            if board.valid_move((x, y), piece.color) {
                moves.push((x, y));
            }
        }
    }
    moves
}

/// A Queen's move set is a Rook's and a Bishop's combined.
fn queen_moves(piece: &Piece, board: &Board) -> Vec<Coord> {
    let mut moves = ray_moves(piece, board, &ORTHOGONAL);
    moves.extend(ray_moves(piece, board, &DIAGONAL));
    moves
}

/// Casts a ray in each direction, stopping at the first occupied square
/// (inclusive when it holds an enemy).
fn ray_moves(piece: &Piece, board: &Board, directions: &[(i8, i8)]) -> Vec<Coord> {
    let mut moves = Vec::new();
    for &(dx, dy) in directions {
        let (mut x, mut y) = (piece.x + dx, piece.y + dy);
        while board.valid_move((x, y), piece.color) {
            moves.push((x, y));
            if board.piece_at((x, y)).is_some() {
                break;
            }
            x += dx;
            y += dy;
        }
    }
    moves
}

fn knight_moves(piece: &Piece, board: &Board) -> Vec<Coord> {
    let mut moves = Vec::new();
    for x in piece.x - 2..=piece.x + 2 {
        for y in piece.y - 2..=piece.y + 2 {
            let (dx, dy) = ((piece.x - x).abs(), (piece.y - y).abs());
            if ((dx, dy) == (1, 2) || (dx, dy) == (2, 1)) && board.valid_move((x, y), piece.color) {
                moves.push((x, y));
            }
        }
    }
    moves
}

/// Pawn movement follows the board's side-relative forward flag, not the
/// pawn's color: whichever side is "at the bottom" this turn advances upward.
/// This asymmetry is inherited from the board presentation and is relied on
/// by `Board::in_check_after_move`, which flips the flag before probing enemy
/// replies. Diagonal squares are capture-only; there is no en passant.
fn pawn_moves(piece: &Piece, board: &Board) -> Vec<Coord> {
    let dir: i8 = if board.bottom_player_turn() { -1 } else { 1 };
    let mut moves = Vec::new();

    let one = (piece.x, piece.y + dir);
    if board.valid_move(one, piece.color) && board.piece_at(one).is_none() {
        moves.push(one);

        // Double-step only off the starting square, and only through air.
        let two = (piece.x, piece.y + 2 * dir);
        if piece.first_move && board.valid_move(two, piece.color) && board.piece_at(two).is_none() {
            moves.push(two);
        }
    }

    for dx in [-1, 1] {
        let diag = (piece.x + dx, piece.y + dir);
        if board.valid_move(diag, piece.color) && board.enemy_at(diag, piece.color) {
            moves.push(diag);
        }
    }

    moves
}

#[cfg(test)]
#[path = "rules_tests.rs"]
mod rules_tests;
