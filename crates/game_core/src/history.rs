//! Undo snapshots for reversible move making.

use crate::board::{GameOver, Square};
use crate::types::Coord;

/// Everything `Board::make_move` touches, captured before mutation. Restoring
/// a snapshot byte-for-byte inverts the move, pawn promotion included.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Snapshot {
    pub(crate) white_score: i32,
    pub(crate) black_score: i32,
    pub(crate) white_king: Option<Coord>,
    pub(crate) black_king: Option<Coord>,
    pub(crate) gameover: Option<GameOver>,
    /// Source square as it was before the move, with its coordinates.
    pub(crate) source: (Coord, Square),
    /// Destination square as it was before the move, with its coordinates.
    pub(crate) dest: (Coord, Square),
}

/// Stack of undo snapshots, one per move made. Owned by the board and
/// touched only through `make_move`/`unmake_move`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MoveHistory {
    snapshots: Vec<Snapshot>,
}

impl MoveHistory {
    pub(crate) fn push(&mut self, snapshot: Snapshot) {
        self.snapshots.push(snapshot);
    }

    pub(crate) fn pop(&mut self) -> Option<Snapshot> {
        self.snapshots.pop()
    }

    /// Number of moves currently recorded.
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }
}
