pub mod board;
pub mod eval;
pub mod history;
pub mod piece;
pub mod rules;
pub mod types;

// Re-export core game logic (not engine-specific)
pub use board::{Board, GameOver, Shade, Square};
pub use eval::evaluate;
pub use history::MoveHistory;
pub use piece::{piece_weight, Piece, STARTING_SCORE};
pub use rules::valid_moves;
pub use types::{Color, Coord, PieceKind, PlannedMove};

// =============================================================================
// Engine trait, implemented by all automated opponents (minimax, random, ...)
// =============================================================================

/// Result of asking an engine for a move.
#[derive(Debug, Clone)]
pub struct SearchReport {
    /// The best move found (None if no legal moves)
    pub best_move: Option<PlannedMove>,
    /// Score from the engine side's perspective, in material weight units
    pub score: i32,
    /// Search depth used
    pub depth: u8,
    /// Number of nodes visited (for stats)
    pub nodes: u64,
}

/// Trait that all automated opponents implement.
///
/// Engines receive a read-only view of the live board and must do all of
/// their exploration on a clone of it; the live game state is only ever
/// mutated by the session that owns it.
pub trait Engine: Send {
    /// Pick a move for the side to move on the given board.
    fn choose_move(&mut self, board: &Board) -> SearchReport;

    /// Display name of the engine.
    fn name(&self) -> &str;

    /// Reset internal state for a new game.
    fn new_game(&mut self) {}
}
