//! Minimax Chess Engine
//!
//! Depth-limited minimax with alpha-beta pruning over the material
//! evaluation. Moves are explored in the board's 1-ply ordered sequence so
//! the pruning window tightens early.

pub mod search;

use game_core::{Board, Engine, SearchReport};
use search::minimax;

pub use search::MATE_SCORE;

/// A fixed-depth minimax opponent.
#[derive(Debug, Clone)]
pub struct MinimaxEngine {
    depth: u8,
}

impl MinimaxEngine {
    pub fn new(depth: u8) -> Self {
        Self { depth }
    }

    pub fn depth(&self) -> u8 {
        self.depth
    }
}

impl Default for MinimaxEngine {
    fn default() -> Self {
        Self::new(3)
    }
}

impl Engine for MinimaxEngine {
    fn choose_move(&mut self, board: &Board) -> SearchReport {
        let mut scratch = board.clone();
        let side = scratch.turn();
        let mut nodes = 0;

        let (best_move, score) = minimax(
            &mut scratch,
            self.depth,
            i32::MIN / 2,
            i32::MAX / 2,
            true,
            side,
            &mut nodes,
        );

        SearchReport {
            best_move,
            score,
            depth: self.depth,
            nodes,
        }
    }

    fn name(&self) -> &str {
        "Minimax"
    }
}
