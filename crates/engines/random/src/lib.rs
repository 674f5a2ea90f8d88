//! Random Move Chess Engine
//!
//! Selects moves uniformly at random from all legal moves. Useful for:
//! - Baseline comparisons (any real opponent should easily beat this)
//! - Stress testing move generation and the session plumbing

use game_core::{Board, Engine, SearchReport};
use rand::seq::SliceRandom;
use rand::thread_rng;


/// A chess engine that plays random legal moves.
///
/// This engine provides no evaluation - it simply picks a random move
/// from all available legal moves. It's the simplest possible engine
/// and serves as a baseline for testing.
#[derive(Debug, Clone, Default)]
pub struct RandomEngine;

impl RandomEngine {
    pub fn new() -> Self {
        Self
    }
}

impl Engine for RandomEngine {
    fn choose_move(&mut self, board: &Board) -> SearchReport {
        let mut scratch = board.clone();
        let moves = scratch.get_moves();

        let best_move = moves.choose(&mut thread_rng()).copied();

        SearchReport {
            best_move,
            score: 0,
            depth: 1,
            nodes: 1,
        }
    }

    fn name(&self) -> &str {
        "Random"
    }
}
