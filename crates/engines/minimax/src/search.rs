//! Recursive minimax search with alpha-beta pruning.

use game_core::{evaluate, Board, Color, PlannedMove};

/// Score assigned when the side being searched for has won (or lost, when
/// negated). Far outside the reachable material range, so any forced mate
/// dominates any material gain.
pub const MATE_SCORE: i32 = 100_000;

/// Explores the game tree to `depth` plies and returns the best move with
/// its score, always from `side`'s perspective.
///
/// `maximizing` alternates each ply: true when `side` is to move. A node
/// with no legal moves is terminal and scores as a loss for the side to
/// move, so a mate found at shallower depth wins out through the strict
/// improvement tie-break. Stalemates at the horizon score the same way; the
/// search does not distinguish them, the session's detectors do.
///
/// The board is mutated during the search through make/unmake pairs and is
/// returned to its entry state before the function returns.
pub fn minimax(
    board: &mut Board,
    depth: u8,
    mut alpha: i32,
    mut beta: i32,
    maximizing: bool,
    side: Color,
    nodes: &mut u64,
) -> (Option<PlannedMove>, i32) {
    *nodes += 1;

    if depth == 0 || board.gameover().is_some() {
        return (None, evaluate(board, side));
    }

    let moves = board.get_moves_ordered();
    if moves.is_empty() {
        let score = if maximizing { -MATE_SCORE } else { MATE_SCORE };
        return (None, score);
    }

    let mut best_move = None;

    if maximizing {
        let mut best_score = i32::MIN;
        for (source, dest) in moves {
            board.make_move(source, dest);
            board.next_turn();
            let (_, score) = minimax(board, depth - 1, alpha, beta, false, side, nodes);
            board.unmake_move();

            if score > best_score {
                best_score = score;
                best_move = Some((source, dest));
            }
            alpha = alpha.max(best_score);
            if alpha >= beta {
                break;
            }
        }
        (best_move, best_score)
    } else {
        let mut best_score = i32::MAX;
        for (source, dest) in moves {
            board.make_move(source, dest);
            board.next_turn();
            let (_, score) = minimax(board, depth - 1, alpha, beta, true, side, nodes);
            board.unmake_move();

            if score < best_score {
                best_score = score;
                best_move = Some((source, dest));
            }
            beta = beta.min(best_score);
            if alpha >= beta {
                break;
            }
        }
        (best_move, best_score)
    }
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
