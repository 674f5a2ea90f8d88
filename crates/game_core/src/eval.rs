use crate::board::Board;
use crate::types::Color;

/// Static evaluation: material difference from `side`'s perspective.
///
/// O(1), since the board maintains both running score totals across
/// `make_move`/`unmake_move`. Positive favors `side`.
pub fn evaluate(board: &Board, side: Color) -> i32 {
    board.score(side) - board.score(side.other())
}
