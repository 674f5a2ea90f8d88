use super::*;
use crate::piece::STARTING_SCORE;

#[test]
fn starting_position_state() {
    let board = Board::new(Color::White);
    assert_eq!(board.score(Color::White), STARTING_SCORE);
    assert_eq!(board.score(Color::Black), STARTING_SCORE);
    assert_eq!(board.king_coords(Color::White), Some((4, 7)));
    assert_eq!(board.king_coords(Color::Black), Some((4, 0)));
    assert_eq!(board.turn(), Color::White);
    assert!(board.bottom_player_turn());
    assert_eq!(board.gameover(), None);
    assert_eq!(board.moves_played(), 0);
}

#[test]
fn square_shades_alternate() {
    let board = Board::empty(Color::White);
    assert_eq!(board.shade_at((0, 0)), Shade::Light);
    assert_eq!(board.shade_at((1, 0)), Shade::Dark);
    assert_eq!(board.shade_at((1, 1)), Shade::Light);
    assert_eq!(board.shade_at((7, 0)), Shade::Dark);
}

#[test]
fn board_is_flipped_for_black_player() {
    let board = Board::new(Color::Black);
    let bottom_king = board.piece_at((4, 7)).unwrap();
    assert_eq!(bottom_king.kind, PieceKind::King);
    assert_eq!(bottom_king.color, Color::Black);
    assert_eq!(board.king_coords(Color::Black), Some((4, 7)));
    assert_eq!(board.king_coords(Color::White), Some((4, 0)));
    // White still moves first, from the top of the board.
    assert_eq!(board.turn(), Color::White);
    assert!(!board.bottom_player_turn());
}

#[test]
fn valid_move_predicate() {
    let board = Board::new(Color::White);
    assert!(board.valid_move((0, 5), Color::White));
    assert!(board.valid_move((0, 1), Color::White));
    assert!(!board.valid_move((0, 6), Color::White));
    assert!(!board.valid_move((-1, 0), Color::White));
    assert!(!board.valid_move((0, 8), Color::White));
}

#[test]
fn capture_deducts_from_opponent_score() {
    let mut board = Board::empty(Color::White);
    board.place(PieceKind::King, Color::White, (7, 7));
    board.place(PieceKind::King, Color::Black, (7, 0));
    board.place(PieceKind::Rook, Color::White, (0, 0));
    board.place(PieceKind::Pawn, Color::Black, (0, 5));

    board.make_move((0, 0), (0, 5));
    assert_eq!(board.score(Color::Black), 900);
    assert_eq!(board.score(Color::White), 950);
    assert!(board.piece_at((0, 0)).is_none());
    assert_eq!(board.piece_at((0, 5)).unwrap().kind, PieceKind::Rook);
}

#[test]
fn pawn_promotes_on_forward_back_rank() {
    let mut board = Board::empty(Color::White);
    board.place(PieceKind::King, Color::White, (7, 7));
    board.place(PieceKind::King, Color::Black, (7, 0));
    board.place(PieceKind::Pawn, Color::White, (0, 1));

    board.make_move((0, 1), (0, 0));
    let promoted = board.piece_at((0, 0)).unwrap();
    assert_eq!(promoted.kind, PieceKind::Queen);
    assert_eq!(promoted.color, Color::White);
    // Promotion swaps the piece without touching the score totals.
    assert_eq!(board.score(Color::White), 910);
}

#[test]
fn moved_piece_loses_first_move_flag() {
    let mut board = Board::new(Color::White);
    board.make_move((4, 6), (4, 4));
    assert!(!board.piece_at((4, 4)).unwrap().first_move);
}

#[test]
fn unmake_restores_the_position_exactly() {
    let mut board = Board::new(Color::White);
    let before = board.clone();
    board.make_move((4, 6), (4, 4));
    board.next_turn();
    board.unmake_move();
    assert_eq!(board, before);
}

#[test]
fn unmake_inverts_capture_and_promotion_together() {
    let mut board = Board::empty(Color::White);
    board.place(PieceKind::King, Color::White, (7, 7));
    board.place(PieceKind::King, Color::Black, (7, 0));
    board.place(PieceKind::Pawn, Color::White, (0, 1));
    board.place(PieceKind::Rook, Color::Black, (1, 0));
    let before = board.clone();

    board.make_move((0, 1), (1, 0));
    assert_eq!(board.piece_at((1, 0)).unwrap().kind, PieceKind::Queen);
    assert_eq!(board.score(Color::Black), 900);

    board.next_turn();
    board.unmake_move();
    assert_eq!(board, before);
}

#[test]
fn in_check_after_move_leaves_no_trace() {
    let mut board = Board::new(Color::White);
    let before = board.clone();
    assert!(!board.in_check_after_move((4, 6), (4, 4), Color::White));
    assert_eq!(board, before);
}

#[test]
fn king_cache_follows_the_king() {
    let mut board = Board::empty(Color::White);
    board.place(PieceKind::King, Color::White, (4, 7));
    board.place(PieceKind::King, Color::Black, (0, 0));

    board.make_move((4, 7), (4, 6));
    assert_eq!(board.king_coords(Color::White), Some((4, 6)));

    board.next_turn();
    board.unmake_move();
    assert_eq!(board.king_coords(Color::White), Some((4, 7)));
}

#[test]
fn pinned_rook_may_only_move_along_the_pin() {
    let mut board = Board::empty(Color::White);
    board.place(PieceKind::King, Color::White, (4, 7));
    board.place(PieceKind::Rook, Color::White, (4, 6));
    board.place(PieceKind::Queen, Color::Black, (4, 0));
    board.place(PieceKind::King, Color::Black, (0, 0));

    let destinations = board.legal_destinations((4, 6));
    assert!(destinations.contains(&(4, 5)));
    assert!(destinations.contains(&(4, 0)));
    assert!(!destinations.contains(&(3, 6)));
    assert!(!destinations.contains(&(5, 6)));
}

#[test]
fn castle_report_with_clear_home_rank() {
    let mut board = Board::empty(Color::White);
    board.place(PieceKind::King, Color::White, (4, 7));
    board.place(PieceKind::Rook, Color::White, (0, 7));
    board.place(PieceKind::Rook, Color::White, (7, 7));
    assert_eq!(board.can_castle(Color::White), vec![(2, 7), (6, 7)]);
}

#[test]
fn no_castle_from_the_starting_position() {
    let board = Board::new(Color::White);
    assert!(board.can_castle(Color::White).is_empty());
    assert!(board.can_castle(Color::Black).is_empty());
}

#[test]
fn no_castle_after_the_king_has_moved() {
    let mut board = Board::empty(Color::White);
    board.place(PieceKind::King, Color::White, (4, 7));
    board.place(PieceKind::Rook, Color::White, (7, 7));
    board.place(PieceKind::King, Color::Black, (0, 0));

    board.make_move((4, 7), (4, 6));
    board.next_turn();
    board.next_turn();
    board.make_move((4, 6), (4, 7));
    assert!(board.can_castle(Color::White).is_empty());
}

#[test]
fn get_moves_lists_captures_first() {
    let mut board = Board::new(Color::White);
    board.make_move((4, 6), (4, 4));
    board.next_turn();
    board.make_move((3, 1), (3, 3));
    board.next_turn();

    let moves = board.get_moves();
    assert_eq!(moves[0], ((4, 4), (3, 3)));
    assert!(moves.len() > 1);
}

#[test]
fn get_moves_ordered_is_a_permutation_of_get_moves() {
    let mut board = Board::new(Color::White);
    board.make_move((4, 6), (4, 4));
    board.next_turn();
    board.make_move((3, 1), (3, 3));
    board.next_turn();

    let before = board.clone();
    let plain = board.get_moves();
    let ordered = board.get_moves_ordered();
    assert_eq!(board, before);
    assert_eq!(plain.len(), ordered.len());
    for mv in &plain {
        assert!(ordered.contains(mv));
    }
    // The only capture wins a Pawn and must sort to the front.
    assert_eq!(ordered[0], ((4, 4), (3, 3)));
}

#[test]
fn evaluation_is_material_difference() {
    let mut board = Board::empty(Color::White);
    board.place(PieceKind::King, Color::White, (4, 7));
    board.place(PieceKind::Queen, Color::White, (3, 7));
    board.place(PieceKind::King, Color::Black, (4, 0));
    assert_eq!(evaluate(&board, Color::White), 90);
    assert_eq!(evaluate(&board, Color::Black), -90);

    let start = Board::new(Color::White);
    assert_eq!(evaluate(&start, Color::White), 0);
}
