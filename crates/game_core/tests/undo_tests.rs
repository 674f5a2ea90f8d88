//! Exhaustive shallow sweeps over the opening tree, run in parallel.
//!
//! Every make/unmake pair must restore the position bit for bit, and every
//! generated move must leave its own King out of check once played.

use game_core::{Board, Color};
use rayon::prelude::*;

#[test]
fn opening_move_counts() {
    let mut board = Board::new(Color::White);
    let first = board.get_moves();
    assert_eq!(first.len(), 20);

    let total: usize = first
        .par_iter()
        .map(|&(source, dest)| {
            let mut board = Board::new(Color::White);
            board.make_move(source, dest);
            board.next_turn();
            board.get_moves().len()
        })
        .sum();
    assert_eq!(total, 400);
}

#[test]
fn depth_two_sweep_restores_the_position() {
    let mut root = Board::new(Color::White);
    let first = root.get_moves();

    first.par_iter().for_each(|&(source, dest)| {
        let mut board = Board::new(Color::White);
        let before = board.clone();
        board.make_move(source, dest);
        board.next_turn();

        for (reply_source, reply_dest) in board.get_moves() {
            let mid = board.clone();
            board.make_move(reply_source, reply_dest);
            board.next_turn();
            board.unmake_move();
            assert_eq!(board, mid);
        }

        board.unmake_move();
        assert_eq!(board, before);
    });
}

#[test]
fn no_generated_move_leaves_the_mover_in_check() {
    let mut root = Board::new(Color::White);
    let first = root.get_moves();

    first.par_iter().for_each(|&(source, dest)| {
        let mut board = Board::new(Color::White);
        board.make_move(source, dest);
        board.next_turn();
        assert!(!board.in_check(Color::White));

        for (reply_source, reply_dest) in board.get_moves() {
            let mut reply_board = board.clone();
            reply_board.make_move(reply_source, reply_dest);
            reply_board.next_turn();
            assert!(!reply_board.in_check(Color::Black));
        }
    });
}
