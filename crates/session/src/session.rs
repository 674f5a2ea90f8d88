//! The live game: human selection flow plus AI turn driving.

use game_core::{Board, Color, Coord, GameOver, PlannedMove};

use crate::opponent::AiOpponent;
use crate::settings::GameSettings;

/// What a click on the board did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Selection {
    /// A piece of the player's color is now selected.
    Picked(Coord),
    /// A previously selected piece was moved.
    Moved(PlannedMove),
    /// The selection was dropped without moving.
    Cleared,
    /// The click changed nothing.
    Ignored,
}

/// One human-versus-AI game.
///
/// The human interacts through `select`; the front end calls `tick` every
/// frame to run the termination detectors and drive the AI opponent.
pub struct GameSession {
    board: Board,
    opponent: AiOpponent,
    selected: Option<Coord>,
    player: Color,
}

impl GameSession {
    pub fn new(settings: &GameSettings) -> Self {
        let player = settings.player_color.color();
        Self {
            board: Board::new(player),
            opponent: AiOpponent::new(settings.opponent, settings.search_depth, player.other()),
            selected: None,
            player,
        }
    }

    /// Handles one click on square `coords`.
    ///
    /// Clicking a legal destination of the selected piece plays the move.
    /// Clicking one of the player's own pieces selects it, replacing any
    /// previous selection. Anything else clears the selection. Clicks while
    /// it is not the player's turn, or after the game has ended, do nothing.
    pub fn select(&mut self, coords: Coord) -> Selection {
        if self.board.gameover().is_some() || self.board.turn() != self.player {
            return Selection::Ignored;
        }
        if !Board::in_bounds(coords) {
            return self.clear_selection();
        }

        if let Some(source) = self.selected {
            if self.board.legal_destinations(source).contains(&coords) {
                self.selected = None;
                self.board.make_move(source, coords);
                self.board.next_turn();
                return Selection::Moved((source, coords));
            }
        }

        match self.board.piece_at(coords) {
            Some(piece) if piece.color == self.player => {
                self.selected = Some(coords);
                Selection::Picked(coords)
            }
            _ => self.clear_selection(),
        }
    }

    fn clear_selection(&mut self) -> Selection {
        if self.selected.take().is_some() {
            Selection::Cleared
        } else {
            Selection::Ignored
        }
    }

    /// Legal destinations of the selected piece, for highlighting.
    pub fn selected_destinations(&mut self) -> Vec<Coord> {
        match self.selected {
            Some(coords) => self.board.legal_destinations(coords),
            None => Vec::new(),
        }
    }

    /// One frame of game logic: re-run the termination detectors for the
    /// side to move, then launch or harvest the AI search when it is the
    /// opponent's turn.
    pub fn tick(&mut self) {
        self.board.checkmate_or_stalemate();
        self.board.insufficient_material();
        if self.board.gameover().is_some() {
            return;
        }

        self.opponent.maybe_launch(&self.board);
        if self.board.turn() == self.opponent.color() {
            if let Some((source, dest)) = self.opponent.poll() {
                self.board.make_move(source, dest);
                self.board.next_turn();
            }
        }
    }

    /// Abandons the current game and starts a fresh one with the same
    /// settings. A search still in flight is discarded.
    pub fn reset(&mut self) {
        self.board = Board::new(self.player);
        self.selected = None;
        self.opponent.clear();
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn player(&self) -> Color {
        self.player
    }

    pub fn selected(&self) -> Option<Coord> {
        self.selected
    }

    pub fn gameover(&self) -> Option<GameOver> {
        self.board.gameover()
    }

    /// Running material score for one side, for a status display.
    pub fn score(&self, color: Color) -> i32 {
        self.board.score(color)
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod session_tests;
