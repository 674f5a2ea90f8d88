//! The 8x8 board: occupancy queries, legality filtering, reversible move
//! making, and game-termination classification.

use crate::eval::evaluate;
use crate::history::{MoveHistory, Snapshot};
use crate::piece::Piece;
use crate::rules::valid_moves;
use crate::types::{Color, Coord, PieceKind, PlannedMove};

/// Checkerboard shade of a square. Display-only, not a game-state invariant.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shade {
    Light,
    Dark,
}

/// One of the 64 grid cells.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Square {
    pub piece: Option<Piece>,
    pub shade: Shade,
}

/// Permanent game-ending classification. `Checkmate` carries the winner.
/// Once set it stays set for the rest of the game; only a reset (fresh
/// board) or `unmake_move` restoring an earlier snapshot clears it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameOver {
    Checkmate(Color),
    Stalemate,
    InsufficientMaterial,
}

/// The full game position, mutated in place for the lifetime of one game.
///
/// Derived state carried alongside the grid and kept consistent with it on
/// every mutation: the cached King coordinates of both sides, the running
/// material scores, and the termination status.
#[derive(Clone, Debug, PartialEq)]
pub struct Board {
    squares: [[Square; 8]; 8],
    turn: Color,
    /// Which color the human occupies at the bottom of the board.
    player: Color,
    /// Side-relative forward flag: true when the bottom side is to move, so
    /// "forward" for pawns is up the screen. Flipped by `next_turn`.
    bottom_player_turn: bool,
    white_king: Option<Coord>,
    black_king: Option<Coord>,
    white_score: i32,
    black_score: i32,
    gameover: Option<GameOver>,
    history: MoveHistory,
}

impl Board {
    /// A board with the standard starting arrangement. When the human plays
    /// Black the arrangement is flipped by swapping every piece's color in
    /// place, so the human's pieces still sit at the bottom.
    pub fn new(player: Color) -> Self {
        let mut board = Self::empty(player);
        board.setup_start_position();
        board
    }

    /// An empty board with zeroed scores; combine with `place` to build
    /// endgame studies and test positions.
    pub fn empty(player: Color) -> Self {
        let mut squares = [[Square {
            piece: None,
            shade: Shade::Light,
        }; 8]; 8];
        for (x, file) in squares.iter_mut().enumerate() {
            for (y, square) in file.iter_mut().enumerate() {
                if (x + y) % 2 != 0 {
                    square.shade = Shade::Dark;
                }
            }
        }
        Self {
            squares,
            turn: Color::White,
            player,
            bottom_player_turn: player == Color::White,
            white_king: None,
            black_king: None,
            white_score: 0,
            black_score: 0,
            gameover: None,
            history: MoveHistory::default(),
        }
    }

    fn setup_start_position(&mut self) {
        use PieceKind::*;

        for x in 0..8 {
            self.place(Pawn, Color::Black, (x, 1));
            self.place(Pawn, Color::White, (x, 6));
        }
        let back_rank = [Rook, Knight, Bishop, Queen, King, Bishop, Knight, Rook];
        for (x, &kind) in back_rank.iter().enumerate() {
            self.place(kind, Color::Black, (x as i8, 0));
            self.place(kind, Color::White, (x as i8, 7));
        }

        if self.player == Color::Black {
            for file in self.squares.iter_mut() {
                for square in file.iter_mut() {
                    if let Some(piece) = square.piece.as_mut() {
                        piece.color = piece.color.other();
                    }
                }
            }
            self.black_king = Some((4, 7));
            self.white_king = Some((4, 0));
        }
    }

    /// Place a piece on an empty square, keeping the score totals and the
    /// King caches consistent.
    pub fn place(&mut self, kind: PieceKind, color: Color, coords: Coord) {
        debug_assert!(Self::in_bounds(coords), "placement out of bounds");
        let piece = Piece::new(kind, color, coords.0, coords.1);
        match color {
            Color::White => self.white_score += piece.weight(),
            Color::Black => self.black_score += piece.weight(),
        }
        if kind == PieceKind::King {
            self.set_king_coords(color, Some(coords));
        }
        self.squares[coords.0 as usize][coords.1 as usize].piece = Some(piece);
    }

    // -------------------------------------------------------------------------
    // Occupancy predicates
    // -------------------------------------------------------------------------

    pub fn in_bounds(coords: Coord) -> bool {
        (0..8).contains(&coords.0) && (0..8).contains(&coords.1)
    }

    /// Checkerboard shade of an in-bounds square, for rendering.
    pub fn shade_at(&self, coords: Coord) -> Shade {
        self.squares[coords.0 as usize][coords.1 as usize].shade
    }

    /// Piece at `coords`, or None when empty or out of bounds.
    pub fn piece_at(&self, coords: Coord) -> Option<Piece> {
        if !Self::in_bounds(coords) {
            return None;
        }
        self.squares[coords.0 as usize][coords.1 as usize].piece
    }

    /// True when `coords` holds a piece of the opposite color.
    pub fn enemy_at(&self, coords: Coord, color: Color) -> bool {
        self.piece_at(coords).is_some_and(|p| p.color != color)
    }

    /// The shared predicate every piece's move generation runs through:
    /// `dest` is in bounds and either empty or enemy-occupied.
    pub fn valid_move(&self, dest: Coord, color: Color) -> bool {
        Self::in_bounds(dest)
            && match self.piece_at(dest) {
                None => true,
                Some(piece) => piece.color != color,
            }
    }

    // -------------------------------------------------------------------------
    // Check detection and legality filtering
    // -------------------------------------------------------------------------

    /// True when any enemy piece's pseudo-legal move set contains `color`'s
    /// cached King coordinates.
    pub fn in_check(&self, color: Color) -> bool {
        let king = match self.king_coords(color) {
            Some(coords) => coords,
            None => return false,
        };
        for x in 0..8 {
            for y in 0..8 {
                let piece = match self.piece_at((x, y)) {
                    Some(p) if p.color != color => p,
                    _ => continue,
                };
                if valid_moves(&piece, self).contains(&king) {
                    return true;
                }
            }
        }
        false
    }

    /// Simulates moving `color`'s piece from `source` to `dest` and reports
    /// whether `color` would be in check afterwards.
    ///
    /// The simulation relocates the piece, updates the King cache when a King
    /// moves, and flips the forward flag exactly as a real turn would, then
    /// reverts every one of those changes. No observable side effects remain.
    pub fn in_check_after_move(&mut self, source: Coord, dest: Coord, color: Color) -> bool {
        let saved_source = self.squares[source.0 as usize][source.1 as usize];
        let saved_dest = self.squares[dest.0 as usize][dest.1 as usize];
        let mut piece = match saved_source.piece {
            Some(p) => p,
            None => return false,
        };
        let is_king = piece.kind == PieceKind::King;
        let saved_king = self.king_coords(color);

        piece.relocate(dest.0, dest.1);
        self.squares[dest.0 as usize][dest.1 as usize].piece = Some(piece);
        self.squares[source.0 as usize][source.1 as usize].piece = None;
        if is_king {
            self.set_king_coords(color, Some(dest));
        }
        self.bottom_player_turn = !self.bottom_player_turn;

        let in_check = self.in_check(color);

        self.bottom_player_turn = !self.bottom_player_turn;
        if is_king {
            self.set_king_coords(color, saved_king);
        }
        self.squares[source.0 as usize][source.1 as usize] = saved_source;
        self.squares[dest.0 as usize][dest.1 as usize] = saved_dest;

        in_check
    }

    /// Check-filtered destinations for the piece at `coords`: what a front
    /// end highlights for a selected piece, and the set `make_move` callers
    /// validate against.
    pub fn legal_destinations(&mut self, coords: Coord) -> Vec<Coord> {
        let piece = match self.piece_at(coords) {
            Some(p) => p,
            None => return Vec::new(),
        };
        let color = piece.color;
        valid_moves(&piece, self)
            .into_iter()
            .filter(|&dest| !self.in_check_after_move(coords, dest, color))
            .collect()
    }

    /// All legal (source, destination) pairs for the side to move, capturing
    /// moves first, otherwise in stable board-scan order. The capture-first
    /// ordering is a pruning hint for the search, not a correctness rule.
    pub fn get_moves(&mut self) -> Vec<PlannedMove> {
        let turn = self.turn;
        let mut captures = Vec::new();
        let mut quiets = Vec::new();
        for x in 0..8 {
            for y in 0..8 {
                let piece = match self.piece_at((x, y)) {
                    Some(p) if p.color == turn => p,
                    _ => continue,
                };
                for dest in valid_moves(&piece, self) {
                    if self.in_check_after_move((x, y), dest, turn) {
                        continue;
                    }
                    if self.enemy_at(dest, turn) {
                        captures.push(((x, y), dest));
                    } else {
                        quiets.push(((x, y), dest));
                    }
                }
            }
        }
        captures.extend(quiets);
        captures
    }

    /// Legal moves sorted by a 1-ply lookahead: each candidate is applied on
    /// a scratch clone, statically evaluated for the mover, and undone. The
    /// descending order improves alpha-beta pruning; it is purely a
    /// performance heuristic.
    pub fn get_moves_ordered(&mut self) -> Vec<PlannedMove> {
        let turn = self.turn;
        let mut scratch = self.clone();
        let mut scored: Vec<(PlannedMove, i32)> = Vec::new();
        for (source, dest) in self.get_moves() {
            scratch.make_move(source, dest);
            scratch.next_turn();
            scored.push(((source, dest), evaluate(&scratch, turn)));
            scratch.unmake_move();
        }
        scored.sort_by(|a, b| b.1.cmp(&a.1));
        scored.into_iter().map(|(mv, _)| mv).collect()
    }

    // -------------------------------------------------------------------------
    // Move making
    // -------------------------------------------------------------------------

    /// Executes a move the caller has already validated as legal.
    ///
    /// Pushes an undo snapshot, applies capture scoring and pawn promotion,
    /// relocates the piece, keeps the King cache in sync, and finally re-runs
    /// the termination detectors. Does not advance the turn; callers pair
    /// this with `next_turn`.
    pub fn make_move(&mut self, source: Coord, dest: Coord) {
        self.history.push(Snapshot {
            white_score: self.white_score,
            black_score: self.black_score,
            white_king: self.white_king,
            black_king: self.black_king,
            gameover: self.gameover,
            source: (source, self.squares[source.0 as usize][source.1 as usize]),
            dest: (dest, self.squares[dest.0 as usize][dest.1 as usize]),
        });

        // A captured piece's weight comes off the mover's opponent.
        if let Some(captured) = self.piece_at(dest) {
            match self.turn {
                Color::White => self.black_score -= captured.weight(),
                Color::Black => self.white_score -= captured.weight(),
            }
        }

        // Promotion is tested against the side-relative forward flag, not the
        // pawn's color or an absolute rank.
        if let Some(piece) = self.piece_at(source) {
            if piece.kind == PieceKind::Pawn
                && ((self.bottom_player_turn && dest.1 == 0)
                    || (!self.bottom_player_turn && dest.1 == 7))
            {
                self.squares[source.0 as usize][source.1 as usize].piece =
                    Some(Piece::new(PieceKind::Queen, piece.color, piece.x, piece.y));
            }
        }

        let mut piece = self.squares[source.0 as usize][source.1 as usize]
            .piece
            .expect("no piece on source square");
        piece.relocate(dest.0, dest.1);
        piece.first_move = false;
        self.squares[dest.0 as usize][dest.1 as usize].piece = Some(piece);

        if piece.kind == PieceKind::King {
            self.set_king_coords(piece.color, Some(dest));
        }

        self.squares[source.0 as usize][source.1 as usize].piece = None;

        self.checkmate_or_stalemate();
        self.insufficient_material();
    }

    /// Pops the latest snapshot and restores scores, King caches, termination
    /// state, and both touched squares verbatim, then advances the turn back
    /// to the side that moved. Exactly inverts a `make_move` + `next_turn`
    /// pair, pawn promotion included.
    pub fn unmake_move(&mut self) {
        let snapshot = self
            .history
            .pop()
            .expect("unmake_move without a matching make_move");
        self.white_score = snapshot.white_score;
        self.black_score = snapshot.black_score;
        self.white_king = snapshot.white_king;
        self.black_king = snapshot.black_king;
        self.gameover = snapshot.gameover;
        let (coords, square) = snapshot.source;
        self.squares[coords.0 as usize][coords.1 as usize] = square;
        let (coords, square) = snapshot.dest;
        self.squares[coords.0 as usize][coords.1 as usize] = square;

        self.next_turn();
    }

    /// Flips the active color and the side-relative forward flag.
    pub fn next_turn(&mut self) {
        self.turn = self.turn.other();
        self.bottom_player_turn = !self.bottom_player_turn;
    }

    // -------------------------------------------------------------------------
    // Termination detection
    // -------------------------------------------------------------------------

    /// Counts legal moves for the side to move: zero while not in check is
    /// Stalemate, zero while in check is Checkmate for the opponent.
    pub fn checkmate_or_stalemate(&mut self) {
        let turn = self.turn;
        let mut legal_moves = 0;
        for x in 0..8 {
            for y in 0..8 {
                let piece = match self.piece_at((x, y)) {
                    Some(p) if p.color == turn => p,
                    _ => continue,
                };
                for dest in valid_moves(&piece, self) {
                    if !self.in_check_after_move((x, y), dest, turn) {
                        legal_moves += 1;
                    }
                }
            }
        }

        if legal_moves == 0 {
            if !self.in_check(turn) {
                self.gameover = Some(GameOver::Stalemate);
            } else {
                self.gameover = Some(GameOver::Checkmate(turn.other()));
            }
        }
    }

    /// Partial insufficient-material rule: any Queen aborts immediately;
    /// a draw is declared for bare Kings, King plus one minor-class piece
    /// (anything that is not a King or Knight counts as minor-class), a lone
    /// Knight, or two Knights of the same side. Deliberately not the full
    /// FIDE rule.
    pub fn insufficient_material(&mut self) {
        let mut kings = 0;
        let mut white_knights = 0;
        let mut black_knights = 0;
        let mut white_minors = 0;
        let mut black_minors = 0;

        for file in self.squares.iter() {
            for square in file.iter() {
                let piece = match square.piece {
                    Some(p) => p,
                    None => continue,
                };
                match (piece.kind, piece.color) {
                    (PieceKind::Queen, _) => return,
                    (PieceKind::King, _) => kings += 1,
                    (PieceKind::Knight, Color::White) => white_knights += 1,
                    (PieceKind::Knight, Color::Black) => black_knights += 1,
                    (_, Color::White) => white_minors += 1,
                    (_, Color::Black) => black_minors += 1,
                }
            }
        }

        if kings != 2 {
            return;
        }
        let minors = white_minors + black_minors;
        let knights = white_knights + black_knights;

        // King vs King
        if minors == 0 && knights == 0 {
            self.gameover = Some(GameOver::InsufficientMaterial);
        }
        // King + one minor-class piece or one Knight vs King
        else if minors + knights == 1 {
            self.gameover = Some(GameOver::InsufficientMaterial);
        }
        // King + two Knights of the same side vs King
        else if minors == 0 && (white_knights == 2 && black_knights == 0
            || black_knights == 2 && white_knights == 0)
        {
            self.gameover = Some(GameOver::InsufficientMaterial);
        }
    }

    // -------------------------------------------------------------------------
    // Castling legality (never wired into move execution)
    // -------------------------------------------------------------------------

    /// King destinations for which `color` could castle: king and rook still
    /// on their home squares with their first-move flags intact, and the
    /// squares between them empty.
    ///
    /// Castling is reported here but is not reachable through the
    /// move-execution path; the gap is intentional and preserved.
    pub fn can_castle(&self, color: Color) -> Vec<Coord> {
        let y = match color {
            Color::White => 7,
            Color::Black => 0,
        };
        let mut moves = Vec::new();

        let king_ok = matches!(
            self.piece_at((4, y)),
            Some(p) if p.kind == PieceKind::King && p.color == color && p.first_move
        );
        if !king_ok {
            return moves;
        }

        let rook_ok = |x: i8| {
            matches!(
                self.piece_at((x, y)),
                Some(p) if p.kind == PieceKind::Rook && p.color == color && p.first_move
            )
        };

        // Queen side
        if rook_ok(0) && (1..=3).all(|x| self.piece_at((x, y)).is_none()) {
            moves.push((2, y));
        }
        // King side
        if rook_ok(7) && (5..=6).all(|x| self.piece_at((x, y)).is_none()) {
            moves.push((6, y));
        }
        moves
    }

    // -------------------------------------------------------------------------
    // Read-only accessors
    // -------------------------------------------------------------------------

    pub fn turn(&self) -> Color {
        self.turn
    }

    pub fn player(&self) -> Color {
        self.player
    }

    pub fn bottom_player_turn(&self) -> bool {
        self.bottom_player_turn
    }

    pub fn gameover(&self) -> Option<GameOver> {
        self.gameover
    }

    /// Running material score for one side.
    pub fn score(&self, color: Color) -> i32 {
        match color {
            Color::White => self.white_score,
            Color::Black => self.black_score,
        }
    }

    pub fn king_coords(&self, color: Color) -> Option<Coord> {
        match color {
            Color::White => self.white_king,
            Color::Black => self.black_king,
        }
    }

    /// Number of moves made and not yet unmade.
    pub fn moves_played(&self) -> usize {
        self.history.len()
    }

    fn set_king_coords(&mut self, color: Color, coords: Option<Coord>) {
        match color {
            Color::White => self.white_king = coords,
            Color::Black => self.black_king = coords,
        }
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
