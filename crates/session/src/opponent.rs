//! Background AI opponent worker.
//!
//! Searching can take a while at higher depths, so the engine runs on its
//! own thread and hands its move back through a capacity-1 channel. The
//! session polls without blocking; a busy flag guarantees at most one
//! search is in flight per opponent.

use std::sync::mpsc::{sync_channel, Receiver, TryRecvError};
use std::sync::{Arc, Mutex};
use std::thread;

use game_core::{Board, Color, Engine, PlannedMove};
use minimax_engine::MinimaxEngine;
use random_engine::RandomEngine;
use serde::{Deserialize, Serialize};

/// Which engine the opponent runs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum OpponentKind {
    #[default]
    Minimax,
    Random,
}

/// One AI player. Constructed once per game and driven by repeated
/// `maybe_launch`/`poll` calls from the session loop.
#[derive(Debug)]
pub struct AiOpponent {
    kind: OpponentKind,
    depth: u8,
    color: Color,
    busy: Arc<Mutex<bool>>,
    slot: Option<Receiver<Option<PlannedMove>>>,
}

impl AiOpponent {
    pub fn new(kind: OpponentKind, depth: u8, color: Color) -> Self {
        Self {
            kind,
            depth,
            color,
            busy: Arc::new(Mutex::new(false)),
            slot: None,
        }
    }

    pub fn kind(&self) -> OpponentKind {
        self.kind
    }

    pub fn color(&self) -> Color {
        self.color
    }

    /// True while a search is in flight and its result not yet consumed.
    pub fn thinking(&self) -> bool {
        self.slot.is_some()
    }

    /// Starts a search for the current position if it is this opponent's
    /// turn, the game is still running, and no search is already in flight.
    /// The worker gets its own clone of the board; the live board is never
    /// shared across threads.
    pub fn maybe_launch(&mut self, board: &Board) {
        if board.gameover().is_some() || board.turn() != self.color || self.slot.is_some() {
            return;
        }
        {
            let mut busy = self.busy.lock().unwrap();
            if *busy {
                return;
            }
            *busy = true;
        }

        let (sender, receiver) = sync_channel(1);
        self.slot = Some(receiver);

        let busy = Arc::clone(&self.busy);
        let mut engine = self.build_engine();
        let snapshot = board.clone();
        thread::spawn(move || {
            let report = engine.choose_move(&snapshot);
            // The session may have been reset and dropped the receiver.
            let _ = sender.send(report.best_move);
            *busy.lock().unwrap() = false;
        });
    }

    /// Non-blocking check for a finished search. Returns the chosen move
    /// once, then frees the slot for the next launch. A finished search
    /// with no move (the engine was already mated) frees the slot too.
    pub fn poll(&mut self) -> Option<PlannedMove> {
        let receiver = self.slot.as_ref()?;
        match receiver.try_recv() {
            Ok(best_move) => {
                self.slot = None;
                best_move
            }
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => {
                self.slot = None;
                None
            }
        }
    }

    /// Drops any pending result. An in-flight worker finishes on its own
    /// and its move is discarded.
    pub fn clear(&mut self) {
        self.slot = None;
    }

    fn build_engine(&self) -> Box<dyn Engine> {
        match self.kind {
            OpponentKind::Minimax => Box::new(MinimaxEngine::new(self.depth)),
            OpponentKind::Random => Box::new(RandomEngine::new()),
        }
    }
}

#[cfg(test)]
#[path = "opponent_tests.rs"]
mod opponent_tests;
