//! Interactive game session layer.
//!
//! Sits between a front end and the core rules: owns the live board, runs
//! the click-to-select / click-to-move flow, drives the AI opponent on a
//! background thread, and loads and saves player settings.

pub mod opponent;
pub mod session;
pub mod settings;

pub use opponent::{AiOpponent, OpponentKind};
pub use session::{GameSession, Selection};
pub use settings::{GameSettings, PlayerColor, SettingsError};
