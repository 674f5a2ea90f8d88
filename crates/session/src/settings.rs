//! Player settings, persisted as TOML.

use std::fmt;
use std::fs;
use std::path::Path;

use game_core::Color;
use serde::{Deserialize, Serialize};

use crate::opponent::OpponentKind;

/// Which color the human plays. Stored separately from `Color` so the
/// settings file serializes with friendly names and a clear default.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerColor {
    #[default]
    White,
    Black,
}

impl PlayerColor {
    pub fn color(self) -> Color {
        match self {
            PlayerColor::White => Color::White,
            PlayerColor::Black => Color::Black,
        }
    }
}

/// Everything configurable about a game, loaded before a session starts.
/// Unknown or missing fields fall back to their defaults, so old settings
/// files keep working across releases.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameSettings {
    pub player_name: String,
    pub player_color: PlayerColor,
    pub opponent: OpponentKind,
    pub search_depth: u8,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            player_name: "Player 1".to_string(),
            player_color: PlayerColor::White,
            opponent: OpponentKind::Minimax,
            search_depth: 3,
        }
    }
}

impl GameSettings {
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let text = fs::read_to_string(path)?;
        Ok(toml::from_str(&text)?)
    }

    pub fn save(&self, path: &Path) -> Result<(), SettingsError> {
        let text = toml::to_string_pretty(self)?;
        fs::write(path, text)?;
        Ok(())
    }
}

#[derive(Debug)]
pub enum SettingsError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Serialize(toml::ser::Error),
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::Io(err) => write!(f, "settings file error: {err}"),
            SettingsError::Parse(err) => write!(f, "invalid settings file: {err}"),
            SettingsError::Serialize(err) => write!(f, "could not serialize settings: {err}"),
        }
    }
}

impl std::error::Error for SettingsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SettingsError::Io(err) => Some(err),
            SettingsError::Parse(err) => Some(err),
            SettingsError::Serialize(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for SettingsError {
    fn from(err: std::io::Error) -> Self {
        SettingsError::Io(err)
    }
}

impl From<toml::de::Error> for SettingsError {
    fn from(err: toml::de::Error) -> Self {
        SettingsError::Parse(err)
    }
}

impl From<toml::ser::Error> for SettingsError {
    fn from(err: toml::ser::Error) -> Self {
        SettingsError::Serialize(err)
    }
}

#[cfg(test)]
#[path = "settings_tests.rs"]
mod settings_tests;
