//! Configuration file loading for the terminal game.
//!
//! Settings come from an optional `checkers.toml`; command-line flags are
//! applied on top by `main`.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

use checkers_core::Color;

/// Errors that can occur when loading or parsing configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),
    /// Failed to parse the configuration file as valid TOML.
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),
    /// An explicitly requested configuration file does not exist.
    #[error("Config file not found: {}", .0.display())]
    NotFound(PathBuf),
}

/// Which sides are played from the keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum HumanSide {
    /// Human plays black, the computer plays white.
    Black,
    /// Human plays white, the computer plays black.
    White,
    /// Two humans share the keyboard.
    Both,
}

impl HumanSide {
    /// Returns true if moves for `color` are read from the keyboard.
    pub fn controls(self, color: Color) -> bool {
        match self {
            HumanSide::Both => true,
            HumanSide::Black => color == Color::Black,
            HumanSide::White => color == Color::White,
        }
    }
}

/// Game settings.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct Config {
    /// Sides played by a human. Defaults to black.
    #[serde(default = "default_human")]
    pub human: HumanSide,
    /// Seed for the random opponent; unseeded when absent.
    #[serde(default)]
    pub seed: Option<u64>,
    /// Whether to draw the board with ANSI colors. Defaults to true.
    #[serde(default = "default_color")]
    pub color: bool,
    /// Starting position as a layout string; the standard setup when absent.
    #[serde(default)]
    pub layout: Option<String>,
}

fn default_human() -> HumanSide {
    HumanSide::Black
}

fn default_color() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Config {
            human: default_human(),
            seed: None,
            color: default_color(),
            layout: None,
        }
    }
}

impl Config {
    /// Loads the configuration.
    ///
    /// An explicit `path` must exist. Without one, [`Self::default_path()`]
    /// is read if present and defaults are used otherwise.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NotFound`] if an explicit path is missing,
    /// [`ConfigError::ReadError`] if the file cannot be read, or
    /// [`ConfigError::ParseError`] if it contains invalid TOML.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let config_path = match path {
            Some(p) if !p.exists() => return Err(ConfigError::NotFound(p.to_path_buf())),
            Some(p) => p.to_path_buf(),
            None => Self::default_path(),
        };
        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            tracing::debug!(path = %config_path.display(), "loaded config");
            Self::from_toml(&content)
        } else {
            Ok(Self::default())
        }
    }

    /// Parses configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Returns `checkers.toml` in the current working directory.
    pub fn default_path() -> PathBuf {
        PathBuf::from("checkers.toml")
    }
}
