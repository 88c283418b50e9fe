use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CursorStyle {
    #[default]
    Block,
    Underline,
}

/// Which built-in sample passage family to draw from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameMode {
    /// Capitalized text with punctuation.
    #[default]
    Normal,
    /// Lowercase words only.
    Simple,
}

/// Session settings, read once at startup and passed by value into each session.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub cursor_style: CursorStyle,
    #[serde(default)]
    pub game_mode: GameMode,
    #[serde(default = "default_use_numbers")]
    pub use_numbers: bool,
    #[serde(default = "default_normalize_passage")]
    pub normalize_passage: bool,
    /// Passages longer than this are cut to their first `max_words` words.
    #[serde(default)]
    pub max_words: Option<usize>,
}

fn default_use_numbers() -> bool {
    true
}
fn default_normalize_passage() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cursor_style: CursorStyle::default(),
            game_mode: GameMode::default(),
            use_numbers: default_use_numbers(),
            normalize_passage: default_normalize_passage(),
            max_words: None,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Missing files yield the defaults; unreadable or malformed ones are errors.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::debug!("no config at {}, using defaults", path.display());
            return Ok(Config::default());
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("failed to parse config {}", path.display()))?;
        Ok(config)
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("wordmatch")
            .join("config.toml")
    }
}
