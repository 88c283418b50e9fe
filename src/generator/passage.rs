use std::fs;
use std::path::PathBuf;

use crate::config::{Config, GameMode};
use crate::generator::{PassageError, PassageProvider};

const SAMPLE_NORMAL: &str = "A quiet harbor town wakes slowly. Fishing boats drift past the old stone pier while gulls circle overhead. Writing software is the craft of turning ideas into precise instructions that a machine can follow, one careful step at a time, in languages like Rust, Go, and C.";

const SAMPLE_NORMAL_NUMBERS: &str = "A quiet harbor town wakes slowly as 12 fishing boats drift past the old stone pier. Since 1998, writing software has meant turning ideas into precise instructions that a machine can follow, one careful step at a time, across more than 700 languages like Rust, Go, and C.";

const SAMPLE_SIMPLE: &str = "a quiet harbor town wakes slowly as fishing boats drift past the old stone pier while gulls circle overhead writing software is the craft of turning ideas into precise instructions that a machine can follow one careful step at a time";

const SAMPLE_SIMPLE_NUMBERS: &str = "a quiet harbor town wakes slowly as 12 fishing boats drift past the old stone pier since 1998 writing software has meant turning ideas into precise instructions that a machine can follow across more than 700 languages";

/// Always hands out the same text.
pub struct FixedPassage {
    text: String,
}

impl FixedPassage {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl PassageProvider for FixedPassage {
    fn next_passage(&mut self) -> Result<String, PassageError> {
        Ok(self.text.clone())
    }
}

/// Reads the passage from a UTF-8 text file on every request.
pub struct FilePassage {
    path: PathBuf,
}

impl FilePassage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl PassageProvider for FilePassage {
    fn next_passage(&mut self) -> Result<String, PassageError> {
        fs::read_to_string(&self.path).map_err(|source| PassageError::Read {
            path: self.path.clone(),
            source,
        })
    }
}

/// Built-in offline sample texts, picked by game mode and whether numbers are wanted.
pub struct SamplePassages {
    mode: GameMode,
    use_numbers: bool,
}

impl SamplePassages {
    pub fn new(mode: GameMode, use_numbers: bool) -> Self {
        Self { mode, use_numbers }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.game_mode, config.use_numbers)
    }

    pub fn text(&self) -> &'static str {
        match (self.mode, self.use_numbers) {
            (GameMode::Normal, false) => SAMPLE_NORMAL,
            (GameMode::Normal, true) => SAMPLE_NORMAL_NUMBERS,
            (GameMode::Simple, false) => SAMPLE_SIMPLE,
            (GameMode::Simple, true) => SAMPLE_SIMPLE_NUMBERS,
        }
    }
}

impl PassageProvider for SamplePassages {
    fn next_passage(&mut self) -> Result<String, PassageError> {
        Ok(self.text().to_string())
    }
}
