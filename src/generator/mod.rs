pub mod normalize;
pub mod passage;

use std::path::PathBuf;

use thiserror::Error;

use crate::config::{Config, GameMode};

#[derive(Debug, Error)]
pub enum PassageError {
    #[error("passage is empty")]
    Empty,
    #[error("failed to read passage from {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Supplies the text for a new typing session.
pub trait PassageProvider {
    fn next_passage(&mut self) -> Result<String, PassageError>;
}

/// Pulls one passage and prepares it for a session according to `config`.
pub fn load_passage(
    provider: &mut dyn PassageProvider,
    config: &Config,
) -> Result<String, PassageError> {
    let raw = provider.next_passage()?;
    let mut text = if config.normalize_passage {
        normalize::normalize_passage(&raw)
    } else {
        raw
    };
    if config.game_mode == GameMode::Simple {
        text = normalize::simplify_passage(&text);
    }
    if let Some(max_words) = config.max_words {
        text = normalize::truncate_words(&text, max_words);
    }
    if text.is_empty() {
        return Err(PassageError::Empty);
    }
    log::debug!("loaded passage of {} chars", text.chars().count());
    Ok(text)
}
