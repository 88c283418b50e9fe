use std::time::{Duration, Instant};

use log::info;

use crate::config::{Config, CursorStyle};
use crate::session::passage::PassageSequence;
use crate::session::render::Segment;
use crate::session::result::{Clock, SessionResult, WordStats};

/// One typing session over a single passage.
///
/// A restart builds a fresh session; nothing here is reset in place.
pub struct TypingSession {
    pub passage: PassageSequence,
    pub config: Config,
    pub started_at: Option<Instant>,
    pub finished_at: Option<Instant>,
}

impl TypingSession {
    pub fn new(text: &str, config: Config) -> Self {
        Self {
            passage: PassageSequence::new(text),
            config,
            started_at: None,
            finished_at: None,
        }
    }

    pub fn restart(&self) -> Self {
        info!("restarting session over the same passage");
        Self::new(self.passage.text(), self.config.clone())
    }

    pub fn is_complete(&self) -> bool {
        self.passage.is_complete()
    }

    pub fn has_started(&self) -> bool {
        self.started_at.is_some()
    }

    pub fn stats(&self) -> WordStats {
        self.passage.stats()
    }

    /// Underline cursors stay visible; block cursors follow the caller's blink phase.
    pub fn show_cursor(&self, blink_on: bool) -> bool {
        match self.config.cursor_style {
            CursorStyle::Underline => true,
            CursorStyle::Block => blink_on,
        }
    }

    pub fn render(&self, blink_on: bool) -> Vec<Segment> {
        self.passage.render(self.show_cursor(blink_on))
    }

    pub fn elapsed_secs(&self) -> f64 {
        self.elapsed().as_secs_f64()
    }

    pub fn wpm(&self) -> f64 {
        self.stats().wpm(self.elapsed_minutes())
    }

    pub fn accuracy(&self) -> f64 {
        self.stats().accuracy()
    }

    pub fn result(&self) -> SessionResult {
        SessionResult::new(self.stats(), self, self.passage.text(), self.is_complete())
    }
}

impl Clock for TypingSession {
    fn elapsed(&self) -> Duration {
        match (self.started_at, self.finished_at) {
            (Some(start), Some(end)) => end.duration_since(start),
            (Some(start), None) => start.elapsed(),
            _ => Duration::ZERO,
        }
    }
}
