use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Word-level tallies over the real words of a passage; separators are never counted.
///
/// `Untyped` and `Imperfect` words count toward `total` only.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordStats {
    pub total: usize,
    pub correct: usize,
    pub errors: usize,
}

impl WordStats {
    pub fn accuracy(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.correct as f64 / self.total as f64 * 100.0
    }

    /// Only perfectly typed words earn speed credit.
    pub fn wpm(&self, minutes: f64) -> f64 {
        if minutes <= 0.0 {
            return 0.0;
        }
        (self.correct as f64 * 5.0 / minutes) / 5.0
    }
}

/// Source of elapsed time for a typing session, measured from the first keystroke.
pub trait Clock {
    fn elapsed(&self) -> Duration;

    fn elapsed_minutes(&self) -> f64 {
        self.elapsed().as_secs_f64() / 60.0
    }
}

impl Clock for Duration {
    fn elapsed(&self) -> Duration {
        *self
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SessionResult {
    pub wpm: f64,
    pub accuracy: f64,
    pub total: usize,
    pub correct: usize,
    pub errors: usize,
    pub elapsed_secs: f64,
    pub text: String,
    #[serde(default)]
    pub completed: bool,
    pub timestamp: DateTime<Utc>,
}

impl SessionResult {
    pub fn new(stats: WordStats, clock: &impl Clock, text: &str, completed: bool) -> Self {
        Self {
            wpm: stats.wpm(clock.elapsed_minutes()),
            accuracy: stats.accuracy(),
            total: stats.total,
            correct: stats.correct,
            errors: stats.errors,
            elapsed_secs: clock.elapsed().as_secs_f64(),
            text: text.to_string(),
            completed,
            timestamp: Utc::now(),
        }
    }

    pub fn summary(&self) -> String {
        format!(
            "WPM: {:.1} | Accuracy: {:.1}% | Words: {} | Correct: {} | Errors: {}",
            self.wpm, self.accuracy, self.total, self.correct, self.errors
        )
    }
}
