use log::{debug, info};

use crate::session::render::{self, Segment};
use crate::session::result::WordStats;
use crate::session::word::{WordMatcher, WordState};

/// A passage split into word and separator tokens, with a cursor over them.
///
/// Tokens alternate between real words and single-space separators; every literal space
/// in the source becomes its own separator, so runs of spaces survive as runs of
/// separators. Every token before the cursor is complete.
#[derive(Clone, Debug)]
pub struct PassageSequence {
    tokens: Vec<WordMatcher>,
    cursor: usize,
    source: String,
}

impl PassageSequence {
    pub fn new(source: &str) -> Self {
        let mut tokens = Vec::with_capacity(source.len() / 3 + 1);
        let mut current: Vec<char> = Vec::new();

        for ch in source.chars() {
            if ch == ' ' {
                if !current.is_empty() {
                    tokens.push(WordMatcher::new(&current));
                    current.clear();
                }
                tokens.push(WordMatcher::separator());
            } else {
                current.push(ch);
            }
        }
        if !current.is_empty() {
            tokens.push(WordMatcher::new(&current));
        }

        if let Some(first) = tokens.first_mut() {
            first.set_active(true);
        }

        Self {
            tokens,
            cursor: 0,
            source: source.to_string(),
        }
    }

    pub fn tokens(&self) -> &[WordMatcher] {
        &self.tokens
    }

    pub fn current(&self) -> Option<&WordMatcher> {
        self.tokens.get(self.cursor)
    }

    pub fn cursor_pos(&self) -> usize {
        self.cursor
    }

    /// The source passage, verbatim.
    pub fn text(&self) -> &str {
        &self.source
    }

    /// Tokens before the cursor are always complete and tokens after it untouched, so the
    /// passage is complete exactly when the cursor sits on a complete last token.
    pub fn is_complete(&self) -> bool {
        match self.tokens.last() {
            Some(last) => self.cursor + 1 == self.tokens.len() && last.is_complete(),
            None => true,
        }
    }

    pub fn type_char(&mut self, ch: char) {
        if self.is_complete() {
            return;
        }

        let cursor = self.cursor;
        let len = self.tokens.len();
        let token = &mut self.tokens[cursor];

        if token.is_separator() {
            token.type_char(ch);
            if ch == ' ' && cursor + 1 < len {
                self.move_to(cursor + 1);
            }
        } else if ch == ' ' {
            // Leading spaces before any input are not consumed.
            if !token.has_started() {
                return;
            }
            if !token.is_complete() {
                token.skip();
            }
            if cursor + 2 < len {
                // The space already confirmed the boundary the separator stands for.
                self.tokens[cursor + 1].type_char(' ');
                self.move_to(cursor + 2);
            } else if cursor + 1 < len {
                self.move_to(cursor + 1);
            }
        } else {
            token.type_char(ch);
            if token.is_complete() && cursor + 1 < len {
                self.move_to(cursor + 1);
            }
        }

        if self.is_complete() {
            self.tokens[self.cursor].set_active(false);
            info!("passage complete: {:?}", self.stats());
        }
    }

    pub fn backspace(&mut self) {
        if self.is_complete() {
            return;
        }
        if self.tokens[self.cursor].backspace() || self.cursor == 0 {
            return;
        }

        self.move_to(self.cursor - 1);
        self.tokens[self.cursor].backspace();

        // Land on the word before a confirmed separator, not on the separator itself.
        if self.tokens[self.cursor].is_separator() && self.cursor > 0 {
            self.move_to(self.cursor - 1);
        }
    }

    pub fn stats(&self) -> WordStats {
        let mut stats = WordStats::default();
        for word in self.tokens.iter().filter(|t| !t.is_separator()) {
            match word.state() {
                WordState::Perfect => stats.correct += 1,
                WordState::Error => stats.errors += 1,
                WordState::Untyped | WordState::Imperfect => {}
            }
            stats.total += 1;
        }
        stats
    }

    pub fn render(&self, show_cursor: bool) -> Vec<Segment> {
        render::render(self, show_cursor)
    }

    fn move_to(&mut self, idx: usize) {
        debug!("cursor {} -> {}", self.cursor, idx);
        self.tokens[self.cursor].set_active(false);
        self.cursor = idx;
        self.tokens[idx].set_active(true);
    }
}
