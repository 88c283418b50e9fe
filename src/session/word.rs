use crate::session::render::Segment;

/// One recorded keystroke position inside a word.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Entry {
    Typed(char),
    /// Position abandoned by a skip; never matches any target char.
    Missed,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WordState {
    Untyped,
    Perfect,
    Imperfect,
    Error,
}

#[derive(Clone, Debug)]
pub struct WordMatcher {
    target: Vec<char>,
    typed: Vec<Entry>,
    state: WordState,
    active: bool,
}

impl WordMatcher {
    pub fn new(target: &[char]) -> Self {
        Self {
            target: target.to_vec(),
            typed: Vec::with_capacity(target.len()),
            state: WordState::Untyped,
            active: false,
        }
    }

    pub fn separator() -> Self {
        Self::new(&[' '])
    }

    pub fn target(&self) -> &[char] {
        &self.target
    }

    pub fn typed(&self) -> &[Entry] {
        &self.typed
    }

    pub fn state(&self) -> WordState {
        self.state
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    pub fn is_separator(&self) -> bool {
        self.target.len() == 1 && self.target[0] == ' '
    }

    pub fn is_complete(&self) -> bool {
        self.typed.len() >= self.target.len()
    }

    pub fn has_started(&self) -> bool {
        !self.typed.is_empty()
    }

    /// Records `ch`. Once the word is full, the last position is overwritten instead.
    pub fn type_char(&mut self, ch: char) {
        if self.typed.len() < self.target.len() {
            self.typed.push(Entry::Typed(ch));
        } else if let Some(last) = self.typed.last_mut() {
            *last = Entry::Typed(ch);
        }
        self.state = classify(&self.target, &self.typed);
    }

    /// Pads every untyped position with `Entry::Missed` and fails the word.
    pub fn skip(&mut self) {
        while self.typed.len() < self.target.len() {
            self.typed.push(Entry::Missed);
        }
        self.state = WordState::Error;
    }

    /// Returns false when there was nothing to remove.
    pub fn backspace(&mut self) -> bool {
        if self.typed.pop().is_none() {
            return false;
        }
        self.state = classify(&self.target, &self.typed);
        true
    }

    pub fn render(&self, show_cursor: bool) -> Vec<Segment> {
        let cursor_at = (self.active && show_cursor).then_some(self.typed.len());
        let len = self.target.len().max(self.typed.len());
        let failed = self.state == WordState::Error;

        let mut segments = Vec::with_capacity(len);
        for i in 0..len {
            let expected = self.target.get(i).copied();
            if cursor_at == Some(i) {
                segments.push(Segment::Cursor(expected.unwrap_or(' ')));
                continue;
            }
            let segment = match (self.typed.get(i), expected) {
                (None, Some(t)) => Segment::Pending(t),
                (Some(Entry::Missed), Some(t)) => Segment::Missed(t),
                (Some(Entry::Typed(c)), Some(t)) if *c == t => Segment::Correct {
                    ch: t,
                    word_failed: failed,
                },
                (Some(Entry::Typed(c)), _) => Segment::Incorrect(*c),
                // Missed entries are only ever padded up to the target length.
                (Some(Entry::Missed), None) | (None, None) => continue,
            };
            segments.push(segment);
        }
        segments
    }
}

/// Correctness of `typed` against `target`; depends on nothing else.
pub fn classify(target: &[char], typed: &[Entry]) -> WordState {
    if typed.is_empty() {
        return WordState::Untyped;
    }

    if target == [' '] {
        return if typed == [Entry::Typed(' ')] {
            WordState::Perfect
        } else {
            WordState::Error
        };
    }

    if typed.contains(&Entry::Missed) {
        return WordState::Error;
    }

    let matches = typed
        .iter()
        .zip(target)
        .all(|(entry, &t)| *entry == Entry::Typed(t));

    if !matches || typed.len() > target.len() {
        WordState::Error
    } else if typed.len() == target.len() {
        WordState::Perfect
    } else {
        WordState::Imperfect
    }
}
