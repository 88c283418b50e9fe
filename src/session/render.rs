use log::trace;

use crate::session::passage::PassageSequence;

/// Classified display unit for a single character position.
///
/// Carries no styling; mapping a segment to colors is the presentation layer's job
/// (see [`crate::ui::theme::Theme`]).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Segment {
    /// Not typed yet; shows the target char.
    Pending(char),
    /// Typed correctly. `word_failed` is set when the enclosing word is in error overall.
    Correct { ch: char, word_failed: bool },
    /// Typed wrong; shows what was actually typed.
    Incorrect(char),
    /// Abandoned by a skip; shows the target char.
    Missed(char),
    /// Cursor position; shows the char under the cursor.
    Cursor(char),
}

impl Segment {
    pub fn ch(&self) -> char {
        match *self {
            Segment::Pending(c)
            | Segment::Correct { ch: c, .. }
            | Segment::Incorrect(c)
            | Segment::Missed(c)
            | Segment::Cursor(c) => c,
        }
    }
}

pub fn render(passage: &PassageSequence, show_cursor: bool) -> Vec<Segment> {
    let segments: Vec<Segment> = passage
        .tokens()
        .iter()
        .flat_map(|token| token.render(show_cursor))
        .collect();
    trace!(
        "rendered {} segments (cursor at token {})",
        segments.len(),
        passage.cursor_pos()
    );
    segments
}
