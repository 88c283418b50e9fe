use std::time::Duration;

use wordmatch::config::Config;
use wordmatch::session::input::{self, Keystroke};
use wordmatch::session::{PassageSequence, SessionResult, TypingSession, WordState, WordStats};

fn typed(passage: &str, input: &str) -> PassageSequence {
    let mut passage = PassageSequence::new(passage);
    for ch in input.chars() {
        passage.type_char(ch);
    }
    passage
}

fn stats(total: usize, correct: usize, errors: usize) -> WordStats {
    WordStats {
        total,
        correct,
        errors,
    }
}

#[test]
fn exact_input_completes_perfectly() {
    let passage = typed("cat dog", "cat dog");
    assert_eq!(passage.stats(), stats(2, 2, 0));
    assert!(passage.is_complete());
}

#[test]
fn mismatch_marks_word_as_error() {
    let passage = typed("cat dog", "cbt dog");
    assert_eq!(passage.tokens()[0].state(), WordState::Error);
    assert_eq!(passage.stats(), stats(2, 1, 1));
}

#[test]
fn early_space_skips_word() {
    let passage = typed("cat dog", "ca dog");
    assert_eq!(passage.tokens()[0].state(), WordState::Error);
    assert_eq!(passage.tokens()[2].state(), WordState::Perfect);
    assert_eq!(passage.stats(), stats(2, 1, 1));
}

#[test]
fn backspace_on_first_word_restores_untyped() {
    let mut passage = PassageSequence::new("a b");
    passage.type_char('a');
    passage.backspace();
    assert_eq!(passage.tokens()[0].state(), WordState::Untyped);
    assert!(passage.tokens()[0].typed().is_empty());
    assert_eq!(passage.cursor_pos(), 0);
}

#[test]
fn scoring_from_word_counts() {
    let result = SessionResult::new(stats(10, 8, 2), &Duration::from_secs(60), "", false);
    assert!((result.accuracy - 80.0).abs() < 1e-9);
    assert!((result.wpm - 8.0).abs() < 1e-9);
}

#[test]
fn long_passage_typed_exactly() {
    let text = "the quick brown fox jumps over the lazy dog";
    let passage = typed(text, text);
    let s = passage.stats();
    assert_eq!(s.total, 9);
    assert_eq!(s.correct, s.total);
    assert_eq!(s.errors, 0);
    assert!(passage.is_complete());
    assert!(
        passage
            .tokens()
            .iter()
            .filter(|t| !t.is_separator())
            .all(|t| t.state() == WordState::Perfect)
    );
}

#[test]
fn type_then_backspace_at_word_boundary_reactivates_previous() {
    let mut passage = typed("cat dog", "cat ");
    assert_eq!(passage.cursor_pos(), 2);
    passage.type_char('d');
    passage.backspace();
    assert_eq!(passage.tokens()[2].state(), WordState::Untyped);
    assert_eq!(passage.cursor_pos(), 2);
    passage.backspace();
    assert_eq!(passage.cursor_pos(), 0);
    assert!(passage.tokens()[0].is_active());
    assert!(!passage.tokens()[2].is_active());
}

#[test]
fn abandoned_word_counts_toward_total_only() {
    let passage = typed("cat dog", "cat do");
    assert_eq!(passage.tokens()[2].state(), WordState::Imperfect);
    assert_eq!(passage.stats(), stats(2, 1, 0));
    assert!(!passage.is_complete());
}

#[test]
fn session_replay_with_backspaces() {
    let mut session = TypingSession::new("cat dog", Config::default());
    for key in input::parse_script(r"cx\bat dog") {
        input::process_key(&mut session, key);
    }
    assert!(session.is_complete());
    assert_eq!(session.stats(), stats(2, 2, 0));
    assert!(session.finished_at.is_some());
    assert!(input::process_key(&mut session, Keystroke::Backspace).is_none());
}
