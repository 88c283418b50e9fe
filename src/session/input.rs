use std::time::Instant;

use log::debug;

use crate::session::lesson::TypingSession;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Keystroke {
    Char(char),
    Backspace,
}

#[derive(Clone, Debug)]
pub struct KeystrokeEvent {
    pub key: Keystroke,
    pub cursor_before: usize,
    pub cursor_after: usize,
    pub timestamp: Instant,
}

pub fn process_key(session: &mut TypingSession, key: Keystroke) -> Option<KeystrokeEvent> {
    if session.is_complete() {
        return None;
    }

    let now = Instant::now();
    if session.started_at.is_none() {
        session.started_at = Some(now);
    }

    let cursor_before = session.passage.cursor_pos();
    match key {
        Keystroke::Char(ch) => session.passage.type_char(ch),
        Keystroke::Backspace => session.passage.backspace(),
    }
    let cursor_after = session.passage.cursor_pos();
    debug!("{key:?}: cursor {cursor_before} -> {cursor_after}");

    if session.is_complete() {
        session.finished_at = Some(Instant::now());
    }

    Some(KeystrokeEvent {
        key,
        cursor_before,
        cursor_after,
        timestamp: now,
    })
}

/// Parses a replay script: `\b` is a backspace, `\\` a literal backslash, and every other
/// character is typed as-is. A lone trailing backslash is typed literally.
pub fn parse_script(script: &str) -> Vec<Keystroke> {
    let mut keys = Vec::with_capacity(script.len());
    let mut chars = script.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch != '\\' {
            keys.push(Keystroke::Char(ch));
            continue;
        }
        match chars.peek() {
            Some('b') => {
                chars.next();
                keys.push(Keystroke::Backspace);
            }
            Some('\\') => {
                chars.next();
                keys.push(Keystroke::Char('\\'));
            }
            _ => keys.push(Keystroke::Char('\\')),
        }
    }

    keys
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    #[test]
    fn test_parse_plain_script() {
        assert_eq!(
            parse_script("ab "),
            vec![
                Keystroke::Char('a'),
                Keystroke::Char('b'),
                Keystroke::Char(' ')
            ]
        );
    }

    #[test]
    fn test_parse_escapes() {
        assert_eq!(
            parse_script(r"a\bc\\d\x"),
            vec![
                Keystroke::Char('a'),
                Keystroke::Backspace,
                Keystroke::Char('c'),
                Keystroke::Char('\\'),
                Keystroke::Char('d'),
                Keystroke::Char('\\'),
                Keystroke::Char('x'),
            ]
        );
        assert_eq!(parse_script("\\"), vec![Keystroke::Char('\\')]);
    }

    #[test]
    fn test_first_key_starts_clock() {
        let mut session = TypingSession::new("cat", Config::default());
        assert!(session.started_at.is_none());
        let event = process_key(&mut session, Keystroke::Backspace).unwrap();
        assert!(session.started_at.is_some());
        assert_eq!(event.cursor_before, 0);
        assert_eq!(event.cursor_after, 0);
    }

    #[test]
    fn test_completion_stops_clock() {
        let mut session = TypingSession::new("hi", Config::default());
        process_key(&mut session, Keystroke::Char('h'));
        assert!(session.finished_at.is_none());
        process_key(&mut session, Keystroke::Char('i'));
        assert!(session.finished_at.is_some());
        assert!(process_key(&mut session, Keystroke::Char('x')).is_none());
    }

    #[test]
    fn test_event_reports_cursor_move() {
        let mut session = TypingSession::new("cat dog", Config::default());
        for key in parse_script("ca") {
            process_key(&mut session, key);
        }
        let event = process_key(&mut session, Keystroke::Char(' ')).unwrap();
        assert_eq!(event.key, Keystroke::Char(' '));
        assert_eq!(event.cursor_before, 0);
        assert_eq!(event.cursor_after, 2);
    }
}
