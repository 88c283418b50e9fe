use icu_normalizer::ComposingNormalizerBorrowed;

/// Prepares raw text for typing: NFC-composes it so every visible character is a single
/// keystroke target, splits on any whitespace, drops invisible control and format
/// characters, and rejoins the words with single spaces.
pub fn normalize_passage(text: &str) -> String {
    let composed = ComposingNormalizerBorrowed::new_nfc().normalize(text);
    composed
        .split_whitespace()
        .map(|word| word.chars().filter(|&c| is_printable(c)).collect::<String>())
        .filter(|word| !word.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Simple-mode shaping: lowercases, drops sentence punctuation, and turns every other
/// non-alphanumeric character into a word break.
pub fn simplify_passage(text: &str) -> String {
    let spaced: String = text
        .chars()
        .filter(|c| !matches!(c, '.' | ',' | ';' | ':' | '!' | '?'))
        .flat_map(char::to_lowercase)
        .map(|c| if c.is_alphanumeric() { c } else { ' ' })
        .collect();
    spaced.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Keeps at most `max_words` space-separated words.
pub fn truncate_words(text: &str, max_words: usize) -> String {
    text.split_whitespace()
        .take(max_words)
        .collect::<Vec<_>>()
        .join(" ")
}

fn is_printable(c: char) -> bool {
    !c.is_control()
        && !matches!(
            c,
            '\u{00ad}'
                | '\u{200b}'..='\u{200f}'
                | '\u{202a}'..='\u{202e}'
                | '\u{2060}'..='\u{2064}'
                | '\u{feff}'
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapses_whitespace() {
        assert_eq!(normalize_passage("  hello \t\n world  "), "hello world");
    }

    #[test]
    fn test_newline_separates_words() {
        assert_eq!(normalize_passage("end.\nNext"), "end. Next");
    }

    #[test]
    fn test_drops_invisible_chars() {
        assert_eq!(normalize_passage("ca\u{200b}t d\u{7}og\u{feff}"), "cat dog");
    }

    #[test]
    fn test_word_of_only_invisible_chars_vanishes() {
        assert_eq!(normalize_passage("a \u{200b} b"), "a b");
    }

    #[test]
    fn test_composes_decomposed_accents() {
        let text = normalize_passage("cafe\u{0301}");
        assert_eq!(text, "caf\u{e9}");
        assert_eq!(text.chars().count(), 4);
    }

    #[test]
    fn test_simplify_lowercases_and_strips_punctuation() {
        assert_eq!(
            simplify_passage("Hello, World! It's 5 o'clock."),
            "hello world it s 5 o clock"
        );
    }

    #[test]
    fn test_simplify_keeps_unicode_letters() {
        assert_eq!(simplify_passage("Caf\u{e9} \u{dc}ber-alles"), "caf\u{e9} \u{fc}ber alles");
    }

    #[test]
    fn test_simplify_punctuation_only() {
        assert_eq!(simplify_passage("?! ..."), "");
    }

    #[test]
    fn test_truncate_words() {
        assert_eq!(truncate_words("a b c d", 2), "a b");
        assert_eq!(truncate_words("a b", 5), "a b");
        assert_eq!(truncate_words("a b", 0), "");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(normalize_passage(""), "");
        assert_eq!(normalize_passage("   "), "");
    }
}
