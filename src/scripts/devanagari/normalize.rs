use super::classifier::is_in_script;

/// Word separators: Unicode `White_Space` plus the information separators
/// U+001C–U+001F.
pub fn is_separator(c: char) -> bool {
    c.is_whitespace() || ('\u{1C}'..='\u{1F}').contains(&c)
}

/// Prepare raw text for tokenization.
///
/// Runs of separators collapse to a single space, then every character that is
/// neither a space nor inside the Devanagari block is dropped. Dropping happens
/// after collapsing, so a stripped word can leave two adjacent spaces; splitting
/// on whitespace downstream absorbs them.
pub fn normalize_text(text: &str) -> String {
    let mut collapsed = String::with_capacity(text.len());
    for c in text.chars() {
        if is_separator(c) {
            if !collapsed.ends_with(' ') {
                collapsed.push(' ');
            }
        } else {
            collapsed.push(c);
        }
    }

    collapsed
        .chars()
        .filter(|&c| c == ' ' || is_in_script(c))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{is_separator, normalize_text};

    #[test]
    fn collapses_whitespace_runs() {
        assert_eq!(normalize_text("राम\n\n\t सीता"), "राम सीता");
    }

    #[test]
    fn information_separators_split_words() {
        assert!(is_separator('\u{1C}'));
        assert!(is_separator('\u{1F}'));
        assert!(!is_separator('\u{1B}'));
        assert_eq!(normalize_text("राम\u{1C}सीता\u{1F}\u{1E}गीता"), "राम सीता गीता");
    }

    #[test]
    fn strips_foreign_characters_but_keeps_block_punctuation() {
        assert_eq!(normalize_text("राम, (Ram) सीता।"), "राम  सीता।");
    }

    #[test]
    fn leftover_spaces_do_not_make_words() {
        let normalized = normalize_text(" राम abc  सीता ");
        let words: Vec<&str> = normalized.split_whitespace().collect();
        assert_eq!(words, vec!["राम", "सीता"]);
        assert_eq!(normalize_text("hello world").split_whitespace().count(), 0);
    }
}
