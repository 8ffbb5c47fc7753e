//! Counting utilities.
//!
//! These define what "hitting the target size" means. The assemblers report
//! their measured size with them and the list validator re-checks with them,
//! so there is exactly one definition of a word, a sentence and a list item.

/// Count whitespace-separated words.
#[must_use]
pub fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Count sentences, splitting on runs of `.`, `!` and `?`.
#[must_use]
pub fn count_sentences(text: &str) -> usize {
    text.split(['.', '!', '?'])
        .filter(|fragment| !fragment.trim().is_empty())
        .count()
}

/// Count lines that start with a number followed by a period, e.g. `"3. "`.
#[must_use]
pub fn count_list_items(text: &str) -> usize {
    text.lines().filter(|line| is_numbered(line.trim())).count()
}

fn is_numbered(line: &str) -> bool {
    let rest = line.trim_start_matches(|c: char| c.is_ascii_digit());
    rest.len() < line.len() && rest.starts_with('.')
}

/// Rough number of rendered lines for `text` in a box `width` pixels wide.
///
/// Assumes `px_per_char` pixels per character; every hard line break starts a
/// new line and long lines wrap.
#[must_use]
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn estimate_lines(text: &str, width: f32, px_per_char: f32) -> usize {
    let chars_per_line = (width / px_per_char).max(1.0);
    text.split('\n')
        .map(|line| 1 + (line.chars().count() as f32 / chars_per_line).floor() as usize)
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_words() {
        assert_eq!(count_words(""), 0);
        assert_eq!(count_words("   "), 0);
        assert_eq!(count_words("one"), 1);
        assert_eq!(count_words("  two\twords\n"), 2);
        assert_eq!(count_words("تستمر هذه التقنية في التطور."), 5);
    }

    #[test]
    fn test_count_sentences() {
        assert_eq!(count_sentences(""), 0);
        assert_eq!(count_sentences("No terminator"), 1);
        assert_eq!(count_sentences("One. Two! Three?"), 3);
        assert_eq!(count_sentences("Wait... what?! Yes."), 3);
        assert_eq!(count_sentences(". . ."), 0);
    }

    #[test]
    fn test_count_list_items() {
        let text = "1. First item\n2. Second item\nnot an item\n  10. Indented\n3 missing dot";
        assert_eq!(count_list_items(text), 3);
        assert_eq!(count_list_items(""), 0);
        assert_eq!(count_list_items(". no digits"), 0);
    }

    #[test]
    fn test_counting_is_idempotent() {
        let text = "1. Alpha beta.\n2. Gamma! Delta?";
        assert_eq!(count_words(text), count_words(text));
        assert_eq!(count_sentences(text), count_sentences(text));
        assert_eq!(count_list_items(text), count_list_items(text));
    }

    #[test]
    fn test_estimate_lines() {
        // 650px at 8px per char wraps after 81.25 characters.
        assert_eq!(estimate_lines("short", 650.0, 8.0), 1);
        assert_eq!(estimate_lines(&"x".repeat(82), 650.0, 8.0), 2);
        assert_eq!(estimate_lines("a\nb\nc", 650.0, 8.0), 3);
    }
}
