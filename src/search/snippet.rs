//! Result preview excerpts. Offsets count Unicode scalar values, so a window
//! edge never lands inside a multibyte character.

pub const DEFAULT_MAX_LENGTH: usize = 200;
const LEADING_CONTEXT: usize = 50;
const TRAILING_CONTEXT: usize = 150;
const ELLIPSIS: &str = "...";

/// Returns an excerpt of `text` around the first case-insensitive occurrence
/// of `term`, or the first `max_len` characters when `term` does not occur.
pub fn snippet(text: &str, term: &str, max_len: usize) -> String {
    let chars = text.chars().collect::<Vec<_>>();

    let Some(index) = find_case_insensitive(&chars, term) else {
        let mut head = chars.iter().take(max_len).collect::<String>();
        if chars.len() > max_len {
            head.push_str(ELLIPSIS);
        }
        return head;
    };

    let start = index.saturating_sub(LEADING_CONTEXT);
    let end = chars
        .len()
        .min(index + term.chars().count() + TRAILING_CONTEXT);

    let mut excerpt = String::new();
    if start > 0 {
        excerpt.push_str(ELLIPSIS);
    }
    excerpt.extend(&chars[start..end]);
    if end < chars.len() {
        excerpt.push_str(ELLIPSIS);
    }
    excerpt
}

/// Character index of the first case-insensitive occurrence of `term`.
pub fn find_case_insensitive(haystack: &[char], term: &str) -> Option<usize> {
    let needle = term.chars().map(fold).collect::<Vec<_>>();
    if needle.is_empty() {
        return Some(0);
    }
    haystack.windows(needle.len()).position(|window| {
        window
            .iter()
            .zip(&needle)
            .all(|(candidate, expected)| fold(*candidate) == *expected)
    })
}

fn fold(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}
