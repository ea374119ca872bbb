//! Shared utility functions.

/// Single-line preview of `s` for log messages.
///
/// Newlines are folded into spaces and the result is cut to at most
/// `max_chars` characters, with `...` appended when something was dropped.
pub fn preview(s: &str, max_chars: usize) -> String {
    let flat: String = s
        .chars()
        .map(|c| if c == '\n' || c == '\r' { ' ' } else { c })
        .collect();
    if flat.chars().count() <= max_chars {
        return flat;
    }
    let mut out: String = flat.chars().take(max_chars).collect();
    out.push_str("...");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preview_short_text_unchanged() {
        assert_eq!(preview("hello", 10), "hello");
    }

    #[test]
    fn preview_truncates_on_char_count() {
        assert_eq!(preview("hello world", 5), "hello...");
        assert_eq!(preview("あのねあのね", 3), "あのね...");
    }

    #[test]
    fn preview_folds_newlines() {
        assert_eq!(preview("a\nb\r\nc", 20), "a b  c");
    }
}
