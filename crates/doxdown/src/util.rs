//! Text post-processing shared by renderers.

use std::borrow::Cow;

/// Collapses every run of three or more line breaks into two.
///
/// `\r\n`, `\r` and `\n` each count as one break. The last break of a long
/// run is kept and followed by `\n`, so at most one blank line survives.
/// Applying this twice gives the same result as once.
///
/// ```rust
/// use doxdown::normalize_blank_lines;
///
/// assert_eq!(normalize_blank_lines("a\n\n\n\nb"), "a\n\nb");
/// assert_eq!(normalize_blank_lines("a\n\nb"), "a\n\nb");
/// ```
pub fn normalize_blank_lines(text: &str) -> Cow<'_, str> {
    let bytes = text.as_bytes();
    let mut output = String::new();
    let mut copied = 0;
    let mut i = 0;

    while i < bytes.len() {
        if !is_break(bytes[i]) {
            i += 1;
            continue;
        }

        let start = i;
        let mut last = i;
        let mut breaks = 0;
        while i < bytes.len() && is_break(bytes[i]) {
            last = i;
            i += if bytes[i] == b'\r' && bytes.get(i + 1) == Some(&b'\n') {
                2
            } else {
                1
            };
            breaks += 1;
        }

        if breaks >= 3 {
            output.push_str(&text[copied..start]);
            output.push_str(&text[last..i]);
            output.push('\n');
            copied = i;
        }
    }

    if copied == 0 {
        return Cow::Borrowed(text);
    }
    output.push_str(&text[copied..]);
    Cow::Owned(output)
}

fn is_break(byte: u8) -> bool {
    byte == b'\n' || byte == b'\r'
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_short_runs_untouched() {
        assert_eq!(normalize_blank_lines("a\nb\n\nc"), "a\nb\n\nc");
        assert!(matches!(normalize_blank_lines("a\n\nb"), Cow::Borrowed(_)));
    }

    #[test]
    fn test_long_runs_collapse_everywhere() {
        assert_eq!(normalize_blank_lines("\n\n\na\n\n\n\n\nb\n\n\n"), "\n\na\n\nb\n\n");
    }

    #[test]
    fn test_crlf_runs_keep_last_break() {
        assert_eq!(normalize_blank_lines("a\r\n\r\n\r\nb"), "a\r\n\nb");
        assert_eq!(normalize_blank_lines("a\r\n\r\nb"), "a\r\n\r\nb");
        assert_eq!(normalize_blank_lines("a\n\n\rb"), "a\r\nb");
    }

    proptest! {
        #[test]
        fn prop_normalization_is_idempotent(text in "[ab\r\n]{0,40}") {
            let once = normalize_blank_lines(&text).into_owned();
            let twice = normalize_blank_lines(&once).into_owned();
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn prop_no_long_newline_runs_remain(text in "[ab\n]{0,40}") {
            let out = normalize_blank_lines(&text);
            prop_assert!(!out.contains("\n\n\n"));
        }
    }
}
