//! Markdown conversion that leaves cross-reference placeholders intact.
//!
//! Documentation text carries placeholders such as `{#ref classfoo "Foo"}`
//! which are resolved into links after rendering. Markdown conversion would
//! mangle them (`#` headings, escaped quotes), so they are swapped for a
//! sentinel code point before conversion and restored afterwards:
//!
//! ```text
//! Input:     See {#ref classfoo "Foo"} for *details*.
//! Protected: See \u{E000} for *details*.
//! Converted: <p>See \u{E000} for <em>details</em>.</p>
//! Output:    <p>See {#ref classfoo "Foo"} for <em>details</em>.</p>
//! ```
//!
//! The sentinel is a private-use code point, which CommonMark treats as plain
//! text. If the converted output does not contain exactly as many sentinels as
//! placeholders were captured, conversion fails with
//! [`PlaceholderError::CountMismatch`] instead of re-inserting them out of
//! order.

use once_cell::sync::Lazy;
use pulldown_cmark::{html, Options, Parser};
use regex::{NoExpand, Regex};
use thiserror::Error;

/// Stand-in for a placeholder while the text goes through the Markdown engine.
pub const REFERENCE_SENTINEL: char = '\u{E000}';

/// `{#ref` up to the next `}`. Nested braces are not supported.
static REFERENCE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{#ref[^}]+\}").expect("reference pattern is valid"));

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlaceholderError {
    #[error("expected {expected} reference placeholder(s) after markdown conversion, found {found}")]
    CountMismatch { expected: usize, found: usize },
}

/// Returns every placeholder in `text`, in order of appearance.
pub fn extract_references(text: &str) -> Vec<&str> {
    REFERENCE.find_iter(text).map(|m| m.as_str()).collect()
}

/// Converts Markdown to HTML without touching `{#ref ...}` placeholders.
///
/// # Errors
///
/// Returns [`PlaceholderError::CountMismatch`] when the converter dropped or
/// duplicated a placeholder, or when the input already contained the sentinel.
pub fn to_html(text: &str) -> Result<String, PlaceholderError> {
    let references = extract_references(text);
    let sentinel = REFERENCE_SENTINEL.to_string();
    let protected = REFERENCE.replace_all(text, NoExpand(&sentinel));
    let converted = markdown_to_html(&protected);

    let found = converted.matches(REFERENCE_SENTINEL).count();
    if found != references.len() {
        return Err(PlaceholderError::CountMismatch {
            expected: references.len(),
            found,
        });
    }
    if references.is_empty() {
        return Ok(converted);
    }

    let mut output = String::with_capacity(converted.len() + text.len());
    let mut pieces = converted.split(REFERENCE_SENTINEL);
    output.push_str(pieces.next().unwrap_or_default());
    for (reference, piece) in references.iter().zip(pieces) {
        output.push_str(reference);
        output.push_str(piece);
    }
    Ok(output)
}

/// Plain CommonMark to HTML conversion with tables and strikethrough.
pub fn markdown_to_html(text: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);

    let mut output = String::with_capacity(text.len() * 3 / 2);
    html::push_html(&mut output, Parser::new_ext(text, options));
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_references_in_order() {
        let text = "a {#ref one} b {#ref two \"Two\"} c";
        assert_eq!(extract_references(text), vec!["{#ref one}", "{#ref two \"Two\"}"]);
    }

    #[test]
    fn test_extract_references_requires_content() {
        assert!(extract_references("{#ref}").is_empty());
        assert!(extract_references("{#reference").is_empty());
    }

    #[test]
    fn test_plain_text_matches_markdown_conversion() {
        let text = "Some *emphasis* and `code`.";
        assert_eq!(to_html(text).unwrap(), markdown_to_html(text));
        assert_eq!(to_html(text).unwrap(), "<p>Some <em>emphasis</em> and <code>code</code>.</p>\n");
    }

    #[test]
    fn test_reference_survives_emphasis() {
        let html = to_html("See *{#ref classfoo \"Foo\"}* now").unwrap();
        assert_eq!(html, "<p>See <em>{#ref classfoo \"Foo\"}</em> now</p>\n");
    }

    #[test]
    fn test_reference_at_line_start_is_not_a_heading() {
        let html = to_html("{#ref a}\n\n{#ref b}").unwrap();
        assert_eq!(html, "<p>{#ref a}</p>\n<p>{#ref b}</p>\n");
    }

    #[test]
    fn test_every_reference_is_restored_in_order() {
        let html = to_html("- {#ref a}\n- {#ref b}\n- {#ref c}").unwrap();
        let a = html.find("{#ref a}").unwrap();
        let b = html.find("{#ref b}").unwrap();
        let c = html.find("{#ref c}").unwrap();
        assert!(a < b && b < c);
        assert!(!html.contains(REFERENCE_SENTINEL));
    }

    #[test]
    fn test_sentinel_in_input_is_rejected() {
        let text = format!("stray {} {{#ref a}}", REFERENCE_SENTINEL);
        assert_eq!(
            to_html(&text),
            Err(PlaceholderError::CountMismatch {
                expected: 1,
                found: 2
            })
        );
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(to_html("").unwrap(), "");
    }
}
