//! Filters and functions available inside documentation templates.
//!
//! ## Escaping
//!
//! - `cell` - escape text for a single Markdown table cell
//! - `title` - keep multi-line text on a single heading line
//! - `html` - Markdown to HTML, preserving `{#ref ...}` placeholders
//! - `anchor` - anchor markup for an id, see [`crate::AnchorGenerator`]
//!
//! Each is registered both as a filter and as a function, so
//! `{{ briefdescription | cell }}` and `{{ cell(briefdescription) }}` are
//! equivalent.
//!
//! ## Logic
//!
//! - `eq(a, b)`, `ne`, `lt`, `gt`, `lte`, `gte` - comparisons
//! - `and(a, b, ...)` - every argument is a non-empty string, list or map
//! - `or(a, b, ...)` - at least one argument is a non-empty string, list or map
//! - `isprodand(v)` - outside production mode always true, inside it `v`
//!   must not be `""`, `false` or `0`
//!
//! ```jinja
//! {% if and(briefdescription, detaileddescription) %}
//! {{ briefdescription | title }}
//! {% endif %}
//! ```

use minijinja::value::{Rest, ValueKind};
use minijinja::{Environment, Error, ErrorKind, Value};

use crate::markdown;
use crate::options::RenderOptions;

/// Line break marker that keeps content inside one table row or heading.
pub const INLINE_BREAK: &str = "<br/>";

/// Escapes `text` for use inside a Markdown table cell.
///
/// ```rust
/// assert_eq!(doxdown::template::helpers::cell("a|b\nc"), "a\\|b<br/>c");
/// ```
pub fn cell(text: &str) -> String {
    text.replace('|', "\\|").replace('\n', INLINE_BREAK)
}

/// Replaces line breaks with [`INLINE_BREAK`].
pub fn title(text: &str) -> String {
    text.replace('\n', INLINE_BREAK)
}

/// Whether a template value counts as "set" for `and` and `or`.
///
/// Only values with a length can be set, and only when that length is
/// non-zero. Numbers and booleans have no length and are never set, so
/// `and(5)` and `or(true)` are both false.
pub fn is_present(value: &Value) -> bool {
    match value.kind() {
        ValueKind::String | ValueKind::Bytes | ValueKind::Seq | ValueKind::Map => {
            value.len().is_some_and(|len| len > 0)
        }
        _ => false,
    }
}

/// Whether a value compares equal to the empty string under loose equality:
/// `""`, an empty sequence, `false` and zero. Undefined and none do not.
fn is_blank(value: &Value) -> bool {
    match value.kind() {
        ValueKind::String | ValueKind::Bytes | ValueKind::Seq => value.len() == Some(0),
        ValueKind::Bool | ValueKind::Number => !value.is_true(),
        _ => false,
    }
}

/// True when every value is present. Vacuously true for no values.
pub fn and(values: &[Value]) -> bool {
    values.iter().all(is_present)
}

/// True when at least one value is present.
pub fn or(values: &[Value]) -> bool {
    values.iter().any(is_present)
}

/// Outside production mode always true. Inside it, `value` must not be blank.
pub fn isprodand(value: &Value, production: bool) -> bool {
    !production || !is_blank(value)
}

fn html(text: String) -> Result<String, Error> {
    markdown::to_html(&text).map_err(|err| Error::new(ErrorKind::InvalidOperation, err.to_string()))
}

/// Registers every documentation helper on `env`.
pub fn register_helpers(env: &mut Environment<'static>, options: &RenderOptions) {
    env.add_filter("cell", |text: String| cell(&text));
    env.add_function("cell", |text: String| cell(&text));
    env.add_filter("title", |text: String| title(&text));
    env.add_function("title", |text: String| title(&text));
    env.add_filter("html", html);
    env.add_function("html", html);

    let anchors = options.clone();
    env.add_filter("anchor", move |name: String| anchors.anchor(&name));
    let anchors = options.clone();
    env.add_function("anchor", move |name: String| anchors.anchor(&name));

    env.add_function("eq", |a: Value, b: Value| a == b);
    env.add_function("ne", |a: Value, b: Value| a != b);
    env.add_function("lt", |a: Value, b: Value| a < b);
    env.add_function("gt", |a: Value, b: Value| a > b);
    env.add_function("lte", |a: Value, b: Value| a <= b);
    env.add_function("gte", |a: Value, b: Value| a >= b);

    env.add_function("and", |values: Rest<Value>| and(&values));
    env.add_function("or", |values: Rest<Value>| or(&values));

    let production = options.production();
    env.add_function("isprodand", move |value: Value| isprodand(&value, production));
}
