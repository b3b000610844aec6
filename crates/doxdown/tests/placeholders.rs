use doxdown::markdown::{extract_references, markdown_to_html, to_html, REFERENCE_SENTINEL};
use proptest::prelude::*;

fn placeholder_strategy() -> impl Strategy<Value = String> {
    ("[a-z0-9_]{1,12}", prop::option::of("[A-Za-z]{1,8}")).prop_map(|(id, name)| match name {
        Some(name) => format!("{{#ref {} \"{}\"}}", id, name),
        None => format!("{{#ref {}}}", id),
    })
}

fn markdown_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("plain words ".to_string()),
        Just("*emphasis* ".to_string()),
        Just("**strong** ".to_string()),
        Just("`code` ".to_string()),
        Just("\n\n".to_string()),
        Just("\n- item ".to_string()),
        Just("\n1. step ".to_string()),
        Just("\n# Heading ".to_string()),
        Just("\n> quoted ".to_string()),
        Just("| a | b |\n".to_string()),
    ]
}

fn segment_strategy() -> impl Strategy<Value = (String, Option<String>)> {
    (markdown_strategy(), prop::option::of(placeholder_strategy()))
}

proptest! {
    #[test]
    fn prop_placeholders_survive_in_order(segments in prop::collection::vec(segment_strategy(), 0..12)) {
        let mut text = String::new();
        let mut expected = Vec::new();
        for (markdown, placeholder) in &segments {
            text.push_str(markdown);
            if let Some(placeholder) = placeholder {
                text.push_str(placeholder);
                expected.push(placeholder.clone());
            }
        }

        let html = to_html(&text).unwrap();
        let found: Vec<String> = extract_references(&html).into_iter().map(String::from).collect();
        prop_assert_eq!(found, expected);
        prop_assert!(!html.contains(REFERENCE_SENTINEL));
    }

    #[test]
    fn prop_without_placeholders_is_plain_markdown(segments in prop::collection::vec(markdown_strategy(), 0..12)) {
        let text = segments.concat();
        prop_assert_eq!(to_html(&text).unwrap(), markdown_to_html(&text));
    }
}

#[test]
fn placeholder_inside_code_span_is_restored_verbatim() {
    let html = to_html("call `{#ref f \"f()\"}` first").unwrap();
    assert_eq!(html, "<p>call <code>{#ref f \"f()\"}</code> first</p>\n");
}

#[test]
fn placeholder_in_heading() {
    let html = to_html("# See {#ref classfoo}").unwrap();
    assert_eq!(html, "<h1>See {#ref classfoo}</h1>\n");
}
