//! Anchors for internal cross-links.
//!
//! Templates call `anchor(refid)` next to every heading that other pages link
//! to. How the anchor is spelled depends on the Markdown flavour the output is
//! published with, so the generator is pluggable.

/// Computes the anchor markup for a documentation id.
///
/// Implementations must be pure: the same name always yields the same anchor.
pub trait AnchorGenerator: Send + Sync {
    fn anchor(&self, name: &str) -> String;
}

/// Built-in anchor spellings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AnchorStyle {
    /// No anchors at all.
    #[default]
    None,
    /// Heading attribute syntax: `{#name}`.
    Markdown,
    /// An empty HTML anchor: `<a id="name"></a>`.
    Html,
}

impl AnchorGenerator for AnchorStyle {
    fn anchor(&self, name: &str) -> String {
        match self {
            AnchorStyle::None => String::new(),
            AnchorStyle::Markdown => format!("{{#{}}}", name),
            AnchorStyle::Html => format!("<a id=\"{}\"></a>", name),
        }
    }
}
