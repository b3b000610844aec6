//! Compound-to-Markdown rendering.
//!
//! [`Renderer`] picks a template for each compound from its kind, renders it
//! with the compound as context and trims runs of blank lines from the result.
//!
//! # Dispatch
//!
//! | Kind | Template |
//! |------|----------|
//! | `index` | `index` |
//! | `page` | `page` |
//! | `group`, `namespace` | `namespace`, unless collapsed |
//! | `class`, `struct` | `class` |
//! | anything else | skipped with a warning |
//!
//! A group or namespace whose only child is a namespace is collapsed: it
//! produces no output, so chains like `a` → `a::b` → `a::b::c` yield one page
//! for the innermost namespace instead of a page per level.
//!
//! Skipped compounds render to `Ok(None)`. That is distinct from a template
//! that legitimately renders to an empty string.

use std::fmt;

use tracing::{debug, warn};

use super::registry::TemplateRegistry;
use crate::compound::{Compound, Kind};
use crate::error::RenderError;
use crate::util::normalize_blank_lines;

/// Templates a compound can be rendered with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemplateName {
    Index,
    Page,
    Namespace,
    Class,
}

impl TemplateName {
    pub fn as_str(self) -> &'static str {
        match self {
            TemplateName::Index => "index",
            TemplateName::Page => "page",
            TemplateName::Namespace => "namespace",
            TemplateName::Class => "class",
        }
    }
}

impl fmt::Display for TemplateName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

enum Dispatch {
    Template(TemplateName),
    Collapsed,
    Unsupported,
}

/// Whether `compound` only wraps a single namespace.
pub fn wraps_single_namespace(compound: &Compound) -> bool {
    compound
        .compounds
        .only()
        .is_some_and(|child| child.kind == Kind::Namespace)
}

fn dispatch(compound: &Compound) -> Dispatch {
    match compound.kind {
        Kind::Index => Dispatch::Template(TemplateName::Index),
        Kind::Page => Dispatch::Template(TemplateName::Page),
        Kind::Group | Kind::Namespace if wraps_single_namespace(compound) => Dispatch::Collapsed,
        Kind::Group | Kind::Namespace => Dispatch::Template(TemplateName::Namespace),
        Kind::Class | Kind::Struct => Dispatch::Template(TemplateName::Class),
        Kind::Other(_) => Dispatch::Unsupported,
    }
}

/// Renders compounds with the templates of a [`TemplateRegistry`].
///
/// The renderer never mutates its registry, so one instance can be shared
/// across threads and every call is independent.
///
/// # Example
///
/// ```rust
/// use doxdown::{Compound, Kind, RenderOptions, Renderer, TemplateRegistry};
///
/// let registry = TemplateRegistry::from_entries(
///     &[("class.md", "# {{ kind }} {{ name }}\n\n\n\n{{ briefdescription }}\n")],
///     &RenderOptions::default(),
/// )
/// .unwrap();
/// let renderer = Renderer::new(registry);
///
/// let class = Compound::new(Kind::Class, "Client").with_brief("An HTTP client.");
/// let out = renderer.render(&class).unwrap();
/// assert_eq!(out.as_deref(), Some("# class Client\n\nAn HTTP client.\n"));
///
/// let file = Compound::new(Kind::Other("file".into()), "client.h");
/// assert_eq!(renderer.render(&file).unwrap(), None);
/// ```
#[derive(Debug)]
pub struct Renderer {
    registry: TemplateRegistry,
}

impl Renderer {
    pub fn new(registry: TemplateRegistry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &TemplateRegistry {
        &self.registry
    }

    /// The template `compound` would be rendered with, or `None` if it is
    /// skipped.
    pub fn template_for(compound: &Compound) -> Option<TemplateName> {
        match dispatch(compound) {
            Dispatch::Template(name) => Some(name),
            Dispatch::Collapsed | Dispatch::Unsupported => None,
        }
    }

    /// Renders one compound.
    ///
    /// Returns `Ok(None)` for collapsed namespaces and unsupported kinds.
    ///
    /// # Errors
    ///
    /// Fails if the selected template is not registered or if rendering it
    /// fails (undefined field, helper error).
    pub fn render(&self, compound: &Compound) -> Result<Option<String>, RenderError> {
        debug!(kind = %compound.kind, fullname = %compound.fullname, "rendering compound");

        let name = match dispatch(compound) {
            Dispatch::Template(name) => name,
            Dispatch::Collapsed => {
                debug!(
                    kind = %compound.kind,
                    fullname = %compound.fullname,
                    "collapsing wrapper around a single namespace"
                );
                return Ok(None);
            }
            Dispatch::Unsupported => {
                warn!(
                    kind = %compound.kind,
                    fullname = %compound.fullname,
                    "cannot render compound"
                );
                return Ok(None);
            }
        };

        let output = self.registry.template(name.as_str())?.render(compound)?;
        Ok(Some(normalize_blank_lines(&output).into_owned()))
    }

    /// Renders each compound in order. Skipped compounds stay in place as
    /// `None`; filtering them out is up to the caller.
    pub fn render_all(&self, compounds: &[Compound]) -> Result<Vec<Option<String>>, RenderError> {
        compounds
            .iter()
            .map(|compound| self.render(compound))
            .collect()
    }
}
