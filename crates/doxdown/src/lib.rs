//! # Doxdown - API Documentation to Markdown
//!
//! `doxdown` turns a tree of parsed API documentation compounds (namespaces,
//! classes, structs, groups, pages and the index) into Markdown, using one
//! Jinja template per kind of compound.
//!
//! Parsing the documentation and writing files are left to the caller; this
//! crate covers the step in between.
//!
//! ## Core Concepts
//!
//! - [`Compound`]: one node of the documentation tree
//! - [`TemplateRegistry`]: compiled templates, loaded once from a directory
//! - [`Renderer`]: selects a template by [`Kind`] and renders a compound
//! - [`markdown::to_html`]: Markdown conversion that keeps `{#ref ...}`
//!   cross-reference placeholders intact
//! - [`RenderOptions`]: anchor style and production mode for template helpers
//!
//! ## Quick Start
//!
//! ```rust
//! use doxdown::{AnchorStyle, Compound, Kind, Member, RenderOptions, Renderer, TemplateRegistry};
//!
//! let options = RenderOptions::default().with_anchors(AnchorStyle::Markdown);
//! let registry = TemplateRegistry::from_entries(
//!     &[(
//!         "class.md",
//!         "# {{ name }} {{ anchor(refid) }}\n\n\
//!          | Member | Description |\n\
//!          |--------|-------------|\n\
//!          {% for m in members %}| `{{ m.proto | cell }}` | {{ m.briefdescription | cell }} |\n{% endfor %}",
//!     )],
//!     &options,
//! )
//! .unwrap();
//!
//! let client = Compound::new(Kind::Class, "Client")
//!     .with_refid("classclient")
//!     .with_member(Member::new("function", "get").with_proto("Response get(Url)").with_brief("Fetch a | b"));
//!
//! let out = Renderer::new(registry).render(&client).unwrap().unwrap();
//! assert!(out.starts_with("# Client {#classclient}"));
//! assert!(out.contains("| `Response get(Url)` | Fetch a \\| b |"));
//! ```
//!
//! ## Logging
//!
//! Diagnostics go through `tracing`. Unsupported compound kinds are reported
//! at `warn` level; per-compound progress at `debug`. The library never
//! installs a subscriber.

mod anchor;
pub mod compound;
mod error;
pub mod markdown;
mod options;
pub mod template;
mod util;

pub use anchor::{AnchorGenerator, AnchorStyle};
pub use compound::{Children, Compound, Kind, Member};
pub use error::{RegistryError, RenderError};
pub use markdown::PlaceholderError;
pub use options::{EnvReader, MockEnv, RealEnv, RenderOptions, PRODUCTION_VAR};
pub use template::{Renderer, TemplateName, TemplateRegistry};
pub use util::normalize_blank_lines;
