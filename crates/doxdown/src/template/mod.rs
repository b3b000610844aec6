//! Template loading and compound rendering.
//!
//! - [`TemplateRegistry`]: compiles the templates once, read-only afterwards
//! - [`Renderer`]: picks a template per compound and renders it
//! - [`helpers`]: the filters and functions every template can call
//!
//! ```rust,ignore
//! let registry = TemplateRegistry::load("./templates", &RenderOptions::from_env())?;
//! let renderer = Renderer::new(registry);
//!
//! let pages: Vec<String> = renderer
//!     .render_all(&compounds)?
//!     .into_iter()
//!     .flatten()
//!     .collect();
//! ```

pub mod helpers;
pub mod registry;
mod renderer;

pub use registry::{template_name, TemplateRegistry, TEMPLATE_EXTENSION};
pub use renderer::{wraps_single_namespace, Renderer, TemplateName};
