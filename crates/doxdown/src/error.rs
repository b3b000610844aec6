//! Error types for template loading and rendering.
//!
//! Loading errors ([`RegistryError`]) are fatal: nothing can be rendered
//! without its templates. [`RenderError`] covers failures while a template
//! runs. Skipped compounds are not errors; [`Renderer::render`] reports them
//! as `Ok(None)`.
//!
//! [`Renderer::render`]: crate::Renderer::render

use std::path::PathBuf;

use thiserror::Error;

/// Failure while loading or compiling templates.
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("template directory not found: {}", path.display())]
    DirectoryNotFound { path: PathBuf },

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to compile template \"{name}\": {source}")]
    Compile {
        name: String,
        #[source]
        source: minijinja::Error,
    },
}

/// Failure while rendering a compound.
#[derive(Debug, Error)]
pub enum RenderError {
    /// No template is registered under this name.
    #[error("template not found: {0}")]
    TemplateNotFound(String),

    /// Syntax, strict-mode undefined access, or a helper failing mid-render.
    #[error("template error: {0}")]
    Template(#[source] minijinja::Error),
}

/// Engine errors always keep their source. A missing top-level template is
/// reported by the registry by name before the engine is asked for it, so a
/// `TemplateNotFound` from the engine comes from an `include` or `extends`
/// inside a template and is a template error.
impl From<minijinja::Error> for RenderError {
    fn from(err: minijinja::Error) -> Self {
        RenderError::Template(err)
    }
}
