//! Compiled documentation templates, keyed by template name.
//!
//! A [`TemplateRegistry`] is built once at startup and is read-only
//! afterwards. It owns a MiniJinja environment configured for Markdown output:
//!
//! - Strict undefined handling: `{{ missing }}` is an error, not an empty string
//! - No auto-escaping: escaping is done explicitly with `cell`, `title` and `html`
//! - `trim_blocks` and `lstrip_blocks`, so block tags on their own line leave
//!   no stray whitespace behind
//!
//! # Template Files
//!
//! A template directory holds one file per template. The file name minus the
//! [`TEMPLATE_EXTENSION`] is the template name:
//!
//! | File | Template name |
//! |------|---------------|
//! | `class.md` | `class` |
//! | `namespace.md` | `namespace` |
//!
//! Directories are scanned non-recursively. Files with other extensions are
//! ignored.
//!
//! # Example
//!
//! ```rust,ignore
//! use doxdown::{RenderOptions, TemplateRegistry};
//!
//! let registry = TemplateRegistry::load("./templates", &RenderOptions::from_env())?;
//! assert!(registry.contains("class"));
//! ```

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use minijinja::{AutoEscape, Environment, Template, UndefinedBehavior};
use tracing::{debug, info};

use super::helpers::register_helpers;
use crate::error::{RegistryError, RenderError};
use crate::options::RenderOptions;

/// Extension of template files. Stripped to get the template name.
pub const TEMPLATE_EXTENSION: &str = ".md";

/// Returns the template name for a file name, if it is a template file.
///
/// ```rust
/// use doxdown::template::registry::template_name;
///
/// assert_eq!(template_name("class.md"), Some("class"));
/// assert_eq!(template_name("README.txt"), None);
/// assert_eq!(template_name(".md"), None);
/// ```
pub fn template_name(file_name: &str) -> Option<&str> {
    file_name
        .strip_suffix(TEMPLATE_EXTENSION)
        .filter(|name| !name.is_empty())
}

/// Named, compiled templates with the documentation helpers registered.
pub struct TemplateRegistry {
    env: Environment<'static>,
    names: BTreeSet<String>,
}

impl std::fmt::Debug for TemplateRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TemplateRegistry")
            .field("names", &self.names)
            .finish_non_exhaustive()
    }
}

impl TemplateRegistry {
    /// Creates an empty registry whose helpers use `options`.
    pub fn new(options: &RenderOptions) -> Self {
        let mut env = Environment::new();
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        env.set_auto_escape_callback(|_| AutoEscape::None);
        env.set_trim_blocks(true);
        env.set_lstrip_blocks(true);
        env.set_keep_trailing_newline(true);
        register_helpers(&mut env, options);

        Self {
            env,
            names: BTreeSet::new(),
        }
    }

    /// Loads every template in `dir`.
    ///
    /// # Errors
    ///
    /// Fails if the directory or any template file cannot be read, or if a
    /// template does not compile.
    pub fn load(dir: impl AsRef<Path>, options: &RenderOptions) -> Result<Self, RegistryError> {
        let mut registry = Self::new(options);
        registry.add_dir(dir)?;
        Ok(registry)
    }

    /// Builds a registry from `(file_name, source)` pairs.
    ///
    /// File names follow the same rule as directory loading: `class.md`
    /// registers `class`, anything without the template extension is skipped.
    ///
    /// ```rust
    /// use doxdown::{RenderOptions, TemplateRegistry};
    ///
    /// let registry = TemplateRegistry::from_entries(
    ///     &[("class.md", "# {{ name }}\n"), ("notes.txt", "ignored")],
    ///     &RenderOptions::default(),
    /// )
    /// .unwrap();
    /// assert!(registry.contains("class"));
    /// assert_eq!(registry.len(), 1);
    /// ```
    pub fn from_entries(
        entries: &[(&str, &str)],
        options: &RenderOptions,
    ) -> Result<Self, RegistryError> {
        let mut registry = Self::new(options);
        for (file_name, source) in entries {
            match template_name(file_name) {
                Some(name) => registry.add_template(name, *source)?,
                None => debug!(file = %file_name, "skipping non-template entry"),
            }
        }
        Ok(registry)
    }

    /// Compiles `source` and registers it as `name`, replacing any existing
    /// template of that name.
    pub fn add_template(
        &mut self,
        name: impl Into<String>,
        source: impl Into<String>,
    ) -> Result<(), RegistryError> {
        let name = name.into();
        self.env
            .add_template_owned(name.clone(), source.into())
            .map_err(|source| RegistryError::Compile {
                name: name.clone(),
                source,
            })?;
        debug!(template = %name, "compiled template");
        self.names.insert(name);
        Ok(())
    }

    /// Registers every template file directly inside `dir`.
    ///
    /// Files are compiled in name order so that a failure is reported for the
    /// same file on every run.
    pub fn add_dir(&mut self, dir: impl AsRef<Path>) -> Result<(), RegistryError> {
        let dir = dir.as_ref();
        if !dir.is_dir() {
            return Err(RegistryError::DirectoryNotFound {
                path: dir.to_path_buf(),
            });
        }

        let mut files: Vec<(String, PathBuf)> = Vec::new();
        for entry in fs::read_dir(dir).map_err(|source| io_error(dir, source))? {
            let entry = entry.map_err(|source| io_error(dir, source))?;
            let path = entry.path();
            if !path.is_file() {
                debug!(path = %path.display(), "skipping non-file entry");
                continue;
            }
            let file_name = entry.file_name();
            match template_name(&file_name.to_string_lossy()) {
                Some(name) => files.push((name.to_string(), path)),
                None => debug!(path = %path.display(), "skipping non-template file"),
            }
        }
        files.sort();

        let count = files.len();
        for (name, path) in files {
            let source = fs::read_to_string(&path).map_err(|source| io_error(&path, source))?;
            self.add_template(name, source)?;
        }
        info!(dir = %dir.display(), count, "loaded templates");
        Ok(())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    /// Registered template names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub(crate) fn template(&self, name: &str) -> Result<Template<'_, '_>, RenderError> {
        if !self.contains(name) {
            return Err(RenderError::TemplateNotFound(name.to_string()));
        }
        Ok(self.env.get_template(name)?)
    }
}

fn io_error(path: &Path, source: std::io::Error) -> RegistryError {
    RegistryError::Io {
        path: path.to_path_buf(),
        source,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use minijinja::context;
    use std::fs;
    use tempfile::TempDir;

    fn options() -> RenderOptions {
        RenderOptions::default()
    }

    #[test]
    fn test_template_name_strips_extension() {
        assert_eq!(template_name("namespace.md"), Some("namespace"));
        assert_eq!(template_name("class.md.bak"), None);
        assert_eq!(template_name("index"), None);
    }

    #[test]
    fn test_load_registers_md_files_only() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("class.md"), "# {{ name }}\n").unwrap();
        fs::write(dir.path().join("page.md"), "{{ name }}\n").unwrap();
        fs::write(dir.path().join("notes.txt"), "{{ broken").unwrap();
        fs::create_dir(dir.path().join("nested.md")).unwrap();

        let registry = TemplateRegistry::load(dir.path(), &options()).unwrap();
        let names: Vec<&str> = registry.names().collect();
        assert_eq!(names, vec!["class", "page"]);
    }

    #[test]
    fn test_load_is_not_recursive() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();
        fs::write(dir.path().join("sub").join("class.md"), "x").unwrap();

        let registry = TemplateRegistry::load(dir.path(), &options()).unwrap();
        assert!(registry.is_empty());
    }

    #[test]
    fn test_missing_directory_is_an_error() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope");

        let err = TemplateRegistry::load(&missing, &options()).unwrap_err();
        assert!(matches!(err, RegistryError::DirectoryNotFound { path } if path == missing));
    }

    #[test]
    fn test_syntax_error_names_the_file() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("class.md"), "{% if name %}unterminated").unwrap();

        let err = TemplateRegistry::load(dir.path(), &options()).unwrap_err();
        match err {
            RegistryError::Compile { name, .. } => assert_eq!(name, "class"),
            other => panic!("expected compile error, got {:?}", other),
        }
    }

    #[test]
    fn test_reload_overwrites() {
        let mut registry = TemplateRegistry::new(&options());
        registry.add_template("class", "old").unwrap();
        registry.add_template("class", "new").unwrap();

        assert_eq!(registry.len(), 1);
        let out = registry.template("class").unwrap().render(context! {}).unwrap();
        assert_eq!(out, "new");
    }

    #[test]
    fn test_strict_undefined() {
        let mut registry = TemplateRegistry::new(&options());
        registry.add_template("class", "{{ nope }}").unwrap();

        let err = registry
            .template("class")
            .unwrap()
            .render(context! { name => "x" })
            .unwrap_err();
        assert_eq!(err.kind(), minijinja::ErrorKind::UndefinedError);
    }

    #[test]
    fn test_no_auto_escape() {
        let registry =
            TemplateRegistry::from_entries(&[("page.md", "{{ text }}")], &options()).unwrap();
        let out = registry
            .template("page")
            .unwrap()
            .render(context! { text => "<b>a & b</b>" })
            .unwrap();
        assert_eq!(out, "<b>a & b</b>");
    }

    #[test]
    fn test_unknown_template() {
        let registry = TemplateRegistry::new(&options());
        assert!(matches!(
            registry.template("class"),
            Err(RenderError::TemplateNotFound(name)) if name == "class"
        ));
    }
}
