//! Rendering configuration.
//!
//! [`RenderOptions`] is handed to the template registry once, when helpers are
//! registered. The only value read from the process environment is the
//! production-mode flag, and that goes through [`EnvReader`] so tests never
//! have to mutate the real environment.

use std::fmt;
use std::sync::Arc;

use crate::anchor::{AnchorGenerator, AnchorStyle};

/// Environment variable that switches production mode on when its value is
/// numerically `1` (`1`, `1.0`, ` 1 `).
pub const PRODUCTION_VAR: &str = "PROD";

fn is_production_value(value: &str) -> bool {
    value.trim().parse::<f64>().is_ok_and(|n| n == 1.0)
}

/// Abstraction over environment variables.
pub trait EnvReader: Send + Sync {
    fn var(&self, name: &str) -> Option<String>;
}

/// Reads the real process environment.
#[derive(Debug, Default, Clone, Copy)]
pub struct RealEnv;

impl EnvReader for RealEnv {
    fn var(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }
}

/// Fixed set of variables for tests.
#[derive(Debug, Clone, Default)]
pub struct MockEnv {
    vars: std::collections::HashMap<String, String>,
}

impl MockEnv {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_var(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(name.into(), value.into());
        self
    }
}

impl EnvReader for MockEnv {
    fn var(&self, name: &str) -> Option<String> {
        self.vars.get(name).cloned()
    }
}

/// Options shared by every helper in a template registry.
///
/// # Example
///
/// ```rust
/// use doxdown::{AnchorStyle, RenderOptions};
///
/// let options = RenderOptions::default()
///     .with_anchors(AnchorStyle::Markdown)
///     .with_production(true);
/// assert!(options.production());
/// ```
#[derive(Clone)]
pub struct RenderOptions {
    anchors: Arc<dyn AnchorGenerator>,
    production: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            anchors: Arc::new(AnchorStyle::default()),
            production: false,
        }
    }
}

impl fmt::Debug for RenderOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RenderOptions")
            .field("production", &self.production)
            .finish_non_exhaustive()
    }
}

impl RenderOptions {
    /// Default options with production mode taken from the `PROD` variable.
    pub fn from_env() -> Self {
        Self::from_env_reader(&RealEnv)
    }

    pub fn from_env_reader(env: &dyn EnvReader) -> Self {
        let production = env
            .var(PRODUCTION_VAR)
            .is_some_and(|value| is_production_value(&value));
        Self::default().with_production(production)
    }

    pub fn with_anchors(self, style: AnchorStyle) -> Self {
        self.with_anchor_generator(style)
    }

    /// Replaces the anchor generator with a custom implementation.
    pub fn with_anchor_generator(mut self, generator: impl AnchorGenerator + 'static) -> Self {
        self.anchors = Arc::new(generator);
        self
    }

    pub fn with_production(mut self, production: bool) -> Self {
        self.production = production;
        self
    }

    pub fn production(&self) -> bool {
        self.production
    }

    pub fn anchor(&self, name: &str) -> String {
        self.anchors.anchor(name)
    }
}
