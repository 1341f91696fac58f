//! Output renderers: terminal summary and JSON export.

pub mod json;
pub mod terminal;

use crate::config::{Config, ConfigDiagnostic, EnvironmentMode, ValidationResult};

/// Everything known about a loaded configuration, ready for rendering.
#[derive(Debug, Clone, Copy)]
pub struct ConfigView<'a> {
    pub config: &'a Config,
    pub mode: &'a EnvironmentMode,
    pub validation: &'a ValidationResult,
    /// Diagnostics collected while loading (numeric fallbacks).
    pub load_diagnostics: &'a [ConfigDiagnostic],
}

/// Trait for rendering a loaded configuration to an output format.
pub trait ConfigRenderer {
    /// Render the configuration to a string.
    fn render(&self, view: &ConfigView<'_>) -> String;
}
