//! Configuration loading and validation.
//!
//! Values come from environment variables with built-in defaults, then pass
//! through a validation step that reports problems without failing.

pub mod diagnostic;
pub mod loader;
pub mod mode;
pub mod validate;

pub use diagnostic::{ConfigDiagnostic, Severity};
pub use loader::{AudioConfig, Config, ErrorHandlingConfig, Feature, Features, LoadReport};
pub use mode::EnvironmentMode;
pub use validate::{ValidationResult, validate};

use crate::env::Env;

/// Result of host startup: the record plus everything noticed while
/// building and checking it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Startup {
    pub config: Config,
    pub mode: EnvironmentMode,
    pub validation: ValidationResult,
    /// Numeric fallbacks seen while loading.
    pub load_diagnostics: Vec<ConfigDiagnostic>,
}

/// Load and validate the configuration once at host startup.
///
/// Validation diagnostics are logged, never returned as errors; call
/// [`validate`] directly when the outcome must gate startup. The returned
/// record is meant to be shared read-only (e.g. behind an `Arc`).
pub fn init_config(env: &Env) -> Config {
    init_config_with_report(env).config
}

/// Same as [`init_config`], keeping the mode and diagnostics for hosts
/// that report on them.
pub fn init_config_with_report(env: &Env) -> Startup {
    let mode = EnvironmentMode::from_env(env);
    let LoadReport {
        config,
        diagnostics: load_diagnostics,
    } = Config::load_with_diagnostics(env);
    let validation = validate(&config, &mode);
    tracing::info!(
        mode = %mode,
        valid = validation.is_valid(),
        warnings = validation.warnings.len(),
        "configuration initialised"
    );
    Startup {
        config,
        mode,
        validation,
        load_diagnostics,
    }
}
