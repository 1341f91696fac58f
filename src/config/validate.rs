//! Post-load validation.
//!
//! Only the API endpoint is required. In production mode, placeholder and
//! default values are reported as warnings, which never affect validity.

use serde::Serialize;

use crate::config::diagnostic::ConfigDiagnostic;
use crate::config::loader::Config;
use crate::config::mode::EnvironmentMode;
use crate::constants::{API_URL_PLACEHOLDER_MARKER, DEFAULT_AWS_PROFILE};

/// Outcome of [`validate`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    /// Whether every required field is present.
    pub valid: bool,
    /// Diagnostics that made the result invalid.
    pub errors: Vec<ConfigDiagnostic>,
    /// Observations that leave the result valid.
    pub warnings: Vec<ConfigDiagnostic>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Errors followed by warnings.
    pub fn diagnostics(&self) -> impl Iterator<Item = &ConfigDiagnostic> {
        self.errors.iter().chain(self.warnings.iter())
    }
}

/// Check the configuration and log what was found.
///
/// Missing required fields are logged at error level; defaults in production
/// are logged as a single warning line. Production checks are skipped when
/// required fields are missing.
pub fn validate(config: &Config, mode: &EnvironmentMode) -> ValidationResult {
    let missing: Vec<String> = required_fields(config)
        .into_iter()
        .filter(|(_, value)| value.is_empty())
        .map(|(name, _)| name.to_string())
        .collect();

    if !missing.is_empty() {
        let diag = ConfigDiagnostic::MissingRequiredField { fields: missing };
        tracing::error!("{diag}");
        return ValidationResult {
            valid: false,
            errors: vec![diag],
            warnings: Vec::new(),
        };
    }

    let warnings = if mode.is_production() {
        production_defaults(config)
    } else {
        Vec::new()
    };

    if !warnings.is_empty() {
        let listed: Vec<String> = warnings.iter().map(ToString::to_string).collect();
        tracing::warn!("using default values in production: {}", listed.join(", "));
    }

    ValidationResult {
        valid: true,
        errors: Vec::new(),
        warnings,
    }
}

fn required_fields(config: &Config) -> [(&'static str, &str); 1] {
    [("API_URL", config.api_url.as_str())]
}

fn production_defaults(config: &Config) -> Vec<ConfigDiagnostic> {
    let mut found = Vec::new();
    if config.api_url.contains(API_URL_PLACEHOLDER_MARKER) {
        found.push(ConfigDiagnostic::DefaultValueInProduction {
            field: "API_URL".into(),
            reason: "using default placeholder".into(),
        });
    }
    if config.aws_profile == DEFAULT_AWS_PROFILE {
        found.push(ConfigDiagnostic::DefaultValueInProduction {
            field: "AWS_PROFILE".into(),
            reason: "using default".into(),
        });
    }
    found
}
