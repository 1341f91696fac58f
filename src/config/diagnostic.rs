//! Non-fatal configuration diagnostics.
//!
//! Diagnostics are values, not errors: loading and validation never fail.
//! Callers decide whether a diagnostic is reason enough to abort.

use serde::Serialize;
use thiserror::Error;

/// How serious a diagnostic is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Warning,
    Error,
}

/// A single observation about the loaded configuration.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind")]
pub enum ConfigDiagnostic {
    /// Required fields resolved to empty values.
    #[error("missing required configuration: {}", fields.join(", "))]
    MissingRequiredField { fields: Vec<String> },

    /// A placeholder or default value is still in use while running in production.
    #[error("{field} ({reason})")]
    DefaultValueInProduction { field: String, reason: String },

    /// A numeric variable was set but could not be used, so the default applied.
    #[error("ignoring invalid {var} value {value:?}, using default {default}")]
    InvalidNumericValue {
        var: String,
        value: String,
        default: String,
    },
}

impl ConfigDiagnostic {
    pub fn severity(&self) -> Severity {
        match self {
            ConfigDiagnostic::MissingRequiredField { .. } => Severity::Error,
            ConfigDiagnostic::DefaultValueInProduction { .. } => Severity::Warning,
            ConfigDiagnostic::InvalidNumericValue { .. } => Severity::Info,
        }
    }
}
