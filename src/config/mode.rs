//! Deployment mode resolved from `NODE_ENV`.

use std::fmt;

use crate::constants::ENV_MODE;
use crate::env::Env;

/// The mode the host application runs in.
///
/// Matching is exact and case-sensitive: only `development` and
/// `production` change loader or validator behaviour.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum EnvironmentMode {
    /// No mode variable set.
    #[default]
    Unset,
    Development,
    Production,
    Test,
    /// Any other non-empty value.
    Other(String),
}

impl EnvironmentMode {
    /// Resolve the mode from the environment. Empty values count as unset.
    pub fn from_env(env: &Env) -> Self {
        env.non_empty(ENV_MODE)
            .map(|v| Self::from(v.as_str()))
            .unwrap_or_default()
    }

    pub fn is_production(&self) -> bool {
        matches!(self, EnvironmentMode::Production)
    }

    pub fn is_development(&self) -> bool {
        matches!(self, EnvironmentMode::Development)
    }
}

impl From<&str> for EnvironmentMode {
    fn from(s: &str) -> Self {
        match s {
            "" => EnvironmentMode::Unset,
            "development" => EnvironmentMode::Development,
            "production" => EnvironmentMode::Production,
            "test" => EnvironmentMode::Test,
            other => EnvironmentMode::Other(other.to_string()),
        }
    }
}

impl fmt::Display for EnvironmentMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EnvironmentMode::Unset => write!(f, "unset"),
            EnvironmentMode::Development => write!(f, "development"),
            EnvironmentMode::Production => write!(f, "production"),
            EnvironmentMode::Test => write!(f, "test"),
            EnvironmentMode::Other(s) => write!(f, "{s}"),
        }
    }
}
