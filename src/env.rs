//! Environment variable abstraction for testability.
//!
//! Production code uses [`Env::real()`] which delegates to [`std::env::var`].
//! Tests use [`Env::mock()`] backed by a `HashMap`, so a synthetic environment
//! can be injected without `unsafe` calls to [`std::env::set_var`].

use std::collections::HashMap;

/// Environment variable reader.
///
/// Wraps lookups so that production code hits `std::env` while tests
/// can supply a controlled set of values.
#[derive(Clone, Debug)]
pub struct Env {
    overrides: Option<HashMap<String, String>>,
}

impl Env {
    /// Create an `Env` that reads from the real process environment.
    pub fn real() -> Self {
        Self { overrides: None }
    }

    /// Create an `Env` backed by explicit key-value pairs.
    ///
    /// Variables not listed are treated as absent; the process environment
    /// is never consulted.
    pub fn mock(vars: impl IntoIterator<Item = (impl Into<String>, impl Into<String>)>) -> Self {
        Self {
            overrides: Some(
                vars.into_iter()
                    .map(|(k, v)| (k.into(), v.into()))
                    .collect(),
            ),
        }
    }

    /// Look up an environment variable by name.
    pub fn var(&self, name: &str) -> Result<String, std::env::VarError> {
        match &self.overrides {
            Some(map) => map.get(name).cloned().ok_or(std::env::VarError::NotPresent),
            None => std::env::var(name),
        }
    }

    /// Returns the value only when the variable is present and non-empty.
    ///
    /// Non-UTF-8 values count as absent.
    pub fn non_empty(&self, name: &str) -> Option<String> {
        self.var(name).ok().filter(|v| !v.is_empty())
    }

    /// Returns `true` if the variable is present and non-empty.
    pub fn is_set(&self, name: &str) -> bool {
        self.non_empty(name).is_some()
    }
}

impl Default for Env {
    fn default() -> Self {
        Self::real()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn real_env_reads_cargo_manifest_dir() {
        let env = Env::real();
        assert!(env.var("CARGO_MANIFEST_DIR").is_ok());
    }

    #[test]
    fn mock_env_returns_set_values() {
        let env = Env::mock([("AWS_REGION", "eu-north-1"), ("AUDIO_FORMAT", "ogg")]);
        assert_eq!(env.var("AWS_REGION").unwrap(), "eu-north-1");
        assert_eq!(env.var("AUDIO_FORMAT").unwrap(), "ogg");
    }

    #[test]
    fn mock_env_returns_not_present_for_missing() {
        let env = Env::mock(Vec::<(&str, &str)>::new());
        assert!(env.var("NONEXISTENT").is_err());
    }

    #[test]
    fn mock_env_ignores_process_environment() {
        let env = Env::mock(Vec::<(&str, &str)>::new());
        assert!(env.var("CARGO_MANIFEST_DIR").is_err());
    }

    #[test]
    fn non_empty_skips_empty_values() {
        let env = Env::mock([("EMPTY", ""), ("FULL", "x")]);
        assert_eq!(env.non_empty("EMPTY"), None);
        assert_eq!(env.non_empty("FULL"), Some("x".to_string()));
        assert_eq!(env.non_empty("ABSENT"), None);
    }

    #[test]
    fn is_set_checks_presence() {
        let env = Env::mock([("PRESENT", "value"), ("BLANK", "")]);
        assert!(env.is_set("PRESENT"));
        assert!(!env.is_set("BLANK"));
        assert!(!env.is_set("ABSENT"));
    }
}
