//! JSON output renderer.
//!
//! Emits the configuration record itself, keyed the way the Achamin client
//! reads it (`{"API_URL": ..., "FEATURES": {...}, ...}`). Diagnostics go to
//! the log, not into the export.

use crate::output::{ConfigRenderer, ConfigView};

/// JSON output renderer.
pub struct JsonRenderer;

impl ConfigRenderer for JsonRenderer {
    fn render(&self, view: &ConfigView<'_>) -> String {
        serde_json::to_string_pretty(view.config).unwrap_or_else(|_| "{}".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Config, EnvironmentMode, validate};
    use crate::env::Env;

    #[test]
    fn render_json_record() {
        let env = Env::mock([("ENABLE_MULTI_VOICE", "false"), ("RETRY_ATTEMPTS", "5")]);
        let config = Config::load(&env);
        let mode = EnvironmentMode::Unset;
        let validation = validate(&config, &mode);
        let view = ConfigView {
            config: &config,
            mode: &mode,
            validation: &validation,
            load_diagnostics: &[],
        };

        let output = JsonRenderer.render(&view);
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(parsed["APP_NAME"], "Achamin");
        assert_eq!(parsed["FEATURES"]["MULTI_VOICE"], false);
        assert_eq!(parsed["ERROR_HANDLING"]["RETRY_ATTEMPTS"], 5);
        assert!(parsed.get("diagnostics").is_none());
    }

    #[test]
    fn render_json_parses_back_into_config() {
        let config = Config::default();
        let mode = EnvironmentMode::Production;
        let validation = validate(&config, &mode);
        let view = ConfigView {
            config: &config,
            mode: &mode,
            validation: &validation,
            load_diagnostics: &[],
        };

        let output = JsonRenderer.render(&view);
        let back: Config = serde_json::from_str(&output).unwrap();
        assert_eq!(back, config);
    }
}
