//! Terminal renderer: grouped key/value listing followed by diagnostics.

use colored::Colorize;

use crate::config::{ConfigDiagnostic, Feature, Severity};
use crate::output::{ConfigRenderer, ConfigView};
use strum::IntoEnumIterator;

/// Terminal output renderer with colored, flowing text.
pub struct TerminalRenderer;

impl ConfigRenderer for TerminalRenderer {
    fn render(&self, view: &ConfigView<'_>) -> String {
        let config = view.config;
        let mut output = String::new();

        output.push_str(&format!(
            "  {} {}  {}\n\n",
            config.app_name.bold(),
            config.app_version.green().bold(),
            format!("mode: {}", view.mode).dimmed(),
        ));

        section(&mut output, "api");
        entry(&mut output, "url", &config.api_url);
        entry(&mut output, "gateway", &config.api_gateway_name);
        entry(&mut output, "lambda", &config.lambda_function_name);

        section(&mut output, "aws");
        entry(&mut output, "region", &config.aws_region);
        entry(&mut output, "profile", &config.aws_profile);
        entry(&mut output, "uploads", &config.upload_bucket);
        entry(&mut output, "generated", &config.generated_content_bucket);

        section(&mut output, "features");
        for feature in Feature::iter() {
            let state = if config.features.is_enabled(feature) {
                "on".green().to_string()
            } else {
                "off".red().to_string()
            };
            entry(&mut output, &feature.to_string().to_lowercase(), &state);
        }

        section(&mut output, "audio");
        entry(&mut output, "format", &config.audio.format);
        entry(&mut output, "engine", &config.audio.engine);
        entry(&mut output, "expiry", &format!("{}h", config.audio.expiry_hours));

        section(&mut output, "errors");
        let eh = &config.error_handling;
        entry(&mut output, "retries", &eh.retry_attempts.to_string());
        entry(&mut output, "timeout", &format!("{}ms", eh.timeout_ms));
        entry(&mut output, "detailed", &eh.show_detailed_errors.to_string());

        output.push('\n');

        let diagnostics: Vec<&ConfigDiagnostic> = view
            .load_diagnostics
            .iter()
            .chain(view.validation.diagnostics())
            .collect();

        if diagnostics.is_empty() {
            output.push_str(&format!("{}\n", "  ✔ Configuration is valid.".green()));
            return output;
        }

        for diag in diagnostics {
            let icon = match diag.severity() {
                Severity::Error => "✖".red().bold(),
                Severity::Warning => "⚠".yellow().bold(),
                Severity::Info => "ℹ".blue().bold(),
            };
            output.push_str(&format!("  {icon} {diag}\n"));
        }

        if view.validation.is_valid() {
            output.push_str(&format!("{}\n", "  ✔ Configuration is valid.".green()));
        } else {
            output.push_str(&format!("{}\n", "  ✖ Configuration is invalid.".red().bold()));
        }

        output
    }
}

fn section(output: &mut String, title: &str) {
    output.push_str(&format!("  {}\n", title.cyan().bold()));
}

fn entry(output: &mut String, key: &str, value: &str) {
    output.push_str(&format!("    {:<10} {}\n", format!("{key}:").dimmed(), value));
}
