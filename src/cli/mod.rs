//! CLI command definitions and argument parsing.
//!
//! Uses clap derive macros for ergonomic argument definitions.

pub mod args;

use achamin_config::constants::KNOWN_VARS;

/// Render the `vars` listing: one line per variable with its default.
pub fn render_vars() -> String {
    use colored::Colorize;

    let width = KNOWN_VARS.iter().map(|v| v.name.len()).max().unwrap_or(0);
    let mut output = String::new();
    for var in KNOWN_VARS {
        output.push_str(&format!(
            "  {}  {}\n",
            format!("{:<width$}", var.name).bold(),
            var.default.dimmed(),
        ));
    }
    output
}
