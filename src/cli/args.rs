//! Clap argument types.

use clap::{Parser, ValueEnum};

/// Resolve, validate and print the Achamin runtime configuration.
#[derive(Parser, Debug)]
#[command(
    name = "achamin-config",
    version = achamin_config::constants::APP_VERSION,
    about = "Resolve and validate the Achamin runtime configuration from environment variables",
)]
pub struct Cli {
    /// Log at info level instead of warn (RUST_LOG takes precedence).
    #[arg(long, short = 'v', global = true, default_value_t = false)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(clap::Subcommand, Debug)]
pub enum Command {
    /// Load the configuration and print it.
    Show(ShowArgs),

    /// Load the configuration and report problems.
    Validate(ValidateArgs),

    /// List every recognised environment variable and its default.
    Vars,
}

/// Arguments for the `show` subcommand.
#[derive(Parser, Debug)]
pub struct ShowArgs {
    /// Output format.
    #[arg(long, default_value = "terminal")]
    pub format: OutputFormat,
}

/// Arguments for the `validate` subcommand.
#[derive(Parser, Debug)]
pub struct ValidateArgs {
    /// Also fail when warnings are reported.
    #[arg(long, default_value_t = false)]
    pub strict: bool,
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Colored summary for humans.
    Terminal,
    /// The configuration record as JSON.
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_show_defaults_to_terminal() {
        let cli = Cli::try_parse_from(["achamin-config", "show"]).unwrap();
        match cli.command {
            Command::Show(args) => assert_eq!(args.format, OutputFormat::Terminal),
            other => panic!("unexpected command: {other:?}"),
        }
        assert!(!cli.verbose);
    }

    #[test]
    fn parse_show_json_verbose() {
        let cli = Cli::try_parse_from(["achamin-config", "-v", "show", "--format", "json"]).unwrap();
        assert!(cli.verbose);
        assert!(matches!(
            cli.command,
            Command::Show(ShowArgs { format: OutputFormat::Json })
        ));
    }

    #[test]
    fn parse_validate_strict() {
        let cli = Cli::try_parse_from(["achamin-config", "validate", "--strict"]).unwrap();
        assert!(matches!(cli.command, Command::Validate(ValidateArgs { strict: true })));
    }

    #[test]
    fn rejects_unknown_format() {
        assert!(Cli::try_parse_from(["achamin-config", "show", "--format", "yaml"]).is_err());
    }
}
