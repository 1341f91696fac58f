//! achamin-config — resolve and validate the Achamin runtime configuration.
//!
//! Entry point and error handling boundary. Uses `anyhow` for
//! ergonomic error propagation and user-facing messages.

mod cli;

use achamin_config::config::{self, Startup};
use achamin_config::env::Env;
use achamin_config::logging;
use achamin_config::output::json::JsonRenderer;
use achamin_config::output::terminal::TerminalRenderer;
use achamin_config::output::{ConfigRenderer, ConfigView};

use std::process;

use anyhow::{Result, bail};
use clap::Parser;

use cli::args::{Cli, Command, OutputFormat, ShowArgs, ValidateArgs};

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err:#}");
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Command::Vars = cli.command {
        print!("{}", cli::render_vars());
        return Ok(());
    }

    let startup = config::init_config_with_report(&Env::real());

    match cli.command {
        Command::Show(args) => run_show(args, &startup),
        Command::Validate(args) => run_validate(args, &startup),
        Command::Vars => Ok(()),
    }
}

/// Print the loaded configuration.
fn run_show(args: ShowArgs, startup: &Startup) -> Result<()> {
    let view = ConfigView {
        config: &startup.config,
        mode: &startup.mode,
        validation: &startup.validation,
        load_diagnostics: &startup.load_diagnostics,
    };

    let renderer: Box<dyn ConfigRenderer> = match args.format {
        OutputFormat::Terminal => Box::new(TerminalRenderer),
        OutputFormat::Json => Box::new(JsonRenderer),
    };
    println!("{}", renderer.render(&view));
    Ok(())
}

/// Report validation results; exit non-zero when the configuration is invalid.
fn run_validate(args: ValidateArgs, startup: &Startup) -> Result<()> {
    use colored::Colorize;

    let Startup {
        mode,
        validation,
        load_diagnostics,
        ..
    } = startup;

    // Validation diagnostics are already logged by `validate`.
    for diag in load_diagnostics {
        eprintln!("  {} {diag}", "•".dimmed());
    }

    if !validation.is_valid() {
        bail!("configuration is invalid");
    }
    if args.strict && validation.has_warnings() {
        bail!(
            "{} warning(s) in {mode} mode (--strict)",
            validation.warnings.len()
        );
    }

    println!("  {} configuration is valid ({mode})", "✔".green().bold());
    Ok(())
}
