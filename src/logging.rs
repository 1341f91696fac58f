//! Tracing subscriber setup for the host binary.
//!
//! Diagnostics are written to stderr so stdout stays clean for the
//! rendered configuration. `RUST_LOG` overrides the default directive.

use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Default level when `RUST_LOG` is not set.
pub fn default_level(verbose: bool) -> LevelFilter {
    if verbose {
        LevelFilter::INFO
    } else {
        LevelFilter::WARN
    }
}

/// Install the global fmt subscriber. Safe to call more than once; later
/// calls are ignored.
pub fn init(verbose: bool) {
    let filter = EnvFilter::builder()
        .with_default_directive(default_level(verbose).into())
        .from_env_lossy();

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbose_raises_level() {
        assert_eq!(default_level(false), LevelFilter::WARN);
        assert_eq!(default_level(true), LevelFilter::INFO);
    }

    #[test]
    fn init_twice_does_not_panic() {
        init(false);
        init(true);
    }
}
