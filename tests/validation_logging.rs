//! Validation diagnostics reach the log, not the caller's control flow.

use std::io;
use std::sync::{Arc, Mutex};

use achamin_config::config::{self, Config, EnvironmentMode};
use achamin_config::env::Env;
use tracing_subscriber::fmt::MakeWriter;

/// Shared in-memory sink for the fmt layer.
#[derive(Clone, Default)]
struct Captured(Arc<Mutex<Vec<u8>>>);

impl Captured {
    fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

impl io::Write for Captured {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for Captured {
    type Writer = Captured;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

fn capture<T>(f: impl FnOnce() -> T) -> (T, String) {
    let sink = Captured::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(sink.clone())
        .with_ansi(false)
        .with_max_level(tracing::Level::DEBUG)
        .finish();
    let out = tracing::subscriber::with_default(subscriber, f);
    (out, sink.contents())
}

#[test]
fn production_defaults_are_logged_as_one_warning() {
    let (result, logs) = capture(|| config::validate(&Config::default(), &EnvironmentMode::Production));

    assert!(result.is_valid());
    let warn_lines: Vec<_> = logs.lines().filter(|l| l.contains("WARN")).collect();
    assert_eq!(warn_lines.len(), 1);
    assert!(warn_lines[0].contains("using default values in production"));
    assert!(warn_lines[0].contains("API_URL (using default placeholder), AWS_PROFILE (using default)"));
}

#[test]
fn missing_api_url_is_logged_as_error() {
    let config = Config {
        api_url: String::new(),
        ..Config::default()
    };
    let (result, logs) = capture(|| config::validate(&config, &EnvironmentMode::Unset));

    assert!(!result.is_valid());
    assert!(logs.contains("ERROR"));
    assert!(logs.contains("missing required configuration: API_URL"));
}

#[test]
fn development_mode_logs_nothing_at_warn() {
    let (_, logs) = capture(|| config::validate(&Config::default(), &EnvironmentMode::Development));
    assert!(!logs.contains("WARN"));
    assert!(!logs.contains("ERROR"));
}

#[test]
fn numeric_fallback_is_logged_at_debug() {
    let env = Env::mock([("API_TIMEOUT_MS", "never")]);
    let (config, logs) = capture(|| Config::load(&env));

    assert_eq!(config.error_handling.timeout_ms, 30_000);
    assert!(logs.contains("DEBUG"));
    assert!(logs.contains("API_TIMEOUT_MS"));
}

#[test]
fn init_config_logs_summary() {
    let env = Env::mock([("NODE_ENV", "production")]);
    let (_, logs) = capture(|| config::init_config(&env));
    assert!(logs.contains("configuration initialised"));
    assert!(logs.contains("mode=production"));
}
