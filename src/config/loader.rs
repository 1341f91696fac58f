//! Config struct and loading logic.
//!
//! Resolution per field (highest to lowest):
//! 1. Primary environment variable, when non-empty
//! 2. Alternative environment variable (`API_URL` only)
//! 3. Built-in default
//!
//! Loading never fails. Unusable numeric values fall back to their defaults;
//! [`Config::load_with_diagnostics`] reports when that happened.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use strum::{Display as StrumDisplay, EnumIter, IntoEnumIterator};

use crate::config::diagnostic::ConfigDiagnostic;
use crate::config::mode::EnvironmentMode;
use crate::constants::*;
use crate::env::Env;

/// Top-level configuration.
///
/// Serialized with the upper-case key names the Achamin client expects
/// (`API_URL`, `FEATURES.NEURAL_ENGINE`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "SCREAMING_SNAKE_CASE")]
pub struct Config {
    pub api_url: String,
    pub aws_region: String,
    pub aws_profile: String,
    pub lambda_function_name: String,
    pub api_gateway_name: String,
    pub upload_bucket: String,
    pub generated_content_bucket: String,
    pub app_name: String,
    pub app_version: String,
    pub features: Features,
    pub audio: AudioConfig,
    pub error_handling: ErrorHandlingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            aws_region: DEFAULT_AWS_REGION.to_string(),
            aws_profile: DEFAULT_AWS_PROFILE.to_string(),
            lambda_function_name: DEFAULT_LAMBDA_FUNCTION_NAME.to_string(),
            api_gateway_name: DEFAULT_API_GATEWAY_NAME.to_string(),
            upload_bucket: DEFAULT_UPLOAD_BUCKET.to_string(),
            generated_content_bucket: DEFAULT_GENERATED_CONTENT_BUCKET.to_string(),
            app_name: APP_NAME.to_string(),
            app_version: APP_VERSION.to_string(),
            features: Features::default(),
            audio: AudioConfig::default(),
            error_handling: ErrorHandlingConfig::default(),
        }
    }
}

/// Optional capabilities, each enabled unless explicitly opted out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, StrumDisplay)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum Feature {
    UniqueNarration,
    NeuralEngine,
    MultiVoice,
    CulturalContext,
}

impl Feature {
    /// The opt-out variable for this feature.
    pub fn env_var(self) -> &'static str {
        match self {
            Feature::UniqueNarration => ENV_ENABLE_UNIQUE_NARRATION,
            Feature::NeuralEngine => ENV_ENABLE_NEURAL_ENGINE,
            Feature::MultiVoice => ENV_ENABLE_MULTI_VOICE,
            Feature::CulturalContext => ENV_ENABLE_CULTURAL_CONTEXT,
        }
    }
}

/// Feature flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "SCREAMING_SNAKE_CASE")]
pub struct Features {
    pub unique_narration: bool,
    pub neural_engine: bool,
    pub multi_voice: bool,
    pub cultural_context: bool,
}

impl Default for Features {
    fn default() -> Self {
        Self {
            unique_narration: true,
            neural_engine: true,
            multi_voice: true,
            cultural_context: true,
        }
    }
}

impl Features {
    /// A feature is disabled only by the exact value `"false"`.
    fn from_env(env: &Env) -> Self {
        let enabled = |feature: Feature| env.var(feature.env_var()).map_or(true, |v| v != "false");
        Self {
            unique_narration: enabled(Feature::UniqueNarration),
            neural_engine: enabled(Feature::NeuralEngine),
            multi_voice: enabled(Feature::MultiVoice),
            cultural_context: enabled(Feature::CulturalContext),
        }
    }

    pub fn is_enabled(&self, feature: Feature) -> bool {
        match feature {
            Feature::UniqueNarration => self.unique_narration,
            Feature::NeuralEngine => self.neural_engine,
            Feature::MultiVoice => self.multi_voice,
            Feature::CulturalContext => self.cultural_context,
        }
    }

    /// Features currently switched on, in declaration order.
    pub fn enabled(&self) -> Vec<Feature> {
        Feature::iter().filter(|f| self.is_enabled(*f)).collect()
    }
}

/// Audio output settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "SCREAMING_SNAKE_CASE")]
pub struct AudioConfig {
    pub format: String,
    pub engine: String,
    pub expiry_hours: i64,
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            format: DEFAULT_AUDIO_FORMAT.to_string(),
            engine: DEFAULT_AUDIO_ENGINE.to_string(),
            expiry_hours: DEFAULT_AUDIO_EXPIRY_HOURS,
        }
    }
}

impl AudioConfig {
    /// How long generated audio links stay valid. Negative hours clamp to zero.
    pub fn expiry(&self) -> Duration {
        let hours = u64::try_from(self.expiry_hours).unwrap_or(0);
        Duration::from_secs(hours.saturating_mul(3600))
    }
}

/// Retry and error reporting settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "SCREAMING_SNAKE_CASE")]
pub struct ErrorHandlingConfig {
    pub retry_attempts: i64,
    pub timeout_ms: i64,
    pub show_detailed_errors: bool,
}

impl Default for ErrorHandlingConfig {
    fn default() -> Self {
        Self {
            retry_attempts: DEFAULT_RETRY_ATTEMPTS,
            timeout_ms: DEFAULT_TIMEOUT_MS,
            show_detailed_errors: false,
        }
    }
}

impl ErrorHandlingConfig {
    /// Per-request timeout for analysis API calls. Negative values clamp to zero.
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(u64::try_from(self.timeout_ms).unwrap_or(0))
    }

    /// Retry count usable as a loop bound. Negative values clamp to zero.
    pub fn retries(&self) -> u32 {
        u32::try_from(self.retry_attempts.max(0)).unwrap_or(u32::MAX)
    }
}

/// A loaded configuration together with what the loader noticed on the way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadReport {
    pub config: Config,
    pub diagnostics: Vec<ConfigDiagnostic>,
}

impl Config {
    /// Build the configuration from environment variables and defaults.
    pub fn load(env: &Env) -> Self {
        Self::load_with_diagnostics(env).config
    }

    /// Same as [`Config::load`], but also returns an
    /// [`ConfigDiagnostic::InvalidNumericValue`] for every numeric variable
    /// that was set and still fell back to its default.
    pub fn load_with_diagnostics(env: &Env) -> LoadReport {
        let mut diagnostics = Vec::new();
        let mode = EnvironmentMode::from_env(env);

        let string = |name: &str, default: &str| env.non_empty(name).unwrap_or_else(|| default.to_string());

        let api_url = env
            .non_empty(ENV_ACHAMIN_API_URL)
            .or_else(|| env.non_empty(ENV_API_URL))
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        let audio = AudioConfig {
            format: string(ENV_AUDIO_FORMAT, DEFAULT_AUDIO_FORMAT),
            engine: string(ENV_AUDIO_ENGINE, DEFAULT_AUDIO_ENGINE),
            expiry_hours: numeric(
                env,
                ENV_AUDIO_EXPIRY_HOURS,
                DEFAULT_AUDIO_EXPIRY_HOURS,
                &mut diagnostics,
            ),
        };

        let show_detailed_errors =
            env.var(ENV_SHOW_DETAILED_ERRORS).is_ok_and(|v| v == "true") || mode.is_development();

        let error_handling = ErrorHandlingConfig {
            retry_attempts: numeric(env, ENV_RETRY_ATTEMPTS, DEFAULT_RETRY_ATTEMPTS, &mut diagnostics),
            timeout_ms: numeric(env, ENV_API_TIMEOUT_MS, DEFAULT_TIMEOUT_MS, &mut diagnostics),
            show_detailed_errors,
        };

        let config = Config {
            api_url,
            aws_region: string(ENV_AWS_REGION, DEFAULT_AWS_REGION),
            aws_profile: string(ENV_AWS_PROFILE, DEFAULT_AWS_PROFILE),
            lambda_function_name: string(ENV_LAMBDA_FUNCTION_NAME, DEFAULT_LAMBDA_FUNCTION_NAME),
            api_gateway_name: string(ENV_API_GATEWAY_NAME, DEFAULT_API_GATEWAY_NAME),
            upload_bucket: string(ENV_UPLOAD_BUCKET, DEFAULT_UPLOAD_BUCKET),
            generated_content_bucket: string(
                ENV_GENERATED_CONTENT_BUCKET,
                DEFAULT_GENERATED_CONTENT_BUCKET,
            ),
            app_name: APP_NAME.to_string(),
            app_version: APP_VERSION.to_string(),
            features: Features::from_env(env),
            audio,
            error_handling,
        };

        LoadReport { config, diagnostics }
    }
}

/// Resolve a numeric variable, falling back to `default` when the value is
/// absent, unparsable or zero. Negative values are kept.
fn numeric(env: &Env, name: &str, default: i64, diagnostics: &mut Vec<ConfigDiagnostic>) -> i64 {
    let Some(raw) = env.non_empty(name) else {
        return default;
    };

    match leading_integer(&raw).filter(|n| *n != 0) {
        Some(value) => value,
        None => {
            tracing::debug!(var = name, value = %raw, %default, "numeric value unusable, using default");
            diagnostics.push(ConfigDiagnostic::InvalidNumericValue {
                var: name.to_string(),
                value: raw,
                default: default.to_string(),
            });
            default
        }
    }
}

/// Parse the integer at the start of `raw`.
///
/// Leading whitespace and an optional sign are accepted, and a `0x`/`0X`
/// prefix switches to hexadecimal. Anything after the first run of digits is
/// ignored, so `"5abc"` is 5, `"3.9"` is 3 and `"0x1g"` is 1. Values that do
/// not fit in an `i64` are treated as unparsable.
fn leading_integer(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let (radix, digits) = match rest.get(..2) {
        Some("0x" | "0X") => (16, &rest[2..]),
        _ => (10, rest),
    };
    let end = digits
        .find(|c: char| !c.is_digit(radix))
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }
    let magnitude = i64::from_str_radix(&digits[..end], radix).ok()?;
    Some(if negative { -magnitude } else { magnitude })
}
