//! App-wide constants.
//!
//! Centralises the application identity, environment variable names,
//! default values and placeholder markers so a rename only requires
//! changing this file.

/// Display name of the application.
pub const APP_NAME: &str = "Achamin";

/// Application version reported in the configuration record.
pub const APP_VERSION: &str = "1.0.0";

// ── Environment variable names ──────────────────────────────────────

/// Preferred variable for the analysis API endpoint.
pub const ENV_ACHAMIN_API_URL: &str = "ACHAMIN_API_URL";
/// Fallback variable for the analysis API endpoint.
pub const ENV_API_URL: &str = "API_URL";
pub const ENV_AWS_REGION: &str = "AWS_REGION";
pub const ENV_AWS_PROFILE: &str = "AWS_PROFILE";
pub const ENV_LAMBDA_FUNCTION_NAME: &str = "LAMBDA_FUNCTION_NAME";
pub const ENV_API_GATEWAY_NAME: &str = "API_GATEWAY_NAME";
pub const ENV_UPLOAD_BUCKET: &str = "UPLOAD_BUCKET";
pub const ENV_GENERATED_CONTENT_BUCKET: &str = "GENERATED_CONTENT_BUCKET";

pub const ENV_ENABLE_UNIQUE_NARRATION: &str = "ENABLE_UNIQUE_NARRATION";
pub const ENV_ENABLE_NEURAL_ENGINE: &str = "ENABLE_NEURAL_ENGINE";
pub const ENV_ENABLE_MULTI_VOICE: &str = "ENABLE_MULTI_VOICE";
pub const ENV_ENABLE_CULTURAL_CONTEXT: &str = "ENABLE_CULTURAL_CONTEXT";

pub const ENV_AUDIO_FORMAT: &str = "AUDIO_FORMAT";
pub const ENV_AUDIO_ENGINE: &str = "AUDIO_ENGINE";
pub const ENV_AUDIO_EXPIRY_HOURS: &str = "AUDIO_EXPIRY_HOURS";

pub const ENV_RETRY_ATTEMPTS: &str = "RETRY_ATTEMPTS";
pub const ENV_API_TIMEOUT_MS: &str = "API_TIMEOUT_MS";
pub const ENV_SHOW_DETAILED_ERRORS: &str = "SHOW_DETAILED_ERRORS";

/// Deployment mode selector (`development`, `production`, ...).
pub const ENV_MODE: &str = "NODE_ENV";

// ── Defaults ────────────────────────────────────────────────────────

pub const DEFAULT_API_URL: &str =
    "https://your-api-gateway-id.execute-api.us-west-2.amazonaws.com/prod/analyze";
pub const DEFAULT_AWS_REGION: &str = "us-west-2";
pub const DEFAULT_AWS_PROFILE: &str = "default";
pub const DEFAULT_LAMBDA_FUNCTION_NAME: &str = "your-cultural-harmony-function";
pub const DEFAULT_API_GATEWAY_NAME: &str = "your-achamin-api";
pub const DEFAULT_UPLOAD_BUCKET: &str = "your-achamin-uploads-bucket";
pub const DEFAULT_GENERATED_CONTENT_BUCKET: &str = "your-achamin-generated-content-bucket";

pub const DEFAULT_AUDIO_FORMAT: &str = "mp3";
pub const DEFAULT_AUDIO_ENGINE: &str = "neural";
pub const DEFAULT_AUDIO_EXPIRY_HOURS: i64 = 1;

pub const DEFAULT_RETRY_ATTEMPTS: i64 = 3;
pub const DEFAULT_TIMEOUT_MS: i64 = 30_000;

/// Substring that marks `API_URL` as the unconfigured placeholder.
pub const API_URL_PLACEHOLDER_MARKER: &str = "your-api-gateway-id";

// ── Variable listing ────────────────────────────────────────────────

/// A recognised environment variable and the value used when it is unset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KnownVar {
    pub name: &'static str,
    pub default: &'static str,
}

const fn known(name: &'static str, default: &'static str) -> KnownVar {
    KnownVar { name, default }
}

/// Every variable the loader reads, in resolution order.
pub const KNOWN_VARS: &[KnownVar] = &[
    known(ENV_ACHAMIN_API_URL, DEFAULT_API_URL),
    known(ENV_API_URL, "(fallback for ACHAMIN_API_URL)"),
    known(ENV_AWS_REGION, DEFAULT_AWS_REGION),
    known(ENV_AWS_PROFILE, DEFAULT_AWS_PROFILE),
    known(ENV_LAMBDA_FUNCTION_NAME, DEFAULT_LAMBDA_FUNCTION_NAME),
    known(ENV_API_GATEWAY_NAME, DEFAULT_API_GATEWAY_NAME),
    known(ENV_UPLOAD_BUCKET, DEFAULT_UPLOAD_BUCKET),
    known(ENV_GENERATED_CONTENT_BUCKET, DEFAULT_GENERATED_CONTENT_BUCKET),
    known(ENV_ENABLE_UNIQUE_NARRATION, "enabled unless \"false\""),
    known(ENV_ENABLE_NEURAL_ENGINE, "enabled unless \"false\""),
    known(ENV_ENABLE_MULTI_VOICE, "enabled unless \"false\""),
    known(ENV_ENABLE_CULTURAL_CONTEXT, "enabled unless \"false\""),
    known(ENV_AUDIO_FORMAT, DEFAULT_AUDIO_FORMAT),
    known(ENV_AUDIO_ENGINE, DEFAULT_AUDIO_ENGINE),
    known(ENV_AUDIO_EXPIRY_HOURS, "1"),
    known(ENV_RETRY_ATTEMPTS, "3"),
    known(ENV_API_TIMEOUT_MS, "30000"),
    known(ENV_SHOW_DETAILED_ERRORS, "false (true when NODE_ENV=development)"),
    known(ENV_MODE, "(unset)"),
];
