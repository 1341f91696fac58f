//! achamin-config — runtime configuration for the Achamin client (library crate).
//!
//! Resolves settings from environment variables with built-in defaults,
//! validates them, and renders the result. Hosts call
//! [`config::init_config`] once at startup and share the returned record.

pub mod config;
pub mod constants;
pub mod env;
pub mod logging;
pub mod output;
