//! Logging configuration for gitcfg
//!
//! Provides compact terminal output using tracing. Logs never go into the
//! generated config file.

use crate::error::{ConfigError, Result};
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the logging system
///
/// The filter defaults to `info` for gitcfg crates and can be overridden with
/// the `RUST_LOG` environment variable.
///
/// # Examples
/// ```ignore
/// gitcfg_config::logging::init()?;
/// ```
pub fn init() -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_directives("info")))
        .map_err(|e| ConfigError::Logging(e.to_string()))?;

    let stdout_layer = fmt::layer()
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_file(false)
        .with_line_number(false)
        .without_time() // No timestamps for a one-shot tool
        .compact()
        .with_ansi(true)
        .with_filter(env_filter);

    tracing_subscriber::registry()
        .with(stdout_layer)
        .try_init()
        .map_err(|e| ConfigError::Logging(e.to_string()))
}

fn default_directives(level: &str) -> String {
    format!("gitcfg={level},gitcfg_config={level},gitcfg_engine={level}")
}
