//! Error types for configuration loading

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while gathering inputs, before any output is written
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum ConfigError {
    /// One or more required environment variables are unset
    #[error("{}", missing_env_message(.names))]
    MissingEnv {
        /// Missing variable names, in check order
        names: Vec<&'static str>,
    },

    /// Required environment variables are set but not valid Unicode
    #[error("{}", invalid_env_message(.names))]
    InvalidEnv {
        /// Offending variable names, in check order
        names: Vec<&'static str>,
    },

    /// The alias source could not be read
    #[error("Failed to read alias file {}: {source}", path.display())]
    AliasRead {
        /// Path that was opened
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The tracing subscriber could not be installed
    #[error("Failed to initialize logging: {0}")]
    Logging(String),
}

/// Result type alias for configuration operations
pub type Result<T> = std::result::Result<T, ConfigError>;

fn missing_env_message(names: &[&str]) -> String {
    env_message(names, "missing")
}

fn invalid_env_message(names: &[&str]) -> String {
    env_message(names, "not valid Unicode")
}

fn env_message(names: &[&str], problem: &str) -> String {
    let (noun, verb) = if names.len() > 1 {
        ("variables", "are")
    } else {
        ("variable", "is")
    };
    format!(
        "The environment {noun} {} {verb} {problem}!",
        names.join(", ")
    )
}
