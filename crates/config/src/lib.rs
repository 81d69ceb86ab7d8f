//! Configuration inputs for gitcfg
//!
//! This crate handles:
//! - Identity resolution from the environment
//! - The compiled-in default settings tree
//! - Loading the alias source file
//! - Logging initialization

pub mod aliases;
pub mod defaults;
pub mod error;
pub mod identity;
pub mod logging;

pub use aliases::{ALIASES_FILE_PATH, AliasSource};
pub use defaults::default_settings;
pub use error::{ConfigError, Result};
pub use identity::{CONFIG_FILE_NAME, Identity};
