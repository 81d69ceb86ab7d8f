//! Core types for gitcfg
//!
//! This is the foundation crate (Layer 0) that all other gitcfg crates depend on.
//! It provides:
//! - Base error types
//! - The settings tree model rendered into `.gitconfig`
//!
//! This crate has no dependencies on other gitcfg crates.

pub mod error;
pub mod settings;

pub use error::{Error, Result};
pub use settings::{Entry, Scalar, Section, SettingsTree};
