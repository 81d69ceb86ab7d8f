//! # gitcfg engine
//!
//! Renders a settings tree and an alias source into git's config format.
//!
//! - **Writer**: line-by-line serialization with a flush after every line
//! - **Generate**: opens the target file and drives the writer

pub mod generate;
pub mod writer;

// Re-export error types from core
pub use gitcfg_core::{Error, Result};

pub use generate::generate;
pub use writer::ConfigWriter;
