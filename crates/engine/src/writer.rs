//! Git config serialization
//!
//! Output layout:
//!
//! ```text
//! [section]
//! 	key = value
//! [section "subsection"]
//! 	subkey = subvalue
//! [alias]
//! 	co = checkout
//! ```
//!
//! Every line ends with `\n` and the underlying writer is flushed after each
//! one, so an interrupted run leaves only whole lines behind.

use gitcfg_config::AliasSource;
use gitcfg_core::settings::{Entry, Scalar, SettingsTree};
use std::fmt;
use std::io::{self, Write};

/// Writes config lines to any [`Write`] sink
pub struct ConfigWriter<W: Write> {
    out: W,
    lines: usize,
}

impl<W: Write> ConfigWriter<W> {
    /// Wrap a sink
    pub fn new(out: W) -> Self {
        Self { out, lines: 0 }
    }

    /// Write every section of `tree` in stored order
    ///
    /// Each section gets one `[name]` header. Plain keys and subsections follow
    /// in the order they were inserted; a subsection opens its own
    /// `[name "sub"]` header.
    pub fn write_settings(&mut self, tree: &SettingsTree) -> io::Result<()> {
        for (name, section) in tree.iter() {
            self.line(format_args!("[{name}]"))?;

            for entry in section.entries() {
                match entry {
                    Entry::Value { key, value } => self.key_value(key, value)?,
                    Entry::Subsection { name: sub, values } => {
                        self.line(format_args!("[{name} \"{sub}\"]"))?;
                        for (key, value) in values {
                            self.key_value(key, value)?;
                        }
                    }
                }
            }
        }
        Ok(())
    }

    /// Write the `[alias]` header followed by one line per alias entry
    pub fn write_aliases(&mut self, aliases: &AliasSource) -> io::Result<()> {
        self.line(format_args!("[alias]"))?;
        for alias in aliases.entries() {
            self.line(format_args!("\t{alias}"))?;
        }
        Ok(())
    }

    /// Number of lines written so far
    pub fn lines_written(&self) -> usize {
        self.lines
    }

    #[cfg(test)]
    fn into_inner(self) -> W {
        self.out
    }

    fn key_value(&mut self, key: &str, value: &Scalar) -> io::Result<()> {
        self.line(format_args!("\t{key} = {value}"))
    }

    fn line(&mut self, args: fmt::Arguments<'_>) -> io::Result<()> {
        self.out.write_fmt(args)?;
        self.out.write_all(b"\n")?;
        self.out.flush()?;
        self.lines += 1;
        Ok(())
    }
}
