//! Alias source loading
//!
//! The alias file holds one git alias definition per line. Blank lines and
//! lines starting with `#` are dropped, trailing `#` comments are cut, and
//! what remains is trimmed and written verbatim under `[alias]`.

use crate::error::{ConfigError, Result};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Default location of the alias file, relative to the working directory
pub const ALIASES_FILE_PATH: &str = "aliases";

/// Raw lines of an alias file, in file order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AliasSource {
    lines: Vec<String>,
}

impl AliasSource {
    /// Read an alias file as UTF-8
    ///
    /// A missing, unreadable, or non-UTF-8 file is an error.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::AliasRead {
            path: path.to_path_buf(),
            source,
        })?;
        let source = Self::from_text(&content);
        debug!(path = %path.display(), lines = source.lines.len(), "Loaded alias source");
        Ok(source)
    }

    /// Build a source from in-memory text
    ///
    /// Both `\n` and `\r\n` terminate a line.
    pub fn from_text(text: &str) -> Self {
        Self {
            lines: text.lines().map(str::to_owned).collect(),
        }
    }

    /// Alias definitions to write, in file order
    ///
    /// A line that is empty only after its inline comment is removed (for
    /// example `   # note`) still yields an empty entry.
    ///
    /// # Examples
    ///
    /// ```
    /// use gitcfg_config::AliasSource;
    ///
    /// let source = AliasSource::from_text("co = checkout\n# comment\n\nst = status # short\n");
    /// let entries: Vec<_> = source.entries().collect();
    /// assert_eq!(entries, ["co = checkout", "st = status"]);
    /// ```
    pub fn entries(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(String::as_str).filter_map(alias_entry)
    }
}

fn alias_entry(line: &str) -> Option<&str> {
    if line.is_empty() || line.starts_with('#') {
        return None;
    }
    let line = line.split_once('#').map_or(line, |(head, _)| head);
    Some(line.trim())
}
