//! Settings tree model
//!
//! A [`SettingsTree`] is an ordered set of git config sections. Each
//! [`Section`] holds [`Entry`] values in insertion order, and each entry is
//! either a plain `key = value` pair or a named subsection rendered as
//! `[section "name"]`.
//!
//! Subsections are flat: their values are [`Scalar`]s, so deeper nesting
//! cannot be expressed.
//!
//! # Examples
//!
//! ```
//! use gitcfg_core::settings::{Scalar, Section, SettingsTree};
//!
//! let mut tree = SettingsTree::new();
//! tree.insert(
//!     "color",
//!     Section::new()
//!         .value("ui", "auto")
//!         .subsection("status", [("added", "green")]),
//! );
//! tree.insert("pull", Section::new().value("rebase", true));
//!
//! let names: Vec<_> = tree.iter().map(|(name, _)| name).collect();
//! assert_eq!(names, ["color", "pull"]);
//! assert_eq!(Scalar::from(true).to_string(), "true");
//! ```

use indexmap::IndexMap;
use std::fmt;

/// A scalar config value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Scalar {
    /// Written verbatim
    String(String),
    /// Written as `true` or `false`
    Bool(bool),
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String(s) => f.write_str(s),
            Self::Bool(b) => f.write_str(if *b { "true" } else { "false" }),
        }
    }
}

impl From<&str> for Scalar {
    fn from(value: &str) -> Self {
        Self::String(value.to_owned())
    }
}

impl From<String> for Scalar {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<bool> for Scalar {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

/// One entry inside a section
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry {
    /// `key = value` under the section header
    Value {
        /// Key name
        key: String,
        /// Rendered value
        value: Scalar,
    },
    /// `[section "name"]` followed by its own key lines
    Subsection {
        /// Subsection name, written inside quotes
        name: String,
        /// Key/value pairs in order
        values: Vec<(String, Scalar)>,
    },
}

/// An ordered list of entries belonging to one section
///
/// A plain key and a subsection may share a name (git's `color.status` and
/// `[color "status"]`), so entries are kept as a list rather than a map.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Section {
    entries: Vec<Entry>,
}

impl Section {
    /// Create an empty section
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a plain `key = value` entry
    #[must_use]
    pub fn value(mut self, key: impl Into<String>, value: impl Into<Scalar>) -> Self {
        self.entries.push(Entry::Value {
            key: key.into(),
            value: value.into(),
        });
        self
    }

    /// Append a named subsection
    #[must_use]
    pub fn subsection<K, V>(
        mut self,
        name: impl Into<String>,
        values: impl IntoIterator<Item = (K, V)>,
    ) -> Self
    where
        K: Into<String>,
        V: Into<Scalar>,
    {
        self.entries.push(Entry::Subsection {
            name: name.into(),
            values: values
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        });
        self
    }

    /// Entries in render order
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }
}

/// Ordered mapping from section name to [`Section`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SettingsTree {
    sections: IndexMap<String, Section>,
}

impl SettingsTree {
    /// Create an empty tree
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a section, keeping its original position if the name already exists
    pub fn insert(&mut self, name: impl Into<String>, section: Section) {
        self.sections.insert(name.into(), section);
    }

    /// Iterate sections in render order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Section)> {
        self.sections.iter().map(|(name, section)| (name.as_str(), section))
    }
}
