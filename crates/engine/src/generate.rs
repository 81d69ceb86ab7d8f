//! Writes the complete `.gitconfig`
//!
//! The target is opened with truncation and written in place. There is no
//! temporary file: if a write fails partway, the target keeps the lines
//! written before the failure.

use crate::writer::ConfigWriter;
use gitcfg_config::AliasSource;
use gitcfg_core::settings::SettingsTree;
use gitcfg_core::{Error, Result};
use std::fs::File;
use std::path::Path;
use tracing::debug;

/// Write `settings` followed by `aliases` to `path`
///
/// Any existing file at `path` is overwritten. The file handle is closed when
/// this returns, on success or error.
pub fn generate(path: &Path, settings: &SettingsTree, aliases: &AliasSource) -> Result<()> {
    let write_err = |source: std::io::Error| Error::FileWrite {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(write_err)?;
    debug!(path = %path.display(), "Opened output");

    let mut writer = ConfigWriter::new(file);
    writer.write_settings(settings).map_err(write_err)?;
    debug!(lines = writer.lines_written(), "Wrote settings");

    writer.write_aliases(aliases).map_err(write_err)?;
    debug!(lines = writer.lines_written(), "Wrote aliases");

    Ok(())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::panic)]
    use super::*;
    use gitcfg_core::settings::Section;
    use std::fs;
    use tempfile::TempDir;

    fn small_tree() -> SettingsTree {
        let mut tree = SettingsTree::new();
        tree.insert("pull", Section::new().value("rebase", true));
        tree
    }

    #[test]
    fn test_generate_writes_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(".gitconfig");

        generate(
            &path,
            &small_tree(),
            &AliasSource::from_text("co = checkout\n"),
        )
        .unwrap();

        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "[pull]\n\trebase = true\n[alias]\n\tco = checkout\n"
        );
    }

    #[test]
    fn test_generate_overwrites_existing_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(".gitconfig");
        fs::write(&path, "[stale]\n\tkey = a much longer value than the new file\n").unwrap();

        generate(&path, &small_tree(), &AliasSource::default()).unwrap();

        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "[pull]\n\trebase = true\n[alias]\n"
        );
    }

    #[test]
    fn test_generate_is_deterministic() {
        let temp = TempDir::new().unwrap();
        let first = temp.path().join("first");
        let second = temp.path().join("second");
        let aliases = AliasSource::from_text("st = status\n");

        generate(&first, &small_tree(), &aliases).unwrap();
        generate(&second, &small_tree(), &aliases).unwrap();

        assert_eq!(fs::read(&first).unwrap(), fs::read(&second).unwrap());
    }

    #[test]
    fn test_generate_unwritable_path() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("missing-dir").join(".gitconfig");

        match generate(&path, &small_tree(), &AliasSource::default()) {
            Err(Error::FileWrite { path: p, source }) => {
                assert_eq!(p, path);
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
            }
            other => panic!("expected FileWrite, got {other:?}"),
        }
        assert!(!path.exists());
    }
}
