//! gitcfg CLI library
//!
//! Resolves the identity, loads the alias file, and writes `~/.gitconfig`.
//! Kept as a library so the pipeline can be driven from tests.

use anyhow::{Context, Result};
use clap::Parser;
use gitcfg_config::{ALIASES_FILE_PATH, AliasSource, Identity, default_settings};
use std::path::{Path, PathBuf};
use tracing::info;

/// gitcfg - write ~/.gitconfig from built-in settings and an alias file
#[derive(Parser, Debug)]
#[command(name = "gitcfg")]
#[command(version)]
#[command(long_about = "Write ~/.gitconfig from built-in settings and an alias file

Required environment variables:
  HOME   directory the config is written into
  NAME   user.name
  EMAIL  user.email
  NICK   user.username

Aliases are read from ./aliases, one per line. Blank lines and
'#' comments are ignored.")]
pub struct Cli {}

/// Main entry point for the CLI logic
///
/// Identity is resolved before anything is opened, so a missing variable
/// leaves any existing `~/.gitconfig` untouched.
pub fn run(_cli: &Cli) -> Result<()> {
    let identity = Identity::from_env()?;
    let path = generate_config(&identity, Path::new(ALIASES_FILE_PATH))?;
    info!("Wrote {}", path.display());
    Ok(())
}

/// Write the config for `identity` using aliases from `alias_path`
///
/// The alias file is read before the target is opened, so an unreadable
/// alias file also leaves the target untouched.
///
/// Returns the path that was written.
pub fn generate_config(identity: &Identity, alias_path: &Path) -> Result<PathBuf> {
    let aliases = AliasSource::load(alias_path)?;
    let settings = default_settings(identity);
    let path = identity.config_path();

    gitcfg_engine::generate(&path, &settings, &aliases)
        .with_context(|| format!("Failed to generate {}", path.display()))?;

    Ok(path)
}
