//! Identity resolution from the environment
//!
//! The four identity values are required. Resolution checks all of them and
//! reports every missing name at once, before anything touches the output.

use crate::error::{ConfigError, Result};
use std::ffi::OsString;
use std::path::PathBuf;

/// File name of the generated config, relative to the home directory
pub const CONFIG_FILE_NAME: &str = ".gitconfig";

/// Home directory variable
pub const HOME_VAR: &str = "HOME";
/// User display name variable
pub const NAME_VAR: &str = "NAME";
/// User email variable
pub const EMAIL_VAR: &str = "EMAIL";
/// User nickname variable
pub const NICK_VAR: &str = "NICK";

/// Resolved identity values
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    /// Home directory the config is written into
    pub home: PathBuf,
    /// `user.name`
    pub name: String,
    /// `user.email`
    pub email: String,
    /// `user.username`
    pub nick: String,
}

impl Identity {
    /// Resolve the identity from the process environment
    pub fn from_env() -> Result<Self> {
        Self::resolve(|name| std::env::var_os(name))
    }

    /// Resolve the identity through an arbitrary lookup
    ///
    /// Variables are checked in the order `HOME`, `NAME`, `EMAIL`, `NICK`.
    /// Absence is reported first, naming every unset variable. `HOME` is a
    /// path and may hold any bytes; the other three are written into the
    /// config and must be valid Unicode. An empty value is accepted.
    ///
    /// # Examples
    ///
    /// ```
    /// use gitcfg_config::Identity;
    ///
    /// let err = Identity::resolve(|name| (name == "HOME").then(|| "/home/ada".into()))
    ///     .unwrap_err();
    /// assert_eq!(
    ///     err.to_string(),
    ///     "The environment variables NAME, EMAIL, NICK are missing!"
    /// );
    /// ```
    pub fn resolve<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<OsString>,
    {
        let (home, name, email, nick) = match (
            lookup(HOME_VAR),
            lookup(NAME_VAR),
            lookup(EMAIL_VAR),
            lookup(NICK_VAR),
        ) {
            (Some(home), Some(name), Some(email), Some(nick)) => (home, name, email, nick),
            (home, name, email, nick) => {
                let names = [
                    (HOME_VAR, home.is_none()),
                    (NAME_VAR, name.is_none()),
                    (EMAIL_VAR, email.is_none()),
                    (NICK_VAR, nick.is_none()),
                ]
                .into_iter()
                .filter_map(|(var, missing)| missing.then_some(var))
                .collect();
                return Err(ConfigError::MissingEnv { names });
            }
        };

        let mut invalid: Vec<&'static str> = Vec::new();
        let mut text = |var: &'static str, value: OsString| {
            value.into_string().unwrap_or_else(|_| {
                invalid.push(var);
                String::new()
            })
        };
        let name = text(NAME_VAR, name);
        let email = text(EMAIL_VAR, email);
        let nick = text(NICK_VAR, nick);
        if !invalid.is_empty() {
            return Err(ConfigError::InvalidEnv { names: invalid });
        }

        Ok(Self {
            home: PathBuf::from(home),
            name,
            email,
            nick,
        })
    }

    /// Absolute path of the generated config: `<home>/.gitconfig`
    pub fn config_path(&self) -> PathBuf {
        self.home.join(CONFIG_FILE_NAME)
    }
}
