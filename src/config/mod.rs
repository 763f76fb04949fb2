//! Effective settings: config file, environment, and command-line flags.
pub mod toml_loader;

use anyhow::Result;
use serde::Deserialize;
use std::path::PathBuf;

use crate::cli::GlobalOpts;

/// Environment variable overriding the payload location.
pub const PAYLOAD_ENV: &str = "BALLER_PAYLOAD";

/// Contents of `config.toml`.
///
/// ```toml
/// payload = "/usr/local/share/baller/payload"
/// username = "Ada"
/// ignore = ["notes.txt"]
/// ```
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    /// Payload directory.
    pub payload: Option<PathBuf>,
    /// Name rendered into generated documentation.
    pub username: Option<String>,
    /// Extra entry names to leave in place when scaffolding.
    pub ignore: Vec<String>,
}

/// Environment values that feed into [`Settings`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvVars {
    /// `BALLER_PAYLOAD`.
    pub payload: Option<PathBuf>,
    /// `USER`.
    pub user: Option<String>,
    /// `USERNAME` (Windows).
    pub username: Option<String>,
}

impl EnvVars {
    /// Read the relevant variables from the process environment.
    #[must_use]
    pub fn from_process() -> Self {
        let var = |name: &str| std::env::var(name).ok().filter(|v| !v.is_empty());
        Self {
            payload: var(PAYLOAD_ENV).map(PathBuf::from),
            user: var("USER"),
            username: var("USERNAME"),
        }
    }
}

/// Resolved settings for one invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    /// Explicit payload directory; `None` means auto-detect.
    pub payload: Option<PathBuf>,
    /// Name rendered into generated documentation (may be empty).
    pub username: String,
    /// Extra entry names to leave in place when scaffolding.
    pub ignore: Vec<String>,
}

impl Settings {
    /// Load the config file and combine it with the environment and flags.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed.
    pub fn load(global: &GlobalOpts) -> Result<Self> {
        let file = match global.config.clone().or_else(default_config_path) {
            Some(path) => toml_loader::load_config(&path)?,
            None => FileConfig::default(),
        };
        Ok(Self::resolve(
            file,
            global.payload.clone(),
            &EnvVars::from_process(),
        ))
    }

    /// Merge the three sources.
    ///
    /// Payload: flag, then `BALLER_PAYLOAD`, then the config file.
    /// Username: the config file, then `USER`, then `USERNAME`, else empty.
    #[must_use]
    pub fn resolve(file: FileConfig, payload_flag: Option<PathBuf>, env: &EnvVars) -> Self {
        let payload = payload_flag
            .or_else(|| env.payload.clone())
            .or(file.payload);
        let username = file
            .username
            .or_else(|| env.user.clone())
            .or_else(|| env.username.clone())
            .unwrap_or_default();
        Self {
            payload,
            username,
            ignore: file.ignore,
        }
    }
}

/// `$XDG_CONFIG_HOME/baller/config.toml`, else `~/.config/baller/config.toml`.
fn default_config_path() -> Option<PathBuf> {
    let base = std::env::var_os("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|| std::env::var_os("HOME").map(|h| PathBuf::from(h).join(".config")))?;
    Some(base.join("baller").join("config.toml"))
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn flag_beats_env_beats_file_for_payload() {
        let file = FileConfig {
            payload: Some(PathBuf::from("/file")),
            ..FileConfig::default()
        };
        let env = EnvVars {
            payload: Some(PathBuf::from("/env")),
            ..EnvVars::default()
        };

        let s = Settings::resolve(file.clone(), Some(PathBuf::from("/flag")), &env);
        assert_eq!(s.payload, Some(PathBuf::from("/flag")));

        let s = Settings::resolve(file.clone(), None, &env);
        assert_eq!(s.payload, Some(PathBuf::from("/env")));

        let s = Settings::resolve(file, None, &EnvVars::default());
        assert_eq!(s.payload, Some(PathBuf::from("/file")));
    }

    #[test]
    fn username_prefers_config_then_user_then_username() {
        let env = EnvVars {
            user: Some("unix".into()),
            username: Some("win".into()),
            ..EnvVars::default()
        };
        let file = FileConfig {
            username: Some("configured".into()),
            ..FileConfig::default()
        };
        assert_eq!(Settings::resolve(file, None, &env).username, "configured");
        assert_eq!(
            Settings::resolve(FileConfig::default(), None, &env).username,
            "unix"
        );
        let env = EnvVars {
            username: Some("win".into()),
            ..EnvVars::default()
        };
        assert_eq!(
            Settings::resolve(FileConfig::default(), None, &env).username,
            "win"
        );
    }

    #[test]
    fn username_defaults_to_empty() {
        let s = Settings::resolve(FileConfig::default(), None, &EnvVars::default());
        assert_eq!(s.username, "");
        assert_eq!(s.payload, None);
    }

    #[test]
    fn load_reads_explicit_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "username = \"Ada\"\nignore = [\"notes.txt\"]\n").unwrap();
        let global = GlobalOpts {
            config: Some(path),
            payload: Some(PathBuf::from("/payload")),
        };
        let s = Settings::load(&global).unwrap();
        assert_eq!(s.username, "Ada");
        assert_eq!(s.ignore, vec!["notes.txt"]);
        assert_eq!(s.payload, Some(PathBuf::from("/payload")));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "colour = \"blue\"\n").unwrap();
        let global = GlobalOpts {
            config: Some(path),
            payload: None,
        };
        assert!(Settings::load(&global).is_err());
    }
}
