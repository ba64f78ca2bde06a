//! Optional settings read from `keyhunter.toml`.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

/// Errors loading the configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file")]
    Parse(#[from] toml::de::Error),
}

/// Frontend settings. Game rules are fixed and not configurable.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Where the previous winners are listed, one per line.
    pub winners_file: PathBuf,

    /// Tracing filter directive for stderr logging.
    pub log_filter: String,

    /// Style output with ANSI colors.
    pub color: bool,

    /// Pause after each narrative block, in milliseconds.
    pub pause_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            winners_file: PathBuf::from("winners.txt"),
            log_filter: "warn".to_string(),
            color: true,
            pause_ms: 0,
        }
    }
}

impl Config {
    /// File looked for in the working directory.
    pub const DEFAULT_PATH: &'static str = "keyhunter.toml";

    /// Parse settings from TOML text.
    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Load settings from `path`, falling back to defaults when the file does not exist.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(text) => Self::from_toml(&text),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "no config file, using defaults");
                Ok(Self::default())
            }
            Err(source) => Err(ConfigError::Read {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    /// Like [`Config::load_or_default`], but any error also falls back to defaults.
    /// The error is handed back so it can be reported once logging is set up.
    pub fn load_lenient(path: impl AsRef<Path>) -> (Self, Option<ConfigError>) {
        match Self::load_or_default(path) {
            Ok(config) => (config, None),
            Err(e) => (Self::default(), Some(e)),
        }
    }

    pub fn pause(&self) -> Duration {
        Duration::from_millis(self.pause_ms)
    }
}
