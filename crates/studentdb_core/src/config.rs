//! Runtime configuration for the console binary.
//!
//! # Responsibility
//! - Resolve log level and optional log directory from environment-style
//!   key/value pairs.
//!
//! # Invariants
//! - `log_level` is always one of `trace|debug|info|warn|error`.
//! - Without a log directory no log files are written.

use crate::logging::{default_log_level, normalize_level};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub const ENV_LOG_LEVEL: &str = "STUDENTDB_LOG_LEVEL";
pub const ENV_LOG_DIR: &str = "STUDENTDB_LOG_DIR";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    InvalidValue { key: &'static str, message: String },
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidValue { key, message } => write!(f, "invalid `{key}`: {message}"),
        }
    }
}

impl Error for ConfigError {}

/// Effective runtime settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeConfig {
    pub log_level: &'static str,
    /// Absolute directory for rolling log files, if file logging is enabled.
    pub log_dir: Option<String>,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_dir: None,
        }
    }
}

impl RuntimeConfig {
    /// Reads settings from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(std::env::vars())
    }

    /// Builds settings from arbitrary key/value pairs; unknown keys are ignored.
    pub fn from_vars<I, K, V>(vars: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut config = Self::default();
        for (key, value) in vars {
            let value = value.as_ref().trim();
            match key.as_ref() {
                ENV_LOG_LEVEL if !value.is_empty() => {
                    config.log_level =
                        normalize_level(value).map_err(|message| ConfigError::InvalidValue {
                            key: ENV_LOG_LEVEL,
                            message,
                        })?;
                }
                ENV_LOG_DIR if !value.is_empty() => {
                    config.log_dir = Some(value.to_string());
                }
                _ => {}
            }
        }
        Ok(config)
    }
}
