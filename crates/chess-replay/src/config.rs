//! Configuration file loading for the replay tool.
//!
//! This module provides types and functions for loading replay settings
//! from TOML files.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur when loading or parsing configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),
    /// Failed to parse the configuration file as valid TOML.
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Replay settings.
///
/// Every field has a default, so an empty file (or no file at all) is a
/// valid configuration.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct ReplayConfig {
    /// Stop at the first rejected move instead of skipping it.
    /// Defaults to true.
    #[serde(default = "default_stop_on_illegal")]
    pub stop_on_illegal: bool,
    /// Embed the serialized game in the report. Defaults to false.
    #[serde(default)]
    pub include_state: bool,
    /// Log filter used when `RUST_LOG` is not set (e.g., "debug",
    /// "chess_engine=debug"). Defaults to "info".
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

fn default_stop_on_illegal() -> bool {
    true
}

fn default_log_filter() -> String {
    "info".to_string()
}

impl Default for ReplayConfig {
    fn default() -> Self {
        ReplayConfig {
            stop_on_illegal: default_stop_on_illegal(),
            include_state: false,
            log_filter: default_log_filter(),
        }
    }
}

impl ReplayConfig {
    /// Loads the replay configuration from `path`.
    ///
    /// If the file does not exist, returns the default configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ReadError`] if the file exists but cannot be read,
    /// or [`ConfigError::ParseError`] if the file contains invalid TOML.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            Ok(toml::from_str(&content)?)
        } else {
            Ok(Self::default())
        }
    }

    /// Returns the default configuration file path, `replay.toml` in the
    /// current working directory.
    pub fn default_path() -> PathBuf {
        PathBuf::from("replay.toml")
    }
}
