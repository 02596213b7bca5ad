//! Tool configuration (autoexec.toml)
//!
//! Every table and key is optional. A missing file means all defaults.

// Fields are read by the thiserror Display derive
#![allow(unused_assignments)]

use crate::codegen::{GenerationOptions, Layout};
use chrono::{DateTime, Utc};
use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// File name searched for by [`Config::find`]
pub const CONFIG_FILE: &str = "autoexec.toml";

/// Configuration loaded from `autoexec.toml`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,

    /// Column layout of generated lines
    #[serde(default)]
    pub format: Layout,
}

impl Config {
    /// Load a config from a file path
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Save a config to a file path
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize {
            path: path.to_path_buf(),
            source: e,
        })?;

        std::fs::write(path, content).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Find a config by searching upward from `start`
    ///
    /// # Errors
    ///
    /// Returns an error if no config is found.
    pub fn find(start: &Path) -> Result<PathBuf, ConfigError> {
        let mut current = start.to_path_buf();

        loop {
            let config_path = current.join(CONFIG_FILE);
            if config_path.exists() {
                return Ok(config_path);
            }

            if !current.pop() {
                return Err(ConfigError::NotFound {
                    searched_from: start.to_path_buf(),
                });
            }
        }
    }

    /// Load the nearest config above `start`, or the defaults if there is none
    ///
    /// Returns the directory the config was found in, which relative output
    /// paths are resolved against.
    ///
    /// # Errors
    ///
    /// Returns an error if a config exists but cannot be loaded.
    pub fn discover(start: &Path) -> Result<(Self, PathBuf), ConfigError> {
        match Self::find(start) {
            Ok(path) => {
                tracing::debug!(path = %path.display(), "loading config");
                let config = Self::load(&path)?;
                let root = path
                    .parent()
                    .map_or_else(|| start.to_path_buf(), Path::to_path_buf);
                Ok((config, root))
            }
            Err(ConfigError::NotFound { .. }) => {
                tracing::debug!("no {CONFIG_FILE} found, using defaults");
                Ok((Self::default(), start.to_path_buf()))
            }
            Err(e) => Err(e),
        }
    }

    /// Generation options for a file written at `now`
    ///
    /// The timestamp is dropped when `[output] timestamp` is off.
    #[must_use]
    pub fn generation_options(&self, now: DateTime<Utc>) -> GenerationOptions {
        GenerationOptions {
            timestamp: self.output.timestamp.then_some(now),
            layout: self.format,
        }
    }
}

/// Output configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Directory generated files are written to (relative to the config)
    #[serde(default = "default_output_dir")]
    pub dir: PathBuf,
    /// Name of the generated file
    #[serde(default = "default_file_name")]
    pub file: String,
    /// Write a `// Generated:` timestamp into downloaded files
    #[serde(default = "default_true")]
    pub timestamp: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: default_output_dir(),
            file: default_file_name(),
            timestamp: true,
        }
    }
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_file_name() -> String {
    crate::export::DOWNLOAD_FILE_NAME.to_string()
}

const fn default_true() -> bool {
    true
}

/// Errors that can occur when working with the config file
#[derive(Debug, Error, Diagnostic)]
pub enum ConfigError {
    /// IO error reading/writing the config
    #[error("IO error at {}: {source}", .path.display())]
    #[diagnostic(code(autoexec::config::io))]
    Io {
        /// Path that caused the error
        path: PathBuf,
        /// Underlying IO error
        source: std::io::Error,
    },

    /// Parse error in TOML
    #[error("Parse error in {}: {source}", .path.display())]
    #[diagnostic(
        code(autoexec::config::parse),
        help("check the [output] and [format] tables in autoexec.toml")
    )]
    Parse {
        /// Path that caused the error
        path: PathBuf,
        /// Underlying parse error
        source: toml::de::Error,
    },

    /// Serialization error
    #[error("Serialization error for {}: {source}", .path.display())]
    #[diagnostic(code(autoexec::config::serialize))]
    Serialize {
        /// Path that caused the error
        path: PathBuf,
        /// Underlying serialization error
        source: toml::ser::Error,
    },

    /// No config found
    #[error("No autoexec.toml found searching from {}", .searched_from.display())]
    #[diagnostic(code(autoexec::config::not_found), help("run `autoexec init` to create one"))]
    NotFound {
        /// Directory searched from
        searched_from: PathBuf,
    },
}
