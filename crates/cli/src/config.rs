// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Project configuration types for `blrun.toml`.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// File name looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "blrun.toml";

/// Errors that can occur while loading or creating a configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse TOML config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Failed to write config file {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Interactive prompt failed: {0}")]
    Prompt(#[source] std::io::Error),
}

/// Build configuration for a single project.
///
/// Field order is the order keys are written when a config is created
/// interactively. Missing keys decode to empty values.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct BuildConfig {
    /// Compiler executable name (must be on the allow-list)
    #[serde(default)]
    pub compiler: String,

    /// Directory the source files live in, relative to the project root
    #[serde(default)]
    pub path: String,

    /// Source files, passed to the compiler in this order
    #[serde(default)]
    pub files: Vec<String>,

    /// Extra compiler flags appended after the files
    #[serde(default)]
    pub extras: String,

    /// Command used to run the built program
    #[serde(default)]
    pub run: String,
}

impl BuildConfig {
    /// Parse a configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Read and parse a configuration file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Render the configuration as `blrun.toml` content.
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string(self)?)
    }

    /// Write the configuration to `path`, replacing any existing file.
    pub fn write(&self, path: &Path) -> Result<(), ConfigError> {
        let content = self.to_toml_string()?;
        std::fs::write(path, content).map_err(|source| ConfigError::Write {
            path: path.to_path_buf(),
            source,
        })
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
