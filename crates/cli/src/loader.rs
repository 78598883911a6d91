// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Locating, reading, or interactively creating the project config.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use crate::config::{BuildConfig, ConfigError, CONFIG_FILE_NAME};
use crate::prompt::Prompter;

pub const MISSING_CONFIG_NOTICE: &str = "No config file detected. Let's create one:";
pub const WRITE_FAILURE_NOTICE: &str = "Error automatically creating build file.\n\
     Please make your own to avoid re-entering details each time.";

/// Where a loaded configuration came from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigSource {
    /// Read from an existing file
    File(PathBuf),
    /// Answered interactively; `persisted` is the file written, if any
    Interactive { persisted: Option<PathBuf> },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoadedConfig {
    pub config: BuildConfig,
    pub source: ConfigSource,
}

/// Loads `blrun.toml` from an explicit working directory.
#[derive(Clone, Debug)]
pub struct ConfigLoader {
    working_dir: PathBuf,
    file_name: PathBuf,
    create_missing: bool,
}

impl ConfigLoader {
    /// Create a loader for `working_dir` using the default file name.
    pub fn new(working_dir: impl Into<PathBuf>) -> Self {
        Self {
            working_dir: working_dir.into(),
            file_name: PathBuf::from(CONFIG_FILE_NAME),
            create_missing: true,
        }
    }

    /// Override the config file name (resolved against the working directory).
    pub fn with_file_name(mut self, file_name: impl Into<PathBuf>) -> Self {
        self.file_name = file_name.into();
        self
    }

    /// Whether to prompt for and write a config when none exists.
    pub fn with_create_missing(mut self, create_missing: bool) -> Self {
        self.create_missing = create_missing;
        self
    }

    /// Full path of the config file.
    pub fn config_path(&self) -> PathBuf {
        self.working_dir.join(&self.file_name)
    }

    /// Load the configuration, prompting on `input`/`output` when the file
    /// is missing and creation is enabled.
    pub fn load<R: BufRead, W: Write>(
        &self,
        input: R,
        output: &mut W,
    ) -> Result<LoadedConfig, ConfigError> {
        let path = self.config_path();
        tracing::debug!(path = %path.display(), "looking for config");

        if path.exists() || !self.create_missing {
            let config = BuildConfig::load(&path)?;
            tracing::info!(path = %path.display(), "loaded config");
            return Ok(LoadedConfig {
                config,
                source: ConfigSource::File(path),
            });
        }

        writeln!(output, "{MISSING_CONFIG_NOTICE}").map_err(ConfigError::Prompt)?;
        let config = Prompter::new(input, &mut *output)
            .ask_config()
            .map_err(ConfigError::Prompt)?;

        let persisted = match config.write(&path) {
            Ok(()) => {
                tracing::info!(path = %path.display(), "created config");
                Some(path)
            }
            Err(e) => {
                tracing::warn!(error = %e, "could not persist config");
                writeln!(output, "{WRITE_FAILURE_NOTICE}").map_err(ConfigError::Prompt)?;
                None
            }
        };

        Ok(LoadedConfig {
            config,
            source: ConfigSource::Interactive { persisted },
        })
    }
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
