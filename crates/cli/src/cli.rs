// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Command-line argument parsing.

use std::io;
use std::path::PathBuf;

use clap::{ArgAction, Parser};
use thiserror::Error;

use crate::config::CONFIG_FILE_NAME;
use crate::driver::BuildFailurePolicy;

/// Build and run a project described by blrun.toml
#[derive(Parser, Clone, Debug)]
#[command(name = "blrun", version, about = "Build and run a project described by blrun.toml")]
pub struct Cli {
    /// Project directory containing the config file (default: current directory)
    #[arg(short = 'C', long = "dir", value_name = "DIR")]
    pub dir: Option<PathBuf>,

    /// Config file name, relative to the project directory
    #[arg(long, value_name = "FILE", env = "BLRUN_CONFIG", default_value = CONFIG_FILE_NAME)]
    pub config: PathBuf,

    /// Whether a failed build still runs the program
    #[arg(
        long,
        value_enum,
        env = "BLRUN_ON_BUILD_FAILURE",
        default_value = "continue"
    )]
    pub on_build_failure: BuildFailurePolicy,

    /// Fail instead of prompting when the config file is missing
    #[arg(long)]
    pub no_create: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

/// Errors resolving the project directory.
#[derive(Debug, Error)]
pub enum WorkingDirError {
    #[error("Cannot determine working directory: {0}")]
    CurrentDir(#[source] io::Error),

    #[error("Project directory {} does not exist or is not a directory", .0.display())]
    NotADirectory(PathBuf),
}

impl Cli {
    /// Absolute project directory. Must be an existing directory.
    pub fn working_dir(&self) -> Result<PathBuf, WorkingDirError> {
        let cwd = std::env::current_dir().map_err(WorkingDirError::CurrentDir)?;
        let dir = match &self.dir {
            Some(dir) => cwd.join(dir),
            None => cwd,
        };
        if !dir.is_dir() {
            return Err(WorkingDirError::NotADirectory(dir));
        }
        Ok(dir)
    }
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
