// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Argument-vector commands and build command synthesis.

use std::fmt;
use std::path::Path;

use crate::config::BuildConfig;

/// A program plus its arguments, spawned directly without a shell.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CommandLine {
    program: String,
    args: Vec<String>,
}

impl CommandLine {
    /// Create a command with no arguments.
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    /// Append one argument.
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Append several arguments in order.
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Program name or path.
    pub fn program(&self) -> &str {
        &self.program
    }

    /// Arguments after the program.
    pub fn arguments(&self) -> &[String] {
        &self.args
    }
}

impl fmt::Display for CommandLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

/// Synthesize the build command for a configuration.
///
/// The compiler comes first, then every file joined onto `path` in
/// declaration order, then the whitespace-separated extra flags.
pub fn build_command(config: &BuildConfig) -> CommandLine {
    let base = Path::new(&config.path);
    let files = config
        .files
        .iter()
        .map(|file| base.join(file).to_string_lossy().into_owned());

    CommandLine::new(config.compiler.as_str())
        .args(files)
        .args(config.extras.split_whitespace())
}

#[cfg(test)]
#[path = "command_tests.rs"]
mod tests;
