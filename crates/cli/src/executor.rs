// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Process execution for build and run stages.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use thiserror::Error;

use crate::command::CommandLine;

/// Captured result of one finished subprocess.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StageOutput {
    /// Whether the process exited successfully
    pub success: bool,
    /// Human-readable exit status (e.g. "exit status: 1")
    pub status: String,
    pub stdout: Vec<u8>,
    pub stderr: Vec<u8>,
}

impl StageOutput {
    /// Create a successful output with the given stdout.
    pub fn success(stdout: impl Into<Vec<u8>>) -> Self {
        Self {
            success: true,
            status: "exit status: 0".to_string(),
            stdout: stdout.into(),
            stderr: Vec::new(),
        }
    }

    /// Create a failed output with the given status and stderr.
    pub fn failure(status: impl Into<String>, stderr: impl Into<Vec<u8>>) -> Self {
        Self {
            success: false,
            status: status.into(),
            stdout: Vec::new(),
            stderr: stderr.into(),
        }
    }
}

impl From<Output> for StageOutput {
    fn from(output: Output) -> Self {
        Self {
            success: output.status.success(),
            status: output.status.to_string(),
            stdout: output.stdout,
            stderr: output.stderr,
        }
    }
}

#[derive(Debug, Error)]
pub enum ExecError {
    #[error("failed to start `{program}`: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("`{program}` failed with {status}")]
    Failed { program: String, status: String },
}

/// Spawns a command and waits for it to finish.
///
/// Implementations return `Ok` for any process that ran, including ones
/// that exited unsuccessfully; `Err` is reserved for spawn failures.
pub trait ProcessRunner {
    fn run(&self, command: &CommandLine, cwd: &Path) -> Result<StageOutput, ExecError>;
}

impl<T: ProcessRunner + ?Sized> ProcessRunner for &T {
    fn run(&self, command: &CommandLine, cwd: &Path) -> Result<StageOutput, ExecError> {
        (**self).run(command, cwd)
    }
}

/// Runs commands as real child processes, capturing stdout and stderr.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemRunner;

impl SystemRunner {
    /// Create a new system runner.
    pub fn new() -> Self {
        Self
    }
}

impl ProcessRunner for SystemRunner {
    fn run(&self, command: &CommandLine, cwd: &Path) -> Result<StageOutput, ExecError> {
        let program = resolve_program(command.program(), cwd);
        tracing::debug!(program = %program.display(), args = ?command.arguments(), cwd = %cwd.display(), "spawning");

        let output = Command::new(&program)
            .args(command.arguments())
            .current_dir(cwd)
            .output()
            .map_err(|source| ExecError::Spawn {
                program: command.program().to_string(),
                source,
            })?;

        tracing::debug!(status = %output.status, "process exited");
        Ok(output.into())
    }
}

/// Resolve relative program paths (`./a.out`, `bin/tool`) against `cwd`.
///
/// Bare names are left alone so they are looked up on `PATH`.
pub fn resolve_program(program: &str, cwd: &Path) -> PathBuf {
    let path = Path::new(program);
    if path.is_relative() && path.components().count() > 1 {
        cwd.join(path)
    } else {
        path.to_path_buf()
    }
}

#[cfg(test)]
#[path = "executor_tests.rs"]
mod tests;
