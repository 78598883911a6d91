// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Build-then-run execution driver.
//!
//! The build stage moves `Idle -> Building -> Built | BuildFailed` and the
//! run stage moves `Idle -> Running -> Ran | RunFailed`. Validation gates
//! run before the corresponding stage starts, so a rejected command is
//! never spawned. Whether a failed build stops the run is decided by
//! [`BuildFailurePolicy`].

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use clap::ValueEnum;
use thiserror::Error;

use crate::command::{build_command, CommandLine};
use crate::config::BuildConfig;
use crate::executor::{ExecError, ProcessRunner};
use crate::output::{write_captured, write_error};
use crate::validate::{run_command, validate_compiler, ValidationError};

/// Process exit codes.
pub mod exit_codes {
    /// Build (if any) and run succeeded, or the build failed under `Continue`
    pub const SUCCESS: i32 = 0;
    /// Config, validation, or run failure
    pub const ERROR: i32 = 1;
}

pub const BUILD_SUCCESS_MESSAGE: &str = "Project built successfully!";
pub const RUN_SUCCESS_MESSAGE: &str = "Project ran successfully!";

/// What to do when the build command fails.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum BuildFailurePolicy {
    /// Report the failure and run anyway
    #[default]
    Continue,
    /// Report the failure and stop with a non-zero exit
    Abort,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BuildState {
    #[default]
    Idle,
    Building,
    Built,
    BuildFailed,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RunState {
    #[default]
    Idle,
    Running,
    Ran,
    RunFailed,
}

/// Fatal driver outcomes.
#[derive(Debug, Error)]
pub enum DriverError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("build command failed: {0}")]
    Build(#[source] ExecError),

    #[error("run command failed: {0}")]
    Run(#[source] ExecError),

    #[error("Failed to write output: {0}")]
    Output(#[from] io::Error),
}

/// Final stage states of a completed invocation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DriverReport {
    pub build: BuildState,
    pub run: RunState,
}

/// Runs the build and run stages for one configuration.
pub struct Driver<R> {
    runner: R,
    working_dir: PathBuf,
    policy: BuildFailurePolicy,
    color: bool,
    build: BuildState,
    run: RunState,
}

impl<R: ProcessRunner> Driver<R> {
    /// Create a driver spawning processes in `working_dir`.
    pub fn new(runner: R, working_dir: impl Into<PathBuf>) -> Self {
        Self {
            runner,
            working_dir: working_dir.into(),
            policy: BuildFailurePolicy::default(),
            color: false,
            build: BuildState::Idle,
            run: RunState::Idle,
        }
    }

    pub fn with_policy(mut self, policy: BuildFailurePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Colour non-fatal error lines, for when `out` is a terminal.
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    pub fn policy(&self) -> BuildFailurePolicy {
        self.policy
    }

    pub fn working_dir(&self) -> &Path {
        &self.working_dir
    }

    pub fn build_state(&self) -> BuildState {
        self.build
    }

    pub fn run_state(&self) -> RunState {
        self.run
    }

    /// Build, then run, writing status lines and captured output to `out`.
    pub fn execute<W: Write>(
        &mut self,
        config: &BuildConfig,
        out: &mut W,
    ) -> Result<DriverReport, DriverError> {
        self.build(config, out)?;
        self.run(config, out)?;
        Ok(DriverReport {
            build: self.build,
            run: self.run,
        })
    }

    fn build<W: Write>(&mut self, config: &BuildConfig, out: &mut W) -> Result<(), DriverError> {
        validate_compiler(&config.compiler)?;
        let command = build_command(config);

        self.set_build(BuildState::Building);
        match self.spawn(&command, out) {
            Ok(()) => {
                self.set_build(BuildState::Built);
                writeln!(out, "{BUILD_SUCCESS_MESSAGE}")?;
                Ok(())
            }
            Err(StageError::Exec(e)) => {
                self.set_build(BuildState::BuildFailed);
                match self.policy {
                    BuildFailurePolicy::Continue => {
                        tracing::warn!(error = %e, "build failed, continuing to run");
                        write_error(out, format_args!("build command failed: {e}"), self.color);
                        Ok(())
                    }
                    BuildFailurePolicy::Abort => Err(DriverError::Build(e)),
                }
            }
            Err(StageError::Output(e)) => Err(e.into()),
        }
    }

    fn run<W: Write>(&mut self, config: &BuildConfig, out: &mut W) -> Result<(), DriverError> {
        let command = run_command(&config.run)?;

        self.set_run(RunState::Running);
        match self.spawn(&command, out) {
            Ok(()) => {
                self.set_run(RunState::Ran);
                writeln!(out, "{RUN_SUCCESS_MESSAGE}")?;
                Ok(())
            }
            Err(StageError::Exec(e)) => {
                self.set_run(RunState::RunFailed);
                Err(DriverError::Run(e))
            }
            Err(StageError::Output(e)) => Err(e.into()),
        }
    }

    /// Print, spawn, and echo one command, mapping unsuccessful exits to errors.
    fn spawn<W: Write>(&self, command: &CommandLine, out: &mut W) -> Result<(), StageError> {
        writeln!(out, "Running: {command}").map_err(StageError::Output)?;
        out.flush().map_err(StageError::Output)?;

        let output = self
            .runner
            .run(command, &self.working_dir)
            .map_err(StageError::Exec)?;
        write_captured(out, &output).map_err(StageError::Output)?;

        if output.success {
            Ok(())
        } else {
            Err(StageError::Exec(ExecError::Failed {
                program: command.program().to_string(),
                status: output.status,
            }))
        }
    }

    fn set_build(&mut self, state: BuildState) {
        tracing::debug!(from = ?self.build, to = ?state, "build stage");
        self.build = state;
    }

    fn set_run(&mut self, state: RunState) {
        tracing::debug!(from = ?self.run, to = ?state, "run stage");
        self.run = state;
    }
}

enum StageError {
    Exec(ExecError),
    Output(io::Error),
}

#[cfg(test)]
#[path = "driver_tests.rs"]
mod tests;
