// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! blrun: build and run a project described by `blrun.toml`.
//!
//! The config names a compiler, a base path, the source files, extra flags
//! and a run command. blrun checks the compiler against an allow-list,
//! synthesizes the build command, runs it, then sanitizes and checks the
//! run command and runs that. Both commands are spawned directly from an
//! argument vector; no shell is involved.
//!
//! ```toml
//! # blrun.toml
//! compiler = "gcc"
//! path = "src"
//! files = ["main.c", "util.c"]
//! extras = "-O2 -o app"
//! run = "./app"
//! ```

pub mod cli;
pub mod command;
pub mod config;
pub mod driver;
pub mod executor;
pub mod loader;
pub mod logging;
pub mod output;
pub mod prompt;
pub mod validate;

pub use command::{build_command, CommandLine};
pub use config::{BuildConfig, ConfigError, CONFIG_FILE_NAME};
pub use driver::{BuildFailurePolicy, Driver, DriverError, DriverReport};
pub use executor::{ExecError, ProcessRunner, StageOutput, SystemRunner};
pub use loader::{ConfigLoader, ConfigSource, LoadedConfig};
pub use validate::{is_allowed_compiler, is_allowed_run_command, sanitize, ValidationError};
