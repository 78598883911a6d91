// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Diagnostic logging setup.
//!
//! Logs go to stderr so stdout stays reserved for status lines and the
//! captured output of the build and run commands.

use std::io::{self, IsTerminal};

use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Environment variable holding an `EnvFilter` directive, e.g. `blrun=debug`.
pub const LOG_ENV: &str = "BLRUN_LOG";

/// Map `-v` occurrences to a level. Quiet by default.
pub fn level_for_verbosity(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

/// Build the filter: `BLRUN_LOG` wins over the verbosity flag.
pub fn filter(verbosity: u8) -> EnvFilter {
    filter_from(std::env::var(LOG_ENV).ok().as_deref(), verbosity)
}

/// Use `directive` when it is set and parses, else the verbosity level.
pub fn filter_from(directive: Option<&str>, verbosity: u8) -> EnvFilter {
    directive
        .filter(|d| !d.trim().is_empty())
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::default().add_directive(level_for_verbosity(verbosity).into()))
}

/// Install the global subscriber. Safe to call more than once.
pub fn init(verbosity: u8) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter(verbosity))
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .with_target(false)
        .without_time()
        .try_init();
}

#[cfg(test)]
#[path = "logging_tests.rs"]
mod tests;
