// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Allow-list gates for the compiler and the run command.
//!
//! The run-command sanitizer only narrows what reaches the process
//! spawner; it is not a security boundary.

use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use crate::command::CommandLine;

/// Compilers accepted by [`is_allowed_compiler`].
pub const ALLOWED_COMPILERS: &[&str] = &[
    "gcc", "clang", "g++", "msvc", "icc", "scalac", "rustc", "javac", "gc", "gccgo", "swiftc",
    "fsc", "csc", "mcs", "ghc", "kotlinc",
];

/// Prefixes a sanitized run command must start with.
pub const ALLOWED_RUN_PREFIXES: &[&str] = &["./", "scala", "java", "dotnet"];

/// Longest leading run of letters, digits, `+ . _ / -` and whitespace.
static SAFE_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    // SAFETY: This regex pattern is a compile-time constant and is guaranteed to be valid
    #[allow(clippy::expect_used)]
    Regex::new(r"^(?-u:[a-zA-Z0-9+._/\s-])*").expect("run command regex pattern is invalid")
});

/// Rejections raised before anything is executed.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid compiler.")]
    InvalidCompiler(String),

    #[error("Invalid run command.")]
    InvalidRunCommand(String),
}

/// Exact, case-sensitive allow-list membership.
pub fn is_allowed_compiler(compiler: &str) -> bool {
    ALLOWED_COMPILERS.contains(&compiler)
}

/// Check the compiler, returning it unchanged when allowed.
pub fn validate_compiler(compiler: &str) -> Result<&str, ValidationError> {
    if is_allowed_compiler(compiler) {
        Ok(compiler)
    } else {
        Err(ValidationError::InvalidCompiler(compiler.to_string()))
    }
}

/// Strip a run command down to its safe leading characters.
///
/// Everything from the first character outside the safe class on is
/// dropped, then trailing whitespace is trimmed. The result is always a
/// prefix of `command`.
pub fn sanitize(command: &str) -> &str {
    let end = SAFE_PREFIX.find(command).map_or(0, |m| m.end());
    command[..end].trim_end()
}

/// Whether a sanitized command starts with a recognized prefix.
pub fn is_allowed_run_command(command: &str) -> bool {
    ALLOWED_RUN_PREFIXES
        .iter()
        .any(|prefix| command.starts_with(prefix))
}

/// Sanitize and validate a raw run command, then split it into arguments.
pub fn run_command(raw: &str) -> Result<CommandLine, ValidationError> {
    let sanitized = sanitize(raw);
    if !is_allowed_run_command(sanitized) {
        return Err(ValidationError::InvalidRunCommand(sanitized.to_string()));
    }

    // The safe class has no quoting characters, so a whitespace split is exact.
    let mut words = sanitized.split_whitespace();
    let program = words
        .next()
        .ok_or_else(|| ValidationError::InvalidRunCommand(sanitized.to_string()))?;
    Ok(CommandLine::new(program).args(words))
}

#[cfg(test)]
#[path = "validate_tests.rs"]
mod tests;
