// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Status and diagnostic output helpers.
//!
//! Provides ANSI color support with automatic terminal detection.

use std::io::{self, IsTerminal, Write};

use crate::executor::StageOutput;

/// Print an error message to stderr.
///
/// Displays in red when stderr is a terminal, plain text otherwise.
pub fn print_error(msg: impl std::fmt::Display) {
    let is_tty = io::stderr().is_terminal();
    write_error(&mut io::stderr(), msg, is_tty);
}

/// Write an error message to a writer with explicit terminal flag.
pub fn write_error<W: Write>(writer: &mut W, msg: impl std::fmt::Display, is_terminal: bool) {
    if is_terminal {
        let _ = writeln!(writer, "\x1b[31mError: {}\x1b[0m", msg);
    } else {
        let _ = writeln!(writer, "Error: {}", msg);
    }
}

/// Write a subprocess's captured output verbatim, stdout first.
pub fn write_captured<W: Write>(writer: &mut W, output: &StageOutput) -> io::Result<()> {
    writer.write_all(&output.stdout)?;
    writer.write_all(&output.stderr)?;
    writer.flush()
}

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;
