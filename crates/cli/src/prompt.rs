// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Interactive questions used to create a missing `blrun.toml`.

use std::io::{self, BufRead, Write};

use crate::config::BuildConfig;

pub const COMPILER_QUESTION: &str = "What compiler would you like to use?";
pub const PATH_QUESTION: &str =
    "What is the path from the root directory to where the files are located?";
pub const PATH_HINT: &str = "(Keep blank for the root directory.)";
pub const FILES_QUESTION: &str =
    "Please enter all of your files separated by spaces, and then a newline.";
pub const EXTRAS_QUESTION: &str =
    "Please enter any extra flags or options to include in your build command.";
pub const RUN_QUESTION: &str =
    "Please enter the command that you want to use to run your program.";

/// Line-oriented question/answer session over arbitrary streams.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print each line of `question`, then read one answer line.
    ///
    /// The line terminator is stripped. End of input yields an empty answer.
    pub fn ask(&mut self, question: &[&str]) -> io::Result<String> {
        for line in question {
            writeln!(self.output, "{line}")?;
        }
        self.output.flush()?;

        let mut answer = String::new();
        self.input.read_line(&mut answer)?;
        let trimmed = answer.trim_end_matches(['\n', '\r']).len();
        answer.truncate(trimmed);
        Ok(answer)
    }

    /// Ask for every configuration field in order.
    pub fn ask_config(&mut self) -> io::Result<BuildConfig> {
        let compiler = self.ask(&[COMPILER_QUESTION])?;
        let path = self.ask(&[PATH_QUESTION, PATH_HINT])?;
        let files = self
            .ask(&[FILES_QUESTION])?
            .split_whitespace()
            .map(str::to_string)
            .collect();
        let extras = self.ask(&[EXTRAS_QUESTION])?;
        let run = self.ask(&[RUN_QUESTION])?;

        Ok(BuildConfig {
            compiler,
            path,
            files,
            extras,
            run,
        })
    }

    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }
}

#[cfg(test)]
#[path = "prompt_tests.rs"]
mod tests;
