// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! blrun binary entry point.

use std::io::{self, IsTerminal, Write};

use clap::Parser;

use blrun::cli::Cli;
use blrun::driver::exit_codes;
use blrun::logging;
use blrun::output::print_error;
use blrun::{ConfigLoader, Driver, SystemRunner};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let code = run(&cli);
    let _ = io::stdout().flush();
    std::process::exit(code);
}

fn run(cli: &Cli) -> i32 {
    let working_dir = match cli.working_dir() {
        Ok(dir) => dir,
        Err(e) => {
            print_error(e);
            return exit_codes::ERROR;
        }
    };

    let mut stdout = io::stdout();
    let loader = ConfigLoader::new(&working_dir)
        .with_file_name(&cli.config)
        .with_create_missing(!cli.no_create);
    let loaded = match loader.load(io::stdin().lock(), &mut stdout) {
        Ok(loaded) => loaded,
        Err(e) => {
            print_error(e);
            return exit_codes::ERROR;
        }
    };
    tracing::debug!(source = ?loaded.source, "config ready");

    let mut driver = Driver::new(SystemRunner::new(), working_dir)
        .with_policy(cli.on_build_failure)
        .with_color(stdout.is_terminal());
    match driver.execute(&loaded.config, &mut stdout) {
        Ok(report) => {
            tracing::info!(build = ?report.build, run = ?report.run, "finished");
            exit_codes::SUCCESS
        }
        Err(e) => {
            let _ = stdout.flush();
            print_error(e);
            exit_codes::ERROR
        }
    }
}
