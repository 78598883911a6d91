// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use clap::CommandFactory;

#[test]
fn test_cli_definition_is_valid() {
    Cli::command().debug_assert();
}

#[test]
fn test_parse_defaults() {
    let cli = Cli::try_parse_from(["blrun"]).unwrap();
    assert!(cli.dir.is_none());
    assert_eq!(cli.config, PathBuf::from(CONFIG_FILE_NAME));
    assert!(!cli.no_create);
    assert_eq!(cli.verbose, 0);
}

#[test]
fn test_parse_dir_short_and_long() {
    let cli = Cli::try_parse_from(["blrun", "-C", "project"]).unwrap();
    assert_eq!(cli.dir, Some(PathBuf::from("project")));

    let cli = Cli::try_parse_from(["blrun", "--dir", "/abs/project"]).unwrap();
    assert_eq!(cli.dir, Some(PathBuf::from("/abs/project")));
}

#[test]
fn test_parse_config_file_name() {
    let cli = Cli::try_parse_from(["blrun", "--config", "ci.toml"]).unwrap();
    assert_eq!(cli.config, PathBuf::from("ci.toml"));
}

#[test]
fn test_parse_on_build_failure() {
    let cli = Cli::try_parse_from(["blrun", "--on-build-failure", "abort"]).unwrap();
    assert_eq!(cli.on_build_failure, BuildFailurePolicy::Abort);

    let cli = Cli::try_parse_from(["blrun", "--on-build-failure", "continue"]).unwrap();
    assert_eq!(cli.on_build_failure, BuildFailurePolicy::Continue);
}

#[test]
fn test_parse_invalid_on_build_failure() {
    assert!(Cli::try_parse_from(["blrun", "--on-build-failure", "retry"]).is_err());
}

#[test]
fn test_parse_no_create() {
    let cli = Cli::try_parse_from(["blrun", "--no-create"]).unwrap();
    assert!(cli.no_create);
}

#[test]
fn test_parse_verbose_count() {
    let cli = Cli::try_parse_from(["blrun", "-vv"]).unwrap();
    assert_eq!(cli.verbose, 2);

    let cli = Cli::try_parse_from(["blrun", "-v", "--verbose", "-v"]).unwrap();
    assert_eq!(cli.verbose, 3);
}

#[test]
fn test_positional_arguments_rejected() {
    assert!(Cli::try_parse_from(["blrun", "extra"]).is_err());
}

#[test]
fn test_working_dir_defaults_to_current_dir() {
    let cli = Cli::try_parse_from(["blrun"]).unwrap();
    assert_eq!(cli.working_dir().unwrap(), std::env::current_dir().unwrap());
}

#[test]
fn test_working_dir_accepts_existing_directory() {
    let dir = tempfile::tempdir().unwrap();
    let cli = Cli::try_parse_from(["blrun", "-C", dir.path().to_str().unwrap()]).unwrap();
    assert_eq!(cli.working_dir().unwrap(), dir.path());
}

#[test]
fn test_working_dir_rejects_missing_directory() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing");
    let cli = Cli::try_parse_from(["blrun", "--dir", missing.to_str().unwrap()]).unwrap();

    let err = cli.working_dir().unwrap_err();
    assert!(matches!(err, WorkingDirError::NotADirectory(ref p) if *p == missing));
    assert_eq!(
        err.to_string(),
        format!("Project directory {} does not exist or is not a directory", missing.display())
    );
}

#[test]
fn test_working_dir_rejects_regular_file() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("blrun.toml");
    std::fs::write(&file, "").unwrap();
    let cli = Cli::try_parse_from(["blrun", "-C", file.to_str().unwrap()]).unwrap();

    assert!(matches!(cli.working_dir(), Err(WorkingDirError::NotADirectory(_))));
}
