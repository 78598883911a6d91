// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

//! Shared helpers for binary-level tests.

#![allow(dead_code)]

use std::path::Path;
use tempfile::TempDir;

/// Create an empty project directory.
pub fn project() -> TempDir {
    tempfile::Builder::new().prefix("blrun-").tempdir().unwrap()
}

/// Write `blrun.toml` into the project directory.
pub fn write_config(dir: &Path, content: &str) {
    std::fs::write(dir.join("blrun.toml"), content).unwrap();
}

/// Write an executable shell script into the project directory.
#[cfg(unix)]
pub fn write_script(dir: &Path, name: &str, body: &str) {
    use std::os::unix::fs::PermissionsExt;

    let path = dir.join(name);
    std::fs::write(&path, format!("#!/bin/sh\n{body}\n")).unwrap();
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
}

/// Config whose build always fails (missing source) and whose run
/// command is `./run.sh`.
pub const FAILING_BUILD_CONFIG: &str = r#"
compiler = "gcc"
path = "src"
files = ["does_not_exist.c"]
extras = ""
run = "./run.sh"
"#;
