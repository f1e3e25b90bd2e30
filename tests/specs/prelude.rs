// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared helpers for CLI specs

use assert_cmd::Command;
use tempfile::TempDir;

/// A `backlog` invocation pointed at an isolated data directory
pub fn backlog(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("backlog").unwrap();
    cmd.arg("--data-dir").arg(dir.path());
    cmd
}

/// Fresh data directory per test
pub fn data_dir() -> TempDir {
    tempfile::tempdir().unwrap()
}
