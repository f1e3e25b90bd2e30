// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn top_level_help_lists_commands() {
    Command::cargo_bin("backlog")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("user"))
        .stdout(predicate::str::contains("game"))
        .stdout(predicate::str::contains("--data-dir"));
}

#[test]
fn game_add_help_documents_optional_fields() {
    Command::cargo_bin("backlog")
        .unwrap()
        .args(["game", "add", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--time-to-beat"))
        .stdout(predicate::str::contains("--priority"));
}
