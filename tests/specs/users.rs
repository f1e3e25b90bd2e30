// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use crate::prelude::{backlog, data_dir};
use predicates::prelude::*;

#[test]
fn create_and_list_users() {
    let dir = data_dir();

    backlog(&dir)
        .args(["user", "create", "alice"])
        .assert()
        .success()
        .stdout(predicate::str::contains("alice"));

    backlog(&dir)
        .args(["user", "create", "bob"])
        .assert()
        .success();

    backlog(&dir)
        .args(["user", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("alice"))
        .stdout(predicate::str::contains("bob"));
}

#[test]
fn duplicate_username_is_rejected() {
    let dir = data_dir();

    backlog(&dir)
        .args(["user", "create", "alice"])
        .assert()
        .success();

    backlog(&dir)
        .args(["user", "create", "alice"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already taken"));
}

#[test]
fn empty_and_path_escaping_usernames_are_rejected() {
    let dir = data_dir();

    backlog(&dir)
        .args(["user", "create", ""])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid username"));

    backlog(&dir)
        .args(["user", "create", "../escaped"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid username"));

    backlog(&dir)
        .args(["user", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No users"));
}

#[test]
fn deleted_user_can_no_longer_be_loaded() {
    let dir = data_dir();

    backlog(&dir)
        .args(["user", "create", "alice"])
        .assert()
        .success();

    backlog(&dir)
        .args(["user", "delete", "alice"])
        .assert()
        .success();

    backlog(&dir)
        .args(["user", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No users"));

    backlog(&dir)
        .args(["game", "list", "--user", "alice"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no such user"));
}

#[test]
fn deleting_unknown_user_fails() {
    let dir = data_dir();

    backlog(&dir)
        .args(["user", "delete", "nobody"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no such user"));
}
