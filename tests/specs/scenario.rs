// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! End-to-end walkthrough: one user, add, sort, remove, reload

use crate::prelude::{backlog, data_dir};
use predicates::prelude::*;

#[test]
fn full_session_survives_process_restarts() {
    let dir = data_dir();

    backlog(&dir)
        .args(["user", "create", "alice"])
        .assert()
        .success();

    backlog(&dir)
        .args([
            "game", "add", "Celeste", "--user", "alice", "--genre", "Platformer", "--year",
            "2018",
        ])
        .assert()
        .success();

    backlog(&dir)
        .args([
            "game", "add", "Hades", "--user", "alice", "--genre", "Roguelike", "--year", "2020",
        ])
        .assert()
        .success();

    // Sort by release year descending: Hades (2020) before Celeste (2018)
    let listing = backlog(&dir)
        .args([
            "game", "list", "--user", "alice", "--sort", "year", "--desc",
        ])
        .assert()
        .success();
    let stdout = String::from_utf8(listing.get_output().stdout.clone()).unwrap();
    let hades = stdout.find("Hades").unwrap();
    let celeste = stdout.find("Celeste").unwrap();
    assert!(hades < celeste, "expected Hades before Celeste:\n{}", stdout);

    // The sorted order persists across invocations
    let listing = backlog(&dir)
        .args(["game", "list", "--user", "alice"])
        .assert()
        .success();
    let stdout = String::from_utf8(listing.get_output().stdout.clone()).unwrap();
    assert!(stdout.find("Hades").unwrap() < stdout.find("Celeste").unwrap());

    backlog(&dir)
        .args(["game", "remove", "Celeste", "--user", "alice"])
        .assert()
        .success();

    // Reload in a fresh process: exactly one record remains
    backlog(&dir)
        .args(["game", "list", "--user", "alice"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Hades"))
        .stdout(predicate::str::contains("Celeste").not());
}
