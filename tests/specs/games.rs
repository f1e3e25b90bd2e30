// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use crate::prelude::{backlog, data_dir};
use predicates::prelude::*;
use tempfile::TempDir;

fn with_user(name: &str) -> TempDir {
    let dir = data_dir();
    backlog(&dir)
        .args(["user", "create", name])
        .assert()
        .success();
    dir
}

#[test]
fn add_and_list_a_game() {
    let dir = with_user("alice");

    backlog(&dir)
        .args([
            "game", "add", "Celeste", "--user", "alice", "--genre", "Platformer", "--year",
            "2018",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added 'Celeste'"));

    backlog(&dir)
        .args(["game", "list", "--user", "alice"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Celeste"))
        .stdout(predicate::str::contains("Platformer"))
        .stdout(predicate::str::contains("2018"));
}

#[test]
fn empty_backlog_prints_placeholder() {
    let dir = with_user("alice");

    backlog(&dir)
        .args(["game", "list", "--user", "alice"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Backlog is empty"));
}

#[test]
fn duplicate_title_is_rejected_case_insensitively() {
    let dir = with_user("alice");

    backlog(&dir)
        .args([
            "game", "add", "Celeste", "--user", "alice", "--genre", "Platformer", "--year",
            "2018",
        ])
        .assert()
        .success();

    backlog(&dir)
        .args([
            "game", "add", "CELESTE", "--user", "alice", "--genre", "Platformer", "--year",
            "2018",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already in the backlog"));
}

#[test]
fn out_of_range_year_reports_the_field() {
    let dir = with_user("alice");

    backlog(&dir)
        .args([
            "game", "add", "Pong", "--user", "alice", "--genre", "Arcade", "--year", "1900",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("release year 1900"));
}

#[test]
fn unparseable_date_reports_the_field() {
    let dir = with_user("alice");

    backlog(&dir)
        .args([
            "game",
            "add",
            "Celeste",
            "--user",
            "alice",
            "--genre",
            "Platformer",
            "--year",
            "2018",
            "--date",
            "yesterday",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid date"));
}

#[test]
fn removing_a_missing_title_fails() {
    let dir = with_user("alice");

    backlog(&dir)
        .args(["game", "remove", "Hades", "--user", "alice"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no game titled"));
}

#[test]
fn json_output_is_machine_readable() {
    let dir = with_user("alice");

    backlog(&dir)
        .args([
            "game",
            "add",
            "Hades",
            "--user",
            "alice",
            "--genre",
            "Roguelike",
            "--year",
            "2020",
            "--priority",
            "high",
        ])
        .assert()
        .success();

    backlog(&dir)
        .args(["game", "list", "--user", "alice", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"title\": \"Hades\""))
        .stdout(predicate::str::contains("\"priority\": \"high\""));
}
